//! This crate exposes three classic containers of integers mostly for
//! educational purposes: a growable [`Array`](array::Array), a doubly linked
//! [`List`](list::List) and an unbalanced Binary Search [`Tree`](tree::Tree).
//! Each one comes with the algorithms that are usually taught alongside it.
//!
//! ## Array
//!
//! An `Array` stores its elements contiguously and doubles its capacity when
//! it runs out of room, so pushing at the back is amortized `O(1)`. Besides
//! positional access it supports linear and binary search, quicksort (built on
//! a Lomuto partition) and the operations of a binary max-heap laid out in the
//! array itself: the children of the element at `i` live at `2i + 1` and
//! `2i + 2`.
//!
//! ## List
//!
//! A `List` is a chain of nodes, each linked to its predecessor and its
//! successor. Adding or removing at either end is `O(1)` while reaching the
//! `i`th element walks `i` links. Lists can be split in two halves and two
//! sorted lists can be merged into one, which together give merge sort.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. The most important invariants of a
//! BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for values in the tree takes `O(height)` where `height` is the
//! number of nodes on the longest path from the root to a leaf. This tree does
//! not rebalance itself so inserting sorted values makes `height` equal to the
//! number of nodes. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Errors
//!
//! Operations whose precondition doesn't hold, such as popping from an empty
//! container, return an [`Error`] and leave the container untouched.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod error;
pub mod list;
pub mod tree;

pub use error::{Error, Result};
