//! An unbalanced Binary Search Tree of integers.
//!
//! Every node owns its two children. Nothing is rebalanced so inserting values in sorted order
//! produces a tree whose height equals its size. Because of that, nothing here recurses: lookups,
//! insertions, and removals walk down with a loop, and traversals (as well as dropping the tree)
//! keep their pending nodes on an explicit stack.
//!
//! # Examples
//!
//! ```
//! use containers::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [16, 2, 8, 4, 10, 18, 6, 12, 14].iter() {
//!     assert!(tree.insert(*value));
//! }
//!
//! // Values are unique.
//! assert!(!tree.insert(8));
//! assert_eq!(tree.len(), 9);
//!
//! let mut sorted = Vec::new();
//! tree.walk_in_order(|value| sorted.push(value));
//! assert_eq!(sorted, [2, 4, 6, 8, 10, 12, 14, 16, 18]);
//!
//! assert!(tree.remove(8));
//! assert!(!tree.contains(8));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding unique `i32`s.
#[derive(Default)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = Vec::new();
        self.walk_in_order(|value| values.push(value));
        f.debug_set().entries(values).finish()
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Removes every node. The tree can be used again afterwards.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            // Detach the children before `node` is dropped so that dropping it never recurses.
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if `value` is in the tree.
    pub fn contains(&self, value: i32) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, if `value` is
    /// already in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        let link = descend(&mut self.root, value);
        if link.is_some() {
            return false;
        }
        *link = Some(Node::new_boxed(value));

        if cfg!(debug_assertions) {
            assert!(self.is_search_tree());
        }
        true
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree untouched, if `value`
    /// isn't in the tree.
    ///
    /// A node with a single child is replaced by that child. A node with two children is replaced
    /// by its successor, the smallest node of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::tree::Tree;
    ///
    /// let mut tree = [5, 3, 8, 7, 9].iter().copied().collect::<Tree>();
    ///
    /// assert!(tree.remove(8));
    /// assert!(!tree.remove(8));
    ///
    /// let mut values = Vec::new();
    /// tree.walk_pre_order(|value| values.push(value));
    /// assert_eq!(values, [5, 3, 9, 7]);
    /// ```
    pub fn remove(&mut self, value: i32) -> bool {
        let link = descend(&mut self.root, value);
        let mut node = match link.take() {
            Some(node) => node,
            None => return false,
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                take_leftmost(&mut right).map(|mut successor| {
                    successor.left = Some(left);
                    successor.right = right;
                    successor
                })
            }
        };

        if cfg!(debug_assertions) {
            assert!(self.is_search_tree());
        }
        true
    }

    /// The number of nodes in the tree. This visits every node.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk_pre_order(|_| count += 1);
        count
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|root| (&**root, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.iter().map(|left| (&**left, depth + 1)));
            stack.extend(node.right.iter().map(|right| (&**right, depth + 1)));
        }
        height
    }

    /// Calls `visit` with every value in the tree, each node before its left subtree and its left
    /// subtree before its right subtree.
    pub fn walk_pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(node.value);
            // Pushed in reverse so that the left subtree is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }

    /// Calls `visit` with every value in the tree in ascending order: each node's left subtree,
    /// then the node, then its right subtree.
    pub fn walk_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        let mut stack: Vec<&Node> = Vec::new();
        let mut next = self.root.as_deref();
        loop {
            while let Some(node) = next {
                stack.push(node);
                next = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    visit(node.value);
                    next = node.right.as_deref();
                }
                None => return,
            }
        }
    }

    /// Calls `visit` with every value in the tree, each node after both of its subtrees and its
    /// left subtree before its right subtree.
    pub fn walk_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        // The flag tells whether the node's children have already been pushed.
        let mut stack: Vec<(&Node, bool)> = self
            .root
            .as_deref()
            .map(|root| (root, false))
            .into_iter()
            .collect();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(node.value);
                continue;
            }
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|right| (right, false)));
            stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }

    /// Checks that an in-order walk yields strictly increasing values.
    fn is_search_tree(&self) -> bool {
        let mut sorted = true;
        let mut prev: Option<i32> = None;
        self.walk_in_order(|value| {
            sorted &= prev.map_or(true, |prev| prev < value);
            prev = Some(value);
        });
        sorted
    }
}

/// Walks down from `link` and returns the link that either holds `value` or is the empty link
/// where `value` would be attached.
fn descend(mut link: &mut Link, value: i32) -> &mut Link {
    while let Some(Ordering::Less) | Some(Ordering::Greater) =
        link.as_ref().map(|node| value.cmp(&node.value))
    {
        if let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    link
}

/// Detaches the smallest node of the subtree at `link` and returns it. Its right subtree takes
/// its place.
fn take_leftmost(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node)
}
