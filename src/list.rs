//! A doubly linked list of integers with a merge sort built from `split` and `merge`.
//!
//! Nodes live in a slab owned by the list and refer to their neighbours by slot index instead of
//! by pointer. A removed node's slot goes on a free list and is handed out again by the next
//! insertion, and the whole slab is reset once the list is empty.
//!
//! # Examples
//!
//! ```
//! use containers::list::List;
//!
//! let mut list = List::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//! assert_eq!(list, [1, 2, 3][..]);
//!
//! // Reading past the end isn't an error, it yields `0`.
//! assert_eq!(list.get(10), 0);
//!
//! let mut list = List::from_slice(&[5, 1, 4, 2, 3]);
//! list.merge_sort();
//! assert_eq!(list, [1, 2, 3, 4, 5][..]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};

/// A slot index into the slab. `None` marks the end of the chain.
type Link = Option<usize>;

#[derive(Clone, Debug)]
struct Node {
    value: i32,
    prev: Link,
    next: Link,
}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(Node),
    /// A released slot, chained to the next released one.
    Vacant { next_free: Link },
}

/// A doubly linked list of `i32`s.
#[derive(Clone, Default)]
pub struct List {
    slots: Vec<Slot>,
    free: Link,
    first: Link,
    last: Link,
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl PartialEq<[i32]> for List {
    fn eq(&self, other: &[i32]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Vec<i32>> for List {
    fn eq(&self, other: &Vec<i32>) -> bool {
        self.equals(other)
    }
}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for List {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            first: None,
            last: None,
        }
    }

    /// Creates a list holding the elements of `values`, in order.
    pub fn from_slice(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Removes every element, releasing every node. The list can be used again afterwards.
    pub fn clear(&mut self) {
        while self.pop_back().is_ok() {}
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// The number of elements in the list. The size isn't stored so this walks the whole list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the elements of the list from front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.first,
        }
    }

    /// The first element of the list, if any.
    pub fn front(&self) -> Option<i32> {
        self.first.map(|id| self.node(id).value)
    }

    /// The last element of the list, if any.
    pub fn back(&self) -> Option<i32> {
        self.last.map(|id| self.node(id).value)
    }

    /// Returns `true` if the list has exactly the elements of `values`, in the same order.
    pub fn equals(&self, values: &[i32]) -> bool {
        if self.is_empty() {
            return values.is_empty();
        }
        self.len() == values.len() && self.iter().zip(values).all(|(a, b)| a == *b)
    }

    /// Adds `value` at the front of the list.
    pub fn push_front(&mut self, value: i32) {
        let id = self.alloc(Node {
            value,
            prev: None,
            next: self.first,
        });
        match self.first {
            Some(first) => self.node_mut(first).prev = Some(id),
            None => self.last = Some(id),
        }
        self.first = Some(id);
    }

    /// Adds `value` at the back of the list.
    pub fn push_back(&mut self, value: i32) {
        let id = self.alloc(Node {
            value,
            prev: self.last,
            next: None,
        });
        match self.last {
            Some(last) => self.node_mut(last).next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<i32> {
        let first = self.first.ok_or(Error::Empty)?;
        Ok(self.unlink(first))
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<i32> {
        let last = self.last.ok_or(Error::Empty)?;
        Ok(self.unlink(last))
    }

    /// Inserts `value` so that it ends up at position `index`. `index` may be equal to the size of
    /// the list, which appends the value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is greater than the size of the list.
    pub fn insert(&mut self, value: i32, index: usize) -> Result<()> {
        let size = self.len();
        if index > size {
            return Err(Error::IndexOutOfBounds { index, size });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == size {
            self.push_back(value);
        } else if let Some(prev) = self.node_at(index - 1) {
            self.link_after(prev, value);
        }
        Ok(())
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if there is no element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i32> {
        let size = self.len();
        if index >= size {
            return Err(Error::IndexOutOfBounds { index, size });
        }

        if index == 0 {
            self.pop_front()
        } else if index == size - 1 {
            self.pop_back()
        } else {
            self.node_at(index)
                .map(|id| self.unlink(id))
                .ok_or(Error::IndexOutOfBounds { index, size })
        }
    }

    /// Returns the element at `index`, or `0` if there is no such element.
    pub fn get(&self, index: usize) -> i32 {
        self.node_at(index).map_or(0, |id| self.node(id).value)
    }

    /// Overwrites the element at `index`. Does nothing if there is no such element.
    pub fn set(&mut self, index: usize, value: i32) {
        if let Some(id) = self.node_at(index) {
            self.node_mut(id).value = value;
        }
    }

    /// Returns the position of the first element equal to `value`, or the size of the list if
    /// there is none.
    pub fn search(&self, value: i32) -> usize {
        self.iter()
            .position(|x| x == value)
            .unwrap_or_else(|| self.len())
    }

    /// Returns `true` if no element is greater than the one after it.
    pub fn is_sorted(&self) -> bool {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }

    /// Moves every element of this list to the back of `out1` and `out2`: the first half goes to
    /// `out1` and the second half to `out2`. When the size is odd `out1` gets the extra element.
    /// This list is empty afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::list::List;
    ///
    /// let mut list = List::from_slice(&[1, 2, 3, 4, 5]);
    /// let mut out1 = List::new();
    /// let mut out2 = List::new();
    /// list.split(&mut out1, &mut out2);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(out1, [1, 2, 3][..]);
    /// assert_eq!(out2, [4, 5][..]);
    /// ```
    pub fn split(&mut self, out1: &mut List, out2: &mut List) {
        let size = self.len();
        for _ in 0..size - size / 2 {
            if let Ok(value) = self.pop_front() {
                out1.push_back(value);
            }
        }
        while let Ok(value) = self.pop_front() {
            out2.push_back(value);
        }
    }

    /// Merges the sorted lists `in1` and `in2` onto the back of this list, smallest first. On
    /// ties the element from `in1` goes first. Both inputs are empty afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::NotSorted`] if either input is not sorted. Nothing is moved in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::list::List;
    ///
    /// let mut in1 = List::from_slice(&[1, 4, 6]);
    /// let mut in2 = List::from_slice(&[2, 3, 5]);
    /// let mut out = List::new();
    /// out.merge(&mut in1, &mut in2).unwrap();
    ///
    /// assert_eq!(out, [1, 2, 3, 4, 5, 6][..]);
    /// assert!(in1.is_empty() && in2.is_empty());
    /// ```
    pub fn merge(&mut self, in1: &mut List, in2: &mut List) -> Result<()> {
        if !in1.is_sorted() || !in2.is_sorted() {
            return Err(Error::NotSorted);
        }
        self.merge_sorted(in1, in2);
        Ok(())
    }

    /// Sorts the list with a top-down merge sort. Equal elements keep their relative order.
    pub fn merge_sort(&mut self) {
        if self.is_sorted() || self.len() < 2 {
            return;
        }

        let mut in1 = List::new();
        let mut in2 = List::new();
        self.split(&mut in1, &mut in2);
        in1.merge_sort();
        in2.merge_sort();
        self.merge_sorted(&mut in1, &mut in2);
    }

    fn merge_sorted(&mut self, in1: &mut List, in2: &mut List) {
        loop {
            let source = match (in1.front(), in2.front()) {
                (Some(a), Some(b)) if a <= b => &mut *in1,
                (Some(_), Some(_)) => &mut *in2,
                (Some(_), None) => &mut *in1,
                (None, Some(_)) => &mut *in2,
                (None, None) => return,
            };
            if let Ok(value) = source.pop_front() {
                self.push_back(value);
            }
        }
    }

    /// Walks from the front to the node at `index`.
    fn node_at(&self, index: usize) -> Link {
        let mut link = self.first;
        for _ in 0..index {
            link = self.node(link?).next;
        }
        link
    }

    /// Splices a new node holding `value` right after the node `prev`.
    fn link_after(&mut self, prev: usize, value: i32) {
        let next = self.node(prev).next;
        let id = self.alloc(Node {
            value,
            prev: Some(prev),
            next,
        });
        self.node_mut(prev).next = Some(id);
        match next {
            Some(next) => self.node_mut(next).prev = Some(id),
            None => self.last = Some(id),
        }

        if cfg!(debug_assertions) {
            self.assert_links();
        }
    }

    /// Detaches the node `id` from its neighbours, releases it, and returns its value.
    fn unlink(&mut self, id: usize) -> i32 {
        let node = self.release(id);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.first = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.last = node.prev,
        }

        if self.is_empty() {
            // Nothing is linked anymore so every slot is free.
            self.slots.clear();
            self.free = None;
        }

        if cfg!(debug_assertions) {
            self.assert_links();
        }
        node.value
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free {
            Some(id) => {
                match std::mem::replace(&mut self.slots[id], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list reached an occupied slot"),
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) -> Node {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => unreachable!("released slot {} twice", id),
        }
    }

    fn node(&self, id: usize) -> &Node {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to released slot {}", id),
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to released slot {}", id),
        }
    }

    /// Checks that every `next` link is mirrored by a `prev` link and that `last` is the end of
    /// the chain starting at `first`.
    fn assert_links(&self) {
        assert_eq!(self.first.is_none(), self.last.is_none());

        let mut prev = None;
        let mut link = self.first;
        while let Some(id) = link {
            let node = self.node(id);
            assert_eq!(node.prev, prev);
            prev = Some(id);
            link = node.next;
        }
        assert_eq!(prev, self.last);
    }
}

/// An iterator over the elements of a [`List`], from front to back.
pub struct Iter<'a> {
    list: &'a List,
    next: Link,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.next;
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
