//! A growable array of integers with searching, sorting, and a max-heap view over the same
//! buffer.
//!
//! The array tracks how many slots it has allocated (its capacity) separately from how many of
//! them hold elements (its size). Capacity doubles whenever a new element doesn't fit.
//!
//! # Examples
//!
//! ```
//! use containers::array::Array;
//!
//! let mut array = Array::from_slice(&[9, 3, 7, 2, 4, 0, 8]);
//! array.insert(42, 3).unwrap();
//! assert_eq!(array, [9, 3, 7, 42, 2, 4, 0, 8][..]);
//!
//! // Reading past the end isn't an error, it yields `0`.
//! assert_eq!(array.get(100), 0);
//!
//! array.quick_sort();
//! assert!(array.is_sorted());
//! assert_eq!(array.search_sorted(42), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};

/// A contiguous, growable buffer of `i32`s.
#[derive(Clone)]
pub struct Array {
    /// Every allocated slot. Only the first `size` slots hold elements, the rest are zeroed.
    data: Box<[i32]>,
    size: usize,
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other.as_slice())
    }
}

impl Eq for Array {}

impl PartialEq<[i32]> for Array {
    fn eq(&self, other: &[i32]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Vec<i32>> for Array {
    fn eq(&self, other: &Vec<i32>) -> bool {
        self.equals(other)
    }
}

impl From<&[i32]> for Array {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl From<Vec<i32>> for Array {
    fn from(values: Vec<i32>) -> Self {
        let size = values.len();
        Self {
            data: values.into_boxed_slice(),
            size,
        }
    }
}

impl FromIterator<i32> for Array {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl Array {
    /// Creates an empty array with room for a single element.
    pub fn new() -> Self {
        Self {
            data: vec![0; 1].into_boxed_slice(),
            size: 0,
        }
    }

    /// Creates an array holding a copy of `values`. Its capacity is exactly `values.len()`.
    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            data: values.into(),
            size: values.len(),
        }
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of elements in the array.
    pub fn len(&self) -> usize {
        self.size
    }

    /// The number of allocated slots. Always at least [`len`][Array::len].
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The elements of the array, in order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.size]
    }

    /// Iterates over the elements of the array, in order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.as_slice().iter().copied()
    }

    /// Returns `true` if the array has exactly the elements of `values`, in the same order.
    pub fn equals(&self, values: &[i32]) -> bool {
        self.as_slice() == values
    }

    /// Appends `value` to the end of the array, doubling the capacity if it is full.
    pub fn push_back(&mut self, value: i32) {
        if self.size == self.capacity() {
            self.grow();
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Removes the last element of the array and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn pop_back(&mut self) -> Result<i32> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.size -= 1;
        Ok(std::mem::take(&mut self.data[self.size]))
    }

    /// Inserts `value` at `index`, shifting every element from `index` onwards one slot to the
    /// right. `index` may be equal to the size of the array, which appends the value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is greater than the size of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::array::Array;
    ///
    /// let mut array = Array::from_slice(&[1, 3]);
    /// array.insert(2, 1).unwrap();
    /// array.insert(4, 3).unwrap();
    /// assert_eq!(array, [1, 2, 3, 4][..]);
    ///
    /// assert!(array.insert(5, 10).is_err());
    /// ```
    pub fn insert(&mut self, value: i32, index: usize) -> Result<()> {
        if index > self.size {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        if index == self.size {
            self.push_back(value);
            return Ok(());
        }

        if self.size == self.capacity() {
            self.grow();
        }
        self.data.copy_within(index..self.size, index + 1);
        self.data[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting every later element one slot to
    /// the left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if there is no element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i32> {
        if index >= self.size {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        if index == self.size - 1 {
            return self.pop_back();
        }

        let removed = self.data[index];
        self.data.copy_within(index + 1..self.size, index);
        self.size -= 1;
        self.data[self.size] = 0;
        Ok(removed)
    }

    /// Returns the element at `index`, or `0` if there is no such element.
    pub fn get(&self, index: usize) -> i32 {
        self.as_slice().get(index).copied().unwrap_or(0)
    }

    /// Overwrites the element at `index`. Does nothing if there is no such element.
    pub fn set(&mut self, index: usize, value: i32) {
        if let Some(slot) = self.data[..self.size].get_mut(index) {
            *slot = value;
        }
    }

    /// Returns the index of the first element equal to `value`, or the size of the array if
    /// there is none.
    pub fn search(&self, value: i32) -> usize {
        self.iter().position(|x| x == value).unwrap_or(self.size)
    }

    /// Binary search for `value`. Returns an index holding `value`, or the size of the array if
    /// there is none.
    ///
    /// The array must already be sorted. The result is meaningless otherwise.
    pub fn search_sorted(&self, value: i32) -> usize {
        let (mut lo, mut hi) = (0, self.size);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match value.cmp(&self.data[mid]) {
                Ordering::Less => hi = mid,
                Ordering::Equal => return mid,
                Ordering::Greater => lo = mid + 1,
            }
        }
        self.size
    }

    /// Returns `true` if every element is strictly smaller than the next one. Two equal
    /// neighbours make the array unsorted.
    pub fn is_sorted(&self) -> bool {
        self.as_slice().windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Partitions the inclusive range `i..=j` around the value at `i` and returns the index `l`
    /// where that pivot ends up.
    ///
    /// Afterwards everything in `i..l` is smaller than the pivot and everything in `l + 1..=j` is
    /// greater than or equal to it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `i > j` or `j` is not an index of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::array::Array;
    ///
    /// let mut array = Array::from_slice(&[5, 4, 1, 6, 10, 3, 0, 9, 8, 2, 7]);
    /// let l = array.partition(0, 10).unwrap();
    ///
    /// assert_eq!(array.get(l), 5);
    /// assert!((0..l).all(|i| array.get(i) < 5));
    /// assert!((l + 1..11).all(|i| array.get(i) > 5));
    /// ```
    pub fn partition(&mut self, i: usize, j: usize) -> Result<usize> {
        if i > j || j >= self.size {
            return Err(Error::InvalidRange {
                start: i,
                end: j,
                size: self.size,
            });
        }
        Ok(partition(&mut self.data[..self.size], i, j))
    }

    /// Sorts the array in place with quick sort.
    pub fn quick_sort(&mut self) {
        if self.size > 1 {
            quick_sort(&mut self.data[..self.size], 0, self.size - 1);
        }
    }

    /// Sorts the array in place with heap sort.
    pub fn heap_sort(&mut self) {
        if self.is_sorted() {
            return;
        }

        let data = &mut self.data[..self.size];
        for i in (0..data.len() / 2).rev() {
            sift_down(data, i);
        }
        for end in (1..data.len()).rev() {
            data.swap(0, end);
            sift_down(&mut data[..end], 0);
        }
    }

    /// Returns `true` if the array is a max-heap: no element is greater than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.size)
            .rev()
            .all(|i| self.data[i] <= self.data[parent(i)])
    }

    /// Adds `value` to the heap, moving it up until its parent is at least as large.
    ///
    /// # Errors
    ///
    /// [`Error::NotAHeap`] if the array isn't a heap to begin with.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::array::Array;
    ///
    /// let mut heap = Array::new();
    /// for value in [3, 8, 1, 9, 4].iter() {
    ///     heap.heap_add(*value).unwrap();
    /// }
    ///
    /// assert!(heap.is_heap());
    /// assert_eq!(heap.heap_top(), Ok(9));
    /// ```
    pub fn heap_add(&mut self, value: i32) -> Result<()> {
        if !self.is_heap() {
            return Err(Error::NotAHeap);
        }

        self.push_back(value);
        let mut i = self.size - 1;
        while i > 0 && self.data[i] > self.data[parent(i)] {
            self.data.swap(i, parent(i));
            i = parent(i);
        }

        if cfg!(debug_assertions) {
            assert!(self.is_heap());
        }
        Ok(())
    }

    /// The largest value of the heap, which sits at index 0.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the array is empty.
    pub fn heap_top(&self) -> Result<i32> {
        self.as_slice().first().copied().ok_or(Error::Empty)
    }

    /// Removes the largest value of the heap and returns it. The last element takes its place and
    /// moves down until neither child is larger.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the array is empty, [`Error::NotAHeap`] if it isn't a heap.
    pub fn heap_remove_top(&mut self) -> Result<i32> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if !self.is_heap() {
            return Err(Error::NotAHeap);
        }

        let top = self.data[0];
        let last = self.pop_back()?;
        if !self.is_empty() {
            self.data[0] = last;
            sift_down(&mut self.data[..self.size], 0);
        }

        if cfg!(debug_assertions) {
            assert!(self.is_heap());
        }
        Ok(top)
    }

    /// Reallocates the buffer with twice as many slots (one slot for an array with none).
    fn grow(&mut self) {
        let capacity = (self.capacity() * 2).max(1);
        let mut data = vec![0; capacity].into_boxed_slice();
        data[..self.size].copy_from_slice(self.as_slice());
        self.data = data;
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Lomuto partition of `data[i..=j]` with `data[i]` as the pivot.
fn partition(data: &mut [i32], i: usize, j: usize) -> usize {
    let pivot = data[i];
    data.swap(i, j);

    let mut l = i;
    for k in i..j {
        if data[k] < pivot {
            data.swap(k, l);
            l += 1;
        }
    }
    data.swap(l, j);
    l
}

/// Quick sorts `data[i..=j]`. Only the smaller side of each partition is sorted recursively, the
/// larger one is handled by the loop, so the stack never grows past `O(lg n)` frames.
fn quick_sort(data: &mut [i32], mut i: usize, mut j: usize) {
    while i < j {
        let l = partition(data, i, j);
        if l - i < j - l {
            if l > i {
                quick_sort(data, i, l - 1);
            }
            i = l + 1;
        } else {
            quick_sort(data, l + 1, j);
            if l == i {
                return;
            }
            j = l - 1;
        }
    }
}

/// Moves `data[i]` down the max-heap `data` until neither of its children is larger.
fn sift_down(data: &mut [i32], mut i: usize) {
    loop {
        let left = 2 * i + 1;
        let right = left + 1;

        let mut largest = i;
        if left < data.len() && data[left] > data[largest] {
            largest = left;
        }
        if right < data.len() && data[right] > data[largest] {
            largest = right;
        }
        if largest == i {
            return;
        }

        data.swap(i, largest);
        i = largest;
    }
}
