use log::trace;
use serde::Serialize;
use std::iter::FusedIterator;

use crate::error::HeapViolation;
use crate::index::{left_child, parent, right_child};

/// A priority container that always hands back its smallest element first.
///
/// Elements live in a single `Vec` laid out as an implicit binary tree
/// (see [`crate::index`]). Every parent orders at or before its children, so
/// the root at index 0 is the minimum.
///
/// `add` and `remove` are O(log n), `peek` is O(1). Elements that compare
/// equal come out in no particular order relative to each other.
///
/// A heap serializes as its backing array in layout order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// An empty heap with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The smallest element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The backing array in heap layout (not sorted).
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> MinHeap<T> {
    /// Insert `x`, then move it up until its parent is not greater than it.
    pub fn add(&mut self, x: T) {
        self.elements.push(x);
        let pos = self.sift_up(self.elements.len() - 1);
        trace!("add: settled at {} of {}", pos, self.elements.len());
        debug_assert_eq!(self.check(), Ok(()));
    }

    /// Take out the smallest element, or `None` if the heap is empty.
    ///
    /// The last element replaces the root and is moved down to restore the
    /// heap property.
    pub fn remove(&mut self) -> Option<T> {
        let last = self.elements.pop()?;
        if self.elements.is_empty() {
            trace!("remove: heap drained");
            return Some(last);
        }
        let min = std::mem::replace(&mut self.elements[0], last);
        let pos = self.sift_down(0);
        trace!("remove: settled at {} of {}", pos, self.elements.len());
        debug_assert_eq!(self.check(), Ok(()));
        Some(min)
    }

    /// Iterator that removes elements smallest first until the heap is empty.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    /// Consume the heap, returning its elements in non-decreasing order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Scan every parent/child pair and report the first child that orders
    /// before its parent.
    pub fn check(&self) -> Result<(), HeapViolation> {
        let n = self.elements.len();
        // only the first n/2 nodes have children
        for i in 0..n / 2 {
            for c in [left_child(i), right_child(i)] {
                if c < n && self.elements[c] < self.elements[i] {
                    return Err(HeapViolation {
                        parent: i,
                        child: c,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    // Returns the final position of the moved element.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = parent(i);
            if self.elements[i] < self.elements[p] {
                self.elements.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
        i
    }

    // Equal children: the left one wins.
    fn sift_down(&mut self, mut i: usize) -> usize {
        let n = self.elements.len();
        loop {
            let (l, r) = (left_child(i), right_child(i));
            let mut smallest = i;
            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return i;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for x in iter {
            self.add(x);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

/// Draining iterator returned by [`MinHeap::drain_sorted`].
///
/// Elements not yet yielded stay in the heap if the iterator is dropped early.
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord> {
    heap: &'a mut MinHeap<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}
