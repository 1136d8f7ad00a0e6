use std::fmt;

/// A position where a child orders before its parent.
///
/// Produced by [`MinHeap::check`](crate::MinHeap::check). Finding one means
/// the heap implementation itself is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapViolation {
    pub parent: usize,
    pub child: usize,
}

impl fmt::Display for HeapViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min-heap property violated: element at index {} orders before its parent at index {}",
            self.child, self.parent
        )
    }
}

impl std::error::Error for HeapViolation {}
