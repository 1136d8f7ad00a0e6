// Index arithmetic for a binary tree stored densely in an array, root at index 0.
// No links are stored: a node's neighbors are derived from its position alone.

/// Index of the left child of node `i`.
#[inline]
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of node `i`.
#[inline]
pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Index of the parent of node `i`.
///
/// The root has no parent: `i` must be greater than zero. This is only
/// checked in debug builds; callers never ask for the root's parent.
#[inline]
pub fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "root has no parent");
    (i - 1) / 2
}
