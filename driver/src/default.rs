pub const RANDOM_WORD_LEN: usize = 4;

/// Printed in place of a value when the heap is empty.
pub const EMPTY_MARKER: &str = "<empty>";
