// Defaults shared by front ends that load words into a heap.

/// Word list loaded by `--sample`.
pub const SAMPLE_WORDS: [&str; 7] = [
    "pear", "apple", "orange", "banana", "grape", "apricot", "kiwi",
];
