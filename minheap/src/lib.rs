pub mod defaults;
pub mod error;
pub mod index;
pub mod minheap;

pub use crate::error::HeapViolation;
pub use crate::minheap::{DrainSorted, MinHeap};
