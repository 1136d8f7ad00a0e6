use minheap::MinHeap;
use serde_derive::Serialize;
use std::error::Error;
use std::io::{self, Write};

use crate::default::EMPTY_MARKER;

#[derive(Serialize, Debug)]
pub struct DrainReport {
    pub count: usize,
    pub peek: Option<String>,
    // backing array before draining, only when asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<String>>,
    pub drained: Vec<String>,
}

impl DrainReport {
    /// Load `words` into a heap in order, then drain it.
    pub fn build(words: Vec<String>, with_layout: bool) -> Self {
        let mut heap: MinHeap<String> = words.into_iter().collect();
        let count = heap.len();
        let peek = heap.peek().cloned();
        let layout = with_layout.then(|| heap.as_slice().to_vec());
        let drained = heap.drain_sorted().collect();
        DrainReport {
            count,
            peek,
            layout,
            drained,
        }
    }

    pub fn verify_sorted(&self) -> Result<(), Box<dyn Error>> {
        if let Some(i) = self.drained.windows(2).position(|w| w[0] > w[1]) {
            return Err(format!(
                "drain out of order at {}: {:?} > {:?}",
                i,
                self.drained[i],
                self.drained[i + 1]
            )
            .into());
        }
        if self.drained.len() != self.count {
            return Err(format!(
                "drained {} of {} words",
                self.drained.len(),
                self.count
            )
            .into());
        }
        Ok(())
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "peek: {}",
            self.peek.as_deref().unwrap_or(EMPTY_MARKER)
        )?;
        if let Some(layout) = &self.layout {
            writeln!(out, "layout: {}", layout.join(" "))?;
        }
        writeln!(out, "drained: {}", self.drained.join(" "))?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), Box<dyn Error>> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
