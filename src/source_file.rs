//! SourceFile: owns the UTF-16 code-unit buffer the scanner reads.
//!
//! ECMAScript source text is a sequence of UTF-16 code units, and every
//! offset the scanner exposes (token positions, diagnostic starts, columns)
//! counts code units. The buffer is encoded once at construction and shared
//! behind an `Arc` so snapshots and downstream phases never copy it.

use std::sync::Arc;

/// A source file: file name plus immutable UTF-16 code units.
#[derive(Clone, Debug)]
pub struct SourceFile {
    file_name: String,
    units: Arc<[u16]>,
}

impl SourceFile {
    /// Encode `text` as UTF-16 code units.
    pub fn new(file_name: impl Into<String>, text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        SourceFile {
            file_name: file_name.into(),
            units: Arc::from(units.into_boxed_slice()),
        }
    }

    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Code unit at `index`, widened to `u32`; 0 past the end.
    #[inline]
    pub fn unit_at(&self, index: usize) -> u32 {
        match self.units.get(index) {
            Some(&unit) => unit as u32,
            None => 0,
        }
    }

    /// Decode the code units in `[start, end)` to a `String`. Unpaired
    /// surrogates become U+FFFD rather than failing.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.units.len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return String::new();
        }
        String::from_utf16_lossy(&self.units[start..end])
    }

    /// The raw code units in `[start, end)`.
    #[inline]
    pub fn units(&self, start: usize, end: usize) -> &[u16] {
        &self.units[start.min(self.units.len())..end.min(self.units.len())]
    }
}
