//! Line/column lookup for byte offsets.
//!
//! Tokens and diagnostics report 1-based lines and 1-based columns. Columns
//! count characters, not bytes, so non-ASCII identifiers and strings report
//! the column a reader would count.

/// Byte offset of every line start, built once per source.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// `offsets[0] == 0`; `offsets[n]` is the byte after the n-th `\n`.
    offsets: Vec<u32>,
}

impl LineIndex {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { offsets }
    }

    /// 1-based `(line, column)` of `offset` within `source`.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.offsets[line_idx] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (
            u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            u32::try_from(col + 1).unwrap_or(u32::MAX),
        )
    }
}
