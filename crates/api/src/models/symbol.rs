use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zero-based line/column range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Range {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// Half-open byte range into a source buffer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert to a line/column range over `source`.
    /// Returns `None` when the span falls outside the buffer or splits a character.
    pub fn to_range(&self, source: &str) -> Option<Range> {
        if self.start > self.end
            || self.end > source.len()
            || !source.is_char_boundary(self.start)
            || !source.is_char_boundary(self.end)
        {
            return None;
        }
        let (start_line, start_col) = line_col(source, self.start);
        let (end_line, end_col) = line_col(source, self.end);
        Some(Range {
            start_line,
            start_col,
            end_line,
            end_col,
        })
    }
}

fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, before[line_start..].chars().count())
}
