//! Source spans and the fatal structural errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Source span for diagnostics (1-based line and column; end exclusive for
/// column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
  pub start_line: u32,
  pub start_column: u32,
  pub end_line: u32,
  pub end_column: u32,
}

/// Error with optional source location. Structural errors abort the whole
/// document's compilation; there is no recovery and no partial output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceError {
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub span: Option<Span>,
}

impl SourceError {
  pub fn new(message: impl Into<String>) -> Self {
    SourceError {
      message: message.into(),
      span: None,
    }
  }

  /// A region-closing line was seen while no region was open.
  pub fn unbalanced_close(path: &Path, line_no: usize, line: &str) -> Self {
    SourceError {
      message: format!(
        "{}: line {}: closing brace with no open block: {}",
        path.display(),
        line_no,
        line.trim()
      ),
      span: Some(line_span(line_no, line)),
    }
  }

  /// A second declaration-preamble pragma in the same document.
  pub fn duplicate_preamble(path: &Path, line_no: usize, line: &str) -> Self {
    SourceError {
      message: format!(
        "{}: line {}: duplicate declaration-preamble pragma (at most one per document)",
        path.display(),
        line_no
      ),
      span: Some(line_span(line_no, line)),
    }
  }
}

impl fmt::Display for SourceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(s) = &self.span {
      write!(
        f,
        "line {}, column {}: {}",
        s.start_line, s.start_column, self.message
      )
    } else {
      write!(f, "{}", self.message)
    }
  }
}

impl std::error::Error for SourceError {}

/// Span covering one whole source line.
pub fn line_span(line_no: usize, line: &str) -> Span {
  Span {
    start_line: line_no as u32,
    start_column: 1,
    end_line: line_no as u32,
    end_column: (line.chars().count() + 1) as u32,
  }
}

/// Build a Span from byte offsets into `source` (0-based, end exclusive).
pub fn span_from_offsets(source: &str, start: usize, end: usize) -> Span {
  let (start_line, start_column) = line_col(source, start);
  let (end_line, end_column) = line_col(source, end);
  Span {
    start_line,
    start_column,
    end_line,
    end_column,
  }
}

fn line_col(source: &str, offset: usize) -> (u32, u32) {
  let mut offset = offset.min(source.len());
  // Offsets landing inside a multi-byte character round down to its start.
  while !source.is_char_boundary(offset) {
    offset -= 1;
  }
  let before = &source[..offset];
  let line = before.bytes().filter(|b| *b == b'\n').count();
  let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
  let column = before[line_start..].chars().count();
  ((line + 1) as u32, (column + 1) as u32)
}
