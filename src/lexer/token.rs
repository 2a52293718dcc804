use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// One completed region. Immutable once emitted.
///
/// Tokens carry no parent or child links. Containment is numeric: a token's
/// enclosing region is whichever token's span strictly contains it at one
/// depth level less, recomputed on demand (see `ast::children`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  pub mode: Mode,
  /// Byte offset where the region's content starts.
  pub start: usize,
  /// Byte offset just past the region's content (newline excluded).
  pub end: usize,
  /// The literal pragma line that opened the region; empty for the root.
  pub header_text: String,
  /// Stable position in the token store, assigned at emission, never reused.
  pub index: usize,
  /// Nesting level relative to the document root; 0 is reserved for the root.
  pub depth: u32,
  /// Trailing free-form text of the pragma line, if non-empty.
  pub arguments: Option<String>,
}

/// Flat, append-only token store. Tokens arrive in emission order, which is
/// not hierarchical order: inner regions close before their enclosing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenStore {
  tokens: Vec<Token>,
}

impl TokenStore {
  pub fn new() -> Self {
    TokenStore::default()
  }

  /// Append a token, assigning it the next index. Returns that index.
  pub fn push(
    &mut self,
    mode: Mode,
    start: usize,
    end: usize,
    header_text: String,
    depth: u32,
    arguments: Option<String>,
  ) -> usize {
    let index = self.tokens.len();
    self.tokens.push(Token {
      mode,
      start,
      end,
      header_text,
      index,
      depth,
      arguments,
    });
    index
  }

  pub fn get(&self, index: usize) -> Option<&Token> {
    self.tokens.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Token> {
    self.tokens.iter()
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// The single depth-0 token spanning the whole document, if synthesized.
  pub fn root(&self) -> Option<&Token> {
    self.tokens.iter().find(|t| t.depth == 0)
  }
}
