use serde::{Deserialize, Serialize};
use std::fmt;

/// First character of a pragma line (after leading whitespace).
pub const SIGIL: char = '@';

/// Region mode. Governs how a region's content is rendered downstream and
/// how the scanner detects the region's closing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
  Markup,
  EmbeddedCode,
  PartialMarkup,
  DeclarationPreamble,
  Documentation,
}

impl Mode {
  /// The keyword written after the sigil on a pragma line.
  pub fn keyword(self) -> &'static str {
    match self {
      Mode::Markup => "markup",
      Mode::EmbeddedCode => "embedded-code",
      Mode::PartialMarkup => "partial-markup",
      Mode::DeclarationPreamble => "declaration-preamble",
      Mode::Documentation => "documentation",
    }
  }

  pub fn from_keyword(word: &str) -> Option<Mode> {
    match word {
      "markup" => Some(Mode::Markup),
      "embedded-code" => Some(Mode::EmbeddedCode),
      "partial-markup" => Some(Mode::PartialMarkup),
      "declaration-preamble" => Some(Mode::DeclarationPreamble),
      "documentation" => Some(Mode::Documentation),
      _ => None,
    }
  }
}

/// The mode applied to the whole document absent any pragma.
impl Default for Mode {
  fn default() -> Self {
    Mode::Markup
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.keyword())
  }
}

/// Decide whether `line` opens a new mode region.
///
/// Only an exact keyword right after the sigil counts. Anything else is
/// ordinary content of the enclosing mode: the sigil is also valid syntax
/// inside embedded code, so an unrecognized word is not an error.
pub fn detect_mode(line: &str) -> Option<Mode> {
  let trimmed = line.trim();
  let rest = trimmed.strip_prefix(SIGIL)?;
  if rest.is_empty() {
    return None;
  }
  let word = rest.split_whitespace().next()?;
  Mode::from_keyword(word)
}
