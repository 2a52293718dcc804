use super::mode::Mode;

/// Scanning state for one open region. Lives only on the section stack and
/// is discarded once its token is emitted.
pub(super) struct Context {
  pub mode: Mode,
  /// Byte offset where the region's content starts (just past the pragma line).
  pub start: usize,
  /// Running nesting depth private to this region; the region closes when it
  /// returns to 0.
  pub depth: i32,
  /// The literal pragma line that opened the region; empty for the base
  /// document context.
  pub header: String,
}
