//! Section Tracker: the tokenizer main loop, plus root synthesis.

use std::path::Path;

use crate::ast::SourceError;

use super::context::Context;
use super::depth::{code_delta, line_delta};
use super::mode::{detect_mode, Mode, SIGIL};
use super::token::TokenStore;

/// Tokenize one normalized document (newline-only line separators) into a
/// flat token store, ending with the synthesized depth-0 root token.
///
/// `path` only feeds diagnostics; no file is touched here. Structural
/// errors (a close with nothing open, a second declaration-preamble) abort
/// the whole document with no partial output.
pub fn tokenize(input: &str, path: &Path) -> Result<TokenStore, SourceError> {
  let mut store = TokenStore::new();
  let mut stack = vec![Context {
    mode: Mode::default(),
    start: 0,
    depth: 1,
    header: String::new(),
  }];
  // Depth relative to the document root, stamped onto emitted tokens.
  // Distinct from each Context's private counter.
  let mut global: i32 = 0;
  let mut cursor = 0usize;
  let mut line_no = 0usize;
  let mut preamble_seen = false;

  for raw in input.split_inclusive('\n') {
    let line_start = cursor;
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line_end = line_start + line.len();
    cursor += raw.len();
    line_no += 1;

    if let Some(mode) = detect_mode(line) {
      if mode == Mode::DeclarationPreamble {
        if preamble_seen {
          return Err(SourceError::duplicate_preamble(path, line_no, line));
        }
        preamble_seen = true;
      }
      // The pragma line itself is brace-counted with the embedded-code
      // convention: zero net delta means the region opens and closes on
      // this one line.
      let delta = code_delta(line);
      if delta == 0 {
        store.push(
          mode,
          line_start,
          line_end,
          line.to_string(),
          (global + 1) as u32,
          extract_arguments(line),
        );
      } else {
        stack.push(Context {
          mode,
          start: cursor,
          depth: 1,
          header: line.to_string(),
        });
        global += delta;
        if global < 0 {
          return Err(SourceError::unbalanced_close(path, line_no, line));
        }
      }
      continue;
    }

    let top = match stack.last_mut() {
      Some(top) => top,
      None => break,
    };
    top.depth += line_delta(top.mode, line);
    if top.depth != 0 {
      continue;
    }
    if global == 0 {
      return Err(SourceError::unbalanced_close(path, line_no, line));
    }
    if let Some(ctx) = stack.pop() {
      let arguments = extract_arguments(&ctx.header);
      store.push(ctx.mode, ctx.start, line_end, ctx.header, global as u32, arguments);
      global -= 1;
    }
  }

  // Exactly one depth-0 token spanning the whole document; the anchor the
  // tree builder starts from.
  store.push(Mode::default(), 0, input.len(), String::new(), 0, None);
  Ok(store)
}

/// Trailing free-form text of a pragma line: the header minus a trailing
/// open brace, the sigil and the mode keyword. Empty means no arguments.
pub(super) fn extract_arguments(header: &str) -> Option<String> {
  let mut rest = header.trim();
  if let Some(stripped) = rest.strip_suffix('{') {
    rest = stripped.trim_end();
  }
  let rest = rest.strip_prefix(SIGIL).unwrap_or(rest);
  let args = match rest.split_once(char::is_whitespace) {
    Some((_, tail)) => tail.trim(),
    None => "",
  };
  if args.is_empty() {
    None
  } else {
    Some(args.to_string())
  }
}
