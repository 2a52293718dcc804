use std::path::Path;

use weft::{tokenize, Mode};

fn scan(input: &str) -> weft::TokenStore {
  tokenize(input, Path::new("doc.weft")).unwrap()
}

#[test]
fn no_pragmas_yields_only_the_root() {
  let input = "hello\nworld\n";
  let store = scan(input);
  assert_eq!(store.len(), 1);
  let root = store.root().unwrap();
  assert_eq!(root.mode, Mode::Markup);
  assert_eq!((root.start, root.end), (0, input.len()));
  assert_eq!(root.depth, 0);
  assert_eq!(root.header_text, "");
  assert_eq!(root.arguments, None);
}

#[test]
fn empty_input_yields_only_the_root() {
  let store = scan("");
  assert_eq!(store.len(), 1);
  let root = store.root().unwrap();
  assert_eq!((root.start, root.end), (0, 0));
}

#[test]
fn one_token_per_opening_pragma() {
  // Two block regions plus one self-closing pragma: three non-root tokens.
  let input = "@embedded-code {\nlet a = 1;\n}\n@documentation note\n@partial-markup footer {\n<p>bye</p>\n}\n";
  let store = scan(input);
  assert_eq!(store.len(), 4);
  assert_eq!(store.iter().filter(|t| t.depth == 0).count(), 1);
  assert_eq!(store.iter().filter(|t| t.depth == 1).count(), 3);
}

#[test]
fn interior_brace_does_not_close_markup_region() {
  // Scenario: the `}` inside `<div>}` is not the first non-whitespace
  // character of its line, so only the bare `}` line closes the region.
  let input = "@partial-markup name {\n<div>}\n}\n";
  let store = scan(input);
  assert_eq!(store.len(), 2);
  let partial = store.get(0).unwrap();
  assert_eq!(partial.mode, Mode::PartialMarkup);
  assert_eq!(partial.arguments.as_deref(), Some("name"));
  assert_eq!(&input[partial.start..partial.end], "<div>}\n}");
}

#[test]
fn code_region_balances_interior_braces() {
  let input = "line1\n@embedded-code {\nfoo{}\n}\nline2\n";
  let store = scan(input);
  assert_eq!(store.len(), 2);
  let code = store.get(0).unwrap();
  assert_eq!(code.mode, Mode::EmbeddedCode);
  assert_eq!(code.depth, 1);
  assert_eq!(&input[code.start..code.end], "foo{}\n}");
}

#[test]
fn quoted_brace_does_not_close_code_region() {
  let input = "@embedded-code {\nlet s = \"}\";\n}\n";
  let store = scan(input);
  assert_eq!(store.len(), 2);
  let code = store.get(0).unwrap();
  assert_eq!(&input[code.start..code.end], "let s = \"}\";\n}");
}

#[test]
fn nested_regions_are_stamped_with_global_depth() {
  let input = "@partial-markup outer {\n@embedded-code {\nx{}\n}\ntext\n}\n";
  let store = scan(input);
  assert_eq!(store.len(), 3);
  // Inner region closes first, so it is emitted first.
  let code = store.get(0).unwrap();
  assert_eq!(code.mode, Mode::EmbeddedCode);
  assert_eq!(code.depth, 2);
  let partial = store.get(1).unwrap();
  assert_eq!(partial.mode, Mode::PartialMarkup);
  assert_eq!(partial.depth, 1);
  // Containment is purely numeric: the inner span nests in the outer one.
  assert!(partial.start <= code.start && code.end < partial.end);
  let root = store.get(2).unwrap();
  assert_eq!(root.depth, 0);
  assert!(code.end < root.end && partial.end < root.end);
}

#[test]
fn unknown_sigil_word_is_plain_content() {
  let input = "@embedded-code {\n@media print {}\n}\n";
  let store = scan(input);
  // `@media` is not a pragma; its balanced braces keep the region open
  // until the closing line.
  assert_eq!(store.len(), 2);
  assert_eq!(&input[store.get(0).unwrap().start..store.get(0).unwrap().end], "@media print {}\n}");
}

#[test]
fn unclosed_region_is_discarded() {
  // A region still open at end of input emits nothing; the root token
  // still covers the whole document.
  let input = "@embedded-code {\nlet x = 1;\n";
  let store = scan(input);
  assert_eq!(store.len(), 1);
  let root = store.root().unwrap();
  assert_eq!(root.mode, Mode::Markup);
  assert_eq!((root.start, root.end), (0, input.len()));
}

#[test]
fn tokenize_is_idempotent() {
  let input = "@partial-markup a {\nx\n}\n@embedded-code {\ny();\n}\n";
  let first = scan(input);
  let second = scan(input);
  assert_eq!(first, second);
}
