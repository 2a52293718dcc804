//! Inspect and compile commands for the CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use weft::{
  build_registry, is_partial_stem, parse_document, serialize_tokens, span_from_offsets,
  template_name, Document, DocumentMeta, Node,
};

pub fn tokens(path: &str) -> Result<(), String> {
  let (_source, doc) = load(path)?;
  let json = serde_json::to_string_pretty(&doc.tokens).map_err(|e| e.to_string())?;
  println!("{}", json);
  Ok(())
}

pub fn tree(path: &str) -> Result<(), String> {
  let (source, doc) = load(path)?;
  print_node(&doc.root, &source, 0);
  Ok(())
}

pub fn compile(input: &str, output: &str) -> Result<(), String> {
  let (_source, doc) = load(input)?;
  let bytes = serialize_tokens(&doc.tokens)?;
  fs::write(output, bytes).map_err(|e| e.to_string())?;
  Ok(())
}

fn load(path: &str) -> Result<(String, Document), String> {
  let raw = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
  let source = normalize(&raw);
  let p = Path::new(path);
  let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("template");
  let dir = p.parent().unwrap_or(Path::new("."));
  let registry = build_registry(dir).map_err(|e| e.to_string())?;
  let meta = DocumentMeta {
    name: template_name(stem).to_string(),
    path: p.to_path_buf(),
    templates_root: dir.to_path_buf(),
    registry: Arc::new(registry),
    partial: is_partial_stem(stem),
  };
  let doc = parse_document(&source, meta).map_err(|e| e.to_string())?;
  Ok((source, doc))
}

/// The tokenizer requires newline-only separators and a trailing newline;
/// normalizing is this caller's job.
fn normalize(raw: &str) -> String {
  let mut s = raw.replace("\r\n", "\n");
  if !s.is_empty() && !s.ends_with('\n') {
    s.push('\n');
  }
  s
}

fn print_node(node: &Node, source: &str, indent: usize) {
  let t = &node.token;
  let span = span_from_offsets(source, t.start, t.end);
  print!(
    "{}{} [{}..{}) lines {}-{} depth {}",
    "  ".repeat(indent),
    t.mode,
    t.start,
    t.end,
    span.start_line,
    span.end_line,
    t.depth
  );
  match &t.arguments {
    Some(args) => println!(" args={:?}", args),
    None => println!(),
  }
  for child in &node.children {
    print_node(child, source, indent + 1);
  }
}
