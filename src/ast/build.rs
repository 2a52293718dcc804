//! Tree Builder: recursive pre-order construction of the owned node tree.

use std::sync::Arc;

use crate::lexer::{tokenize, Token, TokenStore};

use super::children::ChildTokens;
use super::node::{Document, DocumentMeta, Node};
use super::span::SourceError;

/// Build the region tree from a scanned token store. The root node wraps
/// the single depth-0 token; child order matches document order.
pub fn build_tree(store: &TokenStore, meta: &Arc<DocumentMeta>) -> Result<Node, SourceError> {
  let root = store
    .root()
    .ok_or_else(|| SourceError::new("token store has no root token"))?;
  Ok(build_node(store, root, meta))
}

// Recursion depth follows the document's region nesting, which has no
// upper bound.
fn build_node(store: &TokenStore, token: &Token, meta: &Arc<DocumentMeta>) -> Node {
  let children = ChildTokens::new(store, token)
    .map(|child| build_node(store, child, meta))
    .collect();
  Node {
    token: token.clone(),
    children,
    meta: Arc::clone(meta),
  }
}

/// Tokenize `input` and build its region tree in one pass. The caller
/// guarantees newline-only line separators. Compilation is atomic: a
/// structural error yields no tokens and no tree.
pub fn parse_document(input: &str, meta: DocumentMeta) -> Result<Document, SourceError> {
  let tokens = tokenize(input, &meta.path)?;
  let meta = Arc::new(meta);
  let root = build_tree(&tokens, &meta)?;
  Ok(Document { tokens, root })
}
