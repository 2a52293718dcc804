//! Owned region tree handed to the emitter.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::lexer::{Token, TokenStore};

/// Per-document context threaded through to every node for the emitter's
/// benefit. The front end never interprets any of it.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
  /// Template name (file stem, underscore marker stripped for partials).
  pub name: String,
  /// Source path, used in diagnostics.
  pub path: PathBuf,
  /// Directory template names resolve against.
  pub templates_root: PathBuf,
  /// Shared read-only template-name lookup table. Safe to share across
  /// independent compilations; nothing here mutates it.
  pub registry: Arc<HashMap<String, PathBuf>>,
  /// Set by the caller from the leading-underscore naming convention.
  pub partial: bool,
}

/// One region in the tree. Owns its token and its children outright; the
/// structure is strictly hierarchical, nothing is shared between nodes.
#[derive(Debug, Clone)]
pub struct Node {
  pub token: Token,
  pub children: Vec<Node>,
  pub meta: Arc<DocumentMeta>,
}

/// Front-end output for one document: the flat token store (diagnostics,
/// caching) and the rooted region tree (the emitter's input).
#[derive(Debug, Clone)]
pub struct Document {
  pub tokens: TokenStore,
  pub root: Node,
}
