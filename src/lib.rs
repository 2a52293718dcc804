//! weft template compiler front end.
//!
//! Turns a mixed-mode template document into an ordered flat token store
//! and a rooted tree of owned region nodes. Rendering the tree into output
//! text is the emitter's job, downstream of this crate.

pub mod ast;
pub mod binformat;
pub mod lexer;
pub mod registry;

pub use ast::{
  build_tree, parse_document, span_from_offsets, ChildTokens, Document, DocumentMeta, Node,
  SourceError, Span,
};
pub use binformat::{deserialize_tokens, serialize_tokens};
pub use lexer::{detect_mode, tokenize, Mode, Token, TokenStore};
pub use registry::{build_registry, is_partial_stem, template_name};
