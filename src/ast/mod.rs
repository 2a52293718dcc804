//! Region tree: containment queries over the token store and owned tree
//! construction.

mod build;
mod children;
mod node;
mod span;

pub use build::{build_tree, parse_document};
pub use children::ChildTokens;
pub use node::{Document, DocumentMeta, Node};
pub use span::{line_span, span_from_offsets, SourceError, Span};
