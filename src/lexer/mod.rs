//! Tokenizer: split a mixed-mode template document into region tokens.

mod context;
mod depth;
mod mode;
mod scan;
mod token;


pub use depth::{code_delta, line_delta};
pub use mode::{detect_mode, Mode, SIGIL};
pub use scan::tokenize;
pub use token::{Token, TokenStore};
