//! Tokenizer and parser for propositional formulas written in ASCII notation:
//! `!`/`~` (not), `v`/`|` (or), `^`/`&` (and), `->` (implies), `<->` (equivalent),
//! parentheses, and symbols made of Latin letters other than lowercase `v`.

pub mod error;
pub mod expr;
pub mod options;
pub mod parser;
pub mod token;

pub use error::{Error, LexError, ParseError};
pub use expr::Expr;
pub use options::{Options, DEFAULT_OPTIONS};
pub use parser::{parse_expr, parse_expr_with};
