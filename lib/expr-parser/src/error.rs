use snafu::Snafu;

use crate::token::Token;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LexError {
    #[snafu(display("Unexpected character '{}' at position {}", ch, pos))]
    UnexpectedCharacter { ch: char, pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
    #[snafu(display("Unexpected {} at position {}", found, pos))]
    UnexpectedToken { found: Token, pos: usize },

    #[snafu(display("Expected {} but found {} at position {}", expected, found, pos))]
    ExpectedToken { expected: Token, found: Token, pos: usize },

    #[snafu(display("Formula nested deeper than {} at position {}", limit, pos))]
    TooDeep { limit: usize, pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Lexing failed: {}", source))]
    Lex { source: LexError },

    #[snafu(display("Parsing failed: {}", source))]
    Parse { source: ParseError },
}
