use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::iter;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LexError, UnexpectedCharacterSnafu};

// Alternatives are tried in this order at every position, so `<->` must come before `->`.
// The lowercase `v` is the disjunction and can never be part of a symbol.
static LEXEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(|\)|<->|->|\^|&|v|\||!|~|[a-uw-zA-Z]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Not,
    Or,
    And,
    Implies,
    Equiv,
    LParen,
    RParen,
    Symbol(String),
    End,
}

impl Token {
    fn from_lexeme(s: &str) -> Self {
        match s {
            "!" | "~" => Token::Not,
            "v" | "|" => Token::Or,
            "^" | "&" => Token::And,
            "->" => Token::Implies,
            "<->" => Token::Equiv,
            "(" => Token::LParen,
            ")" => Token::RParen,
            _ => Token::Symbol(s.to_owned()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Not => write!(f, "'!'"),
            Token::Or => write!(f, "'v'"),
            Token::And => write!(f, "'^'"),
            Token::Implies => write!(f, "'->'"),
            Token::Equiv => write!(f, "'<->'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Symbol(name) => write!(f, "symbol '{name}'"),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub pos: usize,
}

/// Tokens of a single line, consumed front to back.
///
/// The terminating [`Token::End`] is never consumed: once the line is
/// exhausted, every further read returns it again.
#[derive(Debug, Clone)]
pub struct Tokens {
    lexemes: VecDeque<Lexeme>,
    end: Lexeme,
}

impl Tokens {
    pub fn peek(&self) -> &Lexeme {
        self.lexemes.front().unwrap_or(&self.end)
    }

    pub fn pop(&mut self) -> Lexeme {
        self.lexemes.pop_front().unwrap_or_else(|| self.end.clone())
    }

    /// Remaining tokens, including the final [`Token::End`].
    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter().chain(iter::once(&self.end))
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for lexeme in self.iter() {
            list.entry(&format_args!("{}@{}", lexeme.token, lexeme.pos));
        }
        list.finish()
    }
}

/// Splits a line into tokens.
///
/// Characters between lexemes are skipped. With `strict`, anything skipped
/// other than whitespace is reported as a [`LexError`].
pub fn tokenize(input: &str, strict: bool) -> Result<Tokens, LexError> {
    let mut lexemes = VecDeque::new();
    let mut last = 0;
    for m in LEXEME.find_iter(input) {
        check_gap(input, last, m.start(), strict)?;
        lexemes.push_back(Lexeme {
            token: Token::from_lexeme(m.as_str()),
            pos: m.start(),
        });
        last = m.end();
    }
    check_gap(input, last, input.len(), strict)?;

    let tokens = Tokens {
        lexemes,
        end: Lexeme {
            token: Token::End,
            pos: input.len(),
        },
    };
    debug!("tokenize({input:?}) = {tokens}");
    Ok(tokens)
}

fn check_gap(input: &str, from: usize, to: usize, strict: bool) -> Result<(), LexError> {
    let gap = &input[from..to];
    if let Some((i, ch)) = gap.char_indices().find(|&(_, c)| !c.is_whitespace()) {
        if strict {
            return UnexpectedCharacterSnafu { ch, pos: from + i }.fail();
        }
        debug!("Skipping {:?} at position {}", gap.trim(), from + i);
    }
    Ok(())
}
