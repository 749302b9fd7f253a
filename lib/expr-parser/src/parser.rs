use log::{debug, trace};
use snafu::ResultExt;

use crate::error::{ExpectedTokenSnafu, LexSnafu, ParseError, ParseSnafu, Result, TooDeepSnafu, UnexpectedTokenSnafu};
use crate::expr::Expr;
use crate::options::{Options, DEFAULT_OPTIONS};
use crate::token::{tokenize, Lexeme, Token, Tokens};

/// Recursive-descent parser over the tokens of one line.
///
/// Precedence, lowest to highest:
///
/// ```text
/// formula     := equiv ('->' equiv)*
/// equiv       := disjunction ('<->' disjunction)*
/// disjunction := conjunction ('v' disjunction)*
/// conjunction := unary ('^' disjunction)*
/// unary       := '!' unary | SYMBOL | '(' formula ')'
/// ```
///
/// Chains of `->` and `<->` fold to the left, so `p -> q -> r` reads as
/// `(p -> q) -> r`. The right operand of `^` is a whole disjunction, so
/// `p ^ q v r` reads as `p ^ (q v r)`.
pub struct Parser {
    tokens: Tokens,
    max_depth: Option<usize>,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Tokens, options: &Options) -> Self {
        Self {
            tokens,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parses a complete formula, requiring that no tokens are left over.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.formula()?;
        self.expect(Token::End)?;
        Ok(expr)
    }

    fn formula(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let mut lhs = p.equiv()?;
            while p.eat(&Token::Implies) {
                let rhs = p.equiv()?;
                lhs = Expr::implies(lhs, rhs);
            }
            Ok(lhs)
        })
    }

    fn equiv(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let mut lhs = p.disjunction()?;
            while p.eat(&Token::Equiv) {
                let rhs = p.disjunction()?;
                lhs = Expr::equiv(lhs, rhs);
            }
            Ok(lhs)
        })
    }

    fn disjunction(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let mut lhs = p.conjunction()?;
            while p.eat(&Token::Or) {
                let rhs = p.disjunction()?;
                lhs = Expr::or(lhs, rhs);
            }
            Ok(lhs)
        })
    }

    fn conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        while self.eat(&Token::And) {
            let rhs = self.disjunction()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let Lexeme { token, pos } = p.tokens.pop();
            trace!("unary: {} at {}", token, pos);
            match token {
                Token::Not => Ok(Expr::not(p.unary()?)),
                Token::Symbol(name) => Ok(Expr::Symbol(name)),
                Token::LParen => {
                    let inner = p.formula()?;
                    p.expect(Token::RParen)?;
                    Ok(Expr::paren(inner))
                }
                found => UnexpectedTokenSnafu { found, pos }.fail(),
            }
        })
    }

    fn eat(&mut self, token: &Token) -> bool {
        if &self.tokens.peek().token == token {
            self.tokens.pop();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        let next = self.tokens.peek();
        if next.token == expected {
            self.tokens.pop();
            Ok(())
        } else {
            ExpectedTokenSnafu {
                expected,
                found: next.token.clone(),
                pos: next.pos,
            }
            .fail()
        }
    }

    fn nested<T, F>(&mut self, f: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return TooDeepSnafu {
                    limit,
                    pos: self.tokens.peek().pos,
                }
                .fail();
            }
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

pub fn parse_expr(input: &str) -> Result<Expr> {
    parse_expr_with(input, &DEFAULT_OPTIONS)
}

pub fn parse_expr_with(input: &str, options: &Options) -> Result<Expr> {
    let tokens = tokenize(input, options.strict).context(LexSnafu)?;
    let expr = Parser::new(tokens, options).parse().context(ParseSnafu)?;
    debug!("parse_expr({:?}) = {:#}", input, expr);
    Ok(expr)
}
