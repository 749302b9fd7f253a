use std::fmt::{Display, Formatter};
use std::ops;

/// Propositional formula.
///
/// `Or` and `And` are n-ary: the parser builds them with two arguments, and
/// flattening merges nested chains of the same connective into one node.
/// `Paren` records explicit grouping from the input; it evaluates to its
/// inner formula but is kept so the formula prints back as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Symbol(String),
    Not { arg: Box<Expr> },
    Or { args: Vec<Expr> },
    And { args: Vec<Expr> },
    Implies { lhs: Box<Expr>, rhs: Box<Expr> },
    Equiv { lhs: Box<Expr>, rhs: Box<Expr> },
    Paren { inner: Box<Expr> },
}

// Constructors
impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn not(arg: Self) -> Self {
        Expr::Not { arg: Box::new(arg) }
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or { args: vec![lhs, rhs] }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And { args: vec![lhs, rhs] }
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Equiv {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn paren(inner: Self) -> Self {
        Expr::Paren { inner: Box::new(inner) }
    }
}

impl Expr {
    /// Direct subformulas, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Symbol(_) => vec![],
            Expr::Not { arg } => vec![arg.as_ref()],
            Expr::Paren { inner } => vec![inner.as_ref()],
            Expr::Or { args } | Expr::And { args } => args.iter().collect(),
            Expr::Implies { lhs, rhs } | Expr::Equiv { lhs, rhs } => vec![lhs.as_ref(), rhs.as_ref()],
        }
    }
}

struct Notation {
    not: &'static str,
    or: &'static str,
    and: &'static str,
    implies: &'static str,
    equiv: &'static str,
}

const LATEX: Notation = Notation {
    not: r"\neg",
    or: r"\lor",
    and: r"\land",
    implies: r"\rightarrow",
    equiv: r"\leftrightarrow",
};

const ASCII: Notation = Notation {
    not: "!",
    or: "v",
    and: "^",
    implies: "->",
    equiv: "<->",
};

/// Writes words separated by single spaces.
struct Words<'a, 'b> {
    f: &'a mut Formatter<'b>,
    first: bool,
}

impl Words<'_, '_> {
    fn word(&mut self, s: &str) -> std::fmt::Result {
        if !self.first {
            self.f.write_str(" ")?;
        }
        self.first = false;
        self.f.write_str(s)
    }
}

impl Expr {
    fn pretty(&self, w: &mut Words, notation: &Notation) -> std::fmt::Result {
        match self {
            Expr::Symbol(name) => w.word(name),
            Expr::Not { arg } => {
                w.word(notation.not)?;
                arg.pretty(w, notation)
            }
            Expr::Or { args } => pretty_chain(args, notation.or, w, notation),
            Expr::And { args } => pretty_chain(args, notation.and, w, notation),
            Expr::Implies { lhs, rhs } => {
                lhs.pretty(w, notation)?;
                w.word(notation.implies)?;
                rhs.pretty(w, notation)
            }
            Expr::Equiv { lhs, rhs } => {
                lhs.pretty(w, notation)?;
                w.word(notation.equiv)?;
                rhs.pretty(w, notation)
            }
            Expr::Paren { inner } => {
                w.word("(")?;
                inner.pretty(w, notation)?;
                w.word(")")
            }
        }
    }
}

fn pretty_chain(args: &[Expr], op: &str, w: &mut Words, notation: &Notation) -> std::fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            w.word(op)?;
        }
        arg.pretty(w, notation)?;
    }
    Ok(())
}

/// `{}` prints the LaTeX math form used for table headers, e.g. `\neg ( p \land q )`.
/// `{:#}` prints the same token sequence in the input notation, e.g. `! ( p ^ q )`.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let notation = if f.alternate() { &ASCII } else { &LATEX };
        let mut words = Words { f, first: true };
        self.pretty(&mut words, notation)
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn p() -> Expr {
        Expr::symbol("p")
    }
    fn q() -> Expr {
        Expr::symbol("q")
    }

    #[test]
    fn test_display_latex() {
        assert_eq!(Expr::implies(p(), q()).to_string(), r"p \rightarrow q");
        assert_eq!(Expr::equiv(p(), q()).to_string(), r"p \leftrightarrow q");
        assert_eq!((!Expr::paren(p() & q())).to_string(), r"\neg ( p \land q )");
    }

    #[test]
    fn test_display_nary() {
        let e = Expr::Or {
            args: vec![p(), q(), Expr::symbol("r")],
        };
        assert_eq!(e.to_string(), r"p \lor q \lor r");
        assert_eq!(format!("{e:#}"), "p v q v r");
    }

    #[test]
    fn test_display_ascii() {
        let e = Expr::implies(!p(), Expr::paren(Expr::equiv(p(), q())));
        assert_eq!(format!("{e:#}"), "! p -> ( p <-> q )");
    }

    #[test]
    fn test_children() {
        let e = Expr::implies(p(), q() | p());
        assert_eq!(e.children(), vec![&p(), &(q() | p())]);
        assert!(p().children().is_empty());
    }
}
