use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EvalError {
    #[snafu(display("Unbound variable '{}'", name))]
    UnboundVariable { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Syntax { source: expr_parser::Error },

    #[snafu(display("Evaluation failed: {}", source))]
    Eval { source: EvalError },

    #[snafu(display("Too many variables for a truth table: {}", count))]
    TooManyVariables { count: usize },
}
