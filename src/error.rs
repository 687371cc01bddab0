use thiserror::Error;

/// Errors raised while lexing, evaluating or enumerating an expression.
///
/// All of these abandon the current expression; in interactive mode the
/// caller reports the error and moves on to the next input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized character {ch:?} at position {pos}")]
    Lex { ch: char, pos: usize },

    #[error("malformed operator {found:?} at position {pos}, expected {expected}")]
    MalformedOperator {
        found: String,
        pos: usize,
        expected: &'static str,
    },

    #[error("token at position {pos} exceeds the maximum length of {limit}")]
    TokenTooLong { pos: usize, limit: usize },

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("symbol table is full ({limit} entries)")]
    SymbolCapacity { limit: usize },

    #[error("evaluation stack underflow")]
    StackUnderflow,

    #[error("evaluation stack exceeds {limit} entries")]
    StackOverflow { limit: usize },

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),

    #[error("parenthesis nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("cannot enumerate a truth table over {count} variables")]
    TooManyVariables { count: usize },
}
