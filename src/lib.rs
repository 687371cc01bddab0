#![warn(clippy::disallowed_types)]

pub use error::Error;
pub use eval::{EvalStack, Evaluator, Outcome};
pub use lexer::{BinOp, Lexer, Token, TokenKind};
pub use symbols::{Symbol, SymbolTable};
pub use truth_table::{generate, Row, TruthTable};

pub mod error;
pub mod eval;
pub mod lexer;
pub mod symbols;
pub mod truth_table;
