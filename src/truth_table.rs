use std::fmt::{self, Display};

use itertools::Itertools;

use crate::error::Error;
use crate::eval::{Evaluator, Outcome};
use crate::lexer::Lexer;
use crate::symbols::SymbolTable;

/// Label of the result column in rendered tables.
pub const RESULT_LABEL: &str = "Result";

/// One assignment of the free variables plus the expression's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub assignment: Vec<bool>,
    pub result: bool,
}

/// Output of [`generate`].
///
/// An expression containing `<=>` produces a single equivalence verdict
/// instead of a per-assignment table. The verdict compares the two sides
/// under the default all-true assignment only; it is not a proof of
/// equivalence over all assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruthTable {
    Table { columns: Vec<String>, rows: Vec<Row> },
    Equivalence { equal: bool },
}

/// Evaluates `text` under every assignment of its free variables.
///
/// The first row uses the all-true defaults recorded as variables are
/// first seen, which also fixes the column order. Each following row `j`
/// (from `2^n - 2` down to `0`) resets every symbol to true, masks it
/// with its bit of `j`, rewinds the lexer and re-runs the evaluator, so
/// the full table covers all `2^n` assignments.
pub fn generate(text: &str) -> Result<TruthTable, Error> {
    let mut symbols = SymbolTable::new();
    let mut lexer = Lexer::new(text);

    let (result, outcome) = Evaluator::new(&mut lexer, &mut symbols).run()?;

    if outcome == Outcome::EquivalenceChecked {
        return Ok(TruthTable::Equivalence { equal: result });
    }

    let columns: Vec<String> = symbols.names().map(str::to_string).collect();
    let n = columns.len();
    if n >= usize::BITS as usize {
        return Err(Error::TooManyVariables { count: n });
    }

    let mut rows = Vec::with_capacity(1 << n);
    rows.push(Row {
        assignment: vec![true; n],
        result,
    });

    for j in (0..(1_usize << n) - 1).rev() {
        symbols.reset_all_to(true);

        let mut assignment = Vec::with_capacity(n);
        for (k, name) in columns.iter().enumerate() {
            let current = symbols
                .get(name)
                .ok_or_else(|| Error::UnknownSymbol(name.clone()))?;
            let value = current && ((j >> (n - k - 1)) & 1) == 1;
            symbols.insert(name, value)?;
            assignment.push(value);
        }

        lexer.rewind();
        let (result, _) = Evaluator::new(&mut lexer, &mut symbols).run()?;
        rows.push(Row { assignment, result });
    }

    Ok(TruthTable::Table { columns, rows })
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equivalence { equal } => {
                writeln!(f, "equivalent: {}", u8::from(*equal))
            }
            Self::Table { columns, rows } => {
                writeln!(f, "{} | {}", columns.iter().join(" "), RESULT_LABEL)?;
                for row in rows {
                    let cells = row
                        .assignment
                        .iter()
                        .zip(columns)
                        .map(|(value, name)| {
                            format!("{:>width$}", u8::from(*value), width = name.len())
                        })
                        .join(" ");
                    writeln!(
                        f,
                        "{cells} | {:>width$}",
                        u8::from(row.result),
                        width = RESULT_LABEL.len()
                    )?;
                }
                Ok(())
            }
        }
    }
}
