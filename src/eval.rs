use crate::error::Error;
use crate::lexer::{Lexer, TokenKind};
use crate::symbols::SymbolTable;

/// Hard bound on intermediate values held during one evaluation.
pub const MAX_STACK_DEPTH: usize = 1024;

/// Hard bound on parenthesis nesting, which also bounds recursion depth.
pub const MAX_NESTING_DEPTH: usize = 128;

/// How a top-level evaluation finished.
///
/// `EquivalenceChecked` means the input contained `<=>`: the single value
/// left on the stack is the verdict of comparing the two sides under the
/// current assignment, and the caller should render a one-row result
/// instead of a full table. The comparison only covers the assignment in
/// effect when the operator was reached, not all possible assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Normal,
    EquivalenceChecked,
}

/// LIFO stack of boolean intermediate results for one evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct EvalStack {
    values: Vec<bool>,
}

impl EvalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: bool) -> Result<(), Error> {
        if self.values.len() == MAX_STACK_DEPTH {
            return Err(Error::StackOverflow {
                limit: MAX_STACK_DEPTH,
            });
        }
        self.values.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<bool, Error> {
        self.values.pop().ok_or(Error::StackUnderflow)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drains both stacks, comparing pop-for-pop.
    ///
    /// Not equal as soon as the depths differ or any popped pair differs.
    /// Both stacks are empty afterwards.
    fn matches(&mut self, other: &mut Self) -> bool {
        let mut equal = self.values.len() == other.values.len();
        self.values
            .drain(..)
            .rev()
            .zip(other.values.drain(..).rev())
            .for_each(|(a, b)| equal &= a == b);
        equal
    }
}

/// Recursive stack-machine evaluator over the token stream.
///
/// The grammar is strictly left-to-right: operators apply in order of
/// appearance, grouping only via explicit parentheses. Nested groups are
/// handled by a parenthesis-depth counter rather than a parse tree.
pub struct Evaluator<'a> {
    lexer: &'a mut Lexer,
    symbols: &'a mut SymbolTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(lexer: &'a mut Lexer, symbols: &'a mut SymbolTable) -> Self {
        Self { lexer, symbols }
    }

    /// Evaluates the whole input under the current symbol assignment.
    pub fn run(&mut self) -> Result<(bool, Outcome), Error> {
        let mut stack = EvalStack::new();
        let outcome = self.eval(&mut stack, 0)?;

        if stack.len() != 1 {
            return Err(Error::Syntax(format!(
                "expression left {} values on the stack, expected 1",
                stack.len()
            )));
        }

        let result = stack.pop()?;
        Ok((result, outcome))
    }

    fn eval(&mut self, stack: &mut EvalStack, enclosing: usize) -> Result<Outcome, Error> {
        if enclosing > MAX_NESTING_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }

        let mut parens = enclosing;

        loop {
            let Some(token) = self.lexer.next_token(self.symbols)? else {
                // only the outermost call may run out of input
                if parens != enclosing || enclosing != 0 {
                    return Err(Error::Syntax("unbalanced parentheses".to_string()));
                }
                return Ok(Outcome::Normal);
            };

            match token.kind {
                TokenKind::OpenParen => {
                    parens += 1;
                    if parens > MAX_NESTING_DEPTH {
                        return Err(Error::NestingTooDeep {
                            limit: MAX_NESTING_DEPTH,
                        });
                    }
                }
                TokenKind::CloseParen => {
                    if parens == 0 {
                        return Err(Error::Syntax(
                            "unbalanced closing parenthesis".to_string(),
                        ));
                    }
                    parens -= 1;
                    if parens < enclosing {
                        return Ok(Outcome::Normal);
                    }
                }
                TokenKind::Variable => {
                    let value = self.lookup(&token.text)?;
                    stack.push(value)?;
                }
                TokenKind::UnaryOp => {
                    let value = self.operand(stack, parens, false)?;
                    stack.push(!value)?;
                }
                TokenKind::BinaryOp(op) => {
                    let left = stack.pop()?;
                    let right = self.operand(stack, parens, true)?;
                    stack.push(op.apply(left, right))?;
                }
                TokenKind::EquivalenceOp => {
                    let mut right_stack = EvalStack::new();
                    self.eval(&mut right_stack, parens)?;
                    let equal = stack.matches(&mut right_stack);
                    stack.push(equal)?;
                    return Ok(Outcome::EquivalenceChecked);
                }
            }
        }
    }

    /// Fetches the operand required after `~` or a binary operator.
    ///
    /// The operand is a variable, a parenthesized sub-expression, or (for
    /// binary operators only) a `~`-negated form of either.
    fn operand(
        &mut self,
        stack: &mut EvalStack,
        parens: usize,
        allow_unary: bool,
    ) -> Result<bool, Error> {
        let Some(token) = self.lexer.next_token(self.symbols)? else {
            return Err(Error::Syntax("operator missing an operand".to_string()));
        };

        match token.kind {
            TokenKind::Variable => self.lookup(&token.text),
            TokenKind::UnaryOp if allow_unary => Ok(!self.operand(stack, parens, false)?),
            TokenKind::OpenParen => {
                let depth_before = stack.len();
                self.eval(stack, parens + 1)?;
                if stack.len() != depth_before + 1 {
                    return Err(Error::Syntax(
                        "parenthesized group did not produce a single value".to_string(),
                    ));
                }
                stack.pop()
            }
            _ => Err(Error::Syntax(format!(
                "unexpected token {:?} after operator",
                token.text
            ))),
        }
    }

    fn lookup(&self, name: &str) -> Result<bool, Error> {
        self.symbols
            .get(name)
            .ok_or_else(|| Error::UnknownSymbol(name.to_string()))
    }
}
