use crate::error::Error;
use crate::symbols::SymbolTable;

/// Upper bound on the length of a single lexeme.
pub const MAX_TOKEN_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Variable,
    UnaryOp,
    BinaryOp(BinOp),
    OpenParen,
    CloseParen,
    EquivalenceOp,
}

/// Binary connectives, applied strictly in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Conditional,
    Biconditional,
}

impl BinOp {
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left & right,
            Self::Or => left | right,
            Self::Xor => left ^ right,
            Self::Conditional => !left | right,
            Self::Biconditional => !(left ^ right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// Cursor over the expression text.
///
/// The cursor only moves forward during a pass; [`rewind`] resets it to the
/// start so the same text can be re-lexed for the next truth-table row.
///
/// [`rewind`]: Lexer::rewind
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    cursor: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    /// Produces the next token, or `Ok(None)` at end of input.
    ///
    /// A variable seen for the first time is inserted into `symbols` with
    /// the default value `true`; later mentions resolve to the current
    /// entry.
    ///
    /// Known limitation inherited from the grammar: `v` is the OR operator,
    /// so a name starting with `v` does not lex as one variable (`va` is OR
    /// followed by the variable `a`). Single-letter names other than `v`
    /// are always safe.
    pub fn next_token(&mut self, symbols: &mut SymbolTable) -> Result<Option<Token>, Error> {
        while matches!(self.current(), Some(c) if c.is_whitespace()) {
            self.cursor += 1;
        }

        let Some(c) = self.current() else {
            return Ok(None);
        };
        let start = self.cursor;

        if c.is_alphabetic() && c != 'v' {
            let mut name = String::new();
            while let Some(c) = self.current() {
                if !c.is_alphabetic() {
                    break;
                }
                // length in encoded bytes, so multibyte letters cannot
                // step over the bound
                if name.len() + c.len_utf8() > MAX_TOKEN_LEN {
                    return Err(Error::TokenTooLong {
                        pos: start,
                        limit: MAX_TOKEN_LEN,
                    });
                }
                name.push(c);
                self.cursor += 1;
            }

            if symbols.get(&name).is_none() {
                symbols.insert(&name, true)?;
            }

            return Ok(Some(Token {
                text: name,
                kind: TokenKind::Variable,
            }));
        }

        if let Some(kind) = single_char_kind(c) {
            self.cursor += 1;
            return Ok(Some(Token {
                text: c.to_string(),
                kind,
            }));
        }

        if c == '<' {
            return self.lex_angle_operator(start);
        }

        if c == '-' {
            return self.lex_arrow_operator(start);
        }

        Err(Error::Lex { ch: c, pos: start })
    }

    /// Lexes `<=>` (equivalence check) or `<->` (biconditional).
    fn lex_angle_operator(&mut self, start: usize) -> Result<Option<Token>, Error> {
        self.cursor += 1;
        let middle = self.current();
        if matches!(middle, Some('=') | Some('-')) {
            self.cursor += 1;
            if self.current() == Some('>') {
                self.cursor += 1;
                let token = if middle == Some('=') {
                    Token {
                        text: "<=>".to_string(),
                        kind: TokenKind::EquivalenceOp,
                    }
                } else {
                    Token {
                        text: "<->".to_string(),
                        kind: TokenKind::BinaryOp(BinOp::Biconditional),
                    }
                };
                return Ok(Some(token));
            }
        }

        Err(Error::MalformedOperator {
            found: self.chars[start..self.cursor].iter().collect(),
            pos: start,
            expected: "'<=>' or '<->'",
        })
    }

    /// Lexes `->` (conditional).
    fn lex_arrow_operator(&mut self, start: usize) -> Result<Option<Token>, Error> {
        self.cursor += 1;
        if self.current() == Some('>') {
            self.cursor += 1;
            return Ok(Some(Token {
                text: "->".to_string(),
                kind: TokenKind::BinaryOp(BinOp::Conditional),
            }));
        }

        Err(Error::MalformedOperator {
            found: self.chars[start..self.cursor].iter().collect(),
            pos: start,
            expected: "'->'",
        })
    }
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    match c {
        '^' => Some(TokenKind::BinaryOp(BinOp::And)),
        'v' => Some(TokenKind::BinaryOp(BinOp::Or)),
        '+' => Some(TokenKind::BinaryOp(BinOp::Xor)),
        '~' => Some(TokenKind::UnaryOp),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        _ => None,
    }
}
