//! Type signatures written as text.
//!
//! Builtin environments are configured with signatures such as
//! `forall a b. (a -> b) -> a -> b`. This module turns one signature into a
//! [`Scheme`].
//!
//! ```text
//! scheme := ("forall" | "∀") var+ "." type
//!         | type
//! type   := app ("->" type)?
//! app    := atom atom*
//! atom   := Name | var | "()" | "(->)" | "(" type ")"
//! ```
//!
//! Capitalized names are constructors; lowercase names (optionally written
//! with a leading `'`) are variables. Without a `forall`, every variable is
//! quantified.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::subst::Types;
use crate::ty::{Scheme, Ty, TyVar};

/// A malformed signature.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("expected {expected} at offset {offset}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
        offset: usize,
    },
    #[error("unexpected end of signature, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("type variable `'{name}` is not bound by the `forall`")]
    UnboundTypeVariable { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Forall,
    Name(String),
    Var(String),
    Arrow,
    LParen,
    RParen,
    Dot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Forall => f.write_str("`forall`"),
            Token::Name(name) => write!(f, "`{name}`"),
            Token::Var(name) => write!(f, "`'{name}`"),
            Token::Arrow => f.write_str("`->`"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
            Token::Dot => f.write_str("`.`"),
        }
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\''
}

fn tokenize(src: &str) -> Result<Vec<(Token, usize)>, SignatureError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '.' => Token::Dot,
            '∀' => Token::Forall,
            '-' if matches!(chars.peek(), Some((_, '>'))) => {
                chars.next();
                Token::Arrow
            }
            c if is_ident_char(c) => {
                let mut end = offset + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !is_ident_char(next) {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                let word = &src[offset..end];
                if word == "forall" {
                    Token::Forall
                } else if word.starts_with(|c: char| c.is_uppercase()) {
                    Token::Name(word.to_string())
                } else {
                    let (var, start) = match word.strip_prefix('\'') {
                        Some(rest) => (rest, offset + 1),
                        None => (word, offset),
                    };
                    match var.chars().next() {
                        Some(first) if first.is_alphabetic() => Token::Var(var.to_string()),
                        Some(first) => {
                            return Err(SignatureError::UnexpectedChar {
                                ch: first,
                                offset: start,
                            })
                        }
                        None => return Err(SignatureError::UnexpectedChar { ch: '\'', offset }),
                    }
                }
            }
            other => return Err(SignatureError::UnexpectedChar { ch: other, offset }),
        };
        tokens.push((token, offset));
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), SignatureError> {
        match self.next() {
            Some((found, _)) if found == token => Ok(()),
            Some((found, offset)) => Err(SignatureError::Expected {
                expected,
                found: found.to_string(),
                offset,
            }),
            None => Err(SignatureError::UnexpectedEnd { expected }),
        }
    }

    fn quantifier(&mut self) -> Result<BTreeSet<TyVar>, SignatureError> {
        let mut vars = BTreeSet::new();
        loop {
            match self.next() {
                Some((Token::Var(name), _)) => {
                    vars.insert(TyVar::new(name));
                }
                Some((Token::Dot, offset)) if vars.is_empty() => {
                    return Err(SignatureError::Expected {
                        expected: "a type variable",
                        found: Token::Dot.to_string(),
                        offset,
                    });
                }
                Some((Token::Dot, _)) => return Ok(vars),
                Some((found, offset)) => {
                    return Err(SignatureError::Expected {
                        expected: "a type variable or `.`",
                        found: found.to_string(),
                        offset,
                    });
                }
                None => {
                    return Err(SignatureError::UnexpectedEnd {
                        expected: "a type variable or `.`",
                    });
                }
            }
        }
    }

    fn ty(&mut self) -> Result<Ty, SignatureError> {
        let param = self.app()?;
        if self.eat(&Token::Arrow) {
            Ok(Ty::fun(param, self.ty()?))
        } else {
            Ok(param)
        }
    }

    fn app(&mut self) -> Result<Ty, SignatureError> {
        let mut ty = self.atom()?;
        while matches!(
            self.peek(),
            Some(Token::Name(_) | Token::Var(_) | Token::LParen)
        ) {
            ty = Ty::app(ty, self.atom()?);
        }
        Ok(ty)
    }

    fn atom(&mut self) -> Result<Ty, SignatureError> {
        const EXPECTED: &str = "a type";
        match self.next() {
            Some((Token::Name(name), _)) => Ok(Ty::con(name)),
            Some((Token::Var(name), _)) => Ok(Ty::var(name)),
            Some((Token::LParen, _)) => {
                if self.eat(&Token::RParen) {
                    return Ok(Ty::unit());
                }
                if self.peek() == Some(&Token::Arrow)
                    && self.tokens.get(self.pos + 1).map(|(t, _)| t) == Some(&Token::RParen)
                {
                    self.pos += 2;
                    return Ok(Ty::arrow());
                }
                let inner = self.ty()?;
                self.expect(Token::RParen, "`)`")?;
                Ok(inner)
            }
            Some((found, offset)) => Err(SignatureError::Expected {
                expected: EXPECTED,
                found: found.to_string(),
                offset,
            }),
            None => Err(SignatureError::UnexpectedEnd { expected: EXPECTED }),
        }
    }
}

/// Parse a signature into a type scheme.
pub fn parse_scheme(src: &str) -> Result<Scheme, SignatureError> {
    let mut parser = Parser {
        tokens: tokenize(src)?,
        pos: 0,
    };
    let quantified = if parser.eat(&Token::Forall) {
        Some(parser.quantifier()?)
    } else {
        None
    };
    let ty = parser.ty()?;
    if let Some((found, offset)) = parser.next() {
        return Err(SignatureError::Expected {
            expected: "end of signature",
            found: found.to_string(),
            offset,
        });
    }
    match quantified {
        None => Ok(Scheme::closed(ty)),
        Some(vars) => {
            if let Some(free) = ty.free_vars().into_iter().find(|v| !vars.contains(v)) {
                return Err(SignatureError::UnboundTypeVariable { name: free.0 });
            }
            Ok(Scheme { vars, ty })
        }
    }
}

/// Parse a signature that must not quantify anything.
pub fn parse_type(src: &str) -> Result<Ty, SignatureError> {
    let scheme = parse_scheme(src)?;
    match scheme.vars.into_iter().next() {
        Some(var) => Err(SignatureError::UnboundTypeVariable { name: var.0 }),
        None => Ok(scheme.ty),
    }
}
