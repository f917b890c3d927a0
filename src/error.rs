use thiserror::Error;
use crate::token::Token;

/// Rejections of the input expression itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected ')' at position {position}")]
    UnexpectedClose { position: usize },
    #[error("'(' at position {position} is never closed")]
    Unclosed { position: usize },
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Broken invariants between the translator and the builder. None of these
/// can be produced from an expression that went through `compile`, except
/// for token sequences the concatenation rules leave unjoined (e.g. `^a`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("step {step}: '{token}' needs more fragments than the stack holds")]
    StackUnderflow { token: Token, step: usize },
    #[error("step {step}: '{token}' cannot appear in a postfix stream")]
    UnexpectedToken { token: Token, step: usize },
    #[error("unrecognized postfix token {character:?} at position {position}")]
    UnrecognizedToken { character: char, position: usize },
    #[error("unmatched ')' while translating to postfix")]
    UnmatchedParenthesis,
    #[error("empty expression")]
    Empty,
    #[error("{remaining} fragments left on the stack, expected exactly one")]
    Unfinished { remaining: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),
}

pub type Result<T> = ::std::result::Result<T, Error>;
