use std::collections::HashMap;
use std::fmt;

use crate::error::SyntaxError;

pub const EPSILON: char = 'ε';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Alternation,
    Concatenation,
    Star,
    Plus,
    Optional,
    Empty,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        use self::Operator::*;
        match self {
            Star | Plus | Optional | Empty => 3,
            Concatenation => 2,
            Alternation => 1,
        }
    }

    pub fn is_binary(self) -> bool {
        self == Operator::Alternation || self == Operator::Concatenation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Symbol(char),
    Epsilon,
    Op(Operator),
    Open,
    Close,
}

lazy_static! {
    static ref OPERATORS: HashMap<char, Token> = {
        let mut m = HashMap::new();
        m.insert('|', Token::Op(Operator::Alternation));
        m.insert(',', Token::Op(Operator::Alternation));
        m.insert('.', Token::Op(Operator::Concatenation));
        m.insert('*', Token::Op(Operator::Star));
        m.insert('+', Token::Op(Operator::Plus));
        m.insert('?', Token::Op(Operator::Optional));
        m.insert('^', Token::Op(Operator::Empty));
        m.insert('(', Token::Open);
        m.insert(')', Token::Close);
        m
    };
}

impl Token {
    pub fn from_char(c: char) -> Option<Token> {
        if c == EPSILON {
            Some(Token::Epsilon)
        } else if c.is_alphanumeric() {
            Some(Token::Symbol(c))
        } else {
            OPERATORS.get(&c).cloned()
        }
    }

    pub fn is_operand(&self) -> bool {
        match *self {
            Token::Symbol(_) | Token::Epsilon => true,
            _ => false,
        }
    }

    /// Operators after which an operand may directly follow.
    pub fn closes(&self) -> bool {
        match *self {
            Token::Close
            | Token::Op(Operator::Star)
            | Token::Op(Operator::Plus)
            | Token::Op(Operator::Optional) => true,
            _ => false,
        }
    }

    /// Operators which may directly follow an operand.
    pub fn opens(&self) -> bool {
        match *self {
            Token::Open | Token::Op(Operator::Empty) => true,
            _ => false,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Token::Symbol(c) => c,
            Token::Epsilon => EPSILON,
            Token::Open => '(',
            Token::Close => ')',
            Token::Op(op) => match op {
                Operator::Alternation => '|',
                Operator::Concatenation => '.',
                Operator::Star => '*',
                Operator::Plus => '+',
                Operator::Optional => '?',
                Operator::Empty => '^',
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Splits an infix expression into tokens. Whitespace is skipped and
/// positions are char indices into `regex`.
pub fn tokenize(regex: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    for (position, c) in regex.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        match Token::from_char(c) {
            Some(token) => tokens.push(token),
            None => {
                return Err(SyntaxError::UnexpectedCharacter {
                    character: c,
                    position,
                })
            }
        }
    }
    Ok(tokens)
}

pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_char).collect()
}

#[test]
fn tokenize_operands_and_operators() {
    let tokens = tokenize("a1|(bε)*").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Symbol('a'),
            Token::Symbol('1'),
            Token::Op(Operator::Alternation),
            Token::Open,
            Token::Symbol('b'),
            Token::Epsilon,
            Token::Close,
            Token::Op(Operator::Star),
        ]
    );
}

#[test]
fn tokenize_comma_is_alternation() {
    let tokens = tokenize("a,b").unwrap();
    assert_eq!(tokens[1], Token::Op(Operator::Alternation));
    assert_eq!(tokens_to_string(&tokens), "a|b");
}

#[test]
fn tokenize_skips_whitespace() {
    assert_eq!(tokens_to_string(&tokenize(" a | b ").unwrap()), "a|b");
}

#[test]
fn tokenize_rejects_unknown_characters() {
    assert_eq!(
        tokenize("a-b"),
        Err(SyntaxError::UnexpectedCharacter {
            character: '-',
            position: 1,
        })
    );
}

#[test]
fn precedence_order() {
    assert!(Operator::Star.precedence() > Operator::Concatenation.precedence());
    assert!(Operator::Concatenation.precedence() > Operator::Alternation.precedence());
    assert_eq!(Operator::Empty.precedence(), Operator::Plus.precedence());
}
