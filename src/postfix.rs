use crate::error::ConstructionError;
use crate::token::Token;

/// Shunting-yard translation of an infix token stream (with explicit
/// concatenation) into reverse polish order. All operators are left
/// associative.
pub fn to_postfix(infix: &[Token]) -> Result<Vec<Token>, ConstructionError> {
    let mut output = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in infix {
        match token {
            Token::Symbol(_) | Token::Epsilon => output.push(token),
            Token::Open => stack.push(token),
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(top) => output.push(top),
                    None => return Err(ConstructionError::UnmatchedParenthesis),
                }
            },
            Token::Op(op) => {
                while let Some(&Token::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Op(top));
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::Open {
            return Err(ConstructionError::UnmatchedParenthesis);
        }
        output.push(top);
    }
    Ok(output)
}

/// Reads a raw postfix string, e.g. one produced by an earlier translation.
pub fn parse(postfix: &str) -> Result<Vec<Token>, ConstructionError> {
    postfix
        .chars()
        .enumerate()
        .filter(|&(_, c)| !c.is_whitespace())
        .map(|(position, character)| {
            Token::from_char(character)
                .ok_or(ConstructionError::UnrecognizedToken { character, position })
        })
        .collect()
}

#[cfg(test)]
fn translate(regex: &str) -> String {
    use crate::normalize::insert_explicit_concatenation;
    use crate::token::{tokenize, tokens_to_string};
    let infix = insert_explicit_concatenation(&tokenize(regex).unwrap());
    tokens_to_string(&to_postfix(&infix).unwrap())
}

#[test]
fn postfix_single_operators() {
    assert_eq!(translate("a"), "a");
    assert_eq!(translate("a|b"), "ab|");
    assert_eq!(translate("ab"), "ab.");
    assert_eq!(translate("a*"), "a*");
    assert_eq!(translate("a+"), "a+");
    assert_eq!(translate("a?"), "a?");
}

#[test]
fn postfix_precedence() {
    assert_eq!(translate("a.b|c*"), "ab.c*|");
    assert_eq!(translate("a|bc"), "abc.|");
    assert_eq!(translate("ab*"), "ab*.");
}

#[test]
fn postfix_left_associative() {
    assert_eq!(translate("a|b|c"), "ab|c|");
    assert_eq!(translate("abc"), "ab.c.");
}

#[test]
fn postfix_parentheses() {
    assert_eq!(translate("(a|b)c"), "ab|c.");
    assert_eq!(translate("(a|b)*"), "ab|*");
    assert_eq!(translate("a(b|c)*d"), "abc|*.d.");
}

#[test]
fn postfix_empty_string_operator() {
    assert_eq!(translate("a|^"), "a^|");
    assert_eq!(translate("a^"), "a^.");
}

#[test]
fn postfix_unmatched_close() {
    use crate::token::tokenize;
    let infix = tokenize("a)").unwrap();
    assert_eq!(to_postfix(&infix), Err(ConstructionError::UnmatchedParenthesis));
}

#[test]
fn parse_raw_postfix() {
    use crate::token::Operator;
    assert_eq!(
        parse("ab|").unwrap(),
        vec![
            Token::Symbol('a'),
            Token::Symbol('b'),
            Token::Op(Operator::Alternation),
        ]
    );
    assert_eq!(
        parse("a#"),
        Err(ConstructionError::UnrecognizedToken {
            character: '#',
            position: 1,
        })
    );
}
