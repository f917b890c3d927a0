use crate::token::{Operator, Token};

/// Makes concatenation explicit: a `.` goes between two adjacent tokens when
/// the left one ends an operand (operand, `)`, `*`, `+`, `?`) and the right one
/// starts one (operand, `(`, `^`).
pub fn insert_explicit_concatenation(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for (i, &c1) in tokens.iter().enumerate() {
        out.push(c1);
        if let Some(c2) = tokens.get(i + 1) {
            if (c1.is_operand() || c1.closes()) && (c2.is_operand() || c2.opens()) {
                out.push(Token::Op(Operator::Concatenation));
            }
        }
    }
    out
}

#[cfg(test)]
fn normalized(regex: &str) -> String {
    use crate::token::{tokenize, tokens_to_string};
    tokens_to_string(&insert_explicit_concatenation(&tokenize(regex).unwrap()))
}

#[test]
fn concat_between_operands() {
    assert_eq!(normalized("ab"), "a.b");
    assert_eq!(normalized("abc"), "a.b.c");
}

#[test]
fn concat_around_groups_and_postfix_operators() {
    assert_eq!(normalized("a(b)"), "a.(b)");
    assert_eq!(normalized("(a)(b)"), "(a).(b)");
    assert_eq!(normalized("a*b"), "a*.b");
    assert_eq!(normalized("a+(b)?c"), "a+.(b)?.c");
}

#[test]
fn concat_before_empty_string() {
    assert_eq!(normalized("a^"), "a.^");
    assert_eq!(normalized("^a"), "^a");
}

#[test]
fn no_concat_next_to_alternation() {
    assert_eq!(normalized("a|b"), "a|b");
    assert_eq!(normalized("(a|b)"), "(a|b)");
}

#[test]
fn explicit_concatenation_is_kept() {
    assert_eq!(normalized("a.b"), "a.b");
}
