use crate::error::SyntaxError;

/// Checks that parentheses in `regex` are balanced. Nothing else is looked at.
pub fn check_balance(regex: &str) -> Result<(), SyntaxError> {
    let mut stack = Vec::new();
    for (position, c) in regex.chars().enumerate() {
        match c {
            '(' => stack.push((c, position)),
            ')' => match stack.pop() {
                Some(('(', _)) => {}
                _ => return Err(SyntaxError::UnexpectedClose { position }),
            },
            _ => {}
        }
    }
    match stack.first() {
        Some(&(_, position)) => Err(SyntaxError::Unclosed { position }),
        None => Ok(()),
    }
}

pub fn is_balanced(regex: &str) -> bool {
    check_balance(regex).is_ok()
}

#[test]
fn balanced() {
    assert!(is_balanced("(a)"));
    assert!(is_balanced("a"));
    assert!(is_balanced(""));
    assert!(is_balanced("((a|b)*c)(d)"));
}

#[test]
fn unbalanced() {
    assert!(!is_balanced("(a"));
    assert!(!is_balanced("a)"));
    assert!(!is_balanced("(a(b)"));
    assert!(!is_balanced(")("));
}

#[test]
fn unbalanced_positions() {
    assert_eq!(
        check_balance("a)"),
        Err(SyntaxError::UnexpectedClose { position: 1 })
    );
    assert_eq!(
        check_balance("(a(b)"),
        Err(SyntaxError::Unclosed { position: 0 })
    );
}
