mod common;

use common::{accepts, assert_same_language};
use re2nfa::{postfix, Nfa};

const ABC: &[char] = &['a', 'b', 'c'];

#[test]
fn language_single_operators() {
    for expr in &["a", "ab", "a|b", "a*", "a+", "a?", "a^", "a|^", "ε"] {
        assert_same_language(expr, ABC, 5);
    }
}

#[test]
fn language_precedence() {
    for expr in &["a.b|c*", "ab*", "a|bc", "ab|c", "a|b*c", "abc+", "a?b?c?"] {
        assert_same_language(expr, ABC, 5);
    }
}

#[test]
fn language_groups() {
    for expr in &[
        "(a|b)*",
        "(a|b)*abb",
        "(ab)+",
        "(a|b)c",
        "a(b|c)*a",
        "((a|b)c)?",
        "(a*b*)*",
        "(a+|b)*c",
        "(a,b)c*",
        "(ε|a)b",
    ] {
        assert_same_language(expr, ABC, 5);
    }
}

#[test]
fn language_nested_repetition() {
    for expr in &["(a*)*", "(a+)+", "(a?)*", "((a|b)+c?)*", "(a*|b+)?c"] {
        assert_same_language(expr, ABC, 5);
    }
}

#[test]
fn handmade_postfix_matches_translation() {
    let translated = Nfa::re2nfa("a.b|c*").unwrap();
    let handmade = Nfa::from_postfix(&postfix::parse("ab.c*|").unwrap()).unwrap();
    assert_eq!(translated, handmade);
    for s in &["ab", "", "c", "ccc", "abc", "a"] {
        assert_eq!(accepts(&translated, s), accepts(&handmade, s));
    }
}

#[test]
fn star_has_a_zero_repetition_path() {
    let nfa = Nfa::re2nfa("a*").unwrap();
    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "aaaa"));
    assert!(!accepts(&nfa, "b"));
}

#[test]
fn plus_needs_one_repetition() {
    let nfa = Nfa::re2nfa("a+").unwrap();
    assert!(!accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aaa"));
}
