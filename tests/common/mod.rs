#![allow(dead_code)]

use std::collections::BTreeSet;

use re2nfa::{Label, Nfa, StateId};

pub fn epsilon_expand(nfa: &Nfa, seed: Vec<StateId>) -> BTreeSet<StateId> {
    let mut queue = seed;
    let mut done = BTreeSet::new();
    while let Some(id) = queue.pop() {
        if !done.insert(id) {
            continue;
        }
        let state = nfa.state(id).expect("transition to unknown state");
        queue.extend(state.targets(Label::Epsilon).iter().cloned());
    }
    done
}

/// True if some start-to-accept path spells `input`.
pub fn accepts(nfa: &Nfa, input: &str) -> bool {
    let mut current = epsilon_expand(nfa, vec![nfa.start()]);
    for c in input.chars() {
        let next = current
            .iter()
            .flat_map(|&id| nfa.state(id).unwrap().targets(Label::Input(c)).to_vec())
            .collect();
        current = epsilon_expand(nfa, next);
    }
    current.contains(&nfa.accept())
}

/// All strings over `alphabet` of length at most `max_len`.
pub fn strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &last {
            for &c in alphabet {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        all.extend(next.iter().cloned());
        last = next;
    }
    all
}

/// The same expression in `regex` crate syntax, anchored.
pub fn oracle(expr: &str) -> regex::Regex {
    let mut pattern = String::from("^(?:");
    for c in expr.chars() {
        match c {
            '.' => {}
            ',' => pattern.push('|'),
            '^' | 'ε' => pattern.push_str("()"),
            _ => pattern.push(c),
        }
    }
    pattern.push_str(")$");
    regex::Regex::new(&pattern).unwrap()
}

pub fn assert_same_language(expr: &str, alphabet: &[char], max_len: usize) {
    let nfa = Nfa::re2nfa(expr).unwrap();
    let re = oracle(expr);
    for s in strings(alphabet, max_len) {
        assert_eq!(
            accepts(&nfa, &s),
            re.is_match(&s),
            "{:?} on input {:?}",
            expr,
            s
        );
    }
}
