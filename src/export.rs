use std::collections::BTreeSet;
use std::fmt;

use crate::nfa::{Nfa, StateId, StateSet, Transition};

/// The formal (Q, Σ, q0, F, δ) view of a finished automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveTuple {
    pub states: StateSet,
    pub alphabet: BTreeSet<char>,
    pub start: StateId,
    pub accepting: StateSet,
    pub transitions: Vec<Transition>,
}

impl<'a> From<&'a Nfa> for FiveTuple {
    fn from(nfa: &'a Nfa) -> FiveTuple {
        FiveTuple {
            states: nfa.reachable_states(),
            alphabet: nfa.alphabet(),
            start: nfa.start(),
            accepting: nfa.accepting(),
            transitions: nfa.transitions().to_vec(),
        }
    }
}

impl fmt::Display for FiveTuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Q (states): {}", self.states)?;
        write!(f, "Σ (alphabet): {{")?;
        for (i, c) in self.alphabet.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "q0 (start): {}", self.start)?;
        writeln!(f, "F (accepting): {}", self.accepting)?;
        writeln!(f, "δ (transitions):")?;
        for t in &self.transitions {
            writeln!(f, "  {}", t)?;
        }
        Ok(())
    }
}

#[test]
fn five_tuple_of_symbol() {
    let nfa = Nfa::re2nfa("a").unwrap();
    let tuple = FiveTuple::from(&nfa);
    assert_eq!(
        tuple.to_string(),
        "Q (states): {s0, s1}\n\
         Σ (alphabet): {a}\n\
         q0 (start): s0\n\
         F (accepting): {s1}\n\
         δ (transitions):\n  \
         δ(s0, 'a') -> s1\n"
    );
}

#[test]
fn five_tuple_excludes_epsilon_from_alphabet() {
    let nfa = Nfa::re2nfa("(a|ε)*b").unwrap();
    let tuple = FiveTuple::from(&nfa);
    let alphabet: Vec<char> = tuple.alphabet.iter().cloned().collect();
    assert_eq!(alphabet, vec!['a', 'b']);
    assert_eq!(tuple.accepting.len(), 1);
    assert!(tuple.accepting.contains(&nfa.accept()));
    assert_eq!(tuple.states.len(), nfa.states().len());
}
