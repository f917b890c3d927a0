use std::cmp;
use std::ops::Deref;

use crate::dot;
use crate::nfa::{Fragment, Nfa, Transition};
use crate::token::Token;

/// What the builder exposes after consuming one postfix token.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// 1-based index of the token in the postfix stream.
    pub step: usize,
    pub token: Token,
    /// The whole transition relation so far.
    pub transitions: &'a [Transition],
    /// Fragment produced by `token`, now on top of the stack.
    pub fragment: Fragment,
}

pub trait Recorder {
    fn record(&mut self, step: &Step);
}

impl Recorder for () {
    fn record(&mut self, _step: &Step) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub step: usize,
    pub token: Token,
    pub fragment: Fragment,
    pub transition_count: usize,
}

impl Snapshot {
    /// Transitions are never reordered, so the relation at this step is a
    /// prefix of the finished one.
    pub fn transitions<'a>(&self, nfa: &'a Nfa) -> &'a [Transition] {
        let all = nfa.transitions();
        &all[..cmp::min(self.transition_count, all.len())]
    }

    pub fn dot(&self, nfa: &Nfa) -> String {
        dot::render(
            self.transitions(nfa),
            self.fragment.start,
            self.fragment.accept,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshots(Vec<Snapshot>);

impl Snapshots {
    pub fn new() -> Snapshots {
        Snapshots(Vec::new())
    }
}

impl Deref for Snapshots {
    type Target = [Snapshot];
    fn deref(&self) -> &[Snapshot] {
        &self.0
    }
}

impl Recorder for Snapshots {
    fn record(&mut self, step: &Step) {
        self.0.push(Snapshot {
            step: step.step,
            token: step.token,
            fragment: step.fragment,
            transition_count: step.transitions.len(),
        });
    }
}

#[cfg(test)]
fn record(postfix: &str) -> (Nfa, Snapshots) {
    let mut snapshots = Snapshots::new();
    let postfix = crate::postfix::parse(postfix).unwrap();
    let nfa = Nfa::from_postfix_recorded(&postfix, &mut snapshots).unwrap();
    (nfa, snapshots)
}

#[test]
fn one_snapshot_per_token() {
    let (_, snapshots) = record("ab|c*.");
    assert_eq!(snapshots.len(), 6);
    let steps: Vec<usize> = snapshots.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(snapshots[2].token.to_string(), "|");
}

#[test]
fn transition_growth_is_monotonic() {
    let (nfa, snapshots) = record("ab|c*.");
    let counts: Vec<usize> = snapshots.iter().map(|s| s.transition_count).collect();
    assert_eq!(counts, vec![1, 2, 6, 7, 11, 12]);
    let last = snapshots.last().unwrap();
    assert_eq!(last.transitions(&nfa), nfa.transitions());
    assert_eq!(last.fragment.start, nfa.start());
    assert_eq!(last.fragment.accept, nfa.accept());
}

#[test]
fn snapshot_transitions_are_a_prefix() {
    let (nfa, snapshots) = record("ab.");
    let first = snapshots[0].transitions(&nfa);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0], nfa.transitions()[0]);
}

#[test]
fn stack_depth_tracks_operands_and_binary_operators() {
    struct Depth {
        operands: usize,
        binary: usize,
        depths: Vec<usize>,
    }
    impl Recorder for Depth {
        fn record(&mut self, step: &Step) {
            match step.token {
                Token::Op(op) if op.is_binary() => self.binary += 1,
                Token::Op(crate::token::Operator::Empty) => self.operands += 1,
                Token::Op(_) => {}
                _ => self.operands += 1,
            }
            self.depths.push(self.operands - self.binary);
        }
    }
    let mut depth = Depth {
        operands: 0,
        binary: 0,
        depths: Vec::new(),
    };
    let postfix = crate::postfix::parse("ab|c*.d+^|.").unwrap();
    Nfa::from_postfix_recorded(&postfix, &mut depth).unwrap();
    assert_eq!(depth.depths, vec![1, 2, 1, 2, 2, 1, 2, 2, 3, 2, 1]);
}
