use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

use crate::dot;
use crate::error::{ConstructionError, Result};
use crate::snapshot::{Recorder, Step};
use crate::token::{Token, EPSILON};

type BuildResult<T> = ::std::result::Result<T, ConstructionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Epsilon,
    Input(char),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Label::Epsilon => write!(f, "{}", EPSILON),
            Label::Input(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub label: Label,
    pub to: StateId,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "δ({}, '{}') -> {}", self.from, self.label, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: StateId,
    pub transitions: BTreeMap<Label, Vec<StateId>>,
}

impl State {
    fn new(id: StateId) -> State {
        State {
            id,
            transitions: BTreeMap::new(),
        }
    }

    pub fn targets(&self, label: Label) -> &[StateId] {
        self.transitions
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A partially built sub-automaton. Only refers to states already in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.accept)
    }
}

/// A finished automaton. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    transitions: Vec<Transition>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// Compiles an infix expression. See `crate::compile` for the
    /// intermediate results.
    pub fn re2nfa(regex: &str) -> Result<Nfa> {
        crate::compile(regex).map(|compiled| compiled.nfa)
    }

    pub fn from_postfix(postfix: &[Token]) -> BuildResult<Nfa> {
        Nfa::from_postfix_recorded(postfix, &mut ())
    }

    /// Runs Thompson's construction over `postfix`, handing `recorder` a view
    /// of the automaton after every token.
    pub fn from_postfix_recorded<R: Recorder>(
        postfix: &[Token],
        recorder: &mut R,
    ) -> BuildResult<Nfa> {
        let mut builder = Builder::new();
        for (i, &token) in postfix.iter().enumerate() {
            let step = i + 1;
            let fragment = builder.construct(token, step)?;
            trace!(
                "step {}: '{}' -> {}, {} transitions",
                step,
                token,
                fragment,
                builder.transitions.len()
            );
            recorder.record(&Step {
                step,
                token,
                transitions: &builder.transitions,
                fragment,
            });
        }
        builder.finish()
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Thompson's construction has a single accept state; it is exposed as a
    /// set for callers that treat automata generally.
    pub fn accepting(&self) -> StateSet {
        let mut set = StateSet::new();
        set.insert(self.accept);
        set
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// Every transition in the order it was created.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn reachable_states(&self) -> StateSet {
        let mut done = StateSet::new();
        let mut queue = vec![self.start];
        while let Some(id) = queue.pop() {
            if !done.insert(id) {
                continue;
            }
            if let Some(state) = self.state(id) {
                for targets in state.transitions.values() {
                    queue.extend(targets.iter().filter(|&&t| !done.contains(&t)));
                }
            }
        }
        done
    }

    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .iter()
            .filter_map(|t| match t.label {
                Label::Input(c) => Some(c),
                Label::Epsilon => None,
            })
            .collect()
    }

    pub fn dot(&self) -> String {
        dot::render(&self.transitions, self.start, self.accept)
    }
}

struct Builder {
    states: Vec<State>,
    transitions: Vec<Transition>,
    stack: Vec<Fragment>,
}

impl Builder {
    fn new() -> Builder {
        Builder {
            states: Vec::new(),
            transitions: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State::new(id));
        id
    }

    fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        self.states[from.0]
            .transitions
            .entry(label)
            .or_insert_with(Vec::new)
            .push(to);
        self.transitions.push(Transition { from, label, to });
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.add_transition(from, Label::Epsilon, to);
    }

    fn pop(&mut self, token: Token, step: usize) -> BuildResult<Fragment> {
        self.stack
            .pop()
            .ok_or(ConstructionError::StackUnderflow { token, step })
    }

    fn leaf(&mut self, label: Label) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.add_transition(start, label, accept);
        Fragment { start, accept }
    }

    fn construct(&mut self, token: Token, step: usize) -> BuildResult<Fragment> {
        use crate::token::Operator::*;
        let fragment = match token {
            Token::Symbol(c) => self.leaf(Label::Input(c)),
            Token::Epsilon => self.leaf(Label::Epsilon),
            Token::Op(Concatenation) => {
                // second operand sits on top
                let b = self.pop(token, step)?;
                let a = self.pop(token, step)?;
                self.epsilon(a.accept, b.start);
                Fragment {
                    start: a.start,
                    accept: b.accept,
                }
            }
            Token::Op(Alternation) => {
                let b = self.pop(token, step)?;
                let a = self.pop(token, step)?;
                let start = self.add_state();
                let accept = self.add_state();
                self.epsilon(start, a.start);
                self.epsilon(start, b.start);
                self.epsilon(a.accept, accept);
                self.epsilon(b.accept, accept);
                Fragment { start, accept }
            }
            Token::Op(Star) => {
                let a = self.pop(token, step)?;
                let start = self.add_state();
                let accept = self.add_state();
                self.epsilon(start, a.start);
                self.epsilon(start, accept);
                self.epsilon(a.accept, a.start);
                self.epsilon(a.accept, accept);
                Fragment { start, accept }
            }
            Token::Op(Plus) => {
                let a = self.pop(token, step)?;
                let accept = self.add_state();
                self.epsilon(a.accept, a.start);
                self.epsilon(a.accept, accept);
                Fragment {
                    start: a.start,
                    accept,
                }
            }
            Token::Op(Optional) => {
                let a = self.pop(token, step)?;
                let start = self.add_state();
                let accept = self.add_state();
                self.epsilon(start, a.start);
                self.epsilon(start, accept);
                self.epsilon(a.accept, accept);
                Fragment { start, accept }
            }
            Token::Op(Empty) => {
                let start = self.add_state();
                let accept = self.add_state();
                self.epsilon(start, accept);
                Fragment { start, accept }
            }
            Token::Open | Token::Close => {
                return Err(ConstructionError::UnexpectedToken { token, step });
            }
        };
        self.stack.push(fragment);
        Ok(fragment)
    }

    fn finish(mut self) -> BuildResult<Nfa> {
        let fragment = match self.stack.len() {
            0 => return Err(ConstructionError::Empty),
            1 => self.stack.pop().ok_or(ConstructionError::Empty)?,
            remaining => return Err(ConstructionError::Unfinished { remaining }),
        };
        Ok(Nfa {
            states: self.states,
            transitions: self.transitions,
            start: fragment.start,
            accept: fragment.accept,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StateSet(pub BTreeSet<StateId>);

impl StateSet {
    pub fn new() -> StateSet {
        StateSet(BTreeSet::new())
    }
}

impl Deref for StateSet {
    type Target = BTreeSet<StateId>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StateSet {
    fn deref_mut(&mut self) -> &mut BTreeSet<StateId> {
        &mut self.0
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        StateSet(iter.into_iter().collect())
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
fn build(postfix: &str) -> Nfa {
    Nfa::from_postfix(&crate::postfix::parse(postfix).unwrap()).unwrap()
}

#[cfg(test)]
fn count_label(nfa: &Nfa, label: Label) -> usize {
    nfa.transitions().iter().filter(|t| t.label == label).count()
}

#[test]
fn symbol() {
    let nfa = build("a");
    assert_eq!(nfa.states().len(), 2);
    assert_eq!(nfa.transitions().len(), 1);
    assert_eq!(nfa.transitions()[0].label, Label::Input('a'));
    assert_ne!(nfa.start(), nfa.accept());
}

#[test]
fn epsilon_operand() {
    let nfa = build("ε");
    assert_eq!(nfa.states().len(), 2);
    assert_eq!(count_label(&nfa, Label::Epsilon), 1);
    assert!(nfa.alphabet().is_empty());
}

#[test]
fn alternation() {
    let nfa = build("ab|");
    assert_eq!(nfa.states().len(), 6);
    assert_eq!(nfa.transitions().len(), 6);
    assert_eq!(count_label(&nfa, Label::Epsilon), 4);
    let start = nfa.state(nfa.start()).unwrap();
    assert_eq!(start.targets(Label::Epsilon).len(), 2);
    assert_eq!(start.transitions.len(), 1);
}

#[test]
fn alternation_operand_order() {
    let nfa = build("ab|");
    let start = nfa.state(nfa.start()).unwrap();
    // first branch is the first operand
    let first = start.targets(Label::Epsilon)[0];
    assert_eq!(nfa.state(first).unwrap().targets(Label::Input('a')).len(), 1);
}

#[test]
fn concatenation() {
    let nfa = build("ab.");
    assert_eq!(nfa.states().len(), 4);
    assert_eq!(nfa.start(), StateId(0));
    assert_eq!(nfa.accept(), StateId(3));
    assert!(nfa.transitions().contains(&Transition {
        from: StateId(1),
        label: Label::Epsilon,
        to: StateId(2),
    }));
}

#[test]
fn star() {
    let nfa = build("a*");
    assert_eq!(nfa.states().len(), 4);
    let inner = Fragment {
        start: StateId(0),
        accept: StateId(1),
    };
    let looped = nfa.state(inner.accept).unwrap().targets(Label::Epsilon);
    assert_eq!(looped, &[inner.start, nfa.accept()][..]);
    let start = nfa.state(nfa.start()).unwrap();
    assert!(start.targets(Label::Epsilon).contains(&nfa.accept()));
}

#[test]
fn plus_reuses_start() {
    let nfa = build("a+");
    assert_eq!(nfa.states().len(), 3);
    assert_eq!(nfa.start(), StateId(0));
    let start = nfa.state(nfa.start()).unwrap();
    assert!(!start.targets(Label::Epsilon).contains(&nfa.accept()));
}

#[test]
fn optional() {
    let nfa = build("a?");
    assert_eq!(nfa.states().len(), 4);
    assert_eq!(nfa.transitions().len(), 4);
    let start = nfa.state(nfa.start()).unwrap();
    assert!(start.targets(Label::Epsilon).contains(&nfa.accept()));
    let inner_accept = nfa.state(StateId(1)).unwrap();
    assert_eq!(inner_accept.targets(Label::Epsilon), &[nfa.accept()][..]);
}

#[test]
fn empty_string() {
    let nfa = build("^");
    assert_eq!(nfa.states().len(), 2);
    assert_eq!(nfa.transitions().len(), 1);
    assert_eq!(nfa.transitions()[0].label, Label::Epsilon);
}

#[test]
fn stack_underflow() {
    use crate::token::Operator;
    let postfix = crate::postfix::parse("a|").unwrap();
    assert_eq!(
        Nfa::from_postfix(&postfix),
        Err(ConstructionError::StackUnderflow {
            token: Token::Op(Operator::Alternation),
            step: 2,
        })
    );
    let postfix = crate::postfix::parse("*").unwrap();
    assert!(Nfa::from_postfix(&postfix).is_err());
}

#[test]
fn parenthesis_in_postfix() {
    let postfix = crate::postfix::parse("a(").unwrap();
    assert_eq!(
        Nfa::from_postfix(&postfix),
        Err(ConstructionError::UnexpectedToken {
            token: Token::Open,
            step: 2,
        })
    );
}

#[test]
fn empty_and_unfinished() {
    assert_eq!(Nfa::from_postfix(&[]), Err(ConstructionError::Empty));
    let postfix = crate::postfix::parse("ab").unwrap();
    assert_eq!(
        Nfa::from_postfix(&postfix),
        Err(ConstructionError::Unfinished { remaining: 2 })
    );
}

#[test]
fn reachable_and_alphabet() {
    let nfa = build("ab|c*.");
    assert_eq!(nfa.reachable_states().len(), nfa.states().len());
    let alphabet: Vec<char> = nfa.alphabet().into_iter().collect();
    assert_eq!(alphabet, vec!['a', 'b', 'c']);
    for t in nfa.transitions() {
        assert!(nfa.reachable_states().contains(&t.from));
        assert!(nfa.reachable_states().contains(&t.to));
    }
}

#[test]
fn ids_restart_per_run() {
    let first = build("ab.");
    let second = build("ab.");
    assert_eq!(first.start(), second.start());
    assert_eq!(first, second);
}

#[test]
fn state_set_display() {
    let set: StateSet = vec![StateId(2), StateId(0)].into_iter().collect();
    assert_eq!(set.to_string(), "{s0, s2}");
}
