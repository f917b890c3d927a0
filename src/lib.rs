//! Regular expressions to NFAs by Thompson's construction.
//!
//! The pipeline is: parenthesis balance check, tokenization, explicit
//! concatenation, shunting-yard translation to postfix, then construction.
//! Every construction step can be observed through a [`Recorder`].

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod dot;
pub mod error;
pub mod export;
pub mod nfa;
pub mod normalize;
pub mod postfix;
pub mod snapshot;
pub mod token;
pub mod validate;

pub use crate::error::{ConstructionError, Error, Result, SyntaxError};
pub use crate::export::FiveTuple;
pub use crate::nfa::{Fragment, Label, Nfa, State, StateId, StateSet, Transition};
pub use crate::snapshot::{Recorder, Snapshot, Snapshots, Step};
pub use crate::token::{Operator, Token, EPSILON};

/// Output of a complete run.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// Input tokens with concatenation made explicit.
    pub normalized: Vec<Token>,
    pub postfix: Vec<Token>,
    pub nfa: Nfa,
    pub snapshots: Snapshots,
}

fn translate(regex: &str) -> Result<(Vec<Token>, Vec<Token>)> {
    validate::check_balance(regex)?;
    let tokens = token::tokenize(regex)?;
    let normalized = normalize::insert_explicit_concatenation(&tokens);
    debug!("normalized: {}", token::tokens_to_string(&normalized));
    let postfix = postfix::to_postfix(&normalized)?;
    debug!("postfix: {}", token::tokens_to_string(&postfix));
    Ok((normalized, postfix))
}

pub fn compile(regex: &str) -> Result<Compiled> {
    let (normalized, postfix) = translate(regex)?;
    let mut snapshots = Snapshots::new();
    let nfa = Nfa::from_postfix_recorded(&postfix, &mut snapshots)?;
    debug!(
        "built {} states and {} transitions in {} steps",
        nfa.states().len(),
        nfa.transitions().len(),
        snapshots.len()
    );
    Ok(Compiled {
        normalized,
        postfix,
        nfa,
        snapshots,
    })
}

pub fn to_postfix_string(regex: &str) -> Result<String> {
    let (_, postfix) = translate(regex)?;
    Ok(token::tokens_to_string(&postfix))
}
