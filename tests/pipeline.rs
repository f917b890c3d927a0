use re2nfa::{
    compile, to_postfix_string, ConstructionError, Error, FiveTuple, Nfa, Operator, StateId,
    SyntaxError, Token,
};

#[test]
fn postfix_strings() {
    assert_eq!(to_postfix_string("a.b|c*").unwrap(), "ab.c*|");
    assert_eq!(to_postfix_string("(a|b)*abb").unwrap(), "ab|*a.b.b.");
    assert_eq!(to_postfix_string("a,b").unwrap(), "ab|");
    assert_eq!(to_postfix_string(" a b ").unwrap(), "ab.");
}

#[test]
fn operands_precede_their_operators() {
    let postfix = compile("a(b|c)*d+|e?").unwrap().postfix;
    let mut depth = 0usize;
    for token in &postfix {
        match *token {
            Token::Op(op) if op.is_binary() => {
                assert!(depth >= 2, "{:?}", postfix);
                depth -= 1;
            }
            Token::Op(Operator::Empty) => depth += 1,
            Token::Op(_) => assert!(depth >= 1, "{:?}", postfix),
            _ => depth += 1,
        }
    }
    assert_eq!(depth, 1);
}

#[test]
fn unbalanced_input_is_rejected_before_construction() {
    assert_eq!(
        compile("(a").unwrap_err(),
        Error::Syntax(SyntaxError::Unclosed { position: 0 })
    );
    assert_eq!(
        compile("a)").unwrap_err(),
        Error::Syntax(SyntaxError::UnexpectedClose { position: 1 })
    );
    assert!(compile("(a(b)").is_err());
    assert!(to_postfix_string("a)(").is_err());
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(
        compile("a-b").unwrap_err(),
        Error::Syntax(SyntaxError::UnexpectedCharacter {
            character: '-',
            position: 1,
        })
    );
}

#[test]
fn construction_errors_are_surfaced() {
    assert_eq!(
        compile("").unwrap_err(),
        Error::Construction(ConstructionError::Empty)
    );
    assert_eq!(
        compile("()").unwrap_err(),
        Error::Construction(ConstructionError::Empty)
    );
    assert_eq!(
        compile("a||b").unwrap_err(),
        Error::Construction(ConstructionError::StackUnderflow {
            token: Token::Op(Operator::Alternation),
            step: 2,
        })
    );
    // nothing joins `^` to a following operand
    assert_eq!(
        compile("^a").unwrap_err(),
        Error::Construction(ConstructionError::Unfinished { remaining: 2 })
    );
}

#[test]
fn compile_reports_every_stage() {
    let compiled = compile("ab*").unwrap();
    assert_eq!(re2nfa::token::tokens_to_string(&compiled.normalized), "a.b*");
    assert_eq!(re2nfa::token::tokens_to_string(&compiled.postfix), "ab*.");
    assert_eq!(compiled.snapshots.len(), compiled.postfix.len());
    let last = compiled.snapshots.last().unwrap();
    assert_eq!(last.transition_count, compiled.nfa.transitions().len());
}

#[test]
fn successive_runs_do_not_share_ids() {
    let first = Nfa::re2nfa("a|b").unwrap();
    let second = Nfa::re2nfa("a|b").unwrap();
    assert_eq!(first.states()[0].id, StateId(0));
    assert_eq!(second.states()[0].id, StateId(0));
    assert_eq!(first, second);
}

#[test]
fn alternation_shape() {
    let nfa = Nfa::re2nfa("a|b").unwrap();
    let tuple = FiveTuple::from(&nfa);
    assert_eq!(tuple.states.len(), 6);
    assert_eq!(tuple.transitions.len(), 6);
    assert_eq!(tuple.start, StateId(4));
    assert!(tuple.accepting.contains(&StateId(5)));
}

#[test]
fn every_transition_is_reachable() {
    for expr in &["(a|b)*abb", "a+b?c*", "((a|b)c)?", "a^|ε"] {
        let nfa = Nfa::re2nfa(expr).unwrap();
        let reachable = nfa.reachable_states();
        for t in nfa.transitions() {
            assert!(reachable.contains(&t.from), "{}: {}", expr, t);
            assert!(reachable.contains(&t.to), "{}: {}", expr, t);
        }
    }
}

#[test]
fn snapshot_dot_marks_current_fragment() {
    let compiled = compile("ab").unwrap();
    let first = compiled.snapshots[0].dot(&compiled.nfa);
    assert!(first.contains("node [shape = doublecircle]; s1;"));
    assert!(first.contains("empty -> s0"));
    assert!(!first.contains("s2"));
    let final_dot = compiled.nfa.dot();
    assert!(final_dot.contains("s1 -> s2 [label = \"ε\"];"));
}
