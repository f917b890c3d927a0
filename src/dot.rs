use crate::nfa::{StateId, Transition};

/// Renders a transition relation as a left-to-right Graphviz digraph, with an
/// arrow into `start` and `accept` drawn as a double circle.
pub fn render(transitions: &[Transition], start: StateId, accept: StateId) -> String {
    let mut dot = r###"digraph G {
rankdir=LR;
empty [label = "" shape = plaintext];
"###
    .to_owned();

    dot.push_str(&format!("node [shape = doublecircle]; {};\n", accept));
    dot.push_str("node [shape = circle];\n");
    dot.push_str(&format!("empty -> {} [label = \"start\"];\n", start));

    for t in transitions {
        dot.push_str(&format!(
            "{} -> {} [label = \"{}\"];\n",
            t.from, t.to, t.label
        ));
    }
    dot.push_str("}\n");
    dot
}

#[test]
fn render_symbol() {
    use crate::nfa::Label;
    let transitions = [Transition {
        from: StateId(0),
        label: Label::Input('a'),
        to: StateId(1),
    }];
    let dot = render(&transitions, StateId(0), StateId(1));
    assert!(dot.starts_with("digraph G {\nrankdir=LR;\n"));
    assert!(dot.contains("node [shape = doublecircle]; s1;\n"));
    assert!(dot.contains("empty -> s0 [label = \"start\"];\n"));
    assert!(dot.contains("s0 -> s1 [label = \"a\"];\n"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn render_epsilon_label() {
    use crate::nfa::Label;
    let transitions = [Transition {
        from: StateId(2),
        label: Label::Epsilon,
        to: StateId(0),
    }];
    let dot = render(&transitions, StateId(2), StateId(1));
    assert!(dot.contains("s2 -> s0 [label = \"ε\"];\n"));
}
