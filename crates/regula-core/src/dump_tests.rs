use indoc::indoc;

use crate::{Colors, Nfa, NfaPrinter, State};

fn alt_ab() -> Nfa {
    Nfa::from_parts(
        vec![
            State::Char {
                symbol: 'a',
                next: 1,
            },
            State::Epsilon { next: 5 },
            State::Char {
                symbol: 'b',
                next: 3,
            },
            State::Epsilon { next: 5 },
            State::Split {
                first: 0,
                second: 2,
            },
            State::Halt,
        ],
        4,
        5,
    )
    .unwrap()
}

#[test]
fn dump_text() {
    insta::assert_snapshot!(alt_ab().dump(), @r"
    start = S4
    accept = S5

    S0: 'a' → S1
    S1: ε → S5
    S2: 'b' → S3
    S3: ε → S5
    S4: ε → S0, S2
    S5: accept
    ");
}

#[test]
fn dump_escapes_symbols() {
    let nfa = Nfa::from_parts(
        vec![
            State::Char {
                symbol: '\n',
                next: 1,
            },
            State::Halt,
        ],
        0,
        1,
    )
    .unwrap();

    assert!(nfa.dump().contains(r"S0: '\n' → S1"));
}

#[test]
fn dump_colored_wraps_ids() {
    let nfa = alt_ab();
    let out = NfaPrinter::new(&nfa).colors(Colors::new(true)).dump();

    assert!(out.contains("\x1b[34mS4\x1b[0m"));
    assert!(out.contains("\x1b[2mε\x1b[0m"));
}

#[test]
fn dump_dot() {
    let nfa = alt_ab();

    assert_eq!(
        NfaPrinter::new(&nfa).dot(),
        indoc! {r#"
            digraph nfa {
            	rankdir=LR;
            	S4 [shape=box];
            	S5 [peripheries=2];
            	S0 -> S1 [label="a"];
            	S1 -> S5 [label="ε"];
            	S2 -> S3 [label="b"];
            	S3 -> S5 [label="ε"];
            	S4 -> S0 [label="ε"];
            	S4 -> S2 [label="ε"];
            }
        "#}
    );
}
