use regula_core::{Nfa, State};

use super::{FuelLimits, RuntimeError, VM};

fn nfa(pattern: &str) -> Nfa {
    regula_compiler::compile(pattern).unwrap()
}

fn run(pattern: &str, input: &str) -> bool {
    VM::builder(&nfa(pattern)).build().execute(input).unwrap()
}

#[test]
fn concatenation_with_star() {
    assert!(run("a.b.c*", "ab"));
    assert!(run("a.b.c*", "abccc"));
    assert!(!run("a.b.c*", "abd"));
    assert!(!run("a.b.c*", "a"));
}

#[test]
fn grouped_alternation() {
    assert!(run("a.(b|d).c*", "ad"));
    assert!(run("a.(b|d).c*", "abcc"));
    assert!(!run("a.(b|d).c*", "ac"));
}

#[test]
fn starred_group() {
    let pattern = "(a.(b|d))*";

    assert!(run(pattern, ""));
    assert!(run(pattern, "abad"));
    assert!(!run(pattern, "aba"));
}

#[test]
fn plus_and_optional() {
    assert!(!run("a+", ""));
    assert!(run("a+", "aaa"));
    assert!(run("a?", ""));
    assert!(run("a?", "a"));
    assert!(!run("a?", "aa"));
}

#[test]
fn dead_set_keeps_consuming() {
    assert!(!run("a", "ba"));
    assert!(!run("a*", "ba"));
}

#[test]
fn multibyte_symbols() {
    assert!(run("é.ß*", "éßß"));
    assert!(!run("é", "e"));
}

#[test]
fn nested_quantifiers_terminate() {
    assert!(run("(a*)*", ""));
    assert!(run("(a*)*", "aaaa"));
    assert!(!run("(a*)*", "ab"));
    assert!(run("(a?)+", ""));
    assert!(run("(a?)+", "aaa"));
}

#[test]
fn hand_built_automaton() {
    // S0 -a-> S1, S1 loops back through S2.
    let nfa = Nfa::from_parts(
        vec![
            State::Char {
                symbol: 'a',
                next: 1,
            },
            State::Split {
                first: 2,
                second: 3,
            },
            State::Epsilon { next: 0 },
            State::Halt,
        ],
        0,
        3,
    )
    .unwrap();

    let vm = || VM::builder(&nfa).build();
    assert!(!vm().execute("").unwrap());
    assert!(vm().execute("aaa").unwrap());
}

#[test]
fn fuel_exhaustion() {
    let nfa = nfa("a*");

    // Both active sets hold three states, so two symbols cost six.
    let result = VM::builder(&nfa).exec_fuel(4).build().execute("aa");
    assert_eq!(result, Err(RuntimeError::ExecFuelExhausted(4)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "runtime execution limit of 4 steps exceeded"
    );

    let result = VM::builder(&nfa).exec_fuel(6).build().execute("aa");
    assert_eq!(result, Ok(true));
}

#[test]
fn unlimited_fuel() {
    let limits = FuelLimits::unlimited();
    assert_eq!(limits.get_exec_fuel(), None);
    assert_eq!(FuelLimits::new().get_exec_fuel(), Some(1_000_000));

    let nfa = nfa("a*");
    let input = "a".repeat(10_000);
    let vm = VM::builder(&nfa).limits(limits).build();

    assert!(vm.execute(&input).unwrap());
}

#[test]
fn total_entry_point() {
    let nfa = nfa("a.b|c");

    assert!(crate::matches(&nfa, "ab"));
    assert!(crate::matches(&nfa, "c"));
    assert!(!crate::matches(&nfa, "ac"));
}
