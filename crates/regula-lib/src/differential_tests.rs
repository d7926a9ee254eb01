//! Cross-check against `regex-automata` on the equivalent conventional regex.

use regex_automata::meta::Regex as Oracle;

use crate::Regex;

const PATTERNS: &[&str] = &[
    "a",
    "a.b",
    "a|b",
    "a.b.c*",
    "a.(b|d).c*",
    "(a.(b|d))*",
    "a.(b.b)*.c*",
    "a.b|d.c*",
    "a.b|c.a",
    "a+",
    "a?",
    "(a|b)+.c?",
    "(a|b)*.a.b",
    "(a*)*",
    "(a?)+",
    "((a|b).(c|d))?.a*",
];

const ALPHABET: &[char] = &['a', 'b', 'c', 'd'];

/// Drop the explicit concatenation operator and anchor both ends.
fn conventional(pattern: &str) -> String {
    let body: String = pattern.chars().filter(|&c| c != '.').collect();
    format!("^(?:{body})$")
}

/// Every string over `ALPHABET` up to `max_len` symbols.
fn inputs(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                ALPHABET.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn agrees_with_conventional_engine() {
    let inputs = inputs(4);
    assert_eq!(inputs.len(), 1 + 4 + 16 + 64 + 256);

    for pattern in PATTERNS {
        let re = Regex::new(pattern).unwrap();
        let oracle = Oracle::new(&conventional(pattern)).unwrap();

        for input in &inputs {
            assert_eq!(
                re.is_match(input),
                oracle.is_match(input.as_str()),
                "pattern {pattern:?} on input {input:?}"
            );
        }
    }
}

#[test]
fn conventional_translation() {
    assert_eq!(conventional("a.(b|d).c*"), "^(?:a(b|d)c*)$");
}
