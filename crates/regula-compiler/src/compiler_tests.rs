use crate::{BuildError, Compiler, Error, compile, to_postfix};

#[test]
fn compile_pipeline() {
    let nfa = compile("a.b").unwrap();

    insta::assert_snapshot!(nfa.dump(), @r"
    start = S0
    accept = S3

    S0: 'a' → S1
    S1: ε → S2
    S2: 'b' → S3
    S3: accept
    ");
}

#[test]
fn postfix_accessor() {
    assert_eq!(to_postfix("a.(b|d).c*").unwrap().to_string(), "abd|.c*.");
}

#[test]
fn compiling_twice_is_deterministic() {
    assert_eq!(compile("(a.(b|d))*").unwrap(), compile("(a.(b|d))*").unwrap());
}

#[test]
fn parse_errors_are_reported_before_building() {
    let err = compile("a.(b").unwrap_err();

    assert!(matches!(err, Error::ParseError(_)));
    assert_eq!(err.to_string(), "pattern parsing failed with 1 errors");
}

#[test]
fn build_errors_pass_through() {
    let err = compile("ab").unwrap_err();

    assert_eq!(
        err,
        Error::BuildError(BuildError::DanglingFragments { count: 2 })
    );
}

#[test]
fn fuel_limit() {
    let err = Compiler::new("a.b").with_exec_fuel(Some(1)).compile().unwrap_err();
    assert_eq!(err, Error::ExecFuelExhausted);
    assert_eq!(err.to_string(), "execution limit exceeded");

    assert!(Compiler::new("a.b").with_exec_fuel(None).compile().is_ok());
}

#[test]
fn unlimited_by_default() {
    // One token past a million.
    let pattern = vec!["a"; 500_001].join(".");

    let nfa = compile(&pattern).unwrap();

    assert_eq!(pattern.len(), 1_000_001);
    assert_eq!(nfa.len(), 1_000_002);
    assert_eq!(to_postfix(&pattern).unwrap().len(), 1_000_001);
}
