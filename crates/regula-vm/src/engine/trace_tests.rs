use indoc::indoc;
use regula_core::Colors;

use super::{PrintTracer, VM, Verbosity};

fn trace(pattern: &str, input: &str, verbosity: Verbosity) -> String {
    let nfa = regula_compiler::compile(pattern).unwrap();
    let mut tracer = PrintTracer::new(&nfa, verbosity, Colors::OFF);

    VM::builder(&nfa)
        .build()
        .execute_with(input, &mut tracer)
        .unwrap();

    tracer.lines().join("\n")
}

#[test]
fn default_trace() {
    insta::assert_snapshot!(trace("a.b", "ab", Verbosity::Default), @r"
    start S0
      {S0}
    @0 'a'
      {S1 S2}
    @1 'b'
      {S3} accepting
    accept
    ");
}

#[test]
fn verbose_trace_shows_transitions() {
    insta::assert_snapshot!(trace("a.b", "ab", Verbosity::Verbose), @r"
    start S0
      {S0}
    @0 'a'
        S0 → S1
      {S1 S2}
    @1 'b'
        S2 → S3
      {S3} accepting
    accept
    ");
}

#[test]
fn dead_end_is_reported_once() {
    let expected = indoc! {"
        start S0
          {S0}
        @0 'a'
          {S1 S2}
        @1 'c'
          {}
          dead end
        @2 'b'
          {}
        reject"};

    assert_eq!(trace("a.b", "acb", Verbosity::Default), expected);
}

#[test]
fn empty_input_accepted_by_star() {
    insta::assert_snapshot!(trace("a*", "", Verbosity::Default), @r"
    start S2
      {S2 S3 S0} accepting
    accept
    ");
}

#[test]
fn colors_wrap_state_ids() {
    let nfa = regula_compiler::compile("a").unwrap();
    let mut tracer = PrintTracer::new(&nfa, Verbosity::Default, Colors::ON);

    VM::builder(&nfa)
        .build()
        .execute_with("a", &mut tracer)
        .unwrap();

    assert_eq!(tracer.lines()[0], "start \x1b[34mS0\x1b[0m");
    assert_eq!(tracer.lines().last().unwrap(), "\x1b[32maccept\x1b[0m");
}
