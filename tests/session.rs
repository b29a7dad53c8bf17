use scalc::{
    input::{LineSource, Prompter, RetryPolicy},
    runtime::{Calculator, Summary, GOODBYE, INVALID_CHOICE},
};
use std::io::Cursor;

fn transcript(input: &str) -> (Summary, String) {
    let mut source = Prompter::new(Cursor::new(input.as_bytes()), Vec::new());
    let summary = Calculator::new(&mut source, RetryPolicy::Unbounded)
        .run()
        .unwrap();
    let (_, out) = source.take();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn add_two_numbers() {
    let (_, out) = transcript("1\n2\n3\n5\n");
    assert!(out.contains("Result: 2.0 + 3.0 = 5.0\n"));
}

#[test]
fn divide_by_zero() {
    let (summary, out) = transcript("4\n5\n0\n5\n");
    assert!(out.contains("Error: Cannot divide by zero!\n"));
    assert!(!out.contains("Result:"));
    assert_eq!(summary.computed, 0);
}

#[test]
fn mixed_session() {
    let input = "9\nabc\n3\n 1.5 \nxyz\n-2\n4\n1\n0\n2\n10\n0.25\n5\n";
    let (summary, out) = transcript(input);
    assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
    assert!(out.contains("Result: 1.5 * -2.0 = -3.0\n"));
    assert!(out.contains("Error: Cannot divide by zero!\n"));
    assert!(out.contains("Result: 10.0 - 0.25 = 9.75\n"));
    assert_eq!(out.matches("--- Simple Calculator ---").count(), 6);
    assert_eq!(out.matches(GOODBYE).count(), 1);
    assert_eq!(
        summary,
        Summary {
            cycles: 6,
            computed: 2,
            rejected_choices: 2,
            failures: 0,
        }
    );
}

#[test]
fn exit_wins_over_remaining_input() {
    let (summary, out) = transcript("3\n2\n2\n5\n4\n1\n0\n");
    assert!(out.contains("Result: 2.0 * 2.0 = 4.0\n"));
    assert!(out.ends_with(&format!("{}\n", GOODBYE)));
    assert_eq!(summary.cycles, 2);
}

#[test]
fn source_is_usable_after_session() {
    let mut source = Prompter::new(Cursor::new(&b"5\nleftover\n"[..]), Vec::new());
    Calculator::new(&mut source, RetryPolicy::Limited(1))
        .run()
        .unwrap();
    assert_eq!(source.read_line("").unwrap().as_deref(), Some("leftover"));
}
