mod common;
use common::*;
use focal::mach::{Event, Options};

#[test]
fn test_ask_with_prompt() {
    let mut r = program(&["1.10 ASK \"AGE? \", A", "1.20 TYPE A+1"]);
    assert_eq!(exec(&mut r), "AGE? ");
    assert!(r.enter("41"));
    assert_eq!(exec(&mut r), " 42 ");
}

#[test]
fn test_ask_event() {
    let mut r = program(&["1.10 TYPE \"HI\", !; ASK \"X\", A"]);
    assert_eq!(r.execute(100), Event::Print("HI\n".to_string()));
    assert_eq!(r.execute(100), Event::Input("X".to_string(), true));
}

#[test]
fn test_ask_two_variables() {
    let mut r = program(&["1.10 ASK A, B", "1.20 TYPE A+B"]);
    assert_eq!(exec(&mut r), "");
    r.enter("1");
    assert_eq!(exec(&mut r), "");
    r.enter("2");
    assert_eq!(exec(&mut r), " 3 ");
}

#[test]
fn test_ask_letters() {
    let mut r = program(&["1.10 ASK A", "1.20 IF (A-0NO) 1.4, 1.3, 1.4", "1.30 TYPE \"NO\"; QUIT", "1.40 TYPE A"]);
    exec(&mut r);
    r.enter("no");
    assert_eq!(exec(&mut r), "NO");
}

#[test]
fn test_ask_letter_e_is_exponent() {
    let mut r = program(&["1.10 ASK A, B", "1.20 TYPE A, B"]);
    exec(&mut r);
    r.enter("yes");
    exec(&mut r);
    r.enter("EE");
    assert_eq!(
        exec(&mut r),
        "INVALID STRING VALUE AT 1.10; MORE THAN ONE E\n 2.5E+20  0 "
    );
}

#[test]
fn test_ask_lower_case() {
    let options = Options {
        upper_case: false,
        ..Options::default()
    };
    let mut r = program_with(options, &["1.10 ASK A", "1.20 TYPE A"]);
    assert_eq!(r.execute(100), Event::Input(String::new(), false));
    r.enter("y");
    assert_eq!(exec(&mut r), " 0 ");
}

#[test]
fn test_ask_colon() {
    let options = Options {
        ask_colon: true,
        ..Options::default()
    };
    let mut r = program_with(options, &["1.10 ASK \"N\", N", "1.20 TYPE N"]);
    assert_eq!(exec(&mut r), "N:");
    r.enter("2.5");
    assert_eq!(exec(&mut r), " 2.5 ");
}

#[test]
fn test_ask_invalid() {
    let mut r = program(&["1.10 ASK A", "1.20 TYPE A"]);
    exec(&mut r);
    r.enter("1.2.3");
    assert_eq!(
        exec(&mut r),
        "INVALID STRING VALUE AT 1.10; MORE THAN ONE PERIOD\n 0 "
    );
}

#[test]
fn test_ask_into_array() {
    let mut r = program(&["1.10 FOR I=1,2; ASK A(I)", "1.20 TYPE A(1)*A(2)"]);
    exec(&mut r);
    r.enter("6");
    exec(&mut r);
    r.enter("7");
    assert_eq!(exec(&mut r), " 42 ");
}

#[test]
fn test_ask_resets_tab_column() {
    let mut r = program(&["1.10 ASK \"ABC\", A; TYPE :, \"X\""]);
    exec(&mut r);
    r.enter("1");
    assert_eq!(exec(&mut r), "X");
}

#[test]
fn test_interrupt_while_asking() {
    let mut r = program(&["1.10 ASK A"]);
    exec(&mut r);
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK AT 1.10\n");
}
