mod common;
use common::*;
use focal::mach::{Options, Runtime};

#[test]
fn test_set_then_type() {
    let mut r = program(&["1.10 SET A=5", "1.20 TYPE A"]);
    assert_eq!(exec(&mut r), " 5 ");
}

#[test]
fn test_division_by_zero_keeps_going() {
    let mut r = program(&["1.10 SET A=1/0", "1.20 TYPE A"]);
    assert_eq!(exec(&mut r), "DIVISION BY ZERO AT 1.10\n INF ");
}

#[test]
fn test_lines_run_in_numeric_order() {
    let mut r = program(&["1.20 T \"B\"", "2.05 T \"C\"", "1.1 T \"A\""]);
    assert_eq!(exec(&mut r), "ABC");
}

#[test]
fn test_abbreviations() {
    let mut r = program(&["1.10 S A=2; T A; TYPEWRITER A*2"]);
    assert_eq!(exec(&mut r), " 2  4 ");
}

#[test]
fn test_comment_swallows_rest_of_line() {
    let mut r = program(&["1.10 C NOT; TYPE \"HIDDEN\"", "1.20 TYPE \"SHOWN\""]);
    assert_eq!(exec(&mut r), "SHOWN");
}

#[test]
fn test_erase() {
    let mut r = program(&["1.10 SET A=5; ERASE; TYPE A"]);
    assert_eq!(exec(&mut r), " 0 ");
}

#[test]
fn test_quit() {
    let mut r = program(&["1.10 TYPE \"ONE\"; QUIT; TYPE \"TWO\"", "1.20 TYPE \"THREE\""]);
    assert_eq!(exec(&mut r), "ONE");
    assert!(!r.is_running());
}

#[test]
fn test_goto() {
    let mut r = program(&["1.10 GOTO 1.3", "1.20 TYPE \"X\"", "1.30 TYPE \"Y\""]);
    assert_eq!(exec(&mut r), "Y");
}

#[test]
fn test_goto_group() {
    let mut r = program(&["1.10 GOTO 2", "1.20 TYPE \"X\"", "2.40 TYPE \"Y\""]);
    assert_eq!(exec(&mut r), "Y");
}

#[test]
fn test_goto_undefined_line_continues() {
    let mut r = program(&["1.10 GOTO 5.1", "1.20 TYPE \"Y\""]);
    assert_eq!(exec(&mut r), "UNDEFINED LINE AT 1.10; 5.10\nY");
}

#[test]
fn test_goto_without_target_restarts() {
    let mut r = program(&["1.10 SET A=A+1; IF (A-3) 1.2, 1.3", "1.20 GOTO", "1.30 TYPE A"]);
    assert_eq!(exec(&mut r), " 3 ");
}

#[test]
fn test_if_three_ways() {
    let lines = |a: &str| {
        vec![
            format!("1.10 SET A={}", a),
            "1.20 IF (A) 1.3, 1.4, 1.5".to_string(),
            "1.30 TYPE \"NEG\"; QUIT".to_string(),
            "1.40 TYPE \"ZERO\"; QUIT".to_string(),
            "1.50 TYPE \"POS\"".to_string(),
        ]
    };
    for (a, expect) in &[("-2", "NEG"), ("0", "ZERO"), ("7", "POS")] {
        let lines = lines(*a);
        let lines: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
        let mut r = program(&lines);
        assert_eq!(exec(&mut r), *expect);
    }
}

#[test]
fn test_if_missing_target_falls_through() {
    let mut r = program(&["1.10 IF (1) 1.3; TYPE \"FALL\"", "1.20 QUIT", "1.30 TYPE \"JUMP\""]);
    assert_eq!(exec(&mut r), "FALL");
}

#[test]
fn test_varlist() {
    let mut r = program(&["1.10 SET B=1; SET A=2; TYPE $"]);
    assert_eq!(exec(&mut r), "\nA \nB \n\n");
}

#[test]
fn test_type_controls() {
    let mut r = program(&["1.10 TYPE \"A\", !, \"B\", #, \"C\""]);
    assert_eq!(exec(&mut r), "A\nB\rC");
}

#[test]
fn test_format_register() {
    let mut r = program(&["1.10 TYPE %6.2, 3.14159, %, 2"]);
    assert_eq!(exec(&mut r), "  3.14 2 ");
}

#[test]
fn test_tab() {
    let mut r = program(&["1.10 TYPE \"AB\", :, \"C\", :, :, \"D\""]);
    assert_eq!(exec(&mut r), "AB        C         D");
}

#[test]
fn test_tab_width_option() {
    let options = Options {
        tab_columns: 4,
        ..Options::default()
    };
    let mut r = program_with(options, &["1.10 TYPE \"ABCDE\", :, \"F\", !, :, \"G\""]);
    assert_eq!(exec(&mut r), "ABCDE   F\nG");
}

#[test]
fn test_tab_disabled() {
    let options = Options {
        tab_columns: 0,
        ..Options::default()
    };
    let mut r = program_with(options, &["1.10 TYPE \"A\", :, \"B\""]);
    assert_eq!(exec(&mut r), "AB");
}

#[test]
fn test_trace() {
    let options = Options {
        trace_lines: true,
        ..Options::default()
    };
    let mut r = program_with(options, &["1.10 SET A=1; TYPE A", "1.20 TYPE A"]);
    assert_eq!(exec(&mut r), "[1.10]\n 1 [1.20]\n 1 ");
}

#[test]
fn test_unimplemented_statement_stops() {
    let mut r = program(&["1.10 TYPE \"A\"; WRITE ALL; TYPE \"B\"", "1.20 TYPE \"C\""]);
    assert_eq!(exec(&mut r), "AUNIMPLEMENTED STATEMENT AT 1.10; WRITE\n");
}

#[test]
fn test_syntax_error_refuses_run() {
    let mut r = program(&["1.10 TYPE \"A\"", "1.20 SET A="]);
    let s = exec(&mut r);
    assert!(s.starts_with("SYNTAX ERROR AT 1.20:"), "{}", s);
    assert!(s.ends_with("; EXPECTED EXPRESSION\n"), "{}", s);
    assert_eq!(s.lines().count(), 1);
    assert!(!r.is_running());
}

#[test]
fn test_illegal_direct() {
    let mut r = Runtime::default();
    assert!(!r.enter("TYPE 5"));
    assert_eq!(exec(&mut r), "ILLEGAL DIRECT\n");
}

#[test]
fn test_diagnostic_line_after_run() {
    let mut r = program(&["12.05 TYPE 1/0"]);
    assert_eq!(exec(&mut r), "DIVISION BY ZERO AT 12.05\n INF ");
    assert!(!r.enter("TYPE 5"));
    assert_eq!(exec(&mut r), "ILLEGAL DIRECT\n");
}

#[test]
fn test_replace_and_delete_lines() {
    let mut r = Runtime::default();
    r.enter("1.10 TYPE \"A\"");
    r.enter("1.20 TYPE \"B\"");
    r.enter("1.10 TYPE \"C\"");
    r.enter("1.20");
    r.run();
    assert_eq!(exec(&mut r), "C");
}

#[test]
fn test_interrupt() {
    let mut r = program(&["1.10 GOTO 1.1"]);
    assert_eq!(r.execute(100), focal::mach::Event::Running);
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK AT 1.10\n");
}

#[test]
fn test_statements_executed() {
    let mut r = program(&["1.10 SET A=1; SET B=2", "1.20 QUIT"]);
    exec(&mut r);
    assert_eq!(r.statements_executed(), 3);
}
