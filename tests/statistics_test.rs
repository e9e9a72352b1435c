mod common;
use common::*;
use focal::mach::Runtime;

#[test]
fn test_statistics_after_run() {
    let mut r = program(&["1.10 FOR I=1,3; SET S=S+I", "1.20 DO 2; QUIT", "2.10 TYPE S"]);
    assert_eq!(exec(&mut r), " 6 ");
    let stats = r.statistics().unwrap();
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.first_line, 110);
    assert_eq!(stats.last_line, 210);
    assert_eq!(stats.statements, 5);
    assert_eq!(stats.variables, 2);
    assert_eq!(stats.fors, 1);
    assert_eq!(stats.fors_step_one, 1);
    assert_eq!(stats.dos, 1);
    assert_eq!(stats.forward, 1);
    assert_eq!(stats.statements_executed, 7);
}

#[test]
fn test_no_statistics_without_program() {
    let mut r = Runtime::default();
    r.run();
    assert_eq!(r.statistics(), None);
}
