mod common;
use common::*;

#[test]
fn test_array_bounds() {
    let mut r = program(&["1.10 SET A(2047)=5; SET A(-2048)=7", "1.20 TYPE A(2047)+A(-2048)"]);
    assert_eq!(exec(&mut r), " 12 ");
}

#[test]
fn test_subscript_out_of_range_uses_zero() {
    let mut r = program(&["1.10 SET A(2048)=5", "1.20 TYPE A(0)"]);
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE AT 1.10\n 5 ");
}

#[test]
fn test_plain_name_is_element_zero() {
    let mut r = program(&["1.10 SET A=3; SET A(1)=4", "1.20 TYPE A(0), A(1), A"]);
    assert_eq!(exec(&mut r), " 3  4  3 ");
}

#[test]
fn test_fractional_subscript_truncates() {
    let mut r = program(&["1.10 SET B(2.7)=9", "1.20 TYPE B(2), B(-1.5)"]);
    assert_eq!(exec(&mut r), " 9  0 ");
}

#[test]
fn test_computed_subscript() {
    let mut r = program(&["1.10 SET N=3; SET C(N*2)=1", "1.20 TYPE C(6)"]);
    assert_eq!(exec(&mut r), " 1 ");
}

#[test]
fn test_varlist_includes_arrays() {
    let mut r = program(&["1.10 SET Z(3)=1; TYPE $"]);
    assert_eq!(exec(&mut r), "\nZ \n\n");
}

#[test]
fn test_variables_after_run() {
    let mut r = program(&["1.10 SET A(5)=2; SET B=1"]);
    exec(&mut r);
    let vars = r.variables();
    assert!(vars.is_array("A"));
    assert!(!vars.is_array("B"));
    assert_eq!(vars.len(), 2);
}
