mod common;
use common::*;

#[test]
fn test_precedence() {
    let mut r = program(&["1.10 TYPE 2+3*4, 2^3^2, -2^2, (2+3)*4, 10-4-3"]);
    assert_eq!(exec(&mut r), " 14  64 -4  20  3 ");
}

#[test]
fn test_bracket_styles() {
    let mut r = program(&["1.10 TYPE [2+3]*<1+1>"]);
    assert_eq!(exec(&mut r), " 10 ");
}

#[test]
fn test_equality() {
    let mut r = program(&["1.10 TYPE 2=2, 2=3"]);
    assert_eq!(exec(&mut r), "-1  0 ");
}

#[test]
fn test_number_printing() {
    let mut r = program(&["1.10 TYPE 7/2, 1/3, 1234567891, -0.5, .0001"]);
    assert_eq!(exec(&mut r), " 3.5  0.333333333  1.23456789E+09 -0.5  0.0001 ");
}

#[test]
fn test_exponent_literal() {
    let mut r = program(&["1.10 TYPE 2E3, 1.5E-2"]);
    assert_eq!(exec(&mut r), " 2000  0.015 ");
}

#[test]
fn test_encoded_literals() {
    let mut r = program(&["1.10 TYPE 0A, 0AZ, 0YES, 0A1"]);
    assert_eq!(exec(&mut r), " 1  36  2.5E+20  11 ");
}

#[test]
fn test_unset_variable_is_zero() {
    let mut r = program(&["1.10 TYPE Q1"]);
    assert_eq!(exec(&mut r), " 0 ");
}

#[test]
fn test_string_in_arithmetic() {
    let mut r = program(&["1.10 TYPE 5-\"X\""]);
    assert_eq!(exec(&mut r), " 5 ");
    let mut r = program(&["1.10 TYPE 1+\"X\""]);
    assert_eq!(exec(&mut r), "TYPE MISMATCH AT 1.10\n 0 ");
}

#[test]
fn test_set_string_is_mismatch() {
    let mut r = program(&["1.10 SET A=3; SET A=\"X\"; TYPE A"]);
    assert_eq!(exec(&mut r), "TYPE MISMATCH AT 1.10\n 3 ");
}

#[test]
fn test_zero_over_zero() {
    let mut r = program(&["1.10 TYPE 0/0"]);
    assert_eq!(exec(&mut r), "DIVISION BY ZERO AT 1.10\n NAN ");
}

#[test]
fn test_negative_infinity() {
    let mut r = program(&["1.10 TYPE -1/0"]);
    assert_eq!(exec(&mut r), "DIVISION BY ZERO AT 1.10\n-INF ");
}
