/*!
# `SET <variable>=<expression>`

## Purpose
Stores a number in a variable.

## Remarks
Variables never need declaring. A name used with a subscript, like
`A(3)`, is an array holding subscripts -2048 to 2047, and plain `A`
is then the same as `A(0)`. A subscript outside that range raises
`SUBSCRIPT OUT OF RANGE` and `A(0)` is used instead.

Storing a string raises `TYPE MISMATCH`.

## Example
```text
1.10 SET A(1)=5; SET A(2)=A(1)*2; TYPE A(2)
 10
```

*/
