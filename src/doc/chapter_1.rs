/*!
# Expressions and Numbers

Every FOCAL value is a number. Variables are named by a letter followed
by letters or digits, but names starting with `F` are kept for
functions. A variable that was never set reads as zero.

```text
1.10 SET PI=3.14159
1.20 SET R2=PI*2
```

A name given a subscript becomes an array. Subscripts run from -2048 to
2047 and fractions are dropped, so `A(2.7)` is `A(2)`. Once `A` is an
array, plain `A` means `A(0)`.

```text
1.10 SET A(1)=10; SET A(-1)=-10; TYPE A(1)+A(-1)
 0
```

## Operators

From lowest to highest precedence:

| Operator | Meaning |
|----------|---------|
| `=`      | -1 when both sides are equal, otherwise 0 |
| `+` `-`  | addition and subtraction |
| `*` `/`  | multiplication and division |
| `-`      | negation |
| `^`      | raise to a power |

Parentheses group as usual. Division by zero raises `DIVISION BY ZERO`
but the program keeps going with an infinite result.

```text
1.10 SET A=1/0
1.20 TYPE A
?DIVISION BY ZERO AT 1.10
 INF
```

## Printing numbers

`TYPE` prints up to nine significant digits. Positive numbers start
with a space in place of the sign and every number is followed by a
space. Very large or very small numbers use an exponent.

```text
1.10 TYPE 1/3, 1234567891, -0.5
 0.333333333  1.23456789E+09 -0.5
```

## Letters as numbers

A numeral that starts with a digit and runs into letters is read with
each letter standing for its teletype code: `A` is 1 through `Z` at 26.
Each letter is one more decimal place, so `0AB` is 12 and `0AZ` is 36.
The first `E` anywhere begins the exponent, so `0YES` is 25 times ten
to the 19th. A second `E` is an error.

```text
1.10 TYPE 0NO, 0YES
 155  2.5E+20
```

`ASK` reads its answers the same way, so a program can compare an
answer against `0YES` or `0NO`.

*/
