/*!
# `IF (<expression>) <less>[, <zero>[, <more>]]`

## Purpose
Jumps to one of three lines depending on the sign of an expression.

## Remarks
The first line is taken when the expression is negative, the second
when it is zero and the third when it is positive. When the matching
line is left out, execution continues with the next statement.

## Example
```text
1.10 SET A=0
1.20 IF (A) 1.30, 1.40, 1.30
1.30 TYPE "NOT ZERO", !; QUIT
1.40 TYPE "ZERO", !
ZERO
```

*/
