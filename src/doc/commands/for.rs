/*!
# `FOR <variable>=<begin>,<end>` or `FOR <variable>=<begin>,<step>,<end>`

## Purpose
Repeats the rest of the line for each value of the variable.

## Remarks
The loop body is everything after the `FOR` on the same line. A `FOR`
at the end of its line loops over the line after it instead. The step
defaults to one. A negative step counts down and the loop keeps going
while the variable is at least `<end>`. The body always runs once.

A zero step ends the loop after the first pass. Only the innermost
loop steps at the end of a line. When it runs out, execution falls
through to the next line before the outer loop steps, so nested loops
on one line need a line after them. A `DO` in the body returns to the
statement after it, which ends the line without stepping the loop. A
jump out of the body is undone when the line ends while the loop still
has passes left.

## Example
```text
1.10 FOR I=3,-1,1; TYPE I
 3  2  1
1.10 FOR I=1,2; FOR J=1,2; TYPE I*10+J
1.20 TYPE "X"
 11  12 X 21  22 X
```

*/
