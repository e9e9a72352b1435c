/*!
# `GOTO <line number>`

## Purpose
Moves execution to a line.

## Remarks
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur.
A group number alone, like `GOTO 2`, jumps to the first line of the group.
`GOTO` with no line starts over at the first line of the program.

## Example
```text
1.10 GOTO 1.30
1.20 TYPE "THIS WILL NOT TYPE"
1.30 TYPE "THIS WILL TYPE"
```

*/
