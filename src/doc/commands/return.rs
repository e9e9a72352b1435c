/*!
# `RETURN`

## Purpose
Ends a subroutine started with `DO` before it runs out of lines.

## Remarks
A `RETURN` that isn't inside a `DO`, or whose innermost `DO` has a
`FOR` running inside it, raises `RETURN WITHOUT DO` and execution
continues.

## Example
```text
1.10 DO 2; TYPE "BACK", !; QUIT
2.10 TYPE "IN ", !; RETURN
2.20 TYPE "NEVER", !
IN
BACK
```

*/
