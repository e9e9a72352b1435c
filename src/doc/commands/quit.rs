/*!
# `QUIT`

## Purpose
Ends the program.

## Remarks
Nothing after a `QUIT` runs, including loops and calls still in progress.

## Example
```text
1.10 TYPE "ONE", !; QUIT
1.20 TYPE "TWO", !
ONE
```

*/
