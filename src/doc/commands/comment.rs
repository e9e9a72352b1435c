/*!
# `COMMENT <anything>`

## Purpose
Leaves a remark in the program.

## Remarks
Everything after the command word is ignored, semicolons included.
`C` is the usual spelling.

## Example
```text
1.10 C COMPUTE THE AREA; NOT A STATEMENT
```

*/
