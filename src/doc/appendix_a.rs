/*!
# Diagnostics

Errors print on the standard error stream after a `?`. Errors found
while running name the line, and syntax errors also give the column
where the problem starts. Most runtime errors let the program carry on.

```text
?DIVISION BY ZERO AT 1.10
?SYNTAX ERROR AT 1.20:5; EXPECTED EXPRESSION
?UNDEFINED LINE AT 1.30; 5.10
```

A program with any syntax error is not run at all. `--no-run` reports
the syntax errors of a program without running it.

| Code | Message | Cause |
|------|---------|-------|
| 2  | `SYNTAX ERROR` | The line could not be parsed. |
| 3  | `RETURN WITHOUT DO` | `RETURN` outside a subroutine. |
| 5  | `UNHANDLED FUNCTION` | A function was given the wrong number of arguments. |
| 7  | `OUT OF MEMORY` | Too many `DO` or `FOR` in progress at once. |
| 8  | `UNDEFINED LINE` | `DO`, `GOTO` or `IF` named a line that doesn't exist. |
| 9  | `SUBSCRIPT OUT OF RANGE` | An array subscript outside -2048 to 2047. |
| 11 | `DIVISION BY ZERO` | The result is infinite or not a number. |
| 12 | `ILLEGAL DIRECT` | A line without a line number. |
| 13 | `TYPE MISMATCH` | Text used where a number belongs. |
| 14 | `INVALID STRING VALUE` | An `ASK` answer or `FIN` code that can't be converted. |
| 15 | `NEGATIVE LINE NUMBER` | A jump to a negative line. |
| 20 | `BREAK` | CTRL-C stopped the program. |
| 21 | `UNIMPLEMENTED STATEMENT` | `LIBRARY`, `MODIFY`, `OPERATE` or `WRITE`. The program stops. |
| 51 | `INTERNAL ERROR` | A bug in the interpreter. |
| 53 | `FILE NOT FOUND` | The program file could not be read. |

*/
