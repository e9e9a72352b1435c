/*!
# `DO <group>` or `DO <line number>`

## Purpose
Runs a group or a single line as a subroutine and comes back.

## Remarks
`DO 2` runs group 2 from its first line until control leaves the group.
`DO 2.3` starts at line 2.30 and comes back at the first line end where
both the group and the step change, so it usually runs on to the end of
group 2. Either way execution continues with the statement after the
`DO`. A `RETURN` ends the call early.

The target is an expression so it may be computed. An undefined target
raises `UNDEFINED LINE` and execution carries on after the `DO`.

## Example
```text
1.10 DO 2; DO 2; TYPE "DONE", !; QUIT
2.10 TYPE "HI "
2.20 TYPE "THERE", !
HI THERE
HI THERE
DONE
```

*/
