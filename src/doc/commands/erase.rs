/*!
# `ERASE`

## Purpose
Forgets every variable.

## Remarks
Variables read after an `ERASE` are zero again.

## Example
```text
1.10 SET A=5; ERASE; TYPE A
 0
```

*/
