/*!
# `ASK ["prompt",] <variable>[, <variable>...]`

## Purpose
Reads numbers from the keyboard into variables.

## Remarks
Each variable waits for one line of input. Strings and the `!`, `#`,
`:` and `%` items print just as they would in `TYPE`. With the
`--ask-colon` option a `:` is printed before each wait.

Letters in the answer are converted to numbers with the teletype code,
so `A` is 1 and `NO` is 155. Input is upper-cased unless
`--lower-case` was given. Text that can't be read as a number raises
`INVALID STRING VALUE` and stores zero.

## Example
```text
1.10 ASK "HOW OLD? ", A
1.20 TYPE "NEXT YEAR ", A+1, !
HOW OLD? 41
NEXT YEAR  42
```

*/
