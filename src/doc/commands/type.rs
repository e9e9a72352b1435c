/*!
# `TYPE <item>[, <item>...]`

## Purpose
Prints numbers and text.

## Remarks
Items are separated by commas. An item is one of:

 * an expression, printed as a number followed by a space;
 * a string in double quotes, printed as it is;
 * `!` for a new line, `#` for a carriage return;
 * `:` to move to the next tab stop;
 * `%w.d` to print later numbers in a field `w` wide with `d` decimals.
   `%` alone goes back to the normal style.

Numbers print with up to nine significant digits and a leading space
where a plus sign would go.

`TYPE $` lists the names of every variable.

## Example
```text
1.10 TYPE "PI IS", %6.2, 3.14159, !
PI IS  3.14
1.10 SET B=1; SET A=2; TYPE $

A
B

```

*/
