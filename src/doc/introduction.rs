/*!
# Introductory Tutorial for FOCAL

FOCAL programs live in plain text files. Every line starts with a line
number made of a group and a step, like `1.10`, followed by one or more
commands separated by semicolons. Run a program by naming its file.

```text
$ cat hello.fc
1.10 TYPE "HELLO WORLD", !
$ focal hello.fc
HELLO WORLD
```

Stop a running program with CTRL-C.

## Line numbers

The part before the period is the group and may be 0 to 31. The part
after the period is the step and may be 01 to 99. A single step digit
counts as tens, so `1.1` is the same line as `1.10`. Lines always run in
numeric order no matter what order they appear in the file.

```text
1.20 TYPE "SECOND", !
1.10 TYPE "FIRST", !
```

Groups matter more than they seem. `DO 2` runs every line of group 2
and then comes back, which is how FOCAL does subroutines. Nothing stops
execution from falling into a subroutine group, so programs usually end
their main group with `QUIT`.

## Commands

Only the first letter of a command is read. `T`, `TYPE` and `TYPEWRITER`
are all the same command, so most programs use the single letters.

```text
1.10 S A=5; T A, !
```

## Loops

A `FOR` repeats the rest of its line until the loop runs out. When
the program reaches the end of its last line it stops.

```text
1.10 FOR I=1,3; TYPE I
$ focal count.fc
 1  2  3
```

Numbers print with a space where a plus sign would go and one space
after, which is why the output above looks spread out. See
[Expressions](../__Chapter_1/index.html) for the details.

## Asking questions

`ASK` reads a number from the keyboard. FOCAL has no strings, so
letters are turned into numbers using the teletype character code.
`A` is 1 and `NO` is 155, which lets programs compare answers.

```text
1.10 ASK "DONE? ", R
1.20 IF (R-0YES) 1.10, 1.30, 1.10
1.30 TYPE "BYE", !
```

## Command line

```text
focal [-u|--upper-case] [-l|--lower-case] [-c|--ask-colon] [-t|--tab N]
      [-r|--random SEED] [-n|--no-run] [--trace] [-p|--print-stats]
      [-w|--write-stats FILE] [-i|--input-file FILE] [-o|--output-file FILE]
      SOURCE
```

`--no-run` only checks the program for syntax errors. `--trace` prints
each line number as execution reaches it. `--print-stats` prints counts
of lines, statements, constants and branches when the program ends, and
`--write-stats` saves them to a file as comma separated rows.
`--input-file` answers `ASK` from a file and `--output-file` sends the
program's output to one. When the answers run out the program stops
with exit status 1.
*/
