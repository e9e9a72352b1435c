/*!
# Functions

Every function name starts with `F` and takes its argument in
parentheses.
*/

pub mod FABS {
    /*!
    ## `FABS(X)` Returns the absolute value of X.
    ```text
    1.10 TYPE FABS(-0.123)
     0.123
    ```
    */
}

pub mod FATN {
    /*!
    ## `FATN(X)` Returns the arctangent of X in radians.
    ```text
    1.10 TYPE FATN(1)
     0.785398163
    ```
    */
}

pub mod FCOM {
    /*!
    ## `FCOM(X)` Always returns 0.
    Reserved for the common storage of the original hardware.
    */
}

pub mod FCOS {
    /*!
    ## `FCOS(X)` Returns the cosine of X in radians.
    ```text
    1.10 TYPE FCOS(0)
     1
    ```
    */
}

pub mod FEXP {
    /*!
    ## `FEXP(X)` Returns e raised to the power X.
    ```text
    1.10 TYPE FEXP(1)
     2.71828183
    ```
    */
}

pub mod FIN {
    /*!
    ## `FIN(X)` Returns the character with code X.
    Codes outside 0 to 255 raise `INVALID STRING VALUE`.
    ```text
    1.10 TYPE FIN(65)
    A
    ```
    */
}

pub mod FITR {
    /*!
    ## `FITR(X)` Returns the largest integer not greater than X.
    ```text
    1.10 TYPE FITR(2.7), FITR(-2.5)
     2 -3
    ```
    */
}

pub mod FLOG {
    /*!
    ## `FLOG(X)` Returns the natural logarithm of X.
    ```text
    1.10 TYPE FLOG(1)
     0
    ```
    */
}

pub mod FNEW {
    /*!
    ## `FNEW(X)` Always returns 0.
    Reserved for the overlay loader of the original hardware.
    */
}

pub mod FOUT {
    /*!
    ## `FOUT(X)` Returns X as printed text without the trailing space.
    ```text
    1.10 TYPE FOUT(42), "!"
     42!
    ```
    */
}

pub mod FRAN {
    /*!
    ## `FRAN()` Returns a random number from 0 up to but not including 1.
    The `--random` option fixes the seed so runs repeat.
    ```text
    1.10 TYPE FITR(FRAN()*6)+1
     4
    ```
    */
}

pub mod FSGN {
    /*!
    ## `FSGN(X)` Returns -1, 0 or 1 for the sign of X.
    ```text
    1.10 TYPE FSGN(-7)
    -1
    ```
    */
}

pub mod FSIN {
    /*!
    ## `FSIN(X)` Returns the sine of X in radians.
    ```text
    1.10 TYPE FSIN(0)
     0
    ```
    */
}

pub mod FSQT {
    /*!
    ## `FSQT(X)` Returns the square root of X.
    ```text
    1.10 TYPE FSQT(16)
     4
    ```
    */
}
