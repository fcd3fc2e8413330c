/*!
# Statements

Keywords may be typed in any case. There are no variables or
expressions; a statement is a keyword and some text.
*/

pub mod PRINT {
    /*!
    ## `PRINT <text>`
    Unquoted text is printed followed by a newline.
    Quoted text is printed without the quotes and without a newline,
    with or without a trailing semicolon.
    Unquoted text ending in a semicolon is printed as typed, semicolon
    included, with no newline.
    ```text
    10 PRINT "ONE ";
    20 PRINT "TWO "
    30 PRINT THREE
    40 PRINT FOUR;
    RUN
    ONE TWO THREE
    FOUR;
    ```
    */
}

pub mod GOTO {
    /*!
    ## `GOTO <line number>`
    Immediately and unconditionally move execution to the specified line
    number. If the line doesn't exist the run stops with `Line <n> not found.`
    A target that is not a line number stops the run with
    `Invalid GOTO target.`
    ```text
    10 GOTO 30
    20 PRINT THIS WILL NOT PRINT
    30 PRINT THIS WILL PRINT
    ```
    */
}

pub mod END {
    /*!
    ## `END`
    Stop running the program. `END` at the end of a program is optional.
    ```text
    10 PRINT HELLO
    20 END
    30 PRINT THIS DOES NOT PRINT
    ```
    */
}
