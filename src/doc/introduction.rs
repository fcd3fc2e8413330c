/*!
# Introductory Tutorial for PC P BASIC

Type `BASIC` at the `]` prompt. The prompt changes to `BASIC>` and every
line you type either edits the program or is a command for it.

A program line starts with a line number. Nothing happens when you
enter one; the statement is saved to be executed later.

<pre><code>&nbsp;BASIC> 10 PRINT "HELLO ";
&nbsp;BASIC> 20 GOTO 40
&nbsp;BASIC> 30 PRINT NEVER
&nbsp;BASIC> 40 PRINT WORLD
</code></pre>

Lines are kept in numerical order no matter the order you type them.
Typing a line number that already exists replaces that line.

<pre><code>&nbsp;BASIC> LIST
&nbsp;10 PRINT "HELLO ";
&nbsp;20 GOTO 40
&nbsp;30 PRINT NEVER
&nbsp;40 PRINT WORLD
&nbsp;BASIC> RUN
&nbsp;HELLO WORLD
&nbsp;
</code></pre>

A run always ends with one blank line. It stops at `END`, after the last
line, or when a `GOTO` has nowhere to go. Statements the machine does not
understand are reported and skipped.

<pre><code>&nbsp;BASIC> NEW
&nbsp;BASIC program cleared.
&nbsp;BASIC> 10 LET A=1
&nbsp;BASIC> 20 GOTO 99
&nbsp;BASIC> RUN
&nbsp;Unknown BASIC command at line 10: LET A=1
&nbsp;Line 99 not found.
&nbsp;
</code></pre>

A program that jumps back on itself without an `END` runs until you
press CTRL-C.

Save your work with `SAVE hello.bas` and get it back with `LOAD hello.bas`.
`NEW` erases the program. `EXIT` returns to the `]` prompt.

*/
