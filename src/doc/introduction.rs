/*!
# Introductory Tutorial for calc

Begin by opening a terminal and running the executable. Type CTRL-D to
exit, or use the `exit` or `quit` command.
<pre><code>&nbsp;  calc v2.0.0 - A simple expression evaluator
&nbsp;  Type 'help' for more information.
&nbsp;> █
</code></pre>

Type an expression and press ENTER. I'll mark lines that you type with
a "`>`".

<pre><code>&nbsp;> 2 + 3 * 4
&nbsp;  14
&nbsp;> (2 + 3) * 4
&nbsp;  20
</code></pre>

Multiplication and division bind tighter than addition and subtraction.
Operators of the same strength are worked left to right, so `10 - 4 - 3`
is `3`. A leading `+` or `-` applies to the single value after it, and
they may be stacked: `--5` is `5`.

## Results

A result that is a whole number is printed without decimals. Anything
else is printed with six significant digits.

<pre><code>&nbsp;> 1 / 3
&nbsp;  0.333333
&nbsp;> 2 * 1000000.5
&nbsp;  2000001
&nbsp;> 0.5 / 100000
&nbsp;  5e-06
</code></pre>

## Variables

Two variables are ready when you start: `pi` and `e`. Assign your own
with a name, a space, an equals sign, another space, and an expression.
Names are letters, digits, and underscores; a name used in an expression
must start with a letter or an underscore.

<pre><code>&nbsp;> radius = 2.5
&nbsp;  radius = 2.5
&nbsp;> pi * radius * radius
&nbsp;  19.635
&nbsp;> vars
&nbsp;  Variables:
&nbsp;    pi = 3.14159
&nbsp;    e = 2.71828
&nbsp;    radius = 2.5
</code></pre>

Using a name that was never assigned is an error. Nothing defaults to zero.

<pre><code>&nbsp;> y + 1
&nbsp;  ?UNDEFINED VARIABLE (0..1); y
</code></pre>

## Errors

Errors start with a `?`. When the calculator knows where the problem
is, the characters are shown as a range.

<pre><code>&nbsp;> 1 / 0
&nbsp;  ?DIVISION BY ZERO (2..3)
&nbsp;> (1 + 2
&nbsp;  ?SYNTAX ERROR (0..1); EXPECTED RIGHT PARENTHESIS
&nbsp;> 2 ^ 8
&nbsp;  ?SYNTAX ERROR (2..3); UNSUPPORTED OPERATOR
</code></pre>

An error never changes your variables. A line holds at most 100 tokens
and a session at most 100 variables.

## Commands

Commands are typed alone on a line, exactly as shown.

 * `help` shows the commands and keys.
 * `clear` clears the screen.
 * `vars` lists every variable in the order it was first assigned.
 * `version` shows the version.
 * `exit` and `quit` leave the calculator.

The UP and DOWN keys walk through lines you entered before, and TAB
completes command and variable names.

*/
