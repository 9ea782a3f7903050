/*!
# The Joovy Language

A Joovy program is a sequence of declarations and statements.
Semicolons between statements are optional.
Comments run from `//` to the end of the line.

<pre><code>&nbsp;  int x = 2; int y = 3;
&nbsp;  print(x + y * 2);
&nbsp;  8
</code></pre>

## Values
There are four kinds of value: integers, floats, booleans and strings.
Integer arithmetic that overflows is an error rather than wrapping.
Division always produces a float, so `7 / 2` is `3.5` and `6 / 3` is `2.0`.
Mixing an integer and a float promotes the integer.
Strings may be joined with `+` and compared with any comparison operator.
Booleans can only be compared with `==` and `!=`.

In a condition, `false`, `0`, `0.0` and `""` are false.
Everything else is true.

## Declarations
`int`, `float`, `bool` and `string` introduce variables.
An initializer is optional; a variable without one has no value until
something is assigned to it, and reading it first is an error.

```text
float a, b = 1.5
const int LIMIT = 10, STEP = -1
```

Constants must be initialized with a literal.

## `if (condition) { ... } else { ... }`
The `else` block is optional.

## `for (i in start..end) { ... }`
Counts `i` up by one from `start` to `end` inclusive. Both bounds must
be number literals and `start` may not be greater than `end`.

```text
for (i in 1..3) { print(i) }
1
2
3
```

## `print(a, b, ...)`
Prints its arguments on one line separated by spaces.
Floats always show a decimal point.

## `input(name)`
Reads one line. The text becomes an integer if it looks like one,
otherwise a float if it looks like one, otherwise a string.
At end of input the variable is set to `0`.

## Functions
`def name(a, b) { ... }` is accepted and calls like `name(1, 2)` parse,
but neither produces any code. A call used as a value leaves nothing
on the stack, which fails at run time.

## Errors
Lexical errors are all reported together and nothing is translated.
Translation stops at the first error. Run time errors stop the program
and show the failing address, instruction and operand stack.

*/
