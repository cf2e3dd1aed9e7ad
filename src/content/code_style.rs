use super::{CategoryDef, ExampleDef, RuleDef};
use crate::models::ExampleLabel::{Discouraged, Preferred};

pub const CATEGORY: CategoryDef = CategoryDef {
    id: "CodeStyle",
    name: "Code Style",
    description: "\
Conventions for the surface of Elixir code: layout, naming and the small \
syntactic choices that make a codebase read as if one person wrote it. \
Most of these are mechanical once learned, and `mix format` enforces a \
subset of them automatically.",
    rules: RULES,
};

const RULES: &[RuleDef] = &[
    RuleDef {
        id: "inline_block_usage",
        summary: "Inline blocks should be preferred for simple code that fits one line",
        rationale: "\
The `do:` keyword form keeps short function bodies and conditionals on a \
single line, which makes a group of small clauses easy to scan.\n\n\
Once the body needs more than one expression, or no longer fits \
comfortably on a line, switch to a full `do`/`end` block.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def add_two(number), do: number + 2"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def add_two(number) do
  number + 2
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "pipe_operator_chains",
        summary: "Use the pipe operator to chain functions that transform the same value",
        rationale: "\
A pipeline reads top to bottom in the order the transformations happen. \
Nested calls have to be read inside out and hide which argument is the \
subject of each step.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"input
|> String.trim()
|> String.downcase()
|> String.split(",")"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"String.split(String.downcase(String.trim(input)), ",")"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "bare_variable_pipeline_start",
        summary: "Start pipelines with a bare value rather than a function call",
        rationale: "\
Beginning a pipeline with a plain value makes the subject of the chain \
obvious. When the first step is itself a call, the reader has to work out \
which argument the pipeline is threading through.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"path
|> File.read!()
|> String.split("\n")"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"File.read!(path)
|> String.split("\n")"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "avoid_single_pipe",
        summary: "Avoid using the pipe operator for a single function call",
        rationale: "\
A pipe with a single step adds a line and an operator without making the \
data flow clearer. Call the function directly.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"String.downcase(name)"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"name |> String.downcase()"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "multiline_clause_spacing",
        summary: "Separate multi-line function definitions with a blank line",
        rationale: "\
A blank line between multi-line definitions marks where one function ends \
and the next begins.\n\n\
Single-line clauses of the same function are the exception: keep them \
together so the clauses read as one definition.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def some_function(some_data) do
  some_data |> other_function() |> List.first()
end

def some_function do
  :result
end"#,
                caption: None,
            },
            ExampleDef {
                label: Preferred,
                code: r#"def size([]), do: 0
def size([_ | tail]), do: 1 + size(tail)"#,
                caption: Some("Single-line clauses stay grouped"),
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def some_function(some_data) do
  some_data |> other_function() |> List.first()
end
def some_function do
  :result
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "zero_arity_parentheses",
        summary: "Omit parentheses in function definitions that take no arguments",
        rationale: "\
Parentheses on a zero-arity definition carry no information. Leave them \
off the definition, and keep them on the call site where they distinguish \
a function call from a variable.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def default_timeout do
  5_000
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def default_timeout() do
  5_000
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "predicate_function_naming",
        summary: "Name functions that return a boolean with a trailing question mark",
        rationale: "\
A trailing `?` tells the caller that the function answers a yes or no \
question. Reserve the `is_` prefix for guard-safe macros such as \
`is_binary/1`, since those are the only predicates allowed in guards.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def expired?(%Session{expires_at: expires_at}) do
  DateTime.compare(expires_at, DateTime.utc_now()) == :lt
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def is_expired(%Session{expires_at: expires_at}) do
  DateTime.compare(expires_at, DateTime.utc_now()) == :lt
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "snake_case_identifiers",
        summary: "Use snake_case for atoms, functions and variables",
        rationale: "\
Every identifier the standard library exposes below the module level is \
snake_case. Matching it keeps application code and library calls visually \
consistent.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#":some_atom
some_var = 5
def some_function do
  :ok
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#":"some atom"
:SomeAtom
someVar = 5
def someFunction do
  :ok
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "camel_case_modules",
        summary: "Use CamelCase for module names and keep acronyms uppercase",
        rationale: "\
Module names are atoms that the compiler maps to file and beam names. \
CamelCase with uppercase acronyms (`HTTPClient`, not `HttpClient`) matches \
the conventions of Elixir itself and of most of the ecosystem.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"defmodule MyApp.HTTPClient do
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"defmodule MyApp.Http_client do
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "with_for_happy_path",
        summary: "Use with to chain steps that may fail instead of nesting case expressions",
        rationale: "\
Nested `case` expressions push the successful path further to the right \
with every step. A `with` expression keeps the happy path flat and \
collects failure handling in one `else` block.\n\n\
Only add an `else` block when failures need to be transformed; otherwise \
the non-matching value is returned as-is.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"with {:ok, user} <- fetch_user(id),
     {:ok, account} <- fetch_account(user) do
  {:ok, account.balance}
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"case fetch_user(id) do
  {:ok, user} ->
    case fetch_account(user) do
      {:ok, account} -> {:ok, account.balance}
      error -> error
    end

  error ->
    error
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "unless_without_else",
        summary: "Never use unless together with else",
        rationale: "\
An `unless` with an `else` branch is a double negative. Rewrite it as an \
`if` with the positive case first.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"if success do
  IO.puts("success")
else
  IO.puts("failure")
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"unless success do
  IO.puts("failure")
else
  IO.puts("success")
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "pattern_match_in_heads",
        summary: "Pattern match in function heads instead of branching in the body",
        rationale: "\
Multiple clauses that each match one shape of input document the \
accepted shapes in the signature. A single clause that inspects its \
argument with `case` or `cond` hides that information in the body.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def handle({:ok, value}), do: value
def handle({:error, reason}), do: raise(reason)"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def handle(result) do
  case result do
    {:ok, value} -> value
    {:error, reason} -> raise(reason)
  end
end"#,
                caption: None,
            },
        ],
    },
];
