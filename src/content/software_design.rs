use super::{CategoryDef, ExampleDef, RuleDef};
use crate::models::ExampleLabel::{Discouraged, Preferred};

pub const CATEGORY: CategoryDef = CategoryDef {
    id: "SoftwareDesign",
    name: "Software Design",
    description: "\
Guidelines for structuring modules, functions and processes. These rules \
are about the shape of APIs and the flow of data and errors rather than \
about syntax, so no formatter can apply them for you.",
    rules: RULES,
};

const RULES: &[RuleDef] = &[
    RuleDef {
        id: "assertive_code",
        summary: "Write assertive code that lets unexpected values crash",
        rationale: "\
Match on the values you expect and let anything else raise. Code that \
quietly accepts every shape of input turns a clear crash at the source \
into a confusing failure somewhere downstream.\n\n\
Supervisors exist to recover from those crashes, so there is rarely a \
reason to catch them by hand.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def parse_pair(string) do
  [key, value] = String.split(string, "=", parts: 2)
  {key, value}
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def parse_pair(string) do
  parts = String.split(string, "=")
  {Enum.at(parts, 0), Enum.at(parts, 1)}
end"#,
                caption: Some("Malformed input silently produces nil values"),
            },
        ],
    },
    RuleDef {
        id: "tagged_result_tuples",
        summary: "Return tagged tuples from operations that can fail",
        rationale: "\
Returning `{:ok, value}` or `{:error, reason}` makes failure part of the \
function's contract. Callers can pattern match on the tag, and the result \
composes with `with` expressions.\n\n\
Avoid returning `nil` or a bare value on failure, since callers cannot \
tell a missing result from a legitimate one.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def fetch_user(id) do
  case Repo.get(User, id) do
    nil -> {:error, :not_found}
    user -> {:ok, user}
  end
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def fetch_user(id) do
  Repo.get(User, id)
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "bang_functions_raise",
        summary: "Give a function a trailing bang only when it raises instead of returning an error",
        rationale: "\
The `!` suffix is a promise: `File.read!/1` returns the contents or \
raises, while `File.read/1` returns a tagged tuple. Provide both variants \
when callers need both behaviors, and implement the bang version on top \
of the tuple version.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def fetch_config!(key) do
  case fetch_config(key) do
    {:ok, value} -> value
    {:error, reason} -> raise ArgumentError, "missing config: #{inspect(reason)}"
  end
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def fetch_config!(key) do
  Application.get_env(:my_app, key)
end"#,
                caption: Some("Named with a bang but never raises"),
            },
        ],
    },
    RuleDef {
        id: "avoid_boolean_parameters",
        summary: "Prefer separate functions or atom options over boolean parameters",
        rationale: "\
A call such as `render(page, true)` says nothing about what `true` \
changes. Separate functions or a descriptive option make every call site \
self-explanatory and leave room for a third behavior later.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"render(page, format: :compact)"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"render(page, true)"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "long_parameter_lists",
        summary: "Group related parameters into a struct or keyword list",
        rationale: "\
Functions with many positional parameters are easy to call with arguments \
in the wrong order. Group values that travel together into a struct, and \
pass optional settings as a keyword list.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def send_email(%Email{} = email, opts \\ []) do
  deliver(email, Keyword.get(opts, :retries, 3))
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def send_email(to, from, subject, body, cc, bcc, retries) do
  deliver(to, from, subject, body, cc, bcc, retries)
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "structs_for_known_keys",
        summary: "Use structs instead of plain maps when the set of keys is known",
        rationale: "\
A struct declares its fields once and the compiler rejects unknown keys \
at build time. Plain maps are right for dynamic data such as decoded JSON, \
but not for the core data types of an application.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"defmodule Point do
  defstruct [:x, :y]
end

%Point{x: 1, y: 2}"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"%{x: 1, y: 2}"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "processes_for_runtime_concerns",
        summary: "Do not use processes to organize code that has no runtime concerns",
        rationale: "\
Processes model state, concurrency and failure isolation. Wrapping pure \
functions in a `GenServer` serializes every call through one mailbox and \
adds a bottleneck without adding any of those benefits.\n\n\
Use modules and functions to organize code, and reach for processes only \
when the runtime behavior requires them.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"defmodule Calculator do
  def add(a, b), do: a + b
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"defmodule Calculator do
  use GenServer

  def add(a, b), do: GenServer.call(__MODULE__, {:add, a, b})

  def handle_call({:add, a, b}, _from, state), do: {:reply, a + b, state}
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "thin_genserver_callbacks",
        summary: "Keep GenServer callbacks thin and move logic into pure functions",
        rationale: "\
Logic buried in `handle_call/3` can only be exercised by starting a \
process. Extract it into pure functions that take and return state, and \
let the callback delegate to them.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"def handle_call({:deposit, amount}, _from, account) do
  account = Account.deposit(account, amount)
  {:reply, account.balance, account}
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def handle_call({:deposit, amount}, _from, account) do
  if amount <= 0, do: raise(ArgumentError)
  fee = if account.tier == :basic, do: 1, else: 0
  account = %{account | balance: account.balance + amount - fee}
  {:reply, account.balance, account}
end"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "protocols_for_polymorphism",
        summary: "Use protocols for polymorphism instead of branching on data types",
        rationale: "\
A function that checks `is_map/1`, `is_list/1` and friends has to change \
every time a new type is supported. A protocol lets each type provide its \
own implementation, including types defined outside your application.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"defprotocol Size do
  def size(data)
end

defimpl Size, for: Map do
  def size(map), do: map_size(map)
end"#,
                caption: None,
            },
            ExampleDef {
                label: Discouraged,
                code: r#"def size(data) when is_map(data), do: map_size(data)
def size(data) when is_list(data), do: length(data)
def size(data) when is_binary(data), do: byte_size(data)"#,
                caption: None,
            },
        ],
    },
    RuleDef {
        id: "alias_over_import",
        summary: "Prefer alias over import to keep the origin of calls visible",
        rationale: "\
`import` brings functions into scope without a module prefix, so readers \
cannot tell where a call is defined. `alias` shortens the module name \
while keeping every call site explicit.\n\n\
When an import is warranted, restrict it with `only:`.",
        examples: &[
            ExampleDef {
                label: Preferred,
                code: r#"alias MyApp.Accounts.User

User.changeset(user, params)"#,
                caption: None,
            },
            ExampleDef {
                label: Preferred,
                code: r#"import Ecto.Query, only: [from: 2]"#,
                caption: Some("Restricted import"),
            },
            ExampleDef {
                label: Discouraged,
                code: r#"import MyApp.Accounts.User

changeset(user, params)"#,
                caption: None,
            },
        ],
    },
];
