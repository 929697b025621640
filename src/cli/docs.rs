//! Operator reference for the jsonlogic CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Rules,
    Data,
    Logic,
    Comparison,
    Arithmetic,
    Arrays,
    Strings,
    Patterns,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "rules" | "rule" | "syntax" => Some(Self::Rules),
            "data" | "var" | "missing" => Some(Self::Data),
            "logic" | "if" | "truthy" => Some(Self::Logic),
            "comparison" | "compare" | "equality" => Some(Self::Comparison),
            "arithmetic" | "math" | "numbers" => Some(Self::Arithmetic),
            "arrays" | "array" | "lists" => Some(Self::Arrays),
            "strings" | "string" => Some(Self::Strings),
            "patterns" | "rule_like" | "uses_data" => Some(Self::Patterns),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"JSONLOGIC DOCUMENTATION

Rules are JSON values. An object with exactly one key is an operation,
{"operator": [arguments]}; a list is a list of rules; everything else is
returned as it is.

DOCUMENTATION CATEGORIES

  rules             Rule shapes, argument sugar, evaluation order
  data              var, missing, missing_some
  logic             Truthiness, if / ?:, and, or, !, !!
  comparison        ==, ===, !=, !==, <, <=, >, >=
  arithmetic        +, -, *, /, %, min, max
  arrays            map, filter, reduce, all, none, some, merge, in
  strings           cat, substr, in
  patterns          rule-like matching and uses-data

QUICK REFERENCE

  {"var": "a.b"}                      Read data
  {"if": [cond, then, else]}          Branch
  {"and": [a, b]}                     First falsy, or last
  {"map": [list, rule]}               Rule per element
  {"log": value}                      Log and pass through

Run 'jsonlogic doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Rules) => Ok(RULES_DOC),
        Some(DocCategory::Data) => Ok(DATA_DOC),
        Some(DocCategory::Logic) => Ok(LOGIC_DOC),
        Some(DocCategory::Comparison) => Ok(COMPARISON_DOC),
        Some(DocCategory::Arithmetic) => Ok(ARITHMETIC_DOC),
        Some(DocCategory::Arrays) => Ok(ARRAYS_DOC),
        Some(DocCategory::Strings) => Ok(STRINGS_DOC),
        Some(DocCategory::Patterns) => Ok(PATTERNS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const RULES_DOC: &str = r#"RULES - Shapes and Evaluation

OPERATIONS
  {"operator": [arg, arg, ...]}
    An object with exactly one key. Arguments are evaluated first, then the
    operator runs on the results.

  {"operator": arg}
    A single non-list argument is shorthand for a one-element list:
    {"var": "a"} is the same rule as {"var": ["a"]}.

LITERALS
  Numbers, strings, booleans and null evaluate to themselves. So do objects
  with zero or several keys: {"a": 1, "b": 2} is data, not an operation.

LISTS
  [rule, rule, ...]
    Each element is evaluated; the result is a list.

    Example:
      Rule:   [1, {"var": "x"}, 3]
      Data:   {"x": 2}
      Output: [1, 2, 3]

LAZY OPERATORS
  if, ?:, and, or evaluate only the arguments they need.
  map, filter, reduce, all, none, some evaluate their second argument once
  per element, with the element as data.

UNKNOWN OPERATORS
  An operator with no registered implementation is an error:
    Unrecognized operation fubar
    Unrecognized operation fubar.rabuf (failed at fubar)
"#;

const DATA_DOC: &str = r#"DATA - Reading the Data Context

VAR
  {"var": "path"}
  {"var": ["path", default]}
    Walk a dot-separated path through objects (by key) and lists (by index).
    Returns the default (or null) when the path does not resolve. A value
    that does resolve is returned even when it is 0, "" or false.

    Examples:
      {"var": "a.b"}            {"a": {"b": "c"}}     => "c"
      {"var": 1}                ["apple", "banana"]   => "banana"
      {"var": ["x", "none"]}    {}                    => "none"
      {"var": ""}               42                    => 42

MISSING
  {"missing": ["a", "b"]}
    Keys whose value is null, absent or "". A single list argument works
    too, so the keys can be computed:

      {"missing": {"merge": ["vin", {"if": [{"var": "financing"}, ["apr"], []]}]}}

MISSING_SOME
  {"missing_some": [need, ["a", "b", "c"]]}
    [] when at least `need` keys are present, otherwise the missing keys.

    Example:
      {"missing_some": [2, ["a", "b", "c"]]}   {"a": 1}   => ["b", "c"]
"#;

const LOGIC_DOC: &str = r#"LOGIC - Truthiness and Control Flow

TRUTHINESS
  Falsy:   false, 0, "", null, [] (the empty list)
  Truthy:  everything else, including "0", [0] and {}

IF
  {"if": [cond, then]}
  {"if": [cond, then, else]}
  {"if": [c1, t1, c2, t2, ..., else]}
    The first truthy condition selects its branch; later conditions are not
    evaluated. With no match and no else, the result is null.
    "?:" is an alias.

AND / OR
  {"and": [a, b, ...]}    First falsy value, or the last value
  {"or":  [a, b, ...]}    First truthy value, or the last value
    Both stop evaluating as soon as the result is known.

NOT
  {"!": value}     Negated truthiness
  {"!!": value}    Truthiness as a boolean
"#;

const COMPARISON_DOC: &str = r#"COMPARISON - Equality and Ordering

EQUALITY
  {"==": [a, b]}     Loose: 1 == "1", 0 == false, null == null
  {"!=": [a, b]}
  {"===": [a, b]}    Strict: no conversion between types
  {"!==": [a, b]}

ORDERING
  {"<": [a, b]}   {"<=": [a, b]}   {">": [a, b]}   {">=": [a, b]}
    Two strings compare alphabetically; anything else compares as numbers.
    "2" > 1 is true.

RANGES
  {"<": [a, b, c]}     a < b and b < c
  {"<=": [a, b, c]}    a <= b and b <= c

    Example:
      {"<=": [0, {"var": "temp"}, 100]}
"#;

const ARITHMETIC_DOC: &str = r#"ARITHMETIC - Numbers

OPERATORS
  {"+": [a, b, ...]}    Sum (no arguments: 0)
  {"*": [a, b, ...]}    Product (no arguments: 1)
  {"-": [a, b]}         Difference
  {"-": [a]}            Negation
  {"/": [a, b]}         Quotient
  {"%": [a, b]}         Remainder
  {"min": [...]}        Smallest
  {"max": [...]}        Largest

CONVERSION
  Strings are read up to the first non-numeric character ("12px" is 12,
  "abc" is NaN); true is 1, false and null are 0.

    {"+": ["1", 1]}    => 2
    {"+": "3.5"}       => 3.5  (unary + converts a string)

PRECISION
  +, - and * on short decimals are exact: {"+": [0.1, 0.2]} is 0.3.
  / and % use double precision. Whole results are integers.
"#;

const ARRAYS_DOC: &str = r#"ARRAYS - List Operations

Inside map, filter, all, none and some, {"var": ""} is the current element
and {"var": "field"} reads a field of it.

MAP / FILTER
  {"map": [list, rule]}       Rule result per element
  {"filter": [list, rule]}    Elements whose rule result is truthy
    A non-list source gives [].

REDUCE
  {"reduce": [list, rule, initial]}
    The rule sees {"current": element, "accumulator": running value}.

    Example:
      {"reduce": [{"var": "n"}, {"+": [{"var": "current"}, {"var": "accumulator"}]}, 0]}

ALL / NONE / SOME
  {"all": [list, rule]}     false for an empty list
  {"none": [list, rule]}    true for an empty list
  {"some": [list, rule]}    false for an empty list

MERGE
  {"merge": [a, b, ...]}
    Flattens one level; non-list arguments become single elements.

IN
  {"in": [x, list]}    Whether the list contains x
"#;

const STRINGS_DOC: &str = r#"STRINGS - Text Operations

CAT
  {"cat": [a, b, ...]}
    Concatenates arguments, converting them to strings. null becomes "".

SUBSTR
  {"substr": [text, start]}
  {"substr": [text, start, length]}
    A negative start counts from the end; a negative length drops that many
    characters from the end.

    Examples:
      {"substr": ["jsonlogic", 4]}        => "logic"
      {"substr": ["jsonlogic", -5, -2]}   => "log"

IN
  {"in": ["Spring", "Springfield"]}    Substring test
"#;

const PATTERNS_DOC: &str = r#"PATTERNS - Inspecting Rules

RULE-LIKE
  jsonlogic rule-like '<rule>' '<pattern>'
    Whether a rule has a given shape. In patterns:
      "@"          matches anything
      "number"     matches a number
      "string"     matches a string
      "array"      matches a list
      {"@": ...}   matches any operator
    Lists match position by position.

    Example:
      rule:    {"*": [0.01, {"var": "goods"}]}
      pattern: {"*": ["number", "@"]}
      => true

USES-DATA
  jsonlogic uses-data '<rule>'
    The var paths a rule reads, without evaluating it.

    Example:
      {"and": [{"var": "a"}, {"<": [{"var": "b.c"}, 3]}]}   => ["a", "b.c"]
"#;
