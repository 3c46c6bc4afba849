//! Value typing: hint declarations, automatic guessing, and coercion.

use serde::Serialize;
use std::collections::HashMap;

use crate::env::Environment;
use crate::path::ResolvedPath;

/// Expected or inferred type of an option value.
///
/// Doubles as the caller-supplied hint and as the tag recorded in
/// [`Metadata::hints`](crate::Metadata)/[`Metadata::guesses`](crate::Metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Boolean,
    Number,
    String,
    Path,
}

/// Per-option type hints, keyed by canonical name (never by raw key).
///
/// Hints for names that never show up in the input are silently ignored.
#[derive(Debug, Clone, Default)]
pub struct Hints {
    by_name: HashMap<String, Kind>,
}

impl Hints {
    /// Create an empty hint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the expected type for a canonical option name.
    pub fn hint(mut self, name: impl Into<String>, kind: Kind) -> Self {
        self.by_name.insert(name.into(), kind);
        self
    }

    pub(crate) fn get(&self, name: &str) -> Option<Kind> {
        self.by_name.get(name).copied()
    }
}

/// A typed option value.
///
/// Serializes untagged: a bool, a number, a string, or a
/// `{segments, separator}` object. A failed numeric coercion is
/// `Number(f64::NAN)`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Str(String),
    Path(ResolvedPath),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&ResolvedPath> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// How an option's type was decided, for the metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Hinted(Kind),
    Guessed(Kind),
}

/// Coerce one option occurrence to a typed value.
///
/// An applicable hint governs entirely; guessing only runs when no hint
/// exists for the canonical name. The environment is consulted lazily, once
/// per path-hinted value.
pub(crate) fn coerce(
    name: &str,
    raw: Option<&str>,
    hints: &Hints,
    env: &dyn Environment,
) -> (Value, Decision) {
    match hints.get(name) {
        Some(kind) => (apply_hint(kind, raw, env), Decision::Hinted(kind)),
        None => {
            let (value, kind) = guess(raw);
            (value, Decision::Guessed(kind))
        }
    }
}

fn apply_hint(kind: Kind, raw: Option<&str>, env: &dyn Environment) -> Value {
    // Hints change how a present value is interpreted; they never fabricate
    // one. A value-less key stays a presence flag no matter the hint.
    let Some(raw) = raw else {
        return Value::Bool(true);
    };
    match kind {
        Kind::Boolean => Value::Bool(true),
        Kind::Number => Value::Number(parse_number(raw).unwrap_or(f64::NAN)),
        Kind::String => Value::Str(raw.to_string()),
        Kind::Path => Value::Path(ResolvedPath::resolve(raw, &env.current_dir())),
    }
}

// Guessing never produces a path: paths are reachable only through a hint.
fn guess(raw: Option<&str>) -> (Value, Kind) {
    match raw {
        None => (Value::Bool(true), Kind::Boolean),
        Some("true") => (Value::Bool(true), Kind::Boolean),
        Some("false") => (Value::Bool(false), Kind::Boolean),
        Some(raw) => match parse_number(raw) {
            Some(n) => (Value::Number(n), Kind::Number),
            None => (Value::Str(raw.to_string()), Kind::String),
        },
    }
}

/// Parse an optionally signed integer or float literal.
///
/// Exponent notation is allowed; any other alphabetic content (hex, `inf`,
/// `nan`) disqualifies the string.
fn parse_number(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    if raw
        .chars()
        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    raw.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> impl Environment {
        || -> String { panic!("environment must not be consulted") }
    }

    #[test]
    fn absent_value_guesses_boolean_true() {
        let (value, kind) = guess(None);
        assert_eq!(value, Value::Bool(true));
        assert_eq!(kind, Kind::Boolean);
    }

    #[test]
    fn boolean_literals_guess_boolean() {
        assert_eq!(guess(Some("true")), (Value::Bool(true), Kind::Boolean));
        assert_eq!(guess(Some("false")), (Value::Bool(false), Kind::Boolean));
    }

    #[test]
    fn numeric_literals_guess_number() {
        assert_eq!(guess(Some("52")), (Value::Number(52.0), Kind::Number));
        assert_eq!(guess(Some("-1.5")), (Value::Number(-1.5), Kind::Number));
        assert_eq!(guess(Some("1e3")), (Value::Number(1000.0), Kind::Number));
    }

    #[test]
    fn everything_else_guesses_string() {
        let cases = ["potato", "null", "undefined", "", "0x10", "inf", "nan"];
        for raw in cases {
            let (value, kind) = guess(Some(raw));
            assert_eq!(value, Value::Str(raw.to_string()), "raw: {raw:?}");
            assert_eq!(kind, Kind::String, "raw: {raw:?}");
        }
    }

    #[test]
    fn number_hint_failure_is_nan() {
        let hints = Hints::new().hint("n", Kind::Number);
        let (value, decision) = coerce("n", Some("this is a string tho"), &hints, &no_env());
        assert!(value.as_number().is_some_and(f64::is_nan));
        assert_eq!(decision, Decision::Hinted(Kind::Number));
    }

    #[test]
    fn string_hint_keeps_value_verbatim() {
        let hints = Hints::new().hint("s", Kind::String);
        let (value, _) = coerce("s", Some("52"), &hints, &no_env());
        assert_eq!(value, Value::Str("52".to_string()));
    }

    #[test]
    fn hints_never_fabricate_a_value() {
        let hints = Hints::new()
            .hint("s", Kind::String)
            .hint("p", Kind::Path)
            .hint("n", Kind::Number);
        for name in ["s", "p", "n"] {
            let (value, decision) = coerce(name, None, &hints, &no_env());
            assert_eq!(value, Value::Bool(true), "name: {name}");
            assert!(matches!(decision, Decision::Hinted(_)), "name: {name}");
        }
    }

    #[test]
    fn boolean_hint_is_presence_only() {
        let hints = Hints::new().hint("v", Kind::Boolean);
        let (value, _) = coerce("v", Some("false"), &hints, &no_env());
        assert_eq!(value, Value::Bool(true));
    }

    #[test]
    fn unmatched_hint_name_falls_back_to_guessing() {
        let hints = Hints::new().hint("somethingElse", Kind::Number);
        let (value, decision) = coerce("x", Some("abc"), &hints, &no_env());
        assert_eq!(value, Value::Str("abc".to_string()));
        assert_eq!(decision, Decision::Guessed(Kind::String));
    }

    #[test]
    fn path_hint_consults_environment() {
        let hints = Hints::new().hint("p", Kind::Path);
        let env = || "/some/fake/path".to_string();
        let (value, decision) = coerce("p", Some("./blah"), &hints, &env);
        let path = value.as_path().expect("path value");
        assert_eq!(path.segments, vec!["", "some", "fake", "path", "blah"]);
        assert_eq!(decision, Decision::Hinted(Kind::Path));
    }

    #[test]
    fn number_literal_shapes() {
        assert_eq!(parse_number("500"), Some(500.0));
        assert_eq!(parse_number("+5"), Some(5.0));
        assert_eq!(parse_number("-.5"), Some(-0.5));
        assert_eq!(parse_number("2E2"), Some(200.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("e"), None);
        assert_eq!(parse_number("0x10"), None);
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("5potato"), None);
    }
}
