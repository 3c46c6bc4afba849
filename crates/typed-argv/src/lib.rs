//! Zero-configuration argv parsing with automatic type inference.
//!
//! This crate is intentionally small so it can be embedded by tools that
//! want argv parsed without declaring a schema first:
//! - option keys normalize to camel-case names (`--some-flag` → `someFlag`)
//! - values are auto-typed as booleans, numbers, or strings
//! - per-option hints pin a type explicitly, including working-directory
//!   relative paths
//!
//! Parsing never fails: unparseable numbers become `NaN`, value-less keys
//! become presence flags, and the metadata block records how every option's
//! type was decided.
//!
//! ```
//! use typed_argv::{parse_with_hints, Hints, Kind};
//!
//! let parsed = parse_with_hints(&["--jobs", "4", "in.txt", "-v"], &Hints::new().hint("jobs", Kind::Number));
//! assert_eq!(parsed.get("jobs").and_then(|v| v.as_number()), Some(4.0));
//! assert_eq!(parsed.get("v").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(parsed.positional_args, vec!["in.txt"]);
//! ```

mod env;
mod key;
mod path;
mod tokenizer;
mod value;

pub use env::{Environment, ProcessEnv};
pub use path::ResolvedPath;
pub use value::{Hints, Kind, Value};

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Decision;

/// How each option's type was decided, keyed for traceability.
///
/// A canonical name with a value appears in exactly one of `hints`/`guesses`,
/// and every raw key it was spelled with appears in `keys`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metadata {
    /// Raw key → canonical name, one entry per distinct raw key.
    pub keys: IndexMap<String, String>,
    /// Canonical name → the hint type applied.
    pub hints: IndexMap<String, Kind>,
    /// Canonical name → the type automatically inferred.
    pub guesses: IndexMap<String, Kind>,
}

/// Result of a parse: typed options, ordered positionals, and metadata.
///
/// Map iteration follows first-occurrence order; a repeated option
/// overwrites its value without moving its position.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parsed {
    pub options: IndexMap<String, Value>,
    pub positional_args: Vec<String>,
    pub metadata: Metadata,
}

impl Parsed {
    /// Look up an option value by canonical name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}

/// Parse argv with no hints, resolving paths against the process working
/// directory.
pub fn parse<S: AsRef<str>>(argv: &[S]) -> Parsed {
    parse_with_env(argv, &Hints::new(), &ProcessEnv)
}

/// Parse argv with per-option type hints, resolving paths against the
/// process working directory.
pub fn parse_with_hints<S: AsRef<str>>(argv: &[S], hints: &Hints) -> Parsed {
    parse_with_env(argv, hints, &ProcessEnv)
}

/// Parse argv with hints and an explicit environment.
///
/// The environment is consulted lazily, at most once per path-hinted option
/// that has a value to resolve; a hint-free parse never touches it.
pub fn parse_with_env<S: AsRef<str>>(argv: &[S], hints: &Hints, env: &dyn Environment) -> Parsed {
    let tokens: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();
    tracing::debug!(tokens = tokens.len(), "parsing argv");

    let (occurrences, positional_args) = tokenizer::tokenize(&tokens, hints);

    let mut options = IndexMap::new();
    let mut metadata = Metadata::default();
    for occurrence in occurrences {
        metadata
            .keys
            .insert(occurrence.raw_key, occurrence.name.clone());

        let (value, decision) = value::coerce(&occurrence.name, occurrence.value.as_deref(), hints, env);
        match decision {
            Decision::Hinted(kind) => {
                metadata.hints.insert(occurrence.name.clone(), kind);
            }
            Decision::Guessed(kind) => {
                metadata.guesses.insert(occurrence.name.clone(), kind);
            }
        }
        // IndexMap keeps the first occurrence's position on overwrite.
        options.insert(occurrence.name, value);
    }

    Parsed {
        options,
        positional_args,
        metadata,
    }
}
