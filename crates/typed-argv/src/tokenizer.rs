//! Single-pass token classification.
//!
//! One explicit forward index walks argv left to right; nothing here looks
//! at values beyond the one-token lookahead, and nothing downstream walks
//! argv again.

use crate::key::canonical_name;
use crate::value::{Hints, Kind};

/// One option occurrence as it appeared in argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedOption {
    pub raw_key: String,
    pub name: String,
    /// Absent when the key was followed by another key-like token, the
    /// separator, or end of input: a presence flag.
    pub value: Option<String>,
}

/// Split argv into option occurrences and positional arguments.
///
/// Classification per token, in priority order:
/// 1. `--` ends option parsing; everything after it is positional verbatim.
/// 2. A key-like token (first character `-`) with an `=` splits at the first
///    `=` into key and inline value (the value may be empty).
/// 3. A key-like token without `=` consumes the next token as its value when
///    that token exists, does not itself start with `-`, and the key's
///    canonical name is not Boolean-hinted.
/// 4. Anything else is positional.
pub(crate) fn tokenize(argv: &[&str], hints: &Hints) -> (Vec<ParsedOption>, Vec<String>) {
    let mut options = Vec::new();
    let mut positionals = Vec::new();

    let mut i = 0;
    while i < argv.len() {
        let token = argv[i];

        if token == "--" {
            positionals.extend(argv[i + 1..].iter().map(|s| s.to_string()));
            break;
        }

        if token.starts_with('-') {
            let option = if let Some((raw_key, inline)) = token.split_once('=') {
                ParsedOption {
                    raw_key: raw_key.to_string(),
                    name: canonical_name(raw_key),
                    value: Some(inline.to_string()),
                }
            } else {
                let name = canonical_name(token);
                let value = match argv.get(i + 1) {
                    Some(next)
                        if !next.starts_with('-') && hints.get(&name) != Some(Kind::Boolean) =>
                    {
                        i += 1;
                        Some(next.to_string())
                    }
                    _ => None,
                };
                ParsedOption {
                    raw_key: token.to_string(),
                    name,
                    value,
                }
            };
            tracing::trace!(
                key = %option.raw_key,
                name = %option.name,
                has_value = option.value.is_some(),
                "option token"
            );
            options.push(option);
            i += 1;
            continue;
        }

        positionals.push(token.to_string());
        i += 1;
    }

    (options, positionals)
}
