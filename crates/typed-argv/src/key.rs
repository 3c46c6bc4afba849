//! Raw option key normalization.

/// Normalize a raw option key to its canonical camel-case name.
///
/// Leading hyphens are stripped regardless of count, so `-flag`, `--flag`
/// and `---flag` all normalize identically. `-`, `_` and `:` inside the
/// name act as word separators: they are removed and the character that
/// follows is upper-cased. Everything else passes through in place.
///
/// `--some-flag` → `someFlag`, `--another_thing` → `anotherThing`,
/// `-c:v` → `cV`.
pub fn canonical_name(raw_key: &str) -> String {
    let name = raw_key.trim_start_matches('-');
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        match c {
            '-' | '_' | ':' => upper_next = true,
            _ if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            _ => out.push(c),
        }
    }
    out
}
