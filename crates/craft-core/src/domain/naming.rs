//! Naming conventions: pure string transformations.
//!
//! # Design
//!
//! These are free functions with no I/O and no failure modes. An empty
//! input yields an empty (or minimally-derived) output rather than an
//! error; callers that require a non-empty name validate before deriving.
//!
//! `pluralize` is an English heuristic, not a dictionary: it covers the
//! regular cases (`tag` → `tags`, `category` → `categories`, `bus` →
//! `buses`) and knowingly gets irregulars wrong (`person` → `persons`).

/// Pluralize a word using English-heuristic rules.
///
/// ## Rules
///
/// | Ending                  | Result          |
/// |-------------------------|-----------------|
/// | `y`                     | `y` → `ies`     |
/// | `s`, `sh`, `ch`, `x`, `z` | append `es`   |
/// | anything else           | append `s`      |
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Uppercase the first character, leaving the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert to snake_case.
///
/// Inserts an underscore before every uppercase letter, lowercases the
/// whole string, and strips a leading underscore.
///
/// | Input          | Output          |
/// |----------------|-----------------|
/// | "PlaylistTeam" | "playlist_team" |
/// | "song"         | "song"          |
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_owned(),
        None => out,
    }
}

/// Convert an underscore-delimited string to camelCase.
///
/// Each underscore is removed and the following letter uppercased.
///
/// | Input           | Output         |
/// |-----------------|----------------|
/// | "playlist_team" | "playlistTeam" |
/// | "song"          | "song"         |
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Derive a conventional table name from a model name.
///
/// `to_snake_case` then `pluralize`: `"PlaylistTeam"` → `"playlist_teams"`.
/// Deterministic: the same input always yields the same output.
pub fn table_name(model_name: &str) -> String {
    pluralize(&to_snake_case(model_name))
}

/// Append `suffix` to `name` unless it is already present.
///
/// Idempotent: `ensure_suffix("FooController", "Controller")` is
/// `"FooController"`, never `"FooControllerController"`.
pub fn ensure_suffix(name: &str, suffix: &str) -> String {
    if name.ends_with(suffix) {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}
