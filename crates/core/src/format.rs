//! Pattern checks for keys, shortcuts, and name/path slugs.
//!
//! The pattern source strings are exported as constants: any persisted
//! form must satisfy them retroactively, so they are part of the
//! external contract and must not drift.

use regex::Regex;
use std::sync::LazyLock;

/// A slug is invalid iff this pattern matches: any character outside
/// `[0-9a-zA-Z/_-]`, or a leading/trailing hyphen or slash. The empty
/// string does not match; emptiness is a required-field failure, not a
/// format failure.
pub const INVALID_SLUG_PATTERN: &str = "[^0-9a-zA-Z/_-]|^-|-$|^/|/$";

/// A single word character, or word characters bracketing a middle run
/// of word/hyphen/dot characters.
pub const VALID_KEY_PATTERN: &str = r"^(\w|\w[\w.-]*\w)$";

/// A single letter or the literal tokens `Enter`/`Esc`, case-insensitive.
pub const VALID_SHORTCUT_PATTERN: &str = r"(?i)^([A-Z]|Enter|Esc)$";

/// Reserved route segments owned by collaborating subsystems; a form
/// path may not end with one (trailing slash tolerated).
pub const RESERVED_PATH_PATTERN: &str = r"(submission|action)/?$";

static INVALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INVALID_SLUG_PATTERN).unwrap());
static VALID_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(VALID_KEY_PATTERN).unwrap());
static VALID_SHORTCUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VALID_SHORTCUT_PATTERN).unwrap());
static RESERVED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RESERVED_PATH_PATTERN).unwrap());

pub fn is_valid_key(s: &str) -> bool {
    VALID_KEY.is_match(s)
}

pub fn is_valid_shortcut(s: &str) -> bool {
    VALID_SHORTCUT.is_match(s)
}

pub fn is_valid_slug(s: &str) -> bool {
    !INVALID_SLUG.is_match(s)
}

pub fn ends_with_reserved_suffix(path: &str) -> bool {
    RESERVED_PATH.is_match(path)
}
