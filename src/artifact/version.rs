//! Maven-style version handling.
//!
//! Versions are compared the way Maven orders resolved artifacts: numeric
//! segments numerically, well-known qualifiers by release maturity, and
//! unknown qualifiers lexically after every known one. Snapshot detection
//! recognises both the literal `-SNAPSHOT` suffix and the timestamped form
//! that remote repositories substitute for it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Suffix identifying a snapshot version.
pub const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Compile a built-in pattern.
///
/// # Panics
///
/// Panics with `context` if `pattern` is not a valid regular expression.
/// Only fixed literals are passed in, and the unit tests force every one of
/// them, so a bad pattern fails the test suite rather than a caller.
fn compile_regex(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("{context}: {error}"))
}

/// `<base>-yyyyMMdd.HHmmss-<build>`
static TIMESTAMPED_SNAPSHOT: Lazy<Regex> = Lazy::new(|| {
    compile_regex(
        r"^(.*)-(\d{8}\.\d{6})-(\d+)$",
        "timestamped snapshot pattern should compile",
    )
});

/// Return whether `version` denotes a snapshot.
///
/// # Examples
///
/// ```
/// use nar_mvn::artifact::version::is_snapshot;
///
/// assert!(is_snapshot("1.2.0-SNAPSHOT"));
/// assert!(is_snapshot("1.2.0-20240101.120000-3"));
/// assert!(!is_snapshot("1.2.0"));
/// ```
///
/// # Panics
///
/// Panics on first use if the built-in timestamped snapshot pattern fails
/// to compile, which the unit tests rule out.
#[must_use]
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX) || TIMESTAMPED_SNAPSHOT.is_match(version)
}

/// Return the base version used for repository directories.
///
/// Timestamped snapshots collapse back to `<base>-SNAPSHOT`; every other
/// version is returned unchanged.
///
/// # Examples
///
/// ```
/// use nar_mvn::artifact::version::base_version;
///
/// assert_eq!(base_version("1.2.0-20240101.120000-3"), "1.2.0-SNAPSHOT");
/// assert_eq!(base_version("1.2.0"), "1.2.0");
/// ```
///
/// # Panics
///
/// Panics on first use if the built-in timestamped snapshot pattern fails
/// to compile, which the unit tests rule out.
#[must_use]
pub fn base_version(version: &str) -> String {
    TIMESTAMPED_SNAPSHOT
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || version.to_owned(),
            |base| format!("{}-{SNAPSHOT_SUFFIX}", base.as_str()),
        )
}

/// Compare two version strings using Maven ordering rules.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use nar_mvn::artifact::version::compare_versions;
///
/// assert_eq!(compare_versions("1.8.1", "1.10"), Ordering::Less);
/// assert_eq!(compare_versions("1.0-SNAPSHOT", "1.0"), Ordering::Less);
/// assert_eq!(compare_versions("1.0", "1"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left_items = tokenize(left);
    let right_items = tokenize(right);
    let len = left_items.len().max(right_items.len());

    for position in 0..len {
        let ordering = match (left_items.get(position), right_items.get(position)) {
            (Some(l), Some(r)) => l.compare(r),
            (Some(l), None) => l.compare_to_missing(),
            (None, Some(r)) => r.compare_to_missing().reverse(),
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Digits with leading zeros removed.
    Number(String),
    /// Lowercased qualifier text.
    Qualifier(String),
}

impl Item {
    fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self::Number(trimmed.to_owned())
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(l), Self::Number(r)) => l.len().cmp(&r.len()).then_with(|| l.cmp(r)),
            (Self::Number(_), Self::Qualifier(_)) => Ordering::Greater,
            (Self::Qualifier(_), Self::Number(_)) => Ordering::Less,
            (Self::Qualifier(l), Self::Qualifier(r)) => qualifier_rank(l).cmp(&qualifier_rank(r)),
        }
    }

    /// Compare against the implicit padding of a shorter version.
    fn compare_to_missing(&self) -> Ordering {
        match self {
            Self::Number(digits) if digits.is_empty() => Ordering::Equal,
            Self::Number(_) => Ordering::Greater,
            Self::Qualifier(q) => qualifier_rank(q).cmp(&RELEASE_RANK),
        }
    }
}

const RELEASE_RANK: (u8, &str) = (5, "");

fn qualifier_rank(qualifier: &str) -> (u8, &str) {
    match qualifier {
        "alpha" | "a" => (0, ""),
        "beta" | "b" => (1, ""),
        "milestone" | "m" => (2, ""),
        "rc" | "cr" => (3, ""),
        "snapshot" => (4, ""),
        "" | "ga" | "final" | "release" => RELEASE_RANK,
        "sp" => (6, ""),
        other => (7, other),
    }
}

fn tokenize(version: &str) -> Vec<Item> {
    let lowered = version.to_ascii_lowercase();
    let mut items = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    let flush = |buffer: &mut String, is_digit: bool, out: &mut Vec<Item>| {
        if buffer.is_empty() {
            return;
        }
        if is_digit {
            out.push(Item::number(buffer));
        } else {
            out.push(Item::Qualifier(buffer.clone()));
        }
        buffer.clear();
    };

    for ch in lowered.chars() {
        if ch == '.' || ch == '-' || ch == '_' {
            flush(&mut current, current_is_digit, &mut items);
            continue;
        }
        let is_digit = ch.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digit {
            flush(&mut current, current_is_digit, &mut items);
        }
        current_is_digit = is_digit;
        current.push(ch);
    }
    flush(&mut current, current_is_digit, &mut items);
    items
}
