//! Comparison policy shared by every path value type.
//!
//! - Equality and hashing are ordinal and case-insensitive.
//! - Ordering is "natural": runs of ASCII digits compare by numeric value, so
//!   `file2` sorts before `file10`. Letters compare case-insensitively.
//! - When two strings tie naturally (`file01` vs `file1`) the case-insensitive
//!   ordinal order breaks the tie, which keeps `Ord` consistent with `Eq`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Peekable;
use std::str::Chars;

/// Direction for [`natural_cmp_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Ordinal, case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}

/// Hash consistent with [`eq_ignore_case`].
pub fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in folded(s) {
        c.hash(state);
    }
    // Terminator so ("ab", "c") and ("a", "bc") hash differently inside tuples.
    0xffu8.hash(state);
}

/// Case-insensitive prefix test.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut h = folded(haystack);
    folded(prefix).all(|p| h.next() == Some(p))
}

/// Case-insensitive ordinal ordering (no digit awareness).
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    Iterator::cmp(folded(a), folded(b))
}

fn take_digits(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural, case-insensitive comparison.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return cmp_ignore_case(a, b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let xr = take_digits(&mut ai);
                let yr = take_digits(&mut bi);
                match cmp_digit_runs(&xr, &yr) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                match Iterator::cmp(x.to_lowercase(), y.to_lowercase()) {
                    Ordering::Equal => {}
                    other => return other,
                }
                ai.next();
                bi.next();
            }
        }
    }
}

/// Natural comparison in the given direction.
pub fn natural_cmp_with(order: SortOrder) -> impl Fn(&str, &str) -> Ordering {
    move |a, b| match order {
        SortOrder::Ascending => natural_cmp(a, b),
        SortOrder::Descending => natural_cmp(b, a),
    }
}
