//! Brace-alternation expansion for glob patterns.
//!
//! A pattern like `**/*.{py,js}` denotes one concrete glob per alternative.
//! Expansion happens before any filesystem matching so downstream code only
//! ever sees plain globs.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Innermost groups only: no nested braces inside a span.
static BRACE_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^{}]*\}").expect("valid regex"));

/// Expand every brace group in `pattern` into the set of concrete patterns it
/// denotes. Patterns without braces expand to themselves; duplicates across
/// the expansion are suppressed.
pub fn expand(pattern: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    expand_into(pattern, &mut seen, &mut out);
    out
}

fn expand_into(pattern: &str, seen: &mut HashSet<String>, out: &mut Vec<String>) {
    let spans: Vec<(usize, usize)> = BRACE_GROUP
        .find_iter(pattern)
        .map(|group| (group.start(), group.end()))
        .collect();

    if spans.is_empty() {
        if seen.insert(pattern.to_owned()) {
            out.push(pattern.to_owned());
        }
        return;
    }

    let alternatives: Vec<Vec<&str>> = spans
        .iter()
        .map(|&(start, end)| pattern[start + 1..end - 1].split(',').collect())
        .collect();

    for combo in cartesian(&alternatives) {
        // Substitute rightmost span first so earlier span offsets stay valid.
        let mut replaced = pattern.to_owned();
        for (&(start, end), alternative) in spans.iter().zip(combo.iter()).rev() {
            replaced.replace_range(start..end, alternative);
        }
        // Re-expand: an alternative may itself contain a brace group.
        expand_into(&replaced, seen, out);
    }
}

fn cartesian<'a>(groups: &[Vec<&'a str>]) -> Vec<Vec<&'a str>> {
    let mut combos: Vec<Vec<&str>> = vec![Vec::new()];
    for group in groups {
        combos = combos
            .iter()
            .flat_map(|combo| {
                group.iter().map(move |alternative| {
                    let mut next = combo.clone();
                    next.push(alternative);
                    next
                })
            })
            .collect();
    }
    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut patterns: Vec<String>) -> Vec<String> {
        patterns.sort();
        patterns
    }

    #[test]
    fn no_braces_is_identity() {
        assert_eq!(expand("no-braces"), vec!["no-braces".to_owned()]);
        assert_eq!(expand("**/*.rs"), vec!["**/*.rs".to_owned()]);
    }

    #[test]
    fn empty_pattern_expands_to_empty_string() {
        assert_eq!(expand(""), vec![String::new()]);
    }

    #[test]
    fn single_group() {
        assert_eq!(sorted(expand("a{1,2}b")), vec!["a1b", "a2b"]);
    }

    #[test]
    fn extension_alternation() {
        assert_eq!(
            sorted(expand("**/*.{py,js}")),
            vec!["**/*.js", "**/*.py"]
        );
    }

    #[test]
    fn cartesian_product_without_duplicates() {
        let result = expand("{a,b}{c,d}");
        assert_eq!(result.len(), 4);
        assert_eq!(sorted(result), vec!["ac", "ad", "bc", "bd"]);
    }

    #[test]
    fn empty_alternative_is_valid() {
        assert_eq!(sorted(expand("x{a,}")), vec!["x", "xa"]);
    }

    #[test]
    fn duplicate_alternatives_collapse() {
        assert_eq!(expand("{a,a}"), vec!["a".to_owned()]);
    }

    #[test]
    fn nested_braces_reduce_through_recursion() {
        // The innermost group expands first; the substituted results
        // re-expand until no spans remain.
        assert_eq!(sorted(expand("{a,{b,c}}")), vec!["a", "b", "c"]);
    }
}
