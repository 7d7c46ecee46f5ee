//! Route pattern helpers.
//!
//! Patterns use axum syntax: literal segments plus `{name}` parameters,
//! e.g. `/product/{id}`. Wildcards (`{*rest}`) count as parameters.

/// Number of `{..}` parameter segments in a pattern.
pub fn param_count(pattern: &str) -> usize {
    segments(pattern).filter(|s| is_param(s)).count()
}

/// Replace the single parameter segment of `pattern` with `value`.
///
/// Returns `None` if the pattern does not have exactly one parameter.
pub fn substitute(pattern: &str, value: &str) -> Option<String> {
    if param_count(pattern) != 1 {
        return None;
    }
    let mut path = String::with_capacity(pattern.len() + value.len());
    for segment in segments(pattern) {
        path.push('/');
        if is_param(segment) {
            path.push_str(value);
        } else {
            path.push_str(segment);
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    Some(path)
}

fn segments(pattern: &str) -> impl Iterator<Item = &str> {
    pattern.split('/').filter(|s| !s.is_empty())
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}
