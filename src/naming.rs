//! Identifier normalizers for the target graph naming conventions.
//!
//! The graph model uses three conventions: `PascalCase` node labels,
//! `camelCase` property names and `UPPER_SNAKE_CASE` relationship types.
//! All three normalizers are pure, total and idempotent: any string is
//! accepted, and re-normalizing an already normalized identifier is a no-op.

/// Split a free-form identifier into word segments.
///
/// Boundaries are non-alphanumeric characters, lower-to-upper case
/// transitions, digit-to-upper transitions and the end of an acronym run
/// (`HTTPServer` -> `HTTP`, `Server`).
fn segments(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = c.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_numeric()
                    || (prev.is_uppercase() && next_is_lower));
            if boundary {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Uppercase the first character of a segment, lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Re-apply a composition until it stops changing.
///
/// Adjacent single-letter segments merge into an acronym run on
/// composition (`"a b c"` -> `"ABC"`), which re-segments differently than
/// it was written; the fixpoint is stable under re-normalization and is
/// reached by the second pass.
fn stabilize(input: &str, compose: impl Fn(&str) -> String) -> String {
    let mut out = compose(input);
    loop {
        let next = compose(&out);
        if next == out {
            return out;
        }
        out = next;
    }
}

/// Normalize a node label to `PascalCase`.
///
/// # Examples
///
/// ```
/// use graph_modelling_sdk::naming::normalize_label;
///
/// assert_eq!(normalize_label("current_address"), "CurrentAddress");
/// assert_eq!(normalize_label("CurrentAddress"), "CurrentAddress");
/// ```
pub fn normalize_label(input: &str) -> String {
    stabilize(input, |s| {
        segments(s).iter().map(|seg| capitalize(seg)).collect()
    })
}

/// Normalize a property name to `camelCase`.
///
/// # Examples
///
/// ```
/// use graph_modelling_sdk::naming::normalize_property;
///
/// assert_eq!(normalize_property("person_age"), "personAge");
/// ```
pub fn normalize_property(input: &str) -> String {
    stabilize(input, |s| {
        let mut out = String::new();
        for (i, segment) in segments(s).iter().enumerate() {
            if i == 0 {
                out.extend(segment.chars().flat_map(|c| c.to_lowercase()));
            } else {
                out.push_str(&capitalize(segment));
            }
        }
        out
    })
}

/// Normalize a relationship type to `UPPER_SNAKE_CASE`.
///
/// # Examples
///
/// ```
/// use graph_modelling_sdk::naming::normalize_relationship_type;
///
/// assert_eq!(normalize_relationship_type("hasAddress_Three"), "HAS_ADDRESS_THREE");
/// ```
pub fn normalize_relationship_type(input: &str) -> String {
    segments(input)
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
