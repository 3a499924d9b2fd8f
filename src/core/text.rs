/// String comparison helpers shared by the factor scorers
///
/// All comparisons in the engine are case-insensitive and whitespace-trimmed.
/// "Contains" means substring containment in either direction.

/// Normalize a value for comparison: trim then lowercase
#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Bidirectional substring match on normalized values
///
/// Empty values never match anything, including other empty values.
#[inline]
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

/// Case-insensitive equality on normalized values
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    let a = normalize(a);
    !a.is_empty() && a == normalize(b)
}

/// True if the two values share at least one whitespace-delimited word
pub fn shares_word(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    a.split_whitespace()
        .any(|word| b.split_whitespace().any(|other| word == other))
}
