//! Shared string transforms for name derivation.

/// Uppercase the first character (e.g., "role" -> "Role")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Roles" -> "roles")
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Naive English pluralization (e.g., "city" -> "cities", "bus" -> "buses").
///
/// Best-effort heuristic; callers can bypass it with an explicit plural.
pub fn pluralize(s: &str) -> String {
    if s.len() > 1 && s.ends_with('y') {
        let stem = &s[..s.len() - 1];
        if !stem.ends_with(|c: char| "aeiouAEIOU".contains(c)) {
            return format!("{}ies", stem);
        }
    }
    let es_suffixes = ["s", "sh", "x", "z", "ch", "j"];
    if es_suffixes.iter().any(|suffix| s.ends_with(suffix)) {
        return format!("{}es", s);
    }
    format!("{}s", s)
}

/// Convert a mixed-case name to a lowercase hyphenated file stem
/// (e.g., "OrderStatus" -> "order-status").
///
/// Consecutive uppercase letters form one block ("HTTPCode" ->
/// "http-code"); a trailing block gets no hyphen ("OrderID" -> "orderid").
pub fn to_file_stem(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();
    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase()
            && i > 0
            && chars.get(i + 1).is_some_and(|next| !next.is_uppercase())
        {
            result.push('-');
        }
        result.extend(c.to_lowercase());
    }
    result
}
