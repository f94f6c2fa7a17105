//! Field name synthesis.

/// Converts a type name to snake case: `HttpPool` becomes `http_pool`,
/// `DBPool` becomes `db_pool`.
pub(crate) fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if i > 0 && (prev_lower || (chars[i - 1].is_uppercase() && next_lower)) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Base name of the generated field for a contributed type and wrapper
/// suffix, e.g. `pool_provider`.
pub(crate) fn field_base_name(type_name: &str, suffix: &str) -> String {
    format!("{}_{}", snake_case(type_name), suffix)
}
