//! String transformation utilities for published names

/// Convert a snake_case field name to its published lowerCamelCase alias
///
/// Leading underscores are dropped and consecutive underscores collapse, so
/// `emissions_per_tce` becomes `emissionsPerTce` and `min` stays `min`.
pub fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in s.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            result.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Sanitize a string to be safe for use in an identifier.
/// Replaces any non-alphanumeric characters with underscores
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the operation id for a definition path, e.g.
/// `AirQuality/Current_v1.0` becomes `request_AirQuality_Current_v1_0`
pub fn operation_id(path: &str) -> String {
    format!("request_{}", sanitize_identifier(path.trim_matches('/')))
}

/// Last segment of a slash-separated definition path
pub fn path_stem(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
