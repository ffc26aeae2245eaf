//! Field-level validation helpers shared by the form parameter types.
//!
//! Each helper either returns the normalized value or an `AppError::Validation` naming the
//! offending field, so `validate()` implementations read as a list of checks.

use url::Url;

use crate::server::error::AppError;

/// Maximum stored length of an email address.
const MAX_EMAIL_LENGTH: usize = 255;

/// Trims `value` and checks its length in characters.
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<String, AppError> {
    let value = value.trim();
    let len = value.chars().count();

    if len == 0 && min > 0 {
        return Err(AppError::validation(field, format!("{} is required", label(field))));
    }
    if len < min {
        return Err(AppError::validation(
            field,
            format!("{} must be at least {} characters", label(field), min),
        ));
    }
    if len > max {
        return Err(AppError::validation(
            field,
            format!("{} must be at most {} characters", label(field), max),
        ));
    }

    Ok(value.to_string())
}

/// Rejects negative sort positions.
pub fn non_negative(field: &str, value: i32) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::validation(
            field,
            format!("{} must be zero or greater", label(field)),
        ));
    }
    Ok(value)
}

/// Parses an absolute `http`/`https` URL with a host.
pub fn http_url(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    let invalid = || AppError::validation(field, format!("{} must be a valid URL", label(field)));

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(value.to_string())
}

/// Optional link: `None` and blank strings are both treated as absent.
pub fn optional_http_url(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => http_url(field, &value).map(Some),
        _ => Ok(None),
    }
}

/// Image reference: an absolute `http(s)` URL or a root-relative path such as `/uploads/a.png`.
pub fn image(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(field, format!("{} is required", label(field))));
    }
    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(value.to_string());
    }
    http_url(field, value)
}

/// Checks for a plausible address and returns it lower-cased.
///
/// Requires exactly one `@`, a non-empty local part and a dotted domain without blank labels.
pub fn email(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();
    if value.is_empty() {
        return Err(AppError::validation(field, "Email is required"));
    }

    let invalid = || AppError::validation(field, "Email must be a valid email address");

    if value.chars().count() > MAX_EMAIL_LENGTH || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    if local.is_empty() || !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }

    Ok(value)
}

/// Trims, de-duplicates case-insensitively (first spelling wins) and bounds a tag list.
pub fn tags(
    field: &str,
    values: Vec<String>,
    max_items: usize,
    max_len: usize,
) -> Result<Vec<String>, AppError> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();

    for value in values {
        let value = text(field, &value, 1, max_len)?;
        if seen.insert(value.to_lowercase()) {
            result.push(value);
        }
    }

    if result.len() > max_items {
        return Err(AppError::validation(
            field,
            format!("At most {} {} are allowed", max_items, field),
        ));
    }

    Ok(result)
}

/// Capitalized field name used in messages, `github_url` becomes `Github url`.
fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
