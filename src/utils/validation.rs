use crate::core::library::{LibraryError, LibraryResult};

// require_non_blank returns the trimmed value or a validation error naming the field
pub fn require_non_blank(value: &str, field: &str) -> LibraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::validation(
            format!("{} cannot be blank", field).as_str(), Some(field.to_string())));
    }
    Ok(trimmed.to_string())
}

pub fn require_positive(value: i64, field: &str) -> LibraryResult<i64> {
    if value <= 0 {
        return Err(LibraryError::validation(
            format!("{} must be positive", field).as_str(), Some(field.to_string())));
    }
    Ok(value)
}

/// Normalizes an ISBN-10 or ISBN-13 by dropping hyphens and spaces.
///
/// Only the shape is checked (digits, length 10 or 13); check digits are not verified.
pub fn normalize_isbn(raw: &str) -> LibraryResult<String> {
    let isbn = require_non_blank(raw, "isbn")?;
    let normalized: String = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();
    if normalized.len() != 10 && normalized.len() != 13 {
        return Err(LibraryError::validation(
            "isbn must be 10 or 13 digits (hyphens/spaces allowed)", Some("isbn".to_string())));
    }
    if !normalized.chars().all(|c| c.is_ascii_digit()) {
        return Err(LibraryError::validation(
            "isbn must contain digits only (after removing hyphens/spaces)", Some("isbn".to_string())));
    }
    Ok(normalized)
}
