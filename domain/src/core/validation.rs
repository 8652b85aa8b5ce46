//! Input guards shared by every layer.

use crate::core::error::DomainError;

/// Require a non-empty, non-whitespace string
pub fn require_non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(name.to_string()));
    }
    Ok(value)
}

/// Require a list with at least one element
pub fn require_non_empty_list<'a, T>(items: &'a [T], name: &str) -> Result<&'a [T], DomainError> {
    if items.is_empty() {
        return Err(DomainError::EmptyList(name.to_string()));
    }
    Ok(items)
}
