use validator::ValidationError;

/// Field validator rejecting empty or whitespace-only strings.
///
/// ```ignore
/// #[validate(custom(function = "not_blank", message = "User ID is required"))]
/// pub user_id: String,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("u1").is_ok());
        assert!(not_blank(" p1 ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("  \t").is_err());
    }
}
