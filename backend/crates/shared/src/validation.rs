//! Cross-cutting input rules

/// Message returned when a required request field is missing or blank
pub const ALL_FIELDS_REQUIRED: &str = "all fields are required";

/// Trim a submitted text field; blank and missing values both become `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some(" \t ".to_string())), None);
        assert_eq!(non_blank(Some(" Бетон ".to_string())).as_deref(), Some("Бетон"));
    }
}
