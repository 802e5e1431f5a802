use crate::errors::ConfigError;

/// Resolves a destination field selector to a field name.
///
/// A selector must denote exactly one direct field: a single identifier.
/// Paths, indexing and expressions are rejected.
pub fn resolve_selector(selector: &str) -> Result<&str, ConfigError> {
    let mut chars = selector.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::invalid_selector(selector, "selector is empty"));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ConfigError::invalid_selector(
            selector,
            "a field name must start with a letter or underscore",
        ));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        let reason = match bad {
            '.' => "nested member access is not a direct field".to_string(),
            '[' | ']' => "indexed access is not a direct field".to_string(),
            other => format!("unexpected character '{other}' in field name"),
        };
        return Err(ConfigError::invalid_selector(selector, &reason));
    }

    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_resolve() {
        assert_eq!(resolve_selector("available").unwrap(), "available");
        assert_eq!(resolve_selector("_private2").unwrap(), "_private2");
        assert_eq!(resolve_selector("Name").unwrap(), "Name");
    }

    #[test]
    fn test_non_field_selectors_are_rejected() {
        for selector in ["", "address.city", "lines[0]", "stock > 0", "2fast", " name"] {
            let err = resolve_selector(selector).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidSelector { .. }),
                "{selector:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reason_mentions_nesting() {
        let err = resolve_selector("address.city").unwrap_err();
        assert!(err.to_string().contains("nested member access"));
    }
}
