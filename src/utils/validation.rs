use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("prices.milk", 2u64, 0, 10_000).is_ok());
        assert!(validate_range("prices.milk", 10_000u64, 0, 10_000).is_ok());

        let err = validate_range("prices.milk", 10_001u64, 0, 10_000).unwrap_err();
        assert!(err.to_string().contains("prices.milk"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("menu.name", "house").is_ok());
        assert!(validate_non_empty_string("menu.name", "   ").is_err());
    }
}
