use crate::utils::error::{Result, RosterError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_exists(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !Path::new(path).exists() {
        return Err(RosterError::MissingFileError {
            path: path.to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roster", "roster.csv").is_ok());
        assert!(validate_path("roster", "").is_err());
        assert!(validate_path("roster", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.csv");
        std::fs::write(&present, "number,first_name,last_name\n").unwrap();

        assert!(validate_file_exists("roster", present.to_str().unwrap()).is_ok());

        let absent = dir.path().join("absent.csv");
        let err = validate_file_exists("roster", absent.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RosterError::MissingFileError { .. }));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("layout", "special-guest", &["special-guest", "captions"]).is_ok());
        assert!(validate_one_of("layout", "diagonal", &["special-guest", "captions"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("output", "index.html").is_ok());
        assert!(validate_non_empty_string("output", "   ").is_err());
    }
}
