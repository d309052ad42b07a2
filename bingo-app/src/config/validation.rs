//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "CATALOG_BACKEND" => {
            if value != "sqlite" && value != "mock" {
                return Err("must be 'sqlite' or 'mock'".into());
            }
        }
        "MOCK_LIST_DELAY_MS" | "MOCK_GET_DELAY_MS" => validate_int_range(value, 0, 10_000)?,
        "CARD_SIZE" => validate_int_range(value, 3, 9)?,
        "FREE_CENTER" => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        "BINGO_DATA_DIR" => {
            if value.contains('\0') {
                return Err("must not contain NUL bytes".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_values() {
        assert!(validate_setting("CATALOG_BACKEND", "sqlite").is_ok());
        assert!(validate_setting("CATALOG_BACKEND", "mock").is_ok());
        assert!(validate_setting("CATALOG_BACKEND", "indexeddb").is_err());
    }

    #[test]
    fn test_int_ranges() {
        assert!(validate_setting("CARD_SIZE", "5").is_ok());
        assert_eq!(
            validate_setting("CARD_SIZE", "11"),
            Err("must be between 3 and 9".to_string())
        );
        assert_eq!(
            validate_setting("MOCK_GET_DELAY_MS", "soon"),
            Err("must be an integer".to_string())
        );
        assert!(validate_setting("MOCK_LIST_DELAY_MS", "0").is_ok());
    }

    #[test]
    fn test_flags_and_unknown_keys() {
        assert!(validate_setting("FREE_CENTER", "false").is_ok());
        assert!(validate_setting("FREE_CENTER", "yes").is_err());
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
