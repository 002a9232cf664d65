use anyhow::{Context, Result};

/// Reads an optional numeric environment variable. Unset is `None`; a
/// value that is set but not a number is an error rather than a panic.
pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(val) => {
            let parsed = val
                .parse::<usize>()
                .with_context(|| format!("{} must be a valid number, got {:?}", key, val))?;

            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_is_none() {
        assert_eq!(get_env_usize("GET_ENV_USIZE_UNSET").unwrap(), None);
    }

    #[test]
    fn test_numeric_variable_is_parsed() {
        std::env::set_var("GET_ENV_USIZE_NUMERIC", "12");

        assert_eq!(get_env_usize("GET_ENV_USIZE_NUMERIC").unwrap(), Some(12));
    }

    #[test]
    fn test_non_numeric_variable_is_an_error() {
        std::env::set_var("GET_ENV_USIZE_GARBAGE", "twelve");

        assert!(get_env_usize("GET_ENV_USIZE_GARBAGE").is_err());
    }
}
