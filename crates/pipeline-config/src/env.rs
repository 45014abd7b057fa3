use crate::error::ConfigError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable manager that loads from the system environment and
/// optional .env files. Connection settings are pulled from here once per
/// run, never cached at process start.
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        let mut vars = HashMap::new();

        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        Self { vars }
    }

    /// Load variables from a .env file, overriding system values.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::EnvFile(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.as_str())
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), ConfigError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse KEY=VALUE format
            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let value = line[eq_pos + 1..].trim();

                if key.is_empty() {
                    return Err(ConfigError::EnvFile(format!(
                        "Invalid env file: empty key at line {}",
                        line_num + 1
                    )));
                }

                let value = Self::unquote_value(value);

                self.vars.insert(key.to_string(), value);
            } else {
                return Err(ConfigError::EnvFile(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            }
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            return value[1..value.len() - 1].to_string();
        }

        if value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2 {
            return value[1..value.len() - 1].to_string();
        }

        value.to_string()
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_manager() -> EnvManager {
        EnvManager {
            vars: HashMap::new(),
        }
    }

    #[test]
    fn test_parse_basic_env() {
        let mut env = empty_manager();
        let content = r#"
# Comment
SEOUL_DATA_API_KEY=abc123
SEOUL_OPENAPI_BASE_URL=http://openapi.seoul.go.kr:8088
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("SEOUL_DATA_API_KEY").unwrap(), "abc123");
        assert_eq!(
            env.get("SEOUL_OPENAPI_BASE_URL").unwrap(),
            "http://openapi.seoul.go.kr:8088"
        );
    }

    #[test]
    fn test_parse_quoted_values() {
        let mut env = empty_manager();
        let content = r#"
QUOTED="value with spaces"
SINGLE='single quoted'
UNQUOTED=no_spaces
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("QUOTED").unwrap(), "value with spaces");
        assert_eq!(env.get("SINGLE").unwrap(), "single quoted");
        assert_eq!(env.get("UNQUOTED").unwrap(), "no_spaces");
    }

    #[test]
    fn test_invalid_env_format() {
        let mut env = empty_manager();
        let content = "INVALID LINE WITHOUT EQUALS";
        let err = env.parse_env_content(content).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
