//! Connection configuration loaded from an env file.

use crate::error::SeedError;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";

pub const DEFAULT_PORT: u16 = 3306;

const KEYS: [&str; 5] = [DB_HOST, DB_USER, DB_PASSWORD, DB_NAME, DB_PORT];

/// MySQL connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Read `KEY=value` pairs from an env file.
    ///
    /// Comments, blank lines and surrounding quotes are handled by the env
    /// file parser. The values are not exported into the process environment.
    ///
    /// Unquoted and double-quoted values expand `$NAME`, and unquoted values
    /// end at ` #`. A `DB_*` value containing either must be single-quoted
    /// (`DB_PASSWORD='pa$word #1'`); otherwise loading fails instead of
    /// connecting with a rewritten value.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            SeedError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        check_literal_values(&raw)?;

        Self::from_vars(&vars)
    }

    /// Build the config from already parsed variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, SeedError> {
        let required = |key: &str| {
            vars.get(key)
                .cloned()
                .ok_or_else(|| SeedError::Config(format!("{key} is not set")))
        };

        let port = match vars.get(DB_PORT) {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| SeedError::Config(format!("{DB_PORT} '{port}' is invalid: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: required(DB_HOST)?,
            port,
            user: required(DB_USER)?,
            password: required(DB_PASSWORD)?,
            database: required(DB_NAME)?,
        })
    }

    /// Connection target with the password masked, for logging.
    pub fn masked_url(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

/// Reject connection values the env file parser would not keep verbatim.
fn check_literal_values(raw: &str) -> Result<(), SeedError> {
    for line in raw.lines() {
        let line = line.trim();
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !KEYS.contains(&key) {
            continue;
        }

        let value = value.trim();
        let rewritten = if value.starts_with('\'') {
            false
        } else if let Some(quoted) = value.strip_prefix('"') {
            has_unescaped_dollar(quoted)
        } else {
            has_unescaped_dollar(value) || value.contains(" #")
        };
        if rewritten {
            return Err(SeedError::Config(format!(
                "{key} contains '$' or ' #', which the env file parser rewrites; \
                 wrap the value in single quotes"
            )));
        }
    }
    Ok(())
}

fn has_unescaped_dollar(value: &str) -> bool {
    let mut escaped = false;
    for c in value.chars() {
        match c {
            '\\' if !escaped => escaped = true,
            '$' if !escaped => return true,
            _ => escaped = false,
        }
    }
    false
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_env_file() {
        let file = env_file(
            r#"
# database settings
DB_HOST=localhost
DB_USER="airport"

DB_PASSWORD='s3cret#1'
DB_NAME=airport_db
"#,
        );

        let config = DbConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.user, "airport");
        assert_eq!(config.password, "s3cret#1");
        assert_eq!(config.database, "airport_db");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_missing_key_is_a_config_error() {
        let file = env_file("DB_HOST=localhost\nDB_USER=root\nDB_NAME=airport_db\n");

        let err = DbConfig::from_env_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Config(ref msg) if msg.contains("DB_PASSWORD")));
    }

    #[test]
    fn test_single_quoted_dollar_password_is_kept() {
        let file = env_file(
            "DB_HOST=localhost\nDB_USER=root\nDB_PASSWORD='pa$word1'\nDB_NAME=airport_db\n",
        );

        let config = DbConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.password, "pa$word1");
    }

    #[test]
    fn test_unquoted_dollar_password_is_rejected() {
        let file = env_file(
            "DB_HOST=localhost\nDB_USER=root\nDB_PASSWORD=pa$word1\nDB_NAME=airport_db\n",
        );

        let err = DbConfig::from_env_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Config(ref msg) if msg.contains("DB_PASSWORD")));
    }

    #[test]
    fn test_double_quoted_dollar_password_is_rejected() {
        let file = env_file(
            "DB_HOST=localhost\nDB_USER=root\nDB_PASSWORD=\"pa$word1\"\nDB_NAME=airport_db\n",
        );

        assert!(matches!(
            DbConfig::from_env_file(file.path()),
            Err(SeedError::Config(_))
        ));
    }

    #[test]
    fn test_inline_hash_in_password() {
        let unquoted = env_file(
            "DB_HOST=localhost\nDB_USER=root\nDB_PASSWORD=abc #x\nDB_NAME=airport_db\n",
        );
        assert!(matches!(
            DbConfig::from_env_file(unquoted.path()),
            Err(SeedError::Config(_))
        ));

        let quoted = env_file(
            "DB_HOST=localhost\nDB_USER=root\nDB_PASSWORD=\"abc #x\"\nDB_NAME=airport_db\n",
        );
        let config = DbConfig::from_env_file(quoted.path()).unwrap();
        assert_eq!(config.password, "abc #x");
    }

    #[test]
    fn test_comment_lines_are_not_checked() {
        let file = env_file(
            "# DB_PASSWORD=$old #1\nDB_HOST=localhost\nDB_USER=root\nDB_PASSWORD=plain\nDB_NAME=airport_db\nOTHER=$HOME\n",
        );

        let config = DbConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.password, "plain");
    }

    #[test]
    fn test_missing_file() {
        let err = DbConfig::from_env_file("/nonexistent/.env").unwrap_err();
        assert!(matches!(err, SeedError::EnvFile(_)));
    }

    #[test]
    fn test_port_override() {
        let vars: HashMap<String, String> = [
            ("DB_HOST", "db"),
            ("DB_USER", "root"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "airport_db"),
            ("DB_PORT", "3307"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = DbConfig::from_vars(&vars).unwrap();
        assert_eq!(config.port, 3307);
        assert_eq!(config.masked_url(), "mysql://root:***@db:3307/airport_db");
        assert!(!format!("{config:?}").contains("pw\""));
    }

    #[test]
    fn test_invalid_port() {
        let vars: HashMap<String, String> = [
            ("DB_HOST", "db"),
            ("DB_USER", "root"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "airport_db"),
            ("DB_PORT", "not-a-port"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert!(matches!(
            DbConfig::from_vars(&vars),
            Err(SeedError::Config(_))
        ));
    }
}
