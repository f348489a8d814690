//! CLI configuration via environment variables
//!
//! Layout settings live in weaver.toml; only terminal presentation is read here.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (WEAVER_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("WEAVER_NO_COLOR").is_some() || env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var("WEAVER_NO_COLOR");
        env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear();
        assert!(!Config::from_env().no_color);
    }

    #[test]
    #[serial]
    fn test_no_color_standard_variable() {
        clear();
        env::set_var("NO_COLOR", "1");
        assert!(Config::from_env().no_color);
        clear();
    }

    #[test]
    #[serial]
    fn test_no_color_weaver_variable() {
        clear();
        env::set_var("WEAVER_NO_COLOR", "");
        assert!(Config::from_env().no_color);
        clear();
    }
}
