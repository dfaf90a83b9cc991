//! Portal shell configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so overrides are captured at
//! compile time with `option_env!` and parsed through the same lookup path
//! the tests drive with a plain map.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BRAND_NAME: &str = "Woodgrove Bank";
pub const DEFAULT_LOGO_SRC: &str = "/logo.png";
pub const DEFAULT_THEME_COOKIE: &str = "theme";
pub const DEFAULT_THEME_EXPIRY_DAYS: u32 = 365;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while parsing configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A value was present but could not be parsed.
    #[error("config parse failed: {var}={value:?} ({reason})")]
    ConfigParse {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Cookie used to persist the theme preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCookie {
    pub key: String,
    pub expires_in_days: u32,
}

impl Default for ThemeCookie {
    fn default() -> Self {
        Self {
            key: DEFAULT_THEME_COOKIE.to_owned(),
            expires_in_days: DEFAULT_THEME_EXPIRY_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub brand_name: String,
    pub logo_src: String,
    /// Start signed out and require the login view before the shell.
    ///
    /// Off by default: the portal opens straight into the authenticated shell
    /// until a real credential check exists.
    pub require_login: bool,
    pub theme_cookie: ThemeCookie,
    pub log_level: log::Level,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_owned(),
            logo_src: DEFAULT_LOGO_SRC.to_owned(),
            require_login: false,
            theme_cookie: ThemeCookie::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ShellConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PORTAL_BRAND_NAME`: header brand text
    /// - `PORTAL_LOGO_SRC`: header logo URL
    /// - `PORTAL_REQUIRE_LOGIN`: `true`/`false` (default `false`)
    /// - `PORTAL_THEME_EXPIRY_DAYS`: default 365
    /// - `PORTAL_LOG_LEVEL`: `error`..`trace` (default `info`)
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "PORTAL_BRAND_NAME" => option_env!("PORTAL_BRAND_NAME"),
                "PORTAL_LOGO_SRC" => option_env!("PORTAL_LOGO_SRC"),
                "PORTAL_REQUIRE_LOGIN" => option_env!("PORTAL_REQUIRE_LOGIN"),
                "PORTAL_THEME_EXPIRY_DAYS" => option_env!("PORTAL_THEME_EXPIRY_DAYS"),
                "PORTAL_LOG_LEVEL" => option_env!("PORTAL_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup. Missing or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let require_login = match get("PORTAL_REQUIRE_LOGIN") {
            Some(raw) => parse_bool("PORTAL_REQUIRE_LOGIN", &raw)?,
            None => defaults.require_login,
        };
        let expires_in_days = match get("PORTAL_THEME_EXPIRY_DAYS") {
            Some(raw) => parse_days("PORTAL_THEME_EXPIRY_DAYS", &raw)?,
            None => DEFAULT_THEME_EXPIRY_DAYS,
        };
        let log_level = match get("PORTAL_LOG_LEVEL") {
            Some(raw) => raw.parse::<log::Level>().map_err(|_| ConfigError::ConfigParse {
                var: "PORTAL_LOG_LEVEL",
                value: raw.clone(),
                reason: "expected error, warn, info, debug or trace",
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            brand_name: get("PORTAL_BRAND_NAME").unwrap_or(defaults.brand_name),
            logo_src: get("PORTAL_LOGO_SRC").unwrap_or(defaults.logo_src),
            require_login,
            theme_cookie: ThemeCookie {
                key: defaults.theme_cookie.key,
                expires_in_days,
            },
            log_level,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ConfigParse {
            var,
            value: raw.to_owned(),
            reason: "expected true or false",
        }),
    }
}

fn parse_days(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::ConfigParse {
            var,
            value: raw.to_owned(),
            reason: "expected a positive number of days",
        }),
    }
}
