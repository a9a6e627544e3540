use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("must be a positive finite number, got {raw}"),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("CURBSIDE_ENV", "development"));

    let bind_addr = parse_addr("CURBSIDE_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("CURBSIDE_LOG_LEVEL", "info");

    let overpass_url = or_default(
        "CURBSIDE_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let overpass_timeout_secs = parse_u64("CURBSIDE_OVERPASS_TIMEOUT_SECS", "30")?;
    let overpass_user_agent = or_default(
        "CURBSIDE_OVERPASS_USER_AGENT",
        "curbside/0.1 (route-parking)",
    );
    let default_buffer_degrees = parse_f64("CURBSIDE_DEFAULT_BUFFER_DEGREES", "0.002")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        overpass_url,
        overpass_timeout_secs,
        overpass_user_agent,
        default_buffer_degrees,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_all_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.overpass_url,
            "https://overpass-api.de/api/interpreter"
        );
        assert_eq!(config.overpass_timeout_secs, 30);
        assert!((config.default_buffer_degrees - 0.002).abs() < f64::EPSILON);
    }

    #[test]
    fn build_app_config_fails_on_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CURBSIDE_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CURBSIDE_BIND_ADDR"),
            "expected InvalidEnvVar(CURBSIDE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_on_non_numeric_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CURBSIDE_OVERPASS_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CURBSIDE_OVERPASS_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CURBSIDE_OVERPASS_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_on_negative_buffer() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CURBSIDE_DEFAULT_BUFFER_DEGREES", "-0.002");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CURBSIDE_DEFAULT_BUFFER_DEGREES"),
            "expected InvalidEnvVar(CURBSIDE_DEFAULT_BUFFER_DEGREES), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CURBSIDE_ENV", "production");
        map.insert("CURBSIDE_BIND_ADDR", "127.0.0.1:9100");
        map.insert("CURBSIDE_OVERPASS_URL", "http://localhost:12345/api/interpreter");
        map.insert("CURBSIDE_DEFAULT_BUFFER_DEGREES", "0.005");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.bind_addr.port(), 9100);
        assert_eq!(config.overpass_url, "http://localhost:12345/api/interpreter");
        assert!((config.default_buffer_degrees - 0.005).abs() < f64::EPSILON);
    }
}
