use super::*;
use serial_test::serial;

fn clear_env() {
    for var in ["STORE_HOST", "STORE_PASSWORD", "STORE_PORT", "STORE_DB", "STORE_NAMESPACE"] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn from_env_fails_fast_without_host() {
    clear_env();
    std::env::set_var("STORE_PASSWORD", "secret");
    let err = RedisConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingRequired("STORE_HOST")));
    clear_env();
}

#[test]
#[serial]
fn from_env_applies_defaults() {
    clear_env();
    std::env::set_var("STORE_HOST", "redis.internal");
    std::env::set_var("STORE_PASSWORD", "secret");
    let config = RedisConfig::from_env().unwrap();
    assert_eq!(config.port, 6379);
    assert_eq!(config.db, 0);
    assert_eq!(config.namespace, "ratelimit:");
    clear_env();
}

#[test]
#[serial]
fn from_env_rejects_non_integer_port() {
    clear_env();
    std::env::set_var("STORE_HOST", "redis.internal");
    std::env::set_var("STORE_PASSWORD", "secret");
    std::env::set_var("STORE_PORT", "not-a-number");
    let err = RedisConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInteger("STORE_PORT", _)));
    clear_env();
}

#[test]
fn namespaced_prefixes_the_key() {
    let config = RedisConfig {
        host: "h".to_string(),
        port: 6379,
        password: "p".to_string(),
        db: 0,
        namespace: "ratelimit:".to_string(),
    };
    assert_eq!(config.namespaced("x"), "ratelimit:x");
}
