// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Handles registry hosts, mirror lists, project defaults and passwords.

use serde::Deserialize;

use super::env_value::EnvValue;
use super::home::DEFAULT_PROJECT;
use crate::types::RegistryEndpoint;

pub fn deserialize_registry<'de, D>(deserializer: D) -> Result<RegistryEndpoint, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    RegistryEndpoint::new(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_registries<'de, D>(deserializer: D) -> Result<Vec<RegistryEndpoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Option<Vec<String>> = Option::deserialize(deserializer)?;
    values
        .unwrap_or_default()
        .iter()
        .map(|s| RegistryEndpoint::new(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| serde::de::Error::custom(format!("dockerRegistries: {}", e)))
}

/// Blank or missing projects fall back to `public`.
pub fn deserialize_project<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT.to_string()))
}

/// Passwords are resolved while loading so that a missing variable is a
/// configuration error, raised before any runtime call.
pub fn deserialize_password<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<EnvValue> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(String::new()),
        Some(value) => value.resolve().map_err(serde::de::Error::custom),
    }
}
