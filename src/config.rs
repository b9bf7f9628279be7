use crate::error::TagCheckError;

pub const IMAGE_ENV: &str = "image";
pub const VERSION_ENV: &str = "version";

/// Inputs of a single tag check, read once from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub image: String,
    pub version: String,
}

impl CheckConfig {
    pub fn from_env() -> Result<Self, TagCheckError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Values are taken as-is; an empty string is a valid image or version.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TagCheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let image = lookup(IMAGE_ENV).ok_or(TagCheckError::MissingEnv(IMAGE_ENV))?;
        let version = lookup(VERSION_ENV).ok_or(TagCheckError::MissingEnv(VERSION_ENV))?;

        Ok(Self { image, version })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn read_image_and_version() {
        let config = CheckConfig::from_lookup(lookup_in(&[
            ("image", "mongodb-atlas-kubernetes-operator"),
            ("version", "2.5.0"),
        ]))
        .unwrap();

        assert_eq!(config.image, "mongodb-atlas-kubernetes-operator");
        assert_eq!(config.version, "2.5.0");
    }

    #[test]
    fn missing_image() {
        let result = CheckConfig::from_lookup(lookup_in(&[("version", "2.5.0")]));
        assert!(matches!(result, Err(TagCheckError::MissingEnv("image"))));
    }

    #[test]
    fn missing_version() {
        let result = CheckConfig::from_lookup(lookup_in(&[("image", "operator")]));
        assert!(matches!(result, Err(TagCheckError::MissingEnv("version"))));
    }

    #[test]
    fn empty_values_pass_through() {
        let config =
            CheckConfig::from_lookup(lookup_in(&[("image", ""), ("version", "")])).unwrap();

        assert_eq!(config.image, "");
        assert_eq!(config.version, "");
    }
}
