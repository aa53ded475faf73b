//! Runtime settings read from the environment.

use groupcontact_domain::NumberPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SKILL_PATH: &str = "/skill";

/// Settings for the skill server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSettings {
    pub server_host: String,
    pub server_port: u16,
    /// Route receiving platform events (always starts with `/`)
    pub skill_path: String,
    pub number_policy: NumberPolicy,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            skill_path: DEFAULT_SKILL_PATH.to_string(),
            number_policy: NumberPolicy::default(),
        }
    }
}

impl SkillSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup. Unset or unparseable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let server_host = lookup("SERVER_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.server_host);

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(defaults.server_port);

        let skill_path = lookup("SKILL_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "/")
            .map(|s| {
                if s.starts_with('/') {
                    s
                } else {
                    format!("/{s}")
                }
            })
            .unwrap_or(defaults.skill_path);

        let number_policy = match lookup("NUMBER_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid NUMBER_POLICY, using default"
                );
                defaults.number_policy
            }),
            None => defaults.number_policy,
        };

        Self {
            server_host,
            server_port,
            skill_path,
            number_policy,
        }
    }
}
