use std::sync::LazyLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{AgeGroup, Result, SkinType, err};

const BUNDLED: &str = include_str!("../config.json");

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| match AppConfig::bundled() {
    Ok(config) => config,
    Err(e) => {
        tracing::warn!(error = %e, "invalid bundled config, using defaults");
        AppConfig::default()
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub tagline: String,
    pub greeting: GreetingHours,
    /// Profile used for the simulated login.
    pub login_defaults: LoginDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "SkinCare VoiceBot".into(),
            tagline: "Your personalized skincare companion".into(),
            greeting: GreetingHours::default(),
            login_defaults: LoginDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingHours {
    pub afternoon_from: i8,
    pub evening_from: i8,
}

impl Default for GreetingHours {
    fn default() -> Self {
        Self {
            afternoon_from: 12,
            evening_from: 17,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginDefaults {
    pub name: String,
    pub skin_type: SkinType,
    pub age_group: AgeGroup,
}

impl Default for LoginDefaults {
    fn default() -> Self {
        Self {
            name: "Welcome back".into(),
            skin_type: SkinType::Combination,
            age_group: AgeGroup::YoungAdult,
        }
    }
}

impl AppConfig {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse app config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let GreetingHours {
            afternoon_from,
            evening_from,
        } = self.greeting;
        if !(0..=24).contains(&afternoon_from) || !(0..=24).contains(&evening_from) {
            return Err(err!("greeting hours must be between 0 and 24"));
        }
        if afternoon_from >= evening_from {
            return Err(err!(
                "afternoon ({afternoon_from}) must start before evening ({evening_from})"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(AppConfig::bundled().unwrap(), AppConfig::default());
    }

    #[test]
    fn missing_fields_fall_back() {
        let config = AppConfig::from_json(r#"{ "title": "Glow" }"#).unwrap();
        assert_eq!(config.title, "Glow");
        assert_eq!(config.greeting, GreetingHours::default());
        assert_eq!(config.login_defaults.name, "Welcome back");
    }

    #[test]
    fn rejects_inverted_greeting_hours() {
        let e = AppConfig::from_json(
            r#"{ "greeting": { "afternoon_from": 18, "evening_from": 17 } }"#,
        )
        .unwrap_err();
        assert_eq!(e.message, "afternoon (18) must start before evening (17)");
    }

    #[test]
    fn rejects_hours_past_midnight() {
        let e = AppConfig::from_json(
            r#"{ "greeting": { "afternoon_from": 12, "evening_from": 25 } }"#,
        )
        .unwrap_err();
        assert_eq!(e.message, "greeting hours must be between 0 and 24");
    }

    #[test]
    fn rejects_negative_hours() {
        let e = AppConfig::from_json(
            r#"{ "greeting": { "afternoon_from": -1, "evening_from": 17 } }"#,
        )
        .unwrap_err();
        assert_eq!(e.message, "greeting hours must be between 0 and 24");
    }

    #[test]
    fn parse_error_keeps_cause() {
        let e = AppConfig::from_json("{ not json").unwrap_err();
        assert_eq!(e.message, "failed to parse app config");
        assert!(e.has_causes());
    }
}
