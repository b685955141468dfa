use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, err};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    #[default]
    Combination,
}

impl SkinType {
    pub const ALL: [SkinType; 3] = [SkinType::Oily, SkinType::Dry, SkinType::Combination];

    /// The form value, also used in prose ("oily skin").
    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skin| skin.as_str() == s)
            .ok_or_else(|| err!("unknown skin type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "16-24")]
    Teens,
    #[default]
    #[serde(rename = "25-35")]
    YoungAdult,
    #[serde(rename = "36-45")]
    Adult,
    #[serde(rename = "46+")]
    Mature,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Teens,
        AgeGroup::YoungAdult,
        AgeGroup::Adult,
        AgeGroup::Mature,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Teens => "16-24",
            AgeGroup::YoungAdult => "25-35",
            AgeGroup::Adult => "36-45",
            AgeGroup::Mature => "46+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|age| age.as_str() == s)
            .ok_or_else(|| err!("unknown age group '{s}'"))
    }
}

/// The signed-in user. Held only in memory for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub skin_type: SkinType,
    pub age_group: AgeGroup,
}

impl UserProfile {
    pub fn summary(&self) -> String {
        format!("{} skin • {} years", self.skin_type, self.age_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_type_parses_form_values() {
        assert_eq!("oily".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert_eq!("dry".parse::<SkinType>().unwrap(), SkinType::Dry);
        assert_eq!(
            "combination".parse::<SkinType>().unwrap(),
            SkinType::Combination
        );
        assert!("Oily".parse::<SkinType>().is_err());
        assert!("sensitive".parse::<SkinType>().is_err());
    }

    #[test]
    fn age_group_parses_form_values() {
        for age in AgeGroup::ALL {
            assert_eq!(age.as_str().parse::<AgeGroup>().unwrap(), age);
        }
        let e = "50".parse::<AgeGroup>().unwrap_err();
        assert_eq!(e.message, "unknown age group '50'");
    }

    #[test]
    fn defaults_match_signup_form() {
        assert_eq!(SkinType::default(), SkinType::Combination);
        assert_eq!(AgeGroup::default(), AgeGroup::YoungAdult);
    }

    #[test]
    fn serde_uses_form_values() {
        assert_eq!(serde_json::to_string(&AgeGroup::Mature).unwrap(), "\"46+\"");
        assert_eq!(serde_json::to_string(&SkinType::Dry).unwrap(), "\"dry\"");
    }

    #[test]
    fn summary_reads_like_header() {
        let profile = UserProfile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            skin_type: SkinType::Oily,
            age_group: AgeGroup::Adult,
        };
        assert_eq!(profile.summary(), "oily skin • 36-45 years");
    }
}
