//! User profile
//!
//! Demographic and habit answers collected in the sidebar. The profile only
//! parameterizes the analysis text and is never joined with ledger data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::LabelParseError;

/// Youngest age the profile editor offers
pub const MIN_AGE: u8 = 18;
/// Oldest age the profile editor offers
pub const MAX_AGE: u8 = 40;
/// Age preselected by the profile editor
pub const DEFAULT_AGE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Male, Self::Female, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
            Self::Other => "其他",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.label() == s || g.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelParseError::new("gender", s))
    }
}

/// Field of study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Major {
    /// 理工
    #[default]
    Science,
    /// 文史
    Humanities,
    /// 经管
    Business,
    /// 艺术
    Arts,
    /// 其他
    Other,
}

impl Major {
    pub const ALL: [Major; 5] = [
        Self::Science,
        Self::Humanities,
        Self::Business,
        Self::Arts,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Science => "理工",
            Self::Humanities => "文史",
            Self::Business => "经管",
            Self::Arts => "艺术",
            Self::Other => "其他",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Humanities => "humanities",
            Self::Business => "business",
            Self::Arts => "arts",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Major {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label() == s || m.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelParseError::new("major", s))
    }
}

/// Profile snapshot used to build the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub gender: Gender,

    /// Always within `MIN_AGE..=MAX_AGE` once constructed through `new` or `set_age`
    #[serde(default = "default_age")]
    pub age: u8,

    #[serde(default)]
    pub major: Major,

    /// 是否理财
    #[serde(default)]
    pub uses_budgeting_tool: bool,

    /// 是否记账
    #[serde(default)]
    pub keeps_records: bool,
}

fn default_age() -> u8 {
    DEFAULT_AGE
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            age: DEFAULT_AGE,
            major: Major::default(),
            uses_budgeting_tool: false,
            keeps_records: false,
        }
    }
}

impl Profile {
    /// Create a profile, clamping the age to the editor's range
    pub fn new(gender: Gender, age: u8, major: Major) -> Self {
        Self {
            gender,
            age: clamp_age(age),
            major,
            uses_budgeting_tool: false,
            keeps_records: false,
        }
    }

    /// Set the two habit answers
    pub fn with_habits(mut self, uses_budgeting_tool: bool, keeps_records: bool) -> Self {
        self.uses_budgeting_tool = uses_budgeting_tool;
        self.keeps_records = keeps_records;
        self
    }

    pub fn set_age(&mut self, age: u8) {
        self.age = clamp_age(age);
    }

    /// Re-apply the age bounds, e.g. after deserializing hand-edited settings
    pub fn normalized(mut self) -> Self {
        self.age = clamp_age(self.age);
        self
    }
}

fn clamp_age(age: u8) -> u8 {
    age.clamp(MIN_AGE, MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_editor_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.age, 20);
        assert_eq!(profile.major, Major::Science);
        assert!(!profile.uses_budgeting_tool);
        assert!(!profile.keeps_records);
    }

    #[test]
    fn test_age_is_clamped() {
        assert_eq!(Profile::new(Gender::Female, 12, Major::Arts).age, MIN_AGE);
        assert_eq!(Profile::new(Gender::Female, 65, Major::Arts).age, MAX_AGE);

        let mut profile = Profile::default();
        profile.set_age(33);
        assert_eq!(profile.age, 33);
        profile.set_age(0);
        assert_eq!(profile.age, MIN_AGE);
    }

    #[test]
    fn test_normalized_after_deserialize() {
        let profile: Profile = serde_json::from_str(r#"{"age": 99}"#).unwrap();
        assert_eq!(profile.age, 99);
        assert_eq!(profile.normalized().age, MAX_AGE);
    }

    #[test]
    fn test_parse_labels_and_keys() {
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
        assert_eq!("经管".parse::<Major>().unwrap(), Major::Business);
        assert_eq!("Arts".parse::<Major>().unwrap(), Major::Arts);
        assert!("engineering".parse::<Major>().is_err());
    }
}
