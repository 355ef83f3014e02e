//! Crew inputs.

use derive_getters::Getters;
use derive_setters::Setters;
use publicist_social::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values the agent runtime substitutes into `{placeholders}`.
///
/// The three inputs the social media crew relies on are named fields; any
/// other keys under `[inputs]` are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(into, prefix = "with_")]
pub struct CrewInputs {
    /// Company the crew works for
    #[serde(default = "default_company_name")]
    company_name: String,
    /// Comma-separated platform names
    #[serde(default = "default_target_platforms")]
    target_platforms: String,
    /// Company's industry
    #[serde(default = "default_industry")]
    industry: String,
    /// Additional inputs
    #[serde(flatten)]
    #[setters(skip)]
    extra: BTreeMap<String, String>,
}

impl Default for CrewInputs {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            target_platforms: default_target_platforms(),
            industry: default_industry(),
            extra: BTreeMap::new(),
        }
    }
}

impl CrewInputs {
    /// Set an input by name, named fields included.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "company_name" => self.company_name = value,
            "target_platforms" => self.target_platforms = value,
            "industry" => self.industry = value,
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Look up an input by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "company_name" => Some(&self.company_name),
            "target_platforms" => Some(&self.target_platforms),
            "industry" => Some(&self.industry),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// Every input as name/value pairs, named fields first.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = vec![
            ("company_name", self.company_name.as_str()),
            ("target_platforms", self.target_platforms.as_str()),
            ("industry", self.industry.as_str()),
        ];
        entries.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        entries
    }

    /// Split `target_platforms` into supported platforms and unrecognized names.
    ///
    /// # Examples
    ///
    /// ```
    /// use publicist_crew::CrewInputs;
    /// use publicist_social::Platform;
    ///
    /// let inputs = CrewInputs::default().with_target_platforms("linkedin, Mastodon");
    /// let (platforms, unknown) = inputs.platforms();
    /// assert_eq!(platforms, vec![Platform::LinkedIn]);
    /// assert_eq!(unknown, vec!["Mastodon".to_string()]);
    /// ```
    pub fn platforms(&self) -> (Vec<Platform>, Vec<String>) {
        let mut platforms = Vec::new();
        let mut unknown = Vec::new();
        for name in self
            .target_platforms
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            match Platform::resolve(name) {
                Ok(platform) if !platforms.contains(&platform) => platforms.push(platform),
                Ok(_) => {}
                Err(_) => unknown.push(name.to_string()),
            }
        }
        (platforms, unknown)
    }
}

fn default_company_name() -> String {
    "AI Startup".to_string()
}

fn default_target_platforms() -> String {
    "LinkedIn, Twitter".to_string()
}

fn default_industry() -> String {
    "Artificial Intelligence".to_string()
}
