//! JSON phonebook directory
//!
//! Loads the organization chart from a JSON array of people:
//!
//! ```json
//! [
//!   {"mail": "dev@example.com", "aliases": ["dev@bugs.example.com"], "manager": "lead@example.com"},
//!   {"mail": "lead@example.com", "manager": "dir@example.com", "title": "Engineering Manager"},
//!   {"mail": "dir@example.com", "manager": "vp@example.com", "title": "Director, Engineering"},
//!   {"mail": "vp@example.com", "rank": "vp"}
//! ]
//! ```
//!
//! `rank` is optional; when absent it is inferred from `title`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::error::ResolutionError;
use crate::core::ports::Directory;

/// Seniority used for director/VP lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Individual contributor or line manager
    #[default]
    Staff,
    /// Director
    Director,
    /// Vice president
    Vp,
}

impl Rank {
    /// Infer a rank from a job title
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        let is_vp = title.contains("vice president")
            || title.split(|c: char| !c.is_alphanumeric()).any(|word| word == "vp");
        if is_vp {
            Self::Vp
        } else if title.contains("director") {
            Self::Director
        } else {
            Self::Staff
        }
    }
}

/// One phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEntry {
    /// Primary org email
    pub mail: String,

    /// Secondary addresses (e.g. issue-tracker accounts)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Direct manager's email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,

    /// Job title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Explicit rank, overrides the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
}

impl PersonEntry {
    /// Effective rank
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank.unwrap_or_else(|| Rank::from_title(&self.title))
    }
}

/// Directory backed by an in-memory phonebook
#[derive(Debug, Clone, Default)]
pub struct JsonDirectory {
    people: HashMap<String, PersonEntry>,
    aliases: HashMap<String, String>,
}

impl JsonDirectory {
    /// Build from entries
    ///
    /// Emails are compared case-insensitively.
    #[must_use]
    pub fn new(entries: Vec<PersonEntry>) -> Self {
        let mut people = HashMap::new();
        let mut aliases = HashMap::new();

        for entry in entries {
            let mail = entry.mail.to_lowercase();
            for alias in &entry.aliases {
                aliases.insert(alias.to_lowercase(), mail.clone());
            }
            people.insert(mail, entry);
        }

        Self { people, aliases }
    }

    /// Parse a phonebook from JSON text
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let entries: Vec<PersonEntry> =
            serde_json::from_str(content).context("invalid phonebook JSON")?;
        Ok(Self::new(entries))
    }

    /// Load a phonebook file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read phonebook {}", path.display()))?;
        let directory = Self::from_json(&content)?;
        if directory.is_empty() {
            log::warn!("phonebook {} is empty, nobody will be nagged", path.display());
        } else {
            log::debug!("loaded {} people from {}", directory.len(), path.display());
        }
        Ok(directory)
    }

    /// Number of people
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the phonebook is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Primary key for an email or alias, if known
    fn key(&self, email: &str) -> Option<String> {
        let email = email.trim().to_lowercase();
        if self.people.contains_key(&email) {
            Some(email)
        } else {
            self.aliases.get(&email).cloned()
        }
    }

    fn entry(&self, email: &str) -> Result<&PersonEntry, ResolutionError> {
        self.key(email)
            .and_then(|key| self.people.get(&key))
            .ok_or_else(|| ResolutionError::UnknownPerson(email.to_string()))
    }

    /// Managers above `email`, nearest first
    ///
    /// Stops at the top of the chain, at an unknown manager, or on a cycle.
    fn chain(&self, email: &str) -> Vec<&PersonEntry> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let Ok(mut current) = self.entry(email) else {
            return chain;
        };
        seen.insert(current.mail.to_lowercase());

        while let Some(manager) = current.manager.as_deref() {
            let Ok(next) = self.entry(manager) else {
                break;
            };
            if !seen.insert(next.mail.to_lowercase()) {
                log::warn!("management cycle at {}", next.mail);
                break;
            }
            chain.push(next);
            current = next;
        }

        chain
    }

    fn nearest_with_rank(&self, email: &str, rank: Rank) -> Option<String> {
        self.chain(email).into_iter().find(|p| p.rank() >= rank).map(|p| p.mail.clone())
    }
}

impl Directory for JsonDirectory {
    fn is_org_member(&self, email: &str) -> bool {
        self.key(email).is_some()
    }

    fn canonical_email(&self, email: &str) -> String {
        self.entry(email).map_or_else(|_| email.to_string(), |p| p.mail.clone())
    }

    fn is_under(&self, email: &str, org_unit: &str) -> bool {
        let (Some(person), Some(unit)) = (self.key(email), self.key(org_unit)) else {
            return false;
        };
        person == unit || self.chain(&person).iter().any(|m| m.mail.eq_ignore_ascii_case(&unit))
    }

    fn nth_line_manager(&self, email: &str, n: usize) -> Result<String, ResolutionError> {
        self.entry(email)?;
        let chain = self.chain(email);
        n.checked_sub(1)
            .and_then(|i| chain.get(i))
            .map(|p| p.mail.clone())
            .ok_or_else(|| ResolutionError::NoManager {
                email: email.to_string(),
                level: n,
            })
    }

    fn director_email(&self, email: &str) -> Result<String, ResolutionError> {
        self.entry(email)?;
        self.nearest_with_rank(email, Rank::Director)
            .ok_or_else(|| ResolutionError::NoDirector(email.to_string()))
    }

    fn vp_email(&self, email: &str) -> Result<String, ResolutionError> {
        self.entry(email)?;
        self.nearest_with_rank(email, Rank::Vp).ok_or_else(|| ResolutionError::NoVp(email.to_string()))
    }
}
