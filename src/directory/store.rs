use std::{collections::HashMap, sync::Arc};

use dashmap::DashMap;
use thiserror::Error;

use super::seed;
use crate::models::activities::Activity;

/// Errors produced by directory operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The referenced activity name is not a key in the directory
    #[error("activity not found: {name}")]
    ActivityNotFound { name: String },

    /// The email is already on the activity's roster
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    /// The email is not on the activity's roster
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

/// A shared in-memory store of activities keyed by name
///
/// Clones share the same underlying map. Each signup or unregister holds the
/// entry's lock for the whole read-modify-write, so the duplicate and
/// membership checks cannot race with a concurrent mutation of the same
/// activity.
#[derive(Clone, Debug)]
pub struct ActivityDirectory {
    activities: Arc<DashMap<String, Activity>>,
}

impl ActivityDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            activities: Arc::new(DashMap::new()),
        }
    }

    /// Create a directory populated with the standard seed roster
    pub fn with_defaults() -> Self {
        let directory = Self::new();
        for (name, activity) in seed::roster() {
            directory.insert(name, activity);
        }
        directory
    }

    /// Insert or replace an activity
    pub fn insert(&self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    /// Get a copy of a single activity record
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    /// Clone the full mapping of activity name to record
    pub fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Number of activities in the directory
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the directory holds no activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Append an email to an activity's roster
    ///
    /// The match on the activity name is exact and case-sensitive.
    /// `max_participants` is advisory: the roster may grow past it.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activity =
            self.activities
                .get_mut(name)
                .ok_or_else(|| DirectoryError::ActivityNotFound {
                    name: name.to_string(),
                })?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove an email from an activity's roster
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activity =
            self.activities
                .get_mut(name)
                .ok_or_else(|| DirectoryError::ActivityNotFound {
                    name: name.to_string(),
                })?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(())
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
