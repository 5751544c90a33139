//! Subject progress store.
//!
//! A [`Subject`] tracks one study topic against a weekly hour goal with
//! the invariant `0 <= progress <= goal`; mutations that would leave the
//! range are clamped. The ordered collection is the sole persisted
//! aggregate: it is serialized as a whole to the kv store after every
//! successful mutation and deserialized once when the store loads.
//! Insertion order is display order.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

/// Key holding the serialized subject collection.
const SUBJECTS_KEY: &str = "subjects";

/// One tracked study topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique id, assigned at creation from the creation timestamp.
    pub id: i64,
    pub name: String,
    /// Target hours per week, always positive.
    pub goal: u32,
    /// Hours logged so far, in `[0, goal]`.
    pub progress: u32,
}

impl Subject {
    /// Progress toward the goal as a rounded percentage.
    pub fn percent(&self) -> u32 {
        (f64::from(self.progress) * 100.0 / f64::from(self.goal)).round() as u32
    }
}

/// Owned, persisted collection of subjects.
///
/// Constructed once at application start with [`SubjectStore::load`];
/// every mutating operation validates, mutates, then writes the whole
/// collection back synchronously. Rejected operations write nothing.
pub struct SubjectStore {
    db: Database,
    subjects: Vec<Subject>,
}

impl SubjectStore {
    /// Load the collection from the kv store. An absent entry yields an
    /// empty collection, not an error.
    pub fn load(db: Database) -> Result<Self, CoreError> {
        let subjects = match db.kv_get(SUBJECTS_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        log::debug!("loaded {} subject(s)", subjects.len());
        Ok(Self { db, subjects })
    }

    /// Ordered read-only view for rendering.
    pub fn list(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Append a new subject with zero progress and a fresh id.
    ///
    /// # Errors
    /// `ValidationError` if the trimmed name is empty or the goal is not
    /// positive; nothing is mutated or persisted then.
    pub fn add(&mut self, name: &str, goal: u32) -> Result<Subject, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if goal == 0 {
            return Err(ValidationError::InvalidGoal { value: 0 }.into());
        }
        let subject = Subject {
            id: self.next_id(),
            name: name.to_string(),
            goal,
            progress: 0,
        };
        self.subjects.push(subject.clone());
        self.persist()?;
        Ok(subject)
    }

    /// Remove the subject with the given id. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: i64) -> Result<bool, CoreError> {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        let removed = self.subjects.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Add `delta` hours (may be negative) to a subject's progress,
    /// clamped into `[0, goal]`. Unknown ids are a no-op with no write.
    pub fn adjust_progress(&mut self, id: i64, delta: i64) -> Result<Option<&Subject>, CoreError> {
        let Some(index) = self.subjects.iter().position(|s| s.id == id) else {
            return Ok(None);
        };
        {
            let subject = &mut self.subjects[index];
            let next = i64::from(subject.progress) + delta;
            subject.progress = next.clamp(0, i64::from(subject.goal)) as u32;
        }
        self.persist()?;
        Ok(Some(&self.subjects[index]))
    }

    /// Rename a subject. Fails silently (no mutation, no write) when the
    /// trimmed name is empty or the id is unknown.
    pub fn rename(&mut self, id: i64, new_name: &str) -> Result<bool, CoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(false);
        }
        let Some(subject) = self.subjects.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        subject.name = new_name.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Change a subject's weekly goal. Fails silently when the goal is
    /// not positive or the id is unknown. Progress above the new goal is
    /// clamped down.
    pub fn regoal(&mut self, id: i64, new_goal: u32) -> Result<bool, CoreError> {
        if new_goal == 0 {
            return Ok(false);
        }
        let Some(subject) = self.subjects.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        subject.goal = new_goal;
        if subject.progress > subject.goal {
            subject.progress = subject.goal;
        }
        self.persist()?;
        Ok(true)
    }

    /// Creation-time id, bumped past the current maximum so that two
    /// additions within the same millisecond stay unique.
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self.subjects.iter().map(|s| s.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }

    /// Write the whole collection back under the fixed key.
    fn persist(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.subjects)?;
        self.db.kv_set(SUBJECTS_KEY, &json)?;
        Ok(())
    }
}
