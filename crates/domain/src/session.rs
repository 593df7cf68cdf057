use std::slice;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Display, Into};

use crate::{ExerciseID, SessionName};

/// Key of a [`WorkoutSession`] within the user data.
///
/// Fresh IDs are the current epoch milliseconds as a string. A process-wide
/// atomic keeps them strictly increasing, so two sessions created within the
/// same millisecond still get distinct IDs.
#[derive(AsRef, Debug, Display, Clone, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionID(String);

impl SessionID {
    #[must_use]
    pub fn fresh() -> Self {
        static LAST: AtomicI64 = AtomicI64::new(0);

        let now = Utc::now().timestamp_millis();
        let mut id = now;
        let _ = LAST.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            id = now.max(last + 1);
            Some(id)
        });
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One exercise's presence inside a session.
///
/// The catalog entry is looked up by `exercise_id` at render time, never
/// embedded. Empty `notes` means "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRef {
    pub exercise_id: ExerciseID,
    pub completed: bool,
    pub notes: String,
}

impl ExerciseRef {
    #[must_use]
    pub fn new(exercise_id: ExerciseID, notes: String) -> Self {
        Self {
            exercise_id,
            completed: false,
            notes,
        }
    }
}

/// A single workout entry: a standalone exercise or a pair performed as a
/// superset. A superset holds exactly two refs; the first is the "current"
/// exercise, the second its partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionItem {
    Single { exercise: ExerciseRef },
    Superset { exercises: [ExerciseRef; 2] },
}

impl SessionItem {
    #[must_use]
    pub fn exercise_refs(&self) -> &[ExerciseRef] {
        match self {
            SessionItem::Single { exercise } => slice::from_ref(exercise),
            SessionItem::Superset { exercises } => exercises,
        }
    }

    #[must_use]
    pub fn contains(&self, exercise_id: &ExerciseID) -> bool {
        self.exercise_refs()
            .iter()
            .any(|e| e.exercise_id == *exercise_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: SessionID,
    pub name: SessionName,
    pub items: Vec<SessionItem>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutSession {
    #[must_use]
    pub fn new(name: SessionName) -> Self {
        Self {
            id: SessionID::fresh(),
            name,
            items: vec![],
            created_at: Utc::now(),
        }
    }

    /// All occurrences of an exercise, as item index plus the matching ref.
    ///
    /// An item appears at most once even when both refs of a superset match.
    #[must_use]
    pub fn occurrences(&self, exercise_id: &ExerciseID) -> Vec<(usize, &ExerciseRef)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                item.exercise_refs()
                    .iter()
                    .find(|e| e.exercise_id == *exercise_id)
                    .map(|e| (i, e))
            })
            .collect()
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.items.iter().map(|i| i.exercise_refs().len()).sum()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items
            .iter()
            .flat_map(|i| i.exercise_refs())
            .filter(|e| e.completed)
            .count()
    }
}
