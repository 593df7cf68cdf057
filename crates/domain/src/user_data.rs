use crate::{
    ExerciseID, ExerciseRef, ReadError, SessionID, SessionItem, SessionName, WorkoutSession,
    WriteError,
};

pub trait UserDataRepository {
    fn read_user_data(&self) -> Result<UserData, ReadError>;
    fn write_user_data(&self, data: &UserData) -> Result<(), WriteError>;
    fn clear_user_data(&self) -> Result<(), WriteError>;
}

/// The root persisted object.
///
/// Session order is meaningful; it drives the default tab order. All mutation
/// operations are copy-on-write: the receiver is never modified, and unknown
/// IDs or out-of-range indices degrade to no-ops. The UI only ever passes IDs
/// it just displayed, so a miss is defensive, not exceptional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    pub sessions: Vec<WorkoutSession>,
}

impl UserData {
    #[must_use]
    pub fn session(&self, id: &SessionID) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id == *id)
    }

    /// Appends a fresh empty session and returns its ID alongside the new
    /// data.
    #[must_use]
    pub fn create_session(&self, name: SessionName) -> (Self, SessionID) {
        let session = WorkoutSession::new(name);
        let id = session.id.clone();
        let mut data = self.clone();
        data.sessions.push(session);
        (data, id)
    }

    #[must_use]
    pub fn add_single(
        &self,
        session_id: &SessionID,
        exercise_id: ExerciseID,
        notes: String,
    ) -> Self {
        self.with_session(session_id, |session| {
            session.items.push(SessionItem::Single {
                exercise: ExerciseRef::new(exercise_id, notes),
            });
        })
    }

    #[must_use]
    pub fn add_superset(
        &self,
        session_id: &SessionID,
        exercise: (ExerciseID, String),
        partner: (ExerciseID, String),
    ) -> Self {
        self.with_session(session_id, |session| {
            session.items.push(SessionItem::Superset {
                exercises: [
                    ExerciseRef::new(exercise.0, exercise.1),
                    ExerciseRef::new(partner.0, partner.1),
                ],
            });
        })
    }

    /// Flips the `completed` flag of one ref.
    ///
    /// The item index selects the item, so duplicates of the same exercise in
    /// other items are left alone. Within a superset, `exercise_id` selects
    /// the ref.
    #[must_use]
    pub fn toggle_completion(
        &self,
        session_id: &SessionID,
        item_index: usize,
        exercise_id: &ExerciseID,
    ) -> Self {
        self.with_session(session_id, |session| {
            if let Some(item) = session.items.get_mut(item_index) {
                let exercise = match item {
                    SessionItem::Single { exercise } => {
                        (exercise.exercise_id == *exercise_id).then_some(exercise)
                    }
                    SessionItem::Superset { exercises } => exercises
                        .iter_mut()
                        .find(|e| e.exercise_id == *exercise_id),
                };
                if let Some(exercise) = exercise {
                    exercise.completed = !exercise.completed;
                }
            }
        })
    }

    #[must_use]
    pub fn remove_item(&self, session_id: &SessionID, item_index: usize) -> Self {
        self.with_session(session_id, |session| {
            if item_index < session.items.len() {
                session.items.remove(item_index);
            }
        })
    }

    /// Replaces the session's items with a caller-supplied permutation.
    ///
    /// The ordering is trusted; callers hand over the result of a drag
    /// operation on the items they just displayed.
    #[must_use]
    pub fn reorder_items(&self, session_id: &SessionID, items: Vec<SessionItem>) -> Self {
        self.with_session(session_id, |session| {
            session.items = items;
        })
    }

    #[must_use]
    pub fn rename_session(&self, session_id: &SessionID, name: SessionName) -> Self {
        self.with_session(session_id, |session| {
            session.name = name;
        })
    }

    #[must_use]
    pub fn delete_session(&self, session_id: &SessionID) -> Self {
        Self {
            sessions: self
                .sessions
                .iter()
                .filter(|s| s.id != *session_id)
                .cloned()
                .collect(),
        }
    }

    /// Updates the notes of the item at `item_index`.
    ///
    /// For a superset, the ref whose ID equals `exercise_id` gets `notes` and
    /// the other ref gets `partner_notes`, regardless of which of the two is
    /// first.
    #[must_use]
    pub fn edit_notes(
        &self,
        session_id: &SessionID,
        item_index: usize,
        exercise_id: &ExerciseID,
        notes: String,
        partner_notes: String,
    ) -> Self {
        self.with_session(session_id, |session| {
            if let Some(item) = session.items.get_mut(item_index) {
                match item {
                    SessionItem::Single { exercise } => exercise.notes = notes,
                    SessionItem::Superset { exercises } => {
                        let current = usize::from(exercises[0].exercise_id != *exercise_id);
                        exercises[current].notes = notes;
                        exercises[1 - current].notes = partner_notes;
                    }
                }
            }
        })
    }

    /// Removes the item at `item_index` from the source session and appends
    /// `updated_item` to the target session.
    ///
    /// With identical source and target, the item is replaced in place. The
    /// operation is a no-op unless both sessions and the index exist, so an
    /// item is never dropped halfway.
    #[must_use]
    pub fn move_item(
        &self,
        source_session_id: &SessionID,
        item_index: usize,
        target_session_id: &SessionID,
        updated_item: SessionItem,
    ) -> Self {
        if source_session_id == target_session_id {
            return self.with_session(source_session_id, |session| {
                if let Some(item) = session.items.get_mut(item_index) {
                    *item = updated_item;
                }
            });
        }

        let source_ok = self
            .sessions
            .iter()
            .any(|s| s.id == *source_session_id && item_index < s.items.len());
        let target_ok = self.sessions.iter().any(|s| s.id == *target_session_id);
        if !source_ok || !target_ok {
            return self.clone();
        }

        let mut data = self.clone();
        if let Some(source) = data
            .sessions
            .iter_mut()
            .find(|s| s.id == *source_session_id)
        {
            source.items.remove(item_index);
        }
        if let Some(target) = data
            .sessions
            .iter_mut()
            .find(|s| s.id == *target_session_id)
        {
            target.items.push(updated_item);
        }
        data
    }

    fn with_session(&self, id: &SessionID, f: impl FnOnce(&mut WorkoutSession)) -> Self {
        let mut data = self.clone();
        if let Some(session) = data.sessions.iter_mut().find(|s| s.id == *id) {
            f(session);
        }
        data
    }
}
