use log::error;

use crate::{
    ExerciseID, ReadError, SessionID, SessionItem, SessionName, UserData, UserDataRepository,
    WriteError,
};

macro_rules! log_on_error {
    ($result: expr, $action: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {}: {err}", $action);
        }
        result
    }};
}

/// Read-modify-write orchestration around a [`UserDataRepository`].
///
/// Every mutation computes the new [`UserData`] with the pure operations and
/// persists the whole blob. A returned error concerns persistence only; the
/// same mutation can still be applied in memory via [`UserData`] directly
/// while the UI warns that changes are not durable.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: UserDataRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn get_user_data(&self) -> Result<UserData, ReadError> {
        log_on_error!(self.repository.read_user_data(), "read user data")
    }

    pub fn create_session(
        &self,
        data: &UserData,
        name: SessionName,
    ) -> Result<(UserData, SessionID), WriteError> {
        let (data, id) = data.create_session(name);
        self.save(&data)?;
        Ok((data, id))
    }

    pub fn add_single(
        &self,
        data: &UserData,
        session_id: &SessionID,
        exercise_id: ExerciseID,
        notes: String,
    ) -> Result<UserData, WriteError> {
        self.apply(data.add_single(session_id, exercise_id, notes))
    }

    pub fn add_superset(
        &self,
        data: &UserData,
        session_id: &SessionID,
        exercise: (ExerciseID, String),
        partner: (ExerciseID, String),
    ) -> Result<UserData, WriteError> {
        self.apply(data.add_superset(session_id, exercise, partner))
    }

    pub fn toggle_completion(
        &self,
        data: &UserData,
        session_id: &SessionID,
        item_index: usize,
        exercise_id: &ExerciseID,
    ) -> Result<UserData, WriteError> {
        self.apply(data.toggle_completion(session_id, item_index, exercise_id))
    }

    pub fn remove_item(
        &self,
        data: &UserData,
        session_id: &SessionID,
        item_index: usize,
    ) -> Result<UserData, WriteError> {
        self.apply(data.remove_item(session_id, item_index))
    }

    pub fn reorder_items(
        &self,
        data: &UserData,
        session_id: &SessionID,
        items: Vec<SessionItem>,
    ) -> Result<UserData, WriteError> {
        self.apply(data.reorder_items(session_id, items))
    }

    pub fn rename_session(
        &self,
        data: &UserData,
        session_id: &SessionID,
        name: SessionName,
    ) -> Result<UserData, WriteError> {
        self.apply(data.rename_session(session_id, name))
    }

    pub fn delete_session(
        &self,
        data: &UserData,
        session_id: &SessionID,
    ) -> Result<UserData, WriteError> {
        self.apply(data.delete_session(session_id))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn edit_notes(
        &self,
        data: &UserData,
        session_id: &SessionID,
        item_index: usize,
        exercise_id: &ExerciseID,
        notes: String,
        partner_notes: String,
    ) -> Result<UserData, WriteError> {
        self.apply(data.edit_notes(session_id, item_index, exercise_id, notes, partner_notes))
    }

    pub fn move_item(
        &self,
        data: &UserData,
        source_session_id: &SessionID,
        item_index: usize,
        target_session_id: &SessionID,
        updated_item: SessionItem,
    ) -> Result<UserData, WriteError> {
        self.apply(data.move_item(
            source_session_id,
            item_index,
            target_session_id,
            updated_item,
        ))
    }

    /// Replaces the stored data wholesale, as done after an import.
    pub fn replace_user_data(&self, data: UserData) -> Result<UserData, WriteError> {
        self.apply(data)
    }

    pub fn clear_user_data(&self) -> Result<UserData, WriteError> {
        log_on_error!(self.repository.clear_user_data(), "clear user data")?;
        Ok(UserData::default())
    }

    fn apply(&self, data: UserData) -> Result<UserData, WriteError> {
        self.save(&data)?;
        Ok(data)
    }

    fn save(&self, data: &UserData) -> Result<(), WriteError> {
        log_on_error!(self.repository.write_user_data(data), "write user data")
    }
}
