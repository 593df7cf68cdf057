use derive_more::{AsRef, Display};

/// User-visible session name.
///
/// Blank names are rejected here instead of in the mutation operations, so a
/// `SessionName` in hand is always presentable.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionName(String);

impl SessionName {
    pub fn new(name: &str) -> Result<Self, SessionNameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(SessionNameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(SessionNameError::TooLong(len));
        }

        Ok(SessionName(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionName {
    /// The label given to sessions created without an explicit name.
    fn default() -> Self {
        SessionName(String::from("جلسه جدید"))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionNameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
