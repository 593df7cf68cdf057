#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod name;
mod service;
mod session;
mod user_data;

pub use catalog::{Exercise, ExerciseID};
pub use error::{ReadError, StorageError, WriteError};
pub use name::{SessionName, SessionNameError};
pub use service::Service;
pub use session::{ExerciseRef, SessionID, SessionItem, WorkoutSession};
pub use user_data::{UserData, UserDataRepository};
