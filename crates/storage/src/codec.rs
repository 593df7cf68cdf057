//! JSON wire format for persisted and exported user data.
//!
//! The wire structs define the canonical serialized shape. Reading goes the
//! other way through [`crate::normalize`], which also accepts older shapes,
//! so the structs only need to serialize.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tamrinsaz_domain as domain;

use crate::normalize;

#[derive(Serialize)]
pub struct UserData {
    pub sessions: Vec<WorkoutSession>,
}

#[derive(Serialize)]
pub struct WorkoutSession {
    pub id: String,
    pub name: String,
    pub items: Vec<SessionItem>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum SessionItem {
    #[serde(rename = "single")]
    Single { exercise: ExerciseRef },
    #[serde(rename = "superset")]
    Superset { exercises: [ExerciseRef; 2] },
}

#[derive(Serialize)]
pub struct ExerciseRef {
    #[serde(rename = "exerciseId")]
    pub exercise_id: String,
    pub completed: bool,
    pub notes: String,
}

impl From<&domain::UserData> for UserData {
    fn from(user_data: &domain::UserData) -> Self {
        Self {
            sessions: user_data.sessions.iter().map(Into::into).collect(),
        }
    }
}

impl From<&domain::WorkoutSession> for WorkoutSession {
    fn from(session: &domain::WorkoutSession) -> Self {
        Self {
            id: session.id.to_string(),
            name: session.name.as_str().to_string(),
            items: session.items.iter().map(Into::into).collect(),
            created_at: session.created_at,
        }
    }
}

impl From<&domain::SessionItem> for SessionItem {
    fn from(item: &domain::SessionItem) -> Self {
        match item {
            domain::SessionItem::Single { exercise } => Self::Single {
                exercise: exercise.into(),
            },
            domain::SessionItem::Superset { exercises } => Self::Superset {
                exercises: [(&exercises[0]).into(), (&exercises[1]).into()],
            },
        }
    }
}

impl From<&domain::ExerciseRef> for ExerciseRef {
    fn from(exercise: &domain::ExerciseRef) -> Self {
        Self {
            exercise_id: exercise.exercise_id.as_str().to_string(),
            completed: exercise.completed,
            notes: exercise.notes.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("invalid JSON")]
    Parse(String),
    #[error("no sessions found")]
    Schema,
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Serializes user data as pretty-printed JSON for a backup download.
#[must_use]
pub fn export(user_data: &domain::UserData) -> String {
    serde_json::to_string_pretty(&UserData::from(user_data)).expect("serialization failed")
}

/// Suggested file name for a backup exported on the given day.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("tamrinsaz-backup-{date}.json")
}

/// Reads a backup produced by [`export`] or any older variant of it.
///
/// Parsing and the top-level shape are strict; everything within the
/// `sessions` array is normalized leniently.
///
/// # Errors
///
/// Returns [`ImportError::Parse`] for invalid JSON and [`ImportError::Schema`]
/// when there is no `sessions` array.
pub fn import(json: &str) -> Result<domain::UserData, ImportError> {
    let value = serde_json::from_str(json)?;
    normalize::normalize_user_data(&value).ok_or(ImportError::Schema)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::USER_DATA;

    use super::*;

    #[test]
    fn test_export_shape() {
        let exported: serde_json::Value = serde_json::from_str(&export(&USER_DATA)).unwrap();
        assert_eq!(
            exported,
            json!({
                "sessions": [
                    {
                        "id": "1765547003923",
                        "name": "جلسه 1",
                        "items": [
                            {
                                "type": "single",
                                "exercise": {
                                    "exerciseId": "78",
                                    "completed": false,
                                    "notes": "12-10-8"
                                }
                            },
                            {
                                "type": "superset",
                                "exercises": [
                                    {
                                        "exerciseId": "49",
                                        "completed": false,
                                        "notes": "3×10"
                                    },
                                    {
                                        "exerciseId": "62",
                                        "completed": true,
                                        "notes": "3×10"
                                    }
                                ]
                            }
                        ],
                        "createdAt": "2025-12-12T13:43:23.923Z"
                    },
                    {
                        "id": "1765547100000",
                        "name": "جلسه 2",
                        "items": [],
                        "createdAt": "2025-12-12T13:45:00Z"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_import_round_trip() {
        assert_eq!(import(&export(&USER_DATA)), Ok(USER_DATA.clone()));
    }

    #[test]
    fn test_import_legacy_backup() {
        let json = r#"{
            "sessions": [
                {
                    "id": 1700000000000,
                    "name": "قدیمی",
                    "exercises": [
                        { "exerciseId": "3", "completed": true, "notes": "4x8" }
                    ],
                    "createdAt": 1700000000000
                }
            ]
        }"#;
        let user_data = import(json).unwrap();
        assert_eq!(user_data.sessions.len(), 1);
        let session = &user_data.sessions[0];
        assert_eq!(session.id.as_str(), "1700000000000");
        assert_eq!(
            session.items,
            vec![tamrinsaz_domain::SessionItem::Single {
                exercise: tamrinsaz_domain::ExerciseRef {
                    exercise_id: "3".into(),
                    completed: true,
                    notes: String::from("4x8"),
                },
            }]
        );
    }

    #[rstest]
    #[case("")]
    #[case("{")]
    #[case("not json")]
    fn test_import_parse_error(#[case] json: &str) {
        assert!(matches!(import(json), Err(ImportError::Parse(_))));
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"{"sessions": 1}"#)]
    #[case("[]")]
    #[case("null")]
    #[case(r#""tamrinsaz""#)]
    fn test_import_schema_error(#[case] json: &str) {
        assert_eq!(import(json), Err(ImportError::Schema));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()),
            "tamrinsaz-backup-2025-12-12.json"
        );
    }
}
