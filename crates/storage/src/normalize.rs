//! Normalization of stored session data.
//!
//! The stored blob may be current-schema data, data written by an older
//! version of the app, or a hand-edited import. Normalization reconciles all
//! of these into the canonical model without ever failing: invalid fields
//! fall back to defaults and malformed entries are skipped while valid ones
//! are retained.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tamrinsaz_domain as domain;

/// Produces canonical user data from a parsed JSON value.
///
/// A `sessions` array is the only structural requirement; everything below it
/// is handled permissively by [`normalize_session`]. Returns `None` when that
/// requirement is not met.
#[must_use]
pub fn normalize_user_data(value: &Value) -> Option<domain::UserData> {
    let sessions = value.get("sessions")?.as_array()?;
    Some(domain::UserData {
        sessions: sessions.iter().map(normalize_session).collect(),
    })
}

/// Produces a valid session from an arbitrary value. Total and idempotent.
///
/// Sessions written before supersets existed store their refs in an
/// `exercises` array; those are migrated into `Single` items. The legacy
/// shape is accepted on input only, never produced.
#[must_use]
pub fn normalize_session(value: &Value) -> domain::WorkoutSession {
    let id = value
        .get("id")
        .and_then(id_string)
        .map_or_else(domain::SessionID::fresh, domain::SessionID::from);
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| domain::SessionName::new(name).ok())
        .unwrap_or_default();
    let created_at = value.get("createdAt").map_or_else(Utc::now, timestamp);
    let items = if let Some(items) = value.get("items").and_then(Value::as_array) {
        items.iter().filter_map(normalize_item).collect()
    } else if let Some(exercises) = value.get("exercises").and_then(Value::as_array) {
        exercises
            .iter()
            .filter_map(exercise_ref)
            .map(|exercise| domain::SessionItem::Single { exercise })
            .collect()
    } else {
        vec![]
    };
    domain::WorkoutSession {
        id,
        name,
        items,
        created_at,
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    match value {
        Value::String(timestamp) => DateTime::parse_from_rfc3339(timestamp)
            .map_or_else(|_| Utc::now(), |timestamp| timestamp.with_timezone(&Utc)),
        Value::Number(milliseconds) => milliseconds
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_else(Utc::now),
        _ => Utc::now(),
    }
}

fn normalize_item(value: &Value) -> Option<domain::SessionItem> {
    match value.get("type").and_then(Value::as_str)? {
        "single" => Some(domain::SessionItem::Single {
            exercise: exercise_ref(value.get("exercise")?)?,
        }),
        "superset" => {
            let [first, second] = value.get("exercises")?.as_array()?.as_slice() else {
                return None;
            };
            Some(domain::SessionItem::Superset {
                exercises: [exercise_ref(first)?, exercise_ref(second)?],
            })
        }
        _ => None,
    }
}

fn exercise_ref(value: &Value) -> Option<domain::ExerciseRef> {
    let exercise_id = value.get("exerciseId").and_then(Value::as_str)?;
    let completed = value.get("completed").and_then(Value::as_bool)?;
    let notes = value.get("notes").and_then(Value::as_str).unwrap_or_default();
    Some(domain::ExerciseRef {
        exercise_id: exercise_id.into(),
        completed,
        notes: notes.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::codec;
    use crate::tests::data::{SESSION, USER_DATA, created_at};

    use super::*;

    #[rstest]
    #[case(json!({
        "id": "1765547003923",
        "name": "جلسه 1",
        "createdAt": "2025-12-12T13:43:23.923Z",
        "items": [
            { "type": "single", "exercise": { "exerciseId": "78", "completed": false, "notes": "12-10-8" } },
            { "type": "superset", "exercises": [
                { "exerciseId": "49", "completed": false, "notes": "3×10" },
                { "exerciseId": "62", "completed": true, "notes": "3×10" }
            ] }
        ]
    }))]
    #[case(json!({ "id": 7, "exercises": [{ "exerciseId": "5", "completed": true }] }))]
    #[case(json!({ "name": 42, "items": [null, { "type": "bogus" }] }))]
    #[case(json!(null))]
    #[case(json!("plain string"))]
    fn test_normalize_session_idempotent(#[case] value: Value) {
        let first = normalize_session(&value);
        let serialized = serde_json::to_value(codec::WorkoutSession::from(&first)).unwrap();
        assert_eq!(normalize_session(&serialized), first);
    }

    #[test]
    fn test_normalize_session_canonical() {
        let value = json!({
            "id": "1765547003923",
            "name": "جلسه 1",
            "createdAt": "2025-12-12T13:43:23.923Z",
            "items": [
                { "type": "single", "exercise": { "exerciseId": "78", "completed": false, "notes": "12-10-8" } },
                { "type": "superset", "exercises": [
                    { "exerciseId": "49", "completed": false, "notes": "3×10" },
                    { "exerciseId": "62", "completed": true, "notes": "3×10" }
                ] }
            ]
        });
        assert_eq!(normalize_session(&value), *SESSION);
    }

    #[test]
    fn test_normalize_session_legacy_migration() {
        let value = json!({
            "id": "1",
            "name": "A",
            "exercises": [{ "exerciseId": "5", "completed": true, "notes": "3x10" }],
            "createdAt": "2024-01-01T00:00:00Z"
        });
        assert_eq!(
            normalize_session(&value),
            domain::WorkoutSession {
                id: "1".into(),
                name: domain::SessionName::new("A").unwrap(),
                items: vec![domain::SessionItem::Single {
                    exercise: domain::ExerciseRef {
                        exercise_id: "5".into(),
                        completed: true,
                        notes: String::from("3x10"),
                    },
                }],
                created_at: created_at("2024-01-01T00:00:00Z"),
            }
        );
    }

    #[test]
    fn test_normalize_session_drops_malformed_items() {
        // The first entry misses `completed`, making its ref invalid, and the
        // superset holds only one ref. Nothing survives, nothing fails.
        let value = json!({
            "id": "1",
            "items": [
                { "type": "single", "exercise": { "exerciseId": "5" } },
                { "type": "bogus" },
                null,
                { "type": "superset", "exercises": [{ "exerciseId": "1", "completed": false }] }
            ]
        });
        assert_eq!(normalize_session(&value).items, vec![]);
    }

    #[test]
    fn test_normalize_session_keeps_valid_items_among_malformed() {
        let value = json!({
            "id": "1",
            "items": [
                { "type": "single", "exercise": { "exerciseId": "5", "completed": false } },
                { "type": "bogus" },
                { "type": "superset", "exercises": [
                    { "exerciseId": "1", "completed": false },
                    { "exerciseId": "2", "completed": false },
                    { "exerciseId": "3", "completed": false }
                ] },
                { "type": "superset", "exercises": [
                    { "exerciseId": "1", "completed": false },
                    { "exerciseId": "2", "completed": true }
                ] }
            ]
        });
        assert_eq!(
            normalize_session(&value).items,
            vec![
                domain::SessionItem::Single {
                    exercise: domain::ExerciseRef::new("5".into(), String::new()),
                },
                domain::SessionItem::Superset {
                    exercises: [
                        domain::ExerciseRef::new("1".into(), String::new()),
                        domain::ExerciseRef {
                            exercise_id: "2".into(),
                            completed: true,
                            notes: String::new(),
                        },
                    ],
                },
            ]
        );
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "name": 42 }))]
    #[case(json!({ "name": "" }))]
    fn test_normalize_session_default_name(#[case] value: Value) {
        assert_eq!(
            normalize_session(&value).name,
            domain::SessionName::default()
        );
    }

    #[rstest]
    #[case(json!({ "id": "123" }), Some("123"))]
    #[case(json!({ "id": 1765547003923_i64 }), Some("1765547003923"))]
    #[case(json!({ "id": "" }), None)]
    #[case(json!({}), None)]
    fn test_normalize_session_id(#[case] value: Value, #[case] expected: Option<&str>) {
        let id = normalize_session(&value).id;
        match expected {
            Some(expected) => assert_eq!(id.as_str(), expected),
            None => assert!(!id.as_str().is_empty()),
        }
    }

    #[test]
    fn test_normalize_session_generated_ids_are_unique() {
        assert_ne!(
            normalize_session(&json!({})).id,
            normalize_session(&json!({})).id
        );
    }

    #[rstest]
    #[case(json!({ "createdAt": "2025-12-12T13:43:23.923Z" }), Some("2025-12-12T13:43:23.923Z"))]
    #[case(json!({ "createdAt": 1_765_547_003_923_i64 }), Some("2025-12-12T13:43:23.923Z"))]
    #[case(json!({ "createdAt": "yesterday" }), None)]
    #[case(json!({ "createdAt": true }), None)]
    #[case(json!({}), None)]
    fn test_normalize_session_created_at(#[case] value: Value, #[case] expected: Option<&str>) {
        let before = Utc::now();
        let session_created_at = normalize_session(&value).created_at;
        match expected {
            Some(expected) => assert_eq!(session_created_at, created_at(expected)),
            None => assert!(session_created_at >= before),
        }
    }

    #[test]
    fn test_normalize_session_defaults_missing_notes() {
        let value = json!({
            "id": "1",
            "items": [
                { "type": "single", "exercise": { "exerciseId": "5", "completed": false, "notes": null } }
            ]
        });
        assert_eq!(
            normalize_session(&value).items,
            vec![domain::SessionItem::Single {
                exercise: domain::ExerciseRef::new("5".into(), String::new()),
            }]
        );
    }

    #[rstest]
    #[case(json!({}), false)]
    #[case(json!({ "sessions": 5 }), false)]
    #[case(json!(null), false)]
    #[case(json!({ "sessions": [] }), true)]
    fn test_normalize_user_data_requires_sessions_array(
        #[case] value: Value,
        #[case] expected: bool,
    ) {
        assert_eq!(normalize_user_data(&value).is_some(), expected);
    }

    #[test]
    fn test_normalize_user_data() {
        let value =
            serde_json::to_value(codec::UserData::from(&*USER_DATA)).unwrap();
        assert_eq!(normalize_user_data(&value), Some(USER_DATA.clone()));
    }
}
