//! User override model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Span;

/// A user reference as returned by the schedule query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// The user's ID.
    pub id: String,
    /// The user's display name.
    pub name: String,
}

impl User {
    /// Creates a user reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The effect an override has on the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// Adds a user on call.
    Add,
    /// Removes a user from on call.
    Remove,
    /// Replaces one user with another.
    Replace,
}

/// A temporary add, remove or replace of a user's on-call presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverride {
    /// The start of the override.
    pub start: DateTime<Utc>,
    /// The end of the override.
    pub end: DateTime<Utc>,
    /// The user put on call, if any.
    #[serde(default)]
    pub add_user: Option<User>,
    /// The user taken off call, if any.
    #[serde(default)]
    pub remove_user: Option<User>,
}

impl UserOverride {
    /// Classifies the override by which users it names.
    ///
    /// Returns `None` for an override naming neither user.
    pub fn kind(&self) -> Option<OverrideKind> {
        match (&self.add_user, &self.remove_user) {
            (Some(_), Some(_)) => Some(OverrideKind::Replace),
            (Some(_), None) => Some(OverrideKind::Add),
            (None, Some(_)) => Some(OverrideKind::Remove),
            (None, None) => None,
        }
    }
}

impl Span for UserOverride {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn with_bounds(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UserOverride {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_add_override() {
        let o = parse(
            r#"{"start": "2021-08-13T00:00:00Z", "end": "2021-08-13T01:00:00Z",
                "addUser": {"id": "foo", "name": "bob"}}"#,
        );
        assert_eq!(o.kind(), Some(OverrideKind::Add));
        assert_eq!(o.add_user, Some(User::new("foo", "bob")));
        assert_eq!(o.remove_user, None);
    }

    #[test]
    fn test_replace_override() {
        let o = parse(
            r#"{"start": "2021-08-13T00:00:00Z", "end": "2021-08-13T01:00:00Z",
                "addUser": {"id": "foo", "name": "bob"},
                "removeUser": {"id": "bar", "name": "ann"}}"#,
        );
        assert_eq!(o.kind(), Some(OverrideKind::Replace));
    }

    #[test]
    fn test_remove_override_with_null_add_user() {
        let o = parse(
            r#"{"start": "2021-08-13T00:00:00Z", "end": "2021-08-13T01:00:00Z",
                "addUser": null, "removeUser": {"id": "bar", "name": "ann"}}"#,
        );
        assert_eq!(o.kind(), Some(OverrideKind::Remove));
    }
}
