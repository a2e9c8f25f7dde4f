//! Field errors for overrides that clash with an existing one.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::UserOverride;

use super::format::format_time_range;

/// An error attached to one field of an override form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field the error belongs to (`addUserID` or `removeUserID`).
    pub field: String,
    /// The message shown for the field.
    pub message: String,
}

/// The user IDs of a proposed override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideUserValue {
    /// User to add, if any.
    #[serde(rename = "addUserID", default)]
    pub add_user_id: Option<String>,
    /// User to remove, if any.
    #[serde(rename = "removeUserID", default)]
    pub remove_user_id: Option<String>,
}

const ADD_FIELD: &str = "addUserID";
const REMOVE_FIELD: &str = "removeUserID";

/// Explains how a proposed override clashes with `conflicting`.
///
/// Each proposed user ID is checked against both users of the existing
/// override; every match yields one error on the proposed field. The time
/// range in the message is the existing override's, formatted in `zone`.
/// No conflicting override yields no errors.
///
/// # Example
///
/// ```
/// use schedule_coverage::calculation::{OverrideUserValue, map_override_user_error};
/// use schedule_coverage::models::{User, UserOverride};
/// use chrono::{TimeZone, Utc};
///
/// let existing = UserOverride {
///     start: Utc.with_ymd_and_hms(2021, 8, 13, 1, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2021, 8, 13, 2, 0, 0).unwrap(),
///     add_user: Some(User::new("foo", "bob")),
///     remove_user: None,
/// };
/// let value = OverrideUserValue { add_user_id: Some("foo".into()), remove_user_id: None };
///
/// let errors = map_override_user_error(Some(&existing), &value, chrono_tz::UTC);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field, "addUserID");
/// assert_eq!(errors[0].message, "Already added from Aug 13, 2021, 1:00 AM to 2:00 AM");
/// ```
pub fn map_override_user_error(
    conflicting: Option<&UserOverride>,
    value: &OverrideUserValue,
    zone: Tz,
) -> Vec<FieldError> {
    let Some(conflict) = conflicting else {
        return Vec::new();
    };

    let range = format_time_range(conflict.start, conflict.end, zone);
    let add = conflict.add_user.as_ref();
    let remove = conflict.remove_user.as_ref();

    let added_phrase = match remove {
        Some(removed) if add.is_some() => format!("replacing {}", removed.name),
        _ => "added".to_string(),
    };
    let removed_phrase = match add {
        Some(added) if remove.is_some() => format!("replaced by {}", added.name),
        _ => "removed".to_string(),
    };

    let proposed = [
        (ADD_FIELD, value.add_user_id.as_deref()),
        (REMOVE_FIELD, value.remove_user_id.as_deref()),
    ];

    let mut errors = Vec::new();
    for (field, id) in proposed {
        let Some(id) = id else { continue };
        if add.is_some_and(|u| u.id == id) {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("Already {added_phrase} from {range}"),
            });
        }
        if remove.is_some_and(|u| u.id == id) {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("Already {removed_phrase} from {range}"),
            });
        }
    }
    errors
}
