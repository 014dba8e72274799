//! Roles and the attributes returned for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    record::{HasUnparsed, Record, Schema},
    string_enum, EnumCheck,
};

string_enum! {
    /// Roles resource type.
    pub enum RolesType {
        Roles => "roles",
    }
}

/// Attributes of a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAttributes {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
}

impl Schema for RoleAttributes {
    const NAME: &'static str = "RoleAttributes";
    const FIELDS: &'static [&'static str] = &["created_at", "modified_at", "name", "user_count"];
}

/// Role object returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RolesType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Record<RoleAttributes>>,
}

impl Role {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: RolesType::Roles,
            attributes: None,
        }
    }
}

impl Schema for Role {
    const NAME: &'static str = "Role";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];
    const FIELDS: &'static [&'static str] = &["id", "type", "attributes"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.attributes.has_unparsed()
    }
}

/// Response containing a single role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Record<Role>>,
}

impl Schema for RoleResponse {
    const NAME: &'static str = "RoleResponse";
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn role_timestamps_use_second_layout_when_whole() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let role = Role {
            attributes: Some(Record::new(RoleAttributes {
                created_at: Some(created),
                name: Some("Admin".into()),
                ..Default::default()
            })),
            ..Role::new("r1")
        };

        let value = Record::new(role).to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "id": "r1",
                "type": "roles",
                "attributes": {"created_at": "2024-03-01T08:00:00Z", "name": "Admin"}
            })
        );
    }

    #[test]
    fn role_response_round_trips() {
        let payload = json!({
            "data": {
                "id": "r1",
                "type": "roles",
                "attributes": {"modified_at": "2024-03-01T08:00:00.125Z", "user_count": 4}
            }
        });
        let record: Record<RoleResponse> = Record::from_value(payload.clone()).unwrap();
        let role = record.typed().and_then(|r| r.data.as_ref()).and_then(Record::typed).unwrap();
        let attrs = role.attributes.as_ref().and_then(Record::typed).unwrap();
        assert_eq!(attrs.user_count, Some(4));
        assert_eq!(
            attrs.modified_at.map(|t| t.timestamp_subsec_millis()),
            Some(125)
        );
        assert_eq!(record.to_value().unwrap(), payload);
    }
}
