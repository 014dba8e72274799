//! RUM applications.

use serde::{Deserialize, Serialize};

use crate::{
    record::{HasUnparsed, Record, Schema},
    string_enum, EnumCheck,
};

string_enum! {
    /// RUM application resource type.
    pub enum RumApplicationType {
        RumApplication => "rum_application",
    }
}

/// RUM application attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RumApplicationAttributes {
    pub application_id: String,
    pub client_token: String,
    /// Creation time in milliseconds since the epoch.
    pub created_at: i64,
    pub created_by_handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub name: String,
    pub org_id: i32,
    /// Platform: `browser`, `ios`, `android`, `react-native` or `flutter`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Last update time in milliseconds since the epoch.
    pub updated_at: i64,
    pub updated_by_handle: String,
}

impl RumApplicationAttributes {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        application_id: impl Into<String>,
        client_token: impl Into<String>,
        created_at: i64,
        created_by_handle: impl Into<String>,
        name: impl Into<String>,
        org_id: i32,
        kind: impl Into<String>,
        updated_at: i64,
        updated_by_handle: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            client_token: client_token.into(),
            created_at,
            created_by_handle: created_by_handle.into(),
            hash: None,
            is_active: None,
            name: name.into(),
            org_id,
            kind: kind.into(),
            updated_at,
            updated_by_handle: updated_by_handle.into(),
        }
    }
}

impl Schema for RumApplicationAttributes {
    const NAME: &'static str = "RumApplicationAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "application_id",
        "client_token",
        "created_at",
        "created_by_handle",
        "name",
        "org_id",
        "type",
        "updated_at",
        "updated_by_handle",
    ];
    const FIELDS: &'static [&'static str] = &[
        "application_id",
        "client_token",
        "created_at",
        "created_by_handle",
        "hash",
        "is_active",
        "name",
        "org_id",
        "type",
        "updated_at",
        "updated_by_handle",
    ];
}

/// RUM application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RumApplication {
    pub attributes: Record<RumApplicationAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RumApplicationType,
}

impl RumApplication {
    pub fn new(id: impl Into<String>, attributes: RumApplicationAttributes) -> Self {
        Self {
            attributes: Record::new(attributes),
            id: id.into(),
            kind: RumApplicationType::RumApplication,
        }
    }
}

impl Schema for RumApplication {
    const NAME: &'static str = "RumApplication";
    const REQUIRED_FIELDS: &'static [&'static str] = &["attributes", "id", "type"];
    const FIELDS: &'static [&'static str] = &["attributes", "id", "type"];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.attributes.has_unparsed()
    }
}

/// Response containing a single RUM application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RumApplicationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Record<RumApplication>>,
}

impl Schema for RumApplicationResponse {
    const NAME: &'static str = "RumApplicationResponse";
    const FIELDS: &'static [&'static str] = &["data"];

    fn has_unparsed_child(&self) -> bool {
        self.data.has_unparsed()
    }
}
