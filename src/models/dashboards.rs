//! Dashboards within a dashboard list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    nullable::Nullable,
    record::{HasUnparsed, Record, Schema},
    string_enum, EnumCheck,
};

string_enum! {
    /// The type of the dashboard.
    pub enum DashboardType {
        CustomTimeboard => "custom_timeboard",
        CustomScreenboard => "custom_screenboard",
        IntegrationScreenboard => "integration_screenboard",
        IntegrationTimeboard => "integration_timeboard",
        HostTimeboard => "host_timeboard",
    }
}

/// Creator of the object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
}

impl Schema for Creator {
    const NAME: &'static str = "Creator";
    const FIELDS: &'static [&'static str] = &["email", "handle", "name"];
}

/// A dashboard within a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Record<Creator>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub icon: Nullable<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: DashboardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DashboardListItem {
    pub fn new(id: impl Into<String>, kind: DashboardType) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Default::default()
        }
    }
}

impl Schema for DashboardListItem {
    const NAME: &'static str = "DashboardListItem";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];
    const FIELDS: &'static [&'static str] = &[
        "author",
        "created",
        "icon",
        "id",
        "is_favorite",
        "is_read_only",
        "is_shared",
        "modified",
        "popularity",
        "title",
        "type",
        "url",
    ];

    fn has_invalid_enum(&self) -> bool {
        self.kind.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.author.has_unparsed()
    }
}

/// Dashboards within a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardListItems {
    pub dashboards: Vec<Record<DashboardListItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl Schema for DashboardListItems {
    const NAME: &'static str = "DashboardListItems";
    const REQUIRED_FIELDS: &'static [&'static str] = &["dashboards"];
    const FIELDS: &'static [&'static str] = &["dashboards", "total"];

    fn has_unparsed_child(&self) -> bool {
        self.dashboards.has_unparsed()
    }
}
