//! Event attributes, including the monitor that triggered the event.

use serde::{Deserialize, Serialize};

use crate::{
    nullable::Nullable,
    record::{HasUnparsed, Record, Schema},
    string_enum, EnumCheck,
};

string_enum! {
    /// The priority of the event.
    pub enum EventPriority {
        Normal => "normal",
        Low => "low",
    }
}

string_enum! {
    /// If an alert event is enabled, its status is one of these values.
    pub enum EventStatusType {
        Failure => "failure",
        Error => "error",
        Warning => "warning",
        Info => "info",
        Success => "success",
        UserUpdate => "user_update",
        Recommendation => "recommendation",
        Snapshot => "snapshot",
    }
}

/// The metadata associated with a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
}

impl Schema for Event {
    const NAME: &'static str = "Event";
    const FIELDS: &'static [&'static str] = &["id", "id_str", "name", "source_id"];
}

/// Attributes from the monitor that triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorType {
    /// POSIX timestamp of the monitor's creation in nanoseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Schema for MonitorType {
    const NAME: &'static str = "MonitorType";
    const FIELDS: &'static [&'static str] = &[
        "created_at",
        "group_status",
        "groups",
        "id",
        "message",
        "modified",
        "name",
        "query",
        "tags",
        "templated_name",
        "type",
    ];
}

/// Object description of attributes from your event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_key: Option<String>,
    /// POSIX timestamp of the event. Limited to events up to 18 hours in the past.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_happened: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evt: Option<Record<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub monitor: Nullable<Record<MonitorType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub monitor_id: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub priority: Nullable<EventPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_event_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcecategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatusType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Schema for EventAttributes {
    const NAME: &'static str = "EventAttributes";
    const FIELDS: &'static [&'static str] = &[
        "aggregation_key",
        "date_happened",
        "device_name",
        "duration",
        "event_object",
        "evt",
        "hostname",
        "monitor",
        "monitor_groups",
        "monitor_id",
        "priority",
        "related_event_id",
        "service",
        "source_type_name",
        "sourcecategory",
        "status",
        "tags",
        "timestamp",
        "title",
    ];

    fn has_invalid_enum(&self) -> bool {
        self.priority.is_invalid() || self.status.is_invalid()
    }

    fn has_unparsed_child(&self) -> bool {
        self.evt.has_unparsed() || self.monitor.has_unparsed()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nullable_fields_keep_their_state() {
        let payload = json!({"monitor": null, "monitor_id": null, "priority": "low"});
        let record = Record::<EventAttributes>::from_value(payload.clone()).unwrap();
        let attrs = record.typed().unwrap();
        assert!(attrs.monitor.is_null());
        assert!(attrs.monitor_id.is_null());
        assert_eq!(attrs.priority.get(), Some(&EventPriority::Low));
        assert_eq!(record.to_value().unwrap(), payload);
    }

    #[test]
    fn absent_nullables_are_not_written() {
        let mut attrs = EventAttributes {
            title: Some("deploy".into()),
            ..Default::default()
        };
        attrs.monitor_id.set(42);
        attrs.priority.set_null();

        assert_eq!(
            Record::new(attrs).to_value().unwrap(),
            json!({"title": "deploy", "monitor_id": 42, "priority": null})
        );
    }

    #[test]
    fn unknown_priority_keeps_payload() {
        let payload = json!({"priority": "urgent", "title": "deploy"});
        let record = Record::<EventAttributes>::from_value(payload.clone()).unwrap();
        assert_eq!(record.to_value().unwrap(), payload);
        assert!(record.is_unparsed());
        assert_eq!(record.typed_or_default().title, None);
    }

    #[test]
    fn unknown_status_keeps_payload() {
        let record =
            Record::<EventAttributes>::from_value(json!({"status": "catastrophe"})).unwrap();
        assert!(record.is_unparsed());
    }

    #[test]
    fn unparsed_monitor_propagates() {
        let payload = json!({"monitor": {"id": "not-a-number"}, "title": "deploy"});
        let record = Record::<EventAttributes>::from_value(payload.clone()).unwrap();
        assert!(record.is_unparsed());
        assert_eq!(record.to_value().unwrap(), payload);
    }

    #[test]
    fn unparsed_evt_propagates() {
        let record =
            Record::<EventAttributes>::from_value(json!({"evt": {"source_id": "x"}})).unwrap();
        assert!(record.is_unparsed());
    }

    #[test]
    fn typed_monitor_is_reachable() {
        let payload = json!({
            "monitor": {"id": 7, "name": "cpu", "groups": ["host:a"], "type": "metric alert"},
            "status": "warning"
        });
        let record = Record::<EventAttributes>::from_value(payload.clone()).unwrap();
        let attrs = record.typed().unwrap();
        let monitor = attrs.monitor.get().and_then(Record::typed).unwrap();
        assert_eq!(monitor.id, Some(7));
        assert_eq!(monitor.kind.as_deref(), Some("metric alert"));
        assert_eq!(attrs.status, Some(EventStatusType::Warning));
        assert_eq!(record.to_value().unwrap(), payload);
    }
}
