use std::sync::{Arc, Mutex};

use jsonapi_records::{
    models::{
        events::{EventAttributes, EventPriority},
        users::{User, UserAttributes, UserResponse, UsersType},
    },
    Config, Error, FallbackCallbacks, FallbackEvent, FallbackReason, Nullable, Record,
};
use serde_json::{json, Value};

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("encode fixture")
}

#[test]
fn user_without_attributes_is_rejected() {
    let err = Record::<User>::decode(br#"{"id":"123","type":"users"}"#).unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "attributes" }));
    assert_eq!(err.to_string(), "required field attributes missing");

    // Supplying the field with any validly typed value is enough.
    let ok = Record::<User>::decode(br#"{"id":"123","type":"users","attributes":{}}"#).unwrap();
    assert!(!ok.is_unparsed());
}

#[test]
fn user_with_bogus_type_is_kept_verbatim() {
    let payload = json!({"id": "123", "type": "bogus-type", "attributes": {}});
    let record = Record::<User>::decode(&bytes(&payload)).unwrap();

    assert!(record.is_unparsed());
    assert!(record.typed().is_none());
    assert_eq!(Value::Object(record.unparsed().unwrap().clone()), payload);

    let zero = record.typed_or_default();
    assert_eq!(zero.id, "");
    assert!(zero.attributes.typed().is_some_and(|a| a.name.is_absent()));
}

#[test]
fn typed_user_re_encodes_exactly_its_keys() {
    let payload = json!({"id": "123", "type": "users", "attributes": {"name": "a"}});
    let record = Record::<User>::decode(&bytes(&payload)).unwrap();
    assert!(record.unparsed().is_none());

    let user = record.typed().unwrap();
    assert_eq!(user.kind, UsersType::Users);
    assert_eq!(
        user.attributes.typed().map(|a| a.name.clone()),
        Some(Nullable::new("a".to_string()))
    );

    let encoded: Value = serde_json::from_slice(&record.encode().unwrap()).unwrap();
    let mut keys: Vec<_> = encoded.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["attributes", "id", "type"]);
}

#[test]
fn decode_encode_decode_preserves_typed_fields() {
    let payload = json!({
        "data": {
            "id": "00000000-0000-0000-0000-000000000001",
            "type": "users",
            "attributes": {
                "created_at": "2019-09-19T10:00:00.123Z",
                "modified_at": "2019-09-20T10:00:00Z",
                "email": "jane@example.com",
                "disabled": false,
                "title": null,
                "verified": true
            },
            "relationships": {
                "org": {"data": {"id": "org-1", "type": "orgs"}},
                "roles": {"data": [{"id": "r1", "type": "roles"}]}
            }
        }
    });

    let first = Record::<UserResponse>::decode(&bytes(&payload)).unwrap();
    assert!(!first.is_unparsed());
    let second = Record::<UserResponse>::decode(&first.encode().unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.to_value().unwrap(), payload);
}

#[test]
fn nested_unparsed_child_marks_parent_unparsed() {
    // The parent's own required fields are all present and typed correctly;
    // only the organization relationship carries an unknown discriminator.
    let payload = json!({
        "id": "123",
        "type": "users",
        "attributes": {},
        "relationships": {"org": {"data": {"id": "org-1", "type": "tenants"}}}
    });
    let record = Record::<User>::decode(&bytes(&payload)).unwrap();
    assert!(record.is_unparsed());
    assert_eq!(record.to_value().unwrap(), payload);
}

#[test]
fn extension_bag_round_trips_without_overriding_schema_keys() {
    let record = Record::new(User::new("123", UserAttributes::default()))
        .with_additional_property("meta", json!({"source": "import"}))
        .with_additional_property("type", json!("admins"));

    let value = record.to_value().unwrap();
    assert_eq!(value["type"], json!("users"));
    assert_eq!(value["meta"], json!({"source": "import"}));

    let decoded = Record::<User>::decode(&bytes(&value)).unwrap();
    assert_eq!(
        decoded.additional_properties().and_then(|bag| bag.get("meta")),
        Some(&json!({"source": "import"}))
    );
    assert_eq!(decoded.typed(), record.typed());
}

#[test]
fn extension_key_for_absent_optional_field_does_not_leak_into_it() {
    let record = Record::new(User::new("123", UserAttributes::default()))
        .with_additional_property("relationships", json!({}));

    let value = record.to_value().unwrap();
    assert!(value.get("relationships").is_none());

    let back = Record::<User>::decode(&bytes(&value)).unwrap();
    assert_eq!(back.typed(), record.typed());
    assert!(back.typed().is_some_and(|user| user.relationships.is_none()));
}

#[test]
fn required_field_with_wrong_type_is_rejected() {
    let err = Record::<User>::decode(br#"{"id":123,"type":"users","attributes":{}}"#).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));

    let err = Record::<User>::decode(br#"{"id":"123","type":"users","attributes":"none"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn explicit_nulls_and_absent_fields_are_distinct_on_the_wire() {
    let mut attrs = EventAttributes::default();
    attrs.priority.set(EventPriority::Normal);
    attrs.monitor.set_null();

    let value = Record::new(attrs).to_value().unwrap();
    assert_eq!(value, json!({"priority": "normal", "monitor": null}));
    assert!(value.get("monitor_id").is_none());
}

#[test]
fn malformed_json_has_no_fallback() {
    let err = Record::<User>::decode(b"{\"id\": \"123\",").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn strict_config_and_callbacks() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let callbacks = FallbackCallbacks {
        on_fallback: Some({
            let seen = seen.clone();
            Arc::new(move |event: FallbackEvent| {
                seen.lock().unwrap().push((event.schema, event.reason));
            })
        }),
        ..Default::default()
    };
    let payload = bytes(&json!({
        "id": "123",
        "type": "users",
        "attributes": {},
        "relationships": ["not", "an", "object"]
    }));

    let lenient = Record::<User>::decode_with(&payload, &Config::new().with_callbacks(callbacks))
        .unwrap();
    assert!(lenient.is_unparsed());
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "User");
    assert!(matches!(seen[0].1, FallbackReason::Structural(_)));

    let err = Record::<User>::decode_with(&payload, &Config::new().with_strict(true)).unwrap_err();
    assert!(matches!(err, Error::Unparsed { schema: "User", .. }));
}

#[test]
fn records_decode_concurrently() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Record<UserResponse>>();
    assert_send_sync::<Config>();

    let payload = bytes(&json!({"id": "123", "type": "users", "attributes": {"name": "a"}}));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let payload = payload.clone();
            std::thread::spawn(move || Record::<User>::decode(&payload).unwrap())
        })
        .collect();
    for handle in handles {
        assert!(!handle.join().unwrap().is_unparsed());
    }
}
