//! Typed records with a lossless fallback.
//!
//! A [`Record<T>`] is either the typed value `T` plus an extension bag, or the
//! raw JSON object exactly as received. Decoding follows a fixed order:
//!
//! 1. bytes that are not a JSON object are a hard error;
//! 2. every [`Schema::REQUIRED_FIELDS`] key must be present and non-null,
//!    otherwise [`Error::MissingField`] names the first one missing;
//! 3. the required keys alone must decode into `T`, so a required field of
//!    the wrong JSON type is a hard [`Error::Serialization`];
//! 4. a typed decode failure keeps the raw object;
//! 5. an out-of-set enum member keeps the raw object;
//! 6. an unparsed nested record keeps the raw object of the parent too.
//!
//! Steps 4 to 6 are not errors. Callers check [`Record::is_unparsed`] (or
//! match on the enum) before reading typed fields.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    config::Config,
    errors::{Error, Result},
    nullable::Nullable,
    telemetry::{FallbackEvent, FallbackReason, MissingFieldEvent},
};

/// A JSON object keyed by wire name.
pub type RawObject = Map<String, Value>;

/// Wire description of a typed model.
///
/// Every field outside [`Self::REQUIRED_FIELDS`] must be `#[serde(default)]`
/// so the required keys alone deserialize.
pub trait Schema: Serialize + de::DeserializeOwned {
    /// Model name used in telemetry and strict-mode errors.
    const NAME: &'static str;
    /// Wire names that must be present and non-null, in check order.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
    /// Every wire name the model knows. Anything else is an extension.
    const FIELDS: &'static [&'static str];

    fn has_invalid_enum(&self) -> bool {
        false
    }

    fn has_unparsed_child(&self) -> bool {
        false
    }
}

/// Reports whether a (possibly wrapped) nested record is unparsed.
pub trait HasUnparsed {
    fn has_unparsed(&self) -> bool;
}

impl<T> HasUnparsed for Record<T> {
    fn has_unparsed(&self) -> bool {
        self.is_unparsed()
    }
}

impl<T: HasUnparsed> HasUnparsed for Option<T> {
    fn has_unparsed(&self) -> bool {
        self.as_ref().is_some_and(HasUnparsed::has_unparsed)
    }
}

impl<T: HasUnparsed> HasUnparsed for Nullable<T> {
    fn has_unparsed(&self) -> bool {
        self.get().is_some_and(HasUnparsed::has_unparsed)
    }
}

impl<T: HasUnparsed> HasUnparsed for Vec<T> {
    fn has_unparsed(&self) -> bool {
        self.iter().any(HasUnparsed::has_unparsed)
    }
}

/// A decoded (or locally built) model.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<T> {
    /// Every required field present and every enum in range.
    Typed {
        value: T,
        /// Extension bag merged into the encoded object after schema keys.
        additional_properties: RawObject,
    },
    /// The payload as received; typed access is unavailable.
    Unparsed(RawObject),
}

impl<T> Record<T> {
    pub fn new(value: T) -> Self {
        Record::Typed {
            value,
            additional_properties: RawObject::new(),
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, Record::Unparsed(_))
    }

    pub fn typed(&self) -> Option<&T> {
        match self {
            Record::Typed { value, .. } => Some(value),
            Record::Unparsed(_) => None,
        }
    }

    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Record::Typed { value, .. } => Some(value),
            Record::Unparsed(_) => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Record::Typed { value, .. } => Some(value),
            Record::Unparsed(_) => None,
        }
    }

    pub fn unparsed(&self) -> Option<&RawObject> {
        match self {
            Record::Unparsed(raw) => Some(raw),
            Record::Typed { .. } => None,
        }
    }

    pub fn additional_properties(&self) -> Option<&RawObject> {
        match self {
            Record::Typed {
                additional_properties,
                ..
            } => Some(additional_properties),
            Record::Unparsed(_) => None,
        }
    }

    pub fn additional_properties_mut(&mut self) -> Option<&mut RawObject> {
        match self {
            Record::Typed {
                additional_properties,
                ..
            } => Some(additional_properties),
            Record::Unparsed(_) => None,
        }
    }

    /// Attaches an extension key. Unparsed records are returned unchanged.
    pub fn with_additional_property(mut self, key: impl Into<String>, value: Value) -> Self {
        if let Some(bag) = self.additional_properties_mut() {
            bag.insert(key.into(), value);
        }
        self
    }
}

impl<T: Default + Clone> Record<T> {
    /// Typed value, or the zero value when the record is unparsed.
    pub fn typed_or_default(&self) -> T {
        self.typed().cloned().unwrap_or_default()
    }
}

impl<T: Default> Default for Record<T> {
    fn default() -> Self {
        Record::new(T::default())
    }
}

impl<T> From<T> for Record<T> {
    fn from(value: T) -> Self {
        Record::new(value)
    }
}

impl<T: Schema> Record<T> {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, &Config::default())
    }

    pub fn decode_with(bytes: &[u8], config: &Config) -> Result<Self> {
        let object: RawObject = serde_json::from_slice(bytes)?;
        Self::from_map_with(object, config)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let object: RawObject = serde_json::from_value(value)?;
        Self::from_map_with(object, &Config::default())
    }

    pub fn from_map(object: RawObject) -> Result<Self> {
        Self::from_map_with(object, &Config::default())
    }

    pub fn from_map_with(object: RawObject, config: &Config) -> Result<Self> {
        let telemetry = config.telemetry();

        if let Some(field) = first_missing(&object, T::REQUIRED_FIELDS) {
            telemetry.record_missing_field(MissingFieldEvent {
                schema: T::NAME,
                field,
            });
            return Err(Error::MissingField { field });
        }

        if !T::REQUIRED_FIELDS.is_empty() {
            let required: RawObject = T::REQUIRED_FIELDS
                .iter()
                .filter_map(|field| {
                    object
                        .get(*field)
                        .map(|value| (field.to_string(), value.clone()))
                })
                .collect();
            serde_json::from_value::<T>(Value::Object(required))?;
        }

        let outcome = match serde_json::from_value::<T>(Value::Object(object.clone())) {
            Err(err) => Err(FallbackReason::Structural(err.to_string())),
            Ok(value) if value.has_invalid_enum() => Err(FallbackReason::InvalidEnum),
            Ok(value) if value.has_unparsed_child() => Err(FallbackReason::UnparsedChild),
            Ok(value) => Ok(value),
        };

        match outcome {
            Ok(value) => {
                let additional_properties = if config.capture_additional_properties {
                    object
                        .into_iter()
                        .filter(|(key, _)| !T::FIELDS.contains(&key.as_str()))
                        .collect()
                } else {
                    RawObject::new()
                };
                Ok(Record::Typed {
                    value,
                    additional_properties,
                })
            }
            Err(reason) => {
                if config.strict {
                    return Err(Error::Unparsed {
                        schema: T::NAME,
                        reason: reason.to_string(),
                    });
                }
                telemetry.record_fallback(FallbackEvent {
                    schema: T::NAME,
                    reason,
                });
                Ok(Record::Unparsed(object))
            }
        }
    }

    /// Wire object for this record.
    ///
    /// Unparsed records yield their raw object untouched. Typed records emit
    /// schema keys first; extension keys named in [`Schema::FIELDS`] are
    /// dropped even when the schema field itself is absent.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Record::Unparsed(raw) => Ok(Value::Object(raw.clone())),
            Record::Typed {
                value,
                additional_properties,
            } => {
                let mut object = match serde_json::to_value(value)? {
                    Value::Object(object) => object,
                    other => {
                        return Err(Error::Serialization(ser::Error::custom(format_args!(
                            "{} serialized to {}, expected an object",
                            T::NAME,
                            kind_of(&other)
                        ))))
                    }
                };
                for (key, extra) in additional_properties {
                    if T::FIELDS.contains(&key.as_str()) {
                        continue;
                    }
                    object.entry(key.as_str()).or_insert_with(|| extra.clone());
                }
                Ok(Value::Object(object))
            }
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_value()?)?)
    }
}

impl<T: Schema> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Record::Unparsed(raw) => raw.serialize(serializer),
            Record::Typed { .. } => self
                .to_value()
                .map_err(ser::Error::custom)?
                .serialize(serializer),
        }
    }
}

impl<'de, T: Schema> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = RawObject::deserialize(deserializer)?;
        Record::from_map(object).map_err(de::Error::custom)
    }
}

fn first_missing(object: &RawObject, required: &[&'static str]) -> Option<&'static str> {
    required
        .iter()
        .copied()
        .find(|field| object.get(*field).map_or(true, Value::is_null))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
