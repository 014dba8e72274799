//! Forward-compatible typed records for JSON:API payloads.
//!
//! Every model decodes into a [`Record<T>`]: either the typed value plus an
//! extension bag, or the raw object as received when the payload does not fit
//! the schema (type mismatch, unknown enum member, unparsed child). Malformed
//! JSON and required fields that are missing or of the wrong type are the
//! only hard errors.
//!
//! ```ignore
//! use jsonapi_records::{models::users::User, Record};
//!
//! let record = Record::<User>::decode(br#"{"id":"123","type":"users","attributes":{"name":"a"}}"#)?;
//! assert!(!record.is_unparsed());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod enums;
mod errors;
pub mod models;
mod nullable;
mod record;
mod telemetry;
pub mod timestamp;

pub use config::Config;
pub use enums::{EnumCheck, StringEnum};
pub use errors::{Error, Result, ValidationError};
pub use nullable::Nullable;
pub use record::{HasUnparsed, RawObject, Record, Schema};
pub use telemetry::{FallbackCallbacks, FallbackEvent, FallbackReason, MissingFieldEvent};
