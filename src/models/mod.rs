//! Worked models for a handful of API resources.
//!
//! Each resource follows the JSON:API layout: a `data` object carrying `id`,
//! a `type` discriminator, `attributes` and optional `relationships`. Every
//! nested object is itself a [`Record`](crate::Record), so a partially
//! understood child keeps the whole parent in its unparsed form.

pub mod dashboards;
pub mod events;
pub mod roles;
pub mod rum;
pub mod users;
