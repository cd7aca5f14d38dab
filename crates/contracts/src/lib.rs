//! Wire types shared between the SkillBridge web client and the backend REST API.
//!
//! Everything here mirrors the backend's JSON shapes: camelCase field names,
//! SCREAMING-CASE enums, RFC 3339 instants. The client holds no authoritative
//! state; these are transport shapes, not domain models.

pub mod auth;
pub mod domain;
pub mod envelope;
