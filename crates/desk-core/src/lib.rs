//! # desk-core
//!
//! Core types shared across all desk crates:
//! - Request payload structs for every backend endpoint, serialized with
//!   exactly the field names the backend reads
//! - The [`QaType`] newtype and its well-known values
//! - The backend's `{code, msg, data}` response envelope
//! - Cross-cutting error types

pub mod envelope;
pub mod errors;
pub mod payloads;
pub mod qa_type;

pub use envelope::ApiEnvelope;
pub use errors::CoreError;
pub use qa_type::QaType;
