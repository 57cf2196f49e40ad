//! Request bodies for every backend endpoint.
//!
//! Each struct serializes to exactly the JSON fields its endpoint reads.
//! Field names follow the backend's wire names, typos included.

mod chat;
mod demand;
mod file;
mod user;

pub use chat::{ChatQuery, ChatRef, StopChat};
pub use demand::{DeleteDemand, DocRef, FileKeyRequest, InsertDemand, PageRequest};
pub use file::FileQaRequest;
pub use user::{DeleteUserRecords, Feedback, LoginRequest, UserRecordQuery};
