//! Bodies for the `/sanic/ta` document and demand-record endpoints.

use serde::{Deserialize, Serialize};

/// Body of `/sanic/ta/word_to_md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileKeyRequest {
    pub file_key: String,
}

/// Body of `/sanic/ta/query_demand_records`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Body of `/sanic/ta/insert_demand_manager`. The project record is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertDemand {
    pub project_data: serde_json::Value,
}

/// Body of `/sanic/ta/delete_demand_records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDemand {
    pub id: String,
}

/// Body of `/sanic/ta/abstract_doc_func`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRef {
    pub doc_id: String,
}
