// Change event as delivered by the upstream source.
//
// Purpose
// - Carry an insert or delete intent for one customer record.
//
// Responsibilities
// - `id` and `timestamp` together address the target record.
// - Be independent of transport details; HTTP and GraphQL both map into this shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub operation: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
