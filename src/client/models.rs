//! Response models for the platform's agent endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from agent creation
///
/// The service assigns an identifier and echoes the stored
/// configuration back. The echo is the service's contract, not ours,
/// so it stays an opaque map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAgent {
    /// Identifier assigned by the service
    pub id: u64,
    /// Echoed configuration, kept as-is
    #[serde(flatten)]
    pub echo: Map<String, Value>,
}

/// One agent row in a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Whatever else the service reports per agent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A page of agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPage {
    /// Agents on this page. The service names the collection `bots`.
    #[serde(default, alias = "bots")]
    pub agents: Vec<AgentSummary>,
    /// Page number as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageno: Option<u32>,
    /// Page size as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}
