use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};

use super::{ProjectionState, ProjectionSummary, ValueMode};

pub const PROJECTION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable projection state used by regression tests and tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSnapshot {
    pub value_mode: ValueMode,
    pub state: ProjectionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ProjectionSnapshot,
}

impl ProjectionSnapshot {
    #[must_use]
    pub fn from_state(state: &ProjectionState) -> Self {
        Self {
            value_mode: state.value_mode(),
            state: state.clone(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::from_state(&self.state)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ProjectionResult<String> {
        let payload = ProjectionSnapshotJsonContractV1 {
            schema_version: PROJECTION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ProjectionError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ProjectionResult<Self> {
        let snapshot = match serde_json::from_str::<ProjectionSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                let payload: ProjectionSnapshotJsonContractV1 = serde_json::from_str(input)
                    .map_err(|e| {
                        ProjectionError::InvalidData(format!(
                            "failed to parse snapshot json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != PROJECTION_SNAPSHOT_JSON_SCHEMA_V1 {
                    return Err(ProjectionError::InvalidData(format!(
                        "unsupported snapshot schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.snapshot
            }
        };

        snapshot.state.validate_restored()?;
        if snapshot.value_mode != snapshot.state.value_mode() {
            return Err(ProjectionError::InvalidData(
                "snapshot value_mode does not match its state".to_owned(),
            ));
        }
        Ok(snapshot)
    }
}
