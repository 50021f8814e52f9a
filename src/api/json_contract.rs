use serde::{Deserialize, Serialize};

use crate::core::OptionValue;
use crate::error::{StudioError, StudioResult};

use super::EditSet;

pub const EDIT_SET_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope used to persist a session's pending edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSetJsonContractV1 {
    pub schema_version: u32,
    pub edits: EditSet,
}

impl EditSet {
    pub fn to_json_contract_v1_pretty(&self) -> StudioResult<String> {
        let payload = EditSetJsonContractV1 {
            schema_version: EDIT_SET_JSON_SCHEMA_V1,
            edits: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            StudioError::InvalidData(format!("failed to serialize edit set contract v1: {e}"))
        })
    }

    /// Accepts either the v1 envelope or a bare `{ path: value }` object.
    pub fn from_json_compat_str(input: &str) -> StudioResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            StudioError::InvalidData(format!("failed to parse edit set json payload: {e}"))
        })?;
        let is_envelope = raw
            .as_object()
            .is_some_and(|object| object.contains_key("schema_version") && object.contains_key("edits"));
        if !is_envelope {
            return serde_json::from_value(raw).map_err(|e| {
                StudioError::InvalidData(format!("failed to parse edit set json payload: {e}"))
            });
        }

        let payload: EditSetJsonContractV1 = serde_json::from_value(raw).map_err(|e| {
            StudioError::InvalidData(format!("failed to parse edit set contract: {e}"))
        })?;
        if payload.schema_version != EDIT_SET_JSON_SCHEMA_V1 {
            return Err(StudioError::InvalidData(format!(
                "unsupported edit set schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.edits)
    }
}

impl OptionValue {
    /// Pretty JSON for code/data export; opaque leaves are left out.
    pub fn to_json_pretty(&self) -> StudioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StudioError::InvalidData(format!("failed to serialize option: {e}")))
    }

    pub fn from_json_str(input: &str) -> StudioResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StudioError::InvalidData(format!("failed to parse option: {e}")))
    }
}
