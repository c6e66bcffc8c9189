//! Persisted sandbox state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stepper_ui::{StepValue, StepperConfig};
use thiserror::Error;

/// Schema version written by [`encode_snapshot`].
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Number of steps rendered by the sandbox.
pub const SHOWCASE_STEPS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Host-owned sandbox state: the authoritative step value plus the toggles under review.
///
/// Fields missing from a persisted payload fall back to the sandbox defaults.
pub struct ShowcaseSnapshot {
    /// Snapshot schema version.
    pub schema_version: u32,
    /// Authoritative current step.
    pub value: StepValue,
    /// Whether the current step renders its loading indicator.
    pub loading: bool,
    /// Stepper configuration under review.
    pub config: StepperConfig,
}

impl Default for ShowcaseSnapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            value: 1,
            loading: false,
            config: StepperConfig {
                clickable: true,
                total_steps: Some(SHOWCASE_STEPS),
                ..StepperConfig::default()
            },
        }
    }
}

impl ShowcaseSnapshot {
    /// Whether the host allows moving back from the current step.
    pub fn can_go_back(&self) -> bool {
        self.value > 1
    }

    /// Whether the host allows moving forward from the current step.
    ///
    /// Bounded by the rendered steps even when the configured total is larger
    /// or unset.
    pub fn can_go_forward(&self) -> bool {
        let last = self
            .config
            .total_steps
            .map_or(SHOWCASE_STEPS, |total| total.min(SHOWCASE_STEPS));
        i64::from(self.value) < i64::from(last)
    }
}

#[derive(Debug, Error)]
/// Errors raised while restoring or encoding a sandbox snapshot.
pub enum SnapshotError {
    /// The payload is not a valid snapshot document.
    #[error("snapshot decode failed: {0}")]
    Decode(#[source] serde_json::Error),
    /// The snapshot could not be serialized.
    #[error("snapshot encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    /// The payload was written by an unknown schema.
    #[error("unsupported snapshot schema version {0}")]
    UnsupportedVersion(u32),
}

/// Decodes a persisted snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] for malformed payloads and
/// [`SnapshotError::UnsupportedVersion`] for snapshots from another schema.
pub fn restore_snapshot(raw: Value) -> Result<ShowcaseSnapshot, SnapshotError> {
    let snapshot: ShowcaseSnapshot = serde_json::from_value(raw).map_err(SnapshotError::Decode)?;
    if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.schema_version));
    }
    Ok(snapshot)
}

/// Encodes a snapshot for persistence.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialization fails.
pub fn encode_snapshot(snapshot: &ShowcaseSnapshot) -> Result<Value, SnapshotError> {
    serde_json::to_value(snapshot).map_err(SnapshotError::Encode)
}
