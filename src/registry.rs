//! Static action table and identifier-based dispatch.
//!
//! Actions are bound at compile time; dispatch is a plain `match` on the
//! identifier, no reflection.

use serde_json::Value;
use tracing::debug;

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::{ActionFailure, AppError};
use crate::handlers;
use crate::models::{
    EnrichIpParams, EnrichStorageParams, JobStatusParams, TakeSnapshotParams, VolumeOfflineParams,
};
use crate::soar::SoarClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Investigate,
    Generic,
}

/// Metadata for one registered action.
#[derive(Debug, Clone, Copy)]
pub struct ActionDescriptor {
    pub identifier: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub action_type: ActionType,
    pub read_only: bool,
}

/// All actions exposed by the connector.
pub const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        identifier: "test_connectivity",
        name: "test connectivity",
        description: "Validate the configured credentials by obtaining an OAuth token",
        action_type: ActionType::Generic,
        read_only: true,
    },
    ActionDescriptor {
        identifier: "enrich_ip_address",
        name: "enrich ip address",
        description: "Enrich IP address with additional information",
        action_type: ActionType::Investigate,
        read_only: false,
    },
    ActionDescriptor {
        identifier: "check_job_status",
        name: "check job status",
        description: "Check the status of an enrichment job",
        action_type: ActionType::Investigate,
        read_only: true,
    },
    ActionDescriptor {
        identifier: "enrich_storage",
        name: "enrich storage",
        description: "Enrich storage information for a given agent and system",
        action_type: ActionType::Investigate,
        read_only: true,
    },
    ActionDescriptor {
        identifier: "take_snapshot",
        name: "take snapshot",
        description: "Take snapshot of a volume",
        action_type: ActionType::Generic,
        read_only: true,
    },
    ActionDescriptor {
        identifier: "volume_offline",
        name: "volume offline",
        description: "Take volume offline",
        action_type: ActionType::Generic,
        read_only: true,
    },
];

/// Look up an action by identifier.
pub fn find_action(identifier: &str) -> Option<&'static ActionDescriptor> {
    ACTIONS.iter().find(|a| a.identifier == identifier)
}

fn decode_params<T: serde::de::DeserializeOwned>(params: Value) -> Result<T, ActionFailure> {
    serde_json::from_value(params).map_err(|e| {
        ActionFailure::from(AppError::Configuration(format!("invalid parameters: {}", e)))
    })
}

fn to_output(value: impl serde::Serialize) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Run one action by identifier with JSON-encoded parameters.
///
/// Returns the action's typed output re-encoded as JSON; failures are the
/// single reported-failure kind the host platform renders terminally.
pub async fn dispatch(
    identifier: &str,
    params: Value,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<Value, ActionFailure> {
    debug!("dispatch: running action {}", identifier);

    match identifier {
        "test_connectivity" => {
            handlers::test_connectivity_handler(asset, env).await?;
            Ok(Value::Null)
        }
        "enrich_ip_address" => {
            let params: EnrichIpParams = decode_params(params)?;
            let output = handlers::enrich_ip_address_handler(&params, soar, asset, env).await?;
            Ok(to_output(output))
        }
        "check_job_status" => {
            let params: JobStatusParams = decode_params(params)?;
            let output = handlers::job_status_handler(&params, soar, asset, env).await?;
            Ok(to_output(output))
        }
        "enrich_storage" => {
            let params: EnrichStorageParams = decode_params(params)?;
            let output = handlers::enrich_storage_handler(&params, soar, asset, env).await?;
            Ok(to_output(output))
        }
        "take_snapshot" => {
            let params: TakeSnapshotParams = decode_params(params)?;
            let output = handlers::take_snapshot_handler(&params, soar, asset, env).await?;
            Ok(to_output(output))
        }
        "volume_offline" => {
            let params: VolumeOfflineParams = decode_params(params)?;
            let output = handlers::volume_offline_handler(&params, soar, asset, env).await?;
            Ok(to_output(output))
        }
        other => Err(ActionFailure::from(AppError::Configuration(format!(
            "unknown action: {}",
            other
        )))),
    }
}
