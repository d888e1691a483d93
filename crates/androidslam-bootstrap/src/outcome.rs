/// Thread-safe queue for permission results
///
/// `onRequestPermissionsResult` is delivered on the UI thread long after the
/// bootstrap returned. Results are pushed here so native code on any thread can
/// pick them up. No policy is attached: consumers decide what a denial means.
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use once_cell::sync::Lazy;

use crate::permission::{GrantStatus, Permission};

/// Result of one `requestPermissions` call as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionOutcome {
    pub request_code: i32,
    pub results: Vec<(Permission, GrantStatus)>,
}

impl PermissionOutcome {
    /// Pair up the platform's parallel arrays. Extra entries on either side are dropped.
    pub fn from_parallel(request_code: i32, permissions: Vec<Permission>, raw: &[i32]) -> Self {
        if permissions.len() != raw.len() {
            log::warn!(
                "Permission result arrays differ in length ({} vs {})",
                permissions.len(),
                raw.len()
            );
        }
        let results = permissions
            .into_iter()
            .zip(raw.iter().map(|&r| GrantStatus::from_raw(r)))
            .collect();
        Self {
            request_code,
            results,
        }
    }

    /// Like [`Self::from_parallel`], parsing the names as they come off the
    /// platform. An entry whose name does not parse is logged and skipped
    /// together with its status; the rest of the result is kept.
    pub fn from_platform_names(request_code: i32, names: Vec<String>, raw: &[i32]) -> Self {
        if names.len() != raw.len() {
            log::warn!(
                "Permission result arrays differ in length ({} vs {})",
                names.len(),
                raw.len()
            );
        }
        let results = names
            .into_iter()
            .zip(raw.iter())
            .filter_map(|(name, &r)| match name.parse::<Permission>() {
                Ok(permission) => Some((permission, GrantStatus::from_raw(r))),
                Err(e) => {
                    log::warn!("Skipping permission result {:?}: {}", name, e);
                    None
                }
            })
            .collect();
        Self {
            request_code,
            results,
        }
    }

    pub fn status_of(&self, permission: &Permission) -> Option<GrantStatus> {
        self.results
            .iter()
            .find(|(p, _)| p == permission)
            .map(|(_, status)| *status)
    }

    /// True for a cancelled request, which the platform reports with empty arrays.
    pub fn is_cancelled(&self) -> bool {
        self.results.is_empty()
    }
}

pub struct OutcomeQueue {
    sender: Sender<PermissionOutcome>,
    receiver: Receiver<PermissionOutcome>,
}

impl OutcomeQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn publish(&self, outcome: PermissionOutcome) -> Result<()> {
        self.sender
            .send(outcome)
            .map_err(|e| anyhow::anyhow!("Failed to publish permission outcome: {}", e))
    }

    /// Take every pending outcome, oldest first.
    pub fn drain(&self) -> Vec<PermissionOutcome> {
        self.receiver.try_iter().collect()
    }

    /// Receiver for consumers that want to block or select on results.
    pub fn receiver(&self) -> Receiver<PermissionOutcome> {
        self.receiver.clone()
    }
}

impl Default for OutcomeQueue {
    fn default() -> Self {
        Self::new()
    }
}

static OUTCOMES: Lazy<OutcomeQueue> = Lazy::new(OutcomeQueue::new);

/// Publish on the process-wide queue.
pub fn publish_outcome(outcome: PermissionOutcome) -> Result<()> {
    OUTCOMES.publish(outcome)
}

/// Drain the process-wide queue.
pub fn drain_outcomes() -> Vec<PermissionOutcome> {
    OUTCOMES.drain()
}

pub fn outcome_receiver() -> Receiver<PermissionOutcome> {
    OUTCOMES.receiver()
}
