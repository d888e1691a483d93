// androidslam-bootstrap: runtime permission gate for the Android SLAM activity
//
// Platform-independent: the activity is reached through the `ActivityHost`
// trait, so the whole sequence can be driven by a fake host in tests.

pub mod bootstrap;
pub mod config;
pub mod host;
pub mod outcome;
pub mod permission;

pub use bootstrap::{BootstrapReport, PermissionBootstrapper};
pub use config::{BootstrapConfig, DEFAULT_LAYOUT, DEFAULT_REQUEST_CODE};
pub use host::ActivityHost;
pub use outcome::{
    OutcomeQueue, PermissionOutcome, drain_outcomes, outcome_receiver, publish_outcome,
};
pub use permission::{GrantStatus, Permission, PermissionList};
