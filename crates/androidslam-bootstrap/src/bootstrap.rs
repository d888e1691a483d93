//! Permission gate run from the activity creation callback.
//!
//! Walks the configured permission list, requests each denied permission on
//! its own, then attaches the root layout. Requests are fire-and-forget: the
//! user's answer arrives later through `onRequestPermissionsResult` and is
//! published on the outcome queue (see [`crate::outcome`]).

use anyhow::Result;

use crate::config::BootstrapConfig;
use crate::host::ActivityHost;
use crate::permission::{GrantStatus, Permission};

/// What a single `on_create` run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Permissions the platform already reported as granted.
    pub granted: Vec<Permission>,
    /// Permissions a request was issued for, in request order.
    pub requested: Vec<Permission>,
}

impl BootstrapReport {
    pub fn all_granted(&self) -> bool {
        self.requested.is_empty()
    }
}

pub struct PermissionBootstrapper {
    config: BootstrapConfig,
}

impl PermissionBootstrapper {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Run the creation sequence against `host`.
    ///
    /// Host failures are returned as-is and stop the sequence; nothing is
    /// retried and the layout is not attached in that case.
    pub fn on_create<H: ActivityHost>(
        &self,
        host: &mut H,
        saved_state: H::SavedState,
    ) -> Result<BootstrapReport> {
        host.on_create_default(saved_state)?;

        let mut report = BootstrapReport::default();
        for permission in &self.config.effective_permissions() {
            match host.check_self_permission(permission)? {
                GrantStatus::Granted => {
                    log::debug!("{} already granted", permission);
                    report.granted.push(permission.clone());
                }
                GrantStatus::Denied => {
                    log::info!(
                        "Requesting {} (request code {})",
                        permission,
                        self.config.request_code
                    );
                    host.request_permissions(
                        std::slice::from_ref(permission),
                        self.config.request_code,
                    )?;
                    report.requested.push(permission.clone());
                }
            }
        }

        host.set_content_view(&self.config.layout)?;

        log::info!(
            "Bootstrap done: {} granted, {} requested",
            report.granted.len(),
            report.requested.len()
        );
        Ok(report)
    }
}

impl Default for PermissionBootstrapper {
    fn default() -> Self {
        Self::new(BootstrapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::collections::HashSet;

    #[derive(Debug, PartialEq)]
    enum Call {
        Base(u32),
        Check(Permission),
        Request(Vec<Permission>, i32),
        Content(String),
    }

    #[derive(Default)]
    struct FakeHost {
        granted: HashSet<Permission>,
        fail_base: bool,
        fail_check_of: Option<Permission>,
        fail_request_of: Option<Permission>,
        calls: Vec<Call>,
    }

    impl ActivityHost for FakeHost {
        type SavedState = u32;

        fn on_create_default(&mut self, saved_state: u32) -> Result<()> {
            self.calls.push(Call::Base(saved_state));
            if self.fail_base {
                return Err(anyhow!("IllegalStateException"));
            }
            Ok(())
        }

        fn check_self_permission(&mut self, permission: &Permission) -> Result<GrantStatus> {
            self.calls.push(Call::Check(permission.clone()));
            if self.fail_check_of.as_ref() == Some(permission) {
                return Err(anyhow!("SecurityException"));
            }
            Ok(if self.granted.contains(permission) {
                GrantStatus::Granted
            } else {
                GrantStatus::Denied
            })
        }

        fn request_permissions(&mut self, permissions: &[Permission], code: i32) -> Result<()> {
            self.calls.push(Call::Request(permissions.to_vec(), code));
            if self.fail_request_of.as_ref() == permissions.first() {
                return Err(anyhow!("ActivityNotFoundException"));
            }
            Ok(())
        }

        fn set_content_view(&mut self, layout: &str) -> Result<()> {
            self.calls.push(Call::Content(layout.to_string()));
            Ok(())
        }
    }

    #[test]
    fn base_creation_runs_first_with_saved_state() {
        let mut host = FakeHost::default();
        PermissionBootstrapper::default().on_create(&mut host, 7).unwrap();
        assert_eq!(host.calls.first(), Some(&Call::Base(7)));
    }

    #[test]
    fn full_sequence_when_everything_denied() {
        let mut host = FakeHost::default();
        PermissionBootstrapper::default().on_create(&mut host, 0).unwrap();
        assert_eq!(
            host.calls,
            vec![
                Call::Base(0),
                Call::Check(Permission::Camera),
                Call::Request(vec![Permission::Camera], 5),
                Call::Check(Permission::ReadExternalStorage),
                Call::Request(vec![Permission::ReadExternalStorage], 5),
                Call::Check(Permission::WriteExternalStorage),
                Call::Request(vec![Permission::WriteExternalStorage], 5),
                Call::Content("activity_main".into()),
            ]
        );
    }

    #[test]
    fn check_failure_propagates_and_skips_layout() {
        let mut host = FakeHost {
            fail_check_of: Some(Permission::ReadExternalStorage),
            ..Default::default()
        };
        let result = PermissionBootstrapper::default().on_create(&mut host, 0);
        assert!(result.is_err());
        assert!(!host.calls.iter().any(|c| matches!(c, Call::Content(_))));
        assert!(!host.calls.contains(&Call::Check(Permission::WriteExternalStorage)));
    }

    #[test]
    fn base_failure_skips_everything_else() {
        let mut host = FakeHost {
            fail_base: true,
            ..Default::default()
        };
        let result = PermissionBootstrapper::default().on_create(&mut host, 3);
        assert!(result.is_err());
        assert_eq!(host.calls, vec![Call::Base(3)]);
    }

    #[test]
    fn request_failure_stops_before_later_checks() {
        let mut host = FakeHost {
            fail_request_of: Some(Permission::Camera),
            ..Default::default()
        };
        let result = PermissionBootstrapper::default().on_create(&mut host, 0);
        assert!(result.is_err());
        assert_eq!(
            host.calls,
            vec![
                Call::Base(0),
                Call::Check(Permission::Camera),
                Call::Request(vec![Permission::Camera], 5),
            ]
        );
    }

    #[test]
    fn manage_storage_requested_only_when_enabled() {
        let mut config = BootstrapConfig::camera_only();
        let mut host = FakeHost::default();
        PermissionBootstrapper::new(config.clone()).on_create(&mut host, 0).unwrap();
        assert!(!host.calls.contains(&Call::Check(Permission::ManageExternalStorage)));

        config.manage_external_storage = true;
        let mut host = FakeHost::default();
        let report = PermissionBootstrapper::new(config).on_create(&mut host, 0).unwrap();
        assert_eq!(
            report.requested,
            vec![Permission::Camera, Permission::ManageExternalStorage]
        );
    }

    #[test]
    fn custom_request_code_and_layout_are_used() {
        let config = BootstrapConfig {
            request_code: 99,
            layout: "slam_main".into(),
            ..BootstrapConfig::camera_only()
        };
        let mut host = FakeHost::default();
        PermissionBootstrapper::new(config).on_create(&mut host, 0).unwrap();
        assert!(host.calls.contains(&Call::Request(vec![Permission::Camera], 99)));
        assert_eq!(host.calls.last(), Some(&Call::Content("slam_main".into())));
    }
}
