// Bootstrap configuration: which permissions to ask for, and what to show afterwards.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::permission::{Permission, PermissionList};

/// Correlates `requestPermissions` calls with `onRequestPermissionsResult`.
pub const DEFAULT_REQUEST_CODE: i32 = 5;

/// Resource name of the root layout (`R.layout.activity_main`).
pub const DEFAULT_LAYOUT: &str = "activity_main";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    pub permissions: PermissionList,
    #[serde(default = "default_request_code")]
    pub request_code: i32,
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Also request `MANAGE_EXTERNAL_STORAGE`. Off unless asked for.
    #[serde(default)]
    pub manage_external_storage: bool,
}

fn default_request_code() -> i32 {
    DEFAULT_REQUEST_CODE
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

impl Default for BootstrapConfig {
    /// Camera plus external storage read/write.
    fn default() -> Self {
        Self::with_permissions(vec![
            Permission::Camera,
            Permission::ReadExternalStorage,
            Permission::WriteExternalStorage,
        ])
    }
}

impl BootstrapConfig {
    pub fn camera_only() -> Self {
        Self::with_permissions(vec![Permission::Camera])
    }

    fn with_permissions(permissions: Vec<Permission>) -> Self {
        Self {
            permissions: PermissionList(permissions),
            request_code: DEFAULT_REQUEST_CODE,
            layout: DEFAULT_LAYOUT.to_string(),
            manage_external_storage: false,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid bootstrap config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.trim().is_empty() {
            bail!("layout name must not be empty");
        }
        Ok(())
    }

    /// The list actually walked at creation time.
    pub fn effective_permissions(&self) -> PermissionList {
        let list = self.permissions.clone();
        if self.manage_external_storage {
            list.with(Permission::ManageExternalStorage)
        } else {
            list
        }
    }
}
