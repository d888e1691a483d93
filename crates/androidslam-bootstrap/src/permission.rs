// Android runtime permission identifiers and the ordered request list.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// A platform permission identifier, e.g. `android.permission.CAMERA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    Camera,
    ReadExternalStorage,
    WriteExternalStorage,
    /// Broad storage access. Never requested unless explicitly enabled.
    ManageExternalStorage,
    /// Any other identifier, passed to the platform verbatim.
    Other(String),
}

impl Permission {
    pub fn as_str(&self) -> &str {
        match self {
            Permission::Camera => "android.permission.CAMERA",
            Permission::ReadExternalStorage => "android.permission.READ_EXTERNAL_STORAGE",
            Permission::WriteExternalStorage => "android.permission.WRITE_EXTERNAL_STORAGE",
            Permission::ManageExternalStorage => "android.permission.MANAGE_EXTERNAL_STORAGE",
            Permission::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("permission identifier is empty");
        }
        Ok(match s {
            "android.permission.CAMERA" => Permission::Camera,
            "android.permission.READ_EXTERNAL_STORAGE" => Permission::ReadExternalStorage,
            "android.permission.WRITE_EXTERNAL_STORAGE" => Permission::WriteExternalStorage,
            "android.permission.MANAGE_EXTERNAL_STORAGE" => Permission::ManageExternalStorage,
            other => Permission::Other(other.to_string()),
        })
    }
}

impl TryFrom<String> for Permission {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Grant status
// ---------------------------------------------------------------------------

/// `PackageManager.PERMISSION_GRANTED`
pub const PERMISSION_GRANTED: i32 = 0;
/// `PackageManager.PERMISSION_DENIED`
pub const PERMISSION_DENIED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantStatus {
    Granted,
    Denied,
}

impl GrantStatus {
    /// Map a raw `PackageManager` value. Only `PERMISSION_DENIED` counts as denied.
    pub fn from_raw(raw: i32) -> Self {
        if raw == PERMISSION_DENIED {
            GrantStatus::Denied
        } else {
            GrantStatus::Granted
        }
    }

    pub fn is_granted(self) -> bool {
        self == GrantStatus::Granted
    }
}

// ---------------------------------------------------------------------------
// Request list
// ---------------------------------------------------------------------------

/// Ordered, non-empty set of permissions the application requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct PermissionList(pub(crate) Vec<Permission>);

impl PermissionList {
    /// Build a list, keeping the first occurrence of any duplicate.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Result<Self> {
        let mut list: Vec<Permission> = Vec::new();
        for permission in permissions {
            if list.contains(&permission) {
                log::warn!("Dropping duplicate permission {}", permission);
                continue;
            }
            list.push(permission);
        }
        if list.is_empty() {
            bail!("permission list must not be empty");
        }
        Ok(Self(list))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    /// Append a permission unless it is already present.
    pub fn with(mut self, permission: Permission) -> Self {
        if !self.contains(&permission) {
            self.0.push(permission);
        }
        self
    }
}

impl TryFrom<Vec<Permission>> for PermissionList {
    type Error = anyhow::Error;

    fn try_from(value: Vec<Permission>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PermissionList> for Vec<Permission> {
    fn from(value: PermissionList) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a PermissionList {
    type Item = &'a Permission;
    type IntoIter = std::slice::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_parse_to_variants() {
        assert_eq!(
            "android.permission.CAMERA".parse::<Permission>().unwrap(),
            Permission::Camera
        );
        assert_eq!(
            "android.permission.WRITE_EXTERNAL_STORAGE".parse::<Permission>().unwrap(),
            Permission::WriteExternalStorage
        );
    }

    #[test]
    fn unknown_identifier_is_kept_verbatim() {
        let p: Permission = "android.permission.RECORD_AUDIO".parse().unwrap();
        assert_eq!(p, Permission::Other("android.permission.RECORD_AUDIO".into()));
        assert_eq!(p.as_str(), "android.permission.RECORD_AUDIO");
    }

    #[test]
    fn empty_identifier_rejected() {
        assert!("  ".parse::<Permission>().is_err());
    }

    #[test]
    fn raw_status_mapping() {
        assert_eq!(GrantStatus::from_raw(PERMISSION_GRANTED), GrantStatus::Granted);
        assert_eq!(GrantStatus::from_raw(PERMISSION_DENIED), GrantStatus::Denied);
    }

    #[test]
    fn list_rejects_empty() {
        assert!(PermissionList::new(Vec::new()).is_err());
    }

    #[test]
    fn list_drops_duplicates_keeping_order() {
        let list = PermissionList::new([
            Permission::Camera,
            Permission::ReadExternalStorage,
            Permission::Camera,
        ])
        .unwrap();
        let items: Vec<_> = list.iter().cloned().collect();
        assert_eq!(items, vec![Permission::Camera, Permission::ReadExternalStorage]);
    }

    #[test]
    fn with_does_not_duplicate() {
        let list = PermissionList::new([Permission::Camera])
            .unwrap()
            .with(Permission::Camera)
            .with(Permission::ManageExternalStorage);
        assert_eq!(list.len(), 2);
    }
}
