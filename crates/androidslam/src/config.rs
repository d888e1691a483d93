use androidslam_bootstrap::{BootstrapConfig, PermissionBootstrapper};
use once_cell::sync::Lazy;

static BOOTSTRAPPER: Lazy<PermissionBootstrapper> =
    Lazy::new(|| PermissionBootstrapper::new(build_config()));

/// Config selected by cargo features at build time.
pub fn build_config() -> BootstrapConfig {
    let mut config = if cfg!(feature = "camera-only") {
        BootstrapConfig::camera_only()
    } else {
        BootstrapConfig::default()
    };
    config.manage_external_storage = cfg!(feature = "manage-external-storage");
    config
}

/// Process-wide bootstrapper used by the JNI entry points
pub fn bootstrapper() -> &'static PermissionBootstrapper {
    &BOOTSTRAPPER
}

#[cfg(test)]
mod tests {
    use super::*;
    use androidslam_bootstrap::Permission;

    #[test]
    fn feature_selected_list() {
        let list = build_config().effective_permissions();
        assert!(list.contains(&Permission::Camera));
        assert_eq!(
            list.contains(&Permission::ReadExternalStorage),
            !cfg!(feature = "camera-only")
        );
        assert_eq!(
            list.contains(&Permission::ManageExternalStorage),
            cfg!(feature = "manage-external-storage")
        );
    }

    #[test]
    fn shared_bootstrapper_uses_feature_config() {
        assert_eq!(bootstrapper().config(), &build_config());
    }
}
