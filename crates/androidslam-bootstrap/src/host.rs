use anyhow::Result;

use crate::permission::{GrantStatus, Permission};

/// The activity the bootstrap runs against.
///
/// On Android this is the `NativeActivity` reached over JNI. Every method maps
/// to one platform call; implementations do no retrying or caching.
pub trait ActivityHost {
    /// Opaque saved-instance state handed in by the lifecycle callback.
    type SavedState;

    /// The platform's default creation handling (`super.onCreate`).
    fn on_create_default(&mut self, saved_state: Self::SavedState) -> Result<()>;

    /// Current grant status for a single permission.
    fn check_self_permission(&mut self, permission: &Permission) -> Result<GrantStatus>;

    /// Ask the platform to show its permission dialog. Returns immediately.
    fn request_permissions(&mut self, permissions: &[Permission], request_code: i32)
    -> Result<()>;

    /// Install the named layout as the window content.
    fn set_content_view(&mut self, layout: &str) -> Result<()>;
}
