//! Android SLAM application entry - permission bootstrap for the native activity
//!
//! This crate does not ship the Java side. The app must provide a
//! `cntlab.f304.androidslam.MainActivity` extending `NativeActivity` that
//! loads this library and hands its lifecycle hooks to the JNI exports in
//! `android_jni`. Without it nothing calls into this crate. Minimal shim:
//!
//! ```java
//! public class MainActivity extends NativeActivity {
//!     static { System.loadLibrary("androidslam"); }
//!
//!     private static native void nativeOnCreate(Activity activity, Bundle state);
//!     private static native void nativeOnRequestPermissionsResult(
//!         int requestCode, String[] permissions, int[] grantResults);
//!
//!     @Override
//!     protected void onCreate(Bundle state) {
//!         // Calls NativeActivity.onCreate itself; do not call super here.
//!         nativeOnCreate(this, state);
//!     }
//!
//!     @Override
//!     public void onRequestPermissionsResult(
//!             int requestCode, String[] permissions, int[] grantResults) {
//!         super.onRequestPermissionsResult(requestCode, permissions, grantResults);
//!         nativeOnRequestPermissionsResult(requestCode, permissions, grantResults);
//!     }
//! }
//! ```
//!
//! The manifest's `android.app.lib_name` still names the native engine
//! library that provides `ANativeActivity_onCreate`.

// Feature-selected bootstrap config
pub mod config;

// Write-once slot for the registered Android context
pub mod registry;

// JNI entry points called by MainActivity
#[cfg(target_os = "android")]
pub mod android_jni;

// ActivityHost over JNI
#[cfg(target_os = "android")]
pub mod jni_host;

// Grant-status polling for native code
#[cfg(target_os = "android")]
pub mod status;

pub use androidslam_bootstrap::{
    GrantStatus, Permission, PermissionOutcome, drain_outcomes, outcome_receiver,
};
