use androidslam_bootstrap::{PermissionOutcome, publish_outcome};
use jni::{
    JNIEnv,
    objects::{JClass, JIntArray, JObject, JObjectArray, JString},
    sys::jint,
};
use std::sync::Once;

use crate::jni_host::JniActivity;

// Static initialization for logging
static INIT: Once = Once::new();

/// Initialize logging and panic hook for Android
fn init_logging() {
    INIT.call_once(|| {
        let level = if cfg!(feature = "debug-logs") {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(level)
                .with_tag("AndroidSLAM"),
        );

        std::panic::set_hook(Box::new(|info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown panic".to_string());

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());

            log::error!("PANIC at {}: {}", location, payload);
        }));
    });
}

/// Activity creation entry point
///
/// Called from `MainActivity.onCreate(Bundle)` in place of `super.onCreate`:
///
/// ```java
/// static { System.loadLibrary("androidslam"); }
/// private static native void nativeOnCreate(Activity activity, Bundle state);
/// ```
///
/// Runs `NativeActivity.onCreate`, requests missing permissions, then sets the
/// content view. On failure a thrown Java exception is left pending so it
/// propagates out of `onCreate`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_cntlab_f304_androidslam_MainActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    activity: JObject<'local>,
    saved_state: JObject<'local>,
) {
    init_logging();
    log::info!("nativeOnCreate called");

    let bootstrapper = crate::config::bootstrapper();
    let mut host = JniActivity::new(&mut env, &activity);
    match bootstrapper.on_create(&mut host, saved_state) {
        Ok(report) => {
            log::debug!(
                "granted: {:?}, requested: {:?}",
                report.granted,
                report.requested
            );
        }
        Err(e) => {
            log::error!("Activity bootstrap failed: {:?}", e);
            return;
        }
    }

    if let Err(e) = crate::status::register_context(&mut env, &activity) {
        log::warn!("Failed to register Android context: {:?}", e);
        if env.exception_check().unwrap_or(false) {
            let _ = env.exception_clear();
        }
    }

    log::info!("nativeOnCreate completed");
}

/// Permission result callback
///
/// Forwarded from `MainActivity.onRequestPermissionsResult`:
///
/// ```java
/// private static native void nativeOnRequestPermissionsResult(
///     int requestCode, String[] permissions, int[] grantResults);
/// ```
#[unsafe(no_mangle)]
pub extern "system" fn Java_cntlab_f304_androidslam_MainActivity_nativeOnRequestPermissionsResult(
    mut env: JNIEnv,
    _class: JClass,
    request_code: jint,
    permissions: JObjectArray,
    grant_results: JIntArray,
) {
    init_logging();

    let result: anyhow::Result<PermissionOutcome> = (|| {
        let len = env.get_array_length(&permissions)?;
        let mut names: Vec<String> = Vec::with_capacity(len as usize);
        for index in 0..len {
            let element = env.get_object_array_element(&permissions, index)?;
            names.push(env.get_string(&JString::from(element))?.into());
        }

        let mut raw = vec![0; env.get_array_length(&grant_results)? as usize];
        env.get_int_array_region(&grant_results, 0, &mut raw)?;

        Ok(PermissionOutcome::from_platform_names(request_code, names, &raw))
    })();

    match result {
        Ok(outcome) => {
            log::info!(
                "Permission result for request {}: {:?}",
                outcome.request_code,
                outcome.results
            );
            if let Err(e) = publish_outcome(outcome) {
                log::error!("{:?}", e);
            }
        }
        Err(e) => log::error!("Failed to read permission result: {:?}", e),
    }
}
