/// Grant-status polling for native code
///
/// The application context and `JavaVM` are registered on the first
/// `nativeOnCreate`. After that any thread can ask for the current status of a
/// permission without going through the result callback. Polling before that
/// returns an error.
use androidslam_bootstrap::{GrantStatus, Permission};
use anyhow::Result;
use jni::{
    JNIEnv, JavaVM,
    objects::{GlobalRef, JObject},
};

use crate::registry::Registration;

/// Application context; lives for the whole process, unlike the activity
struct AndroidContext {
    vm: JavaVM,
    context: GlobalRef,
}

static CONTEXT: Registration<AndroidContext> = Registration::new();

/// Record the application context and VM. Later calls are no-ops.
///
/// Also publishes them through `ndk-context` for other native crates.
pub fn register_context(env: &mut JNIEnv, activity: &JObject) -> Result<()> {
    let stored = CONTEXT.register_with(|| -> Result<AndroidContext> {
        let context = env
            .call_method(
                activity,
                "getApplicationContext",
                "()Landroid/content/Context;",
                &[],
            )?
            .l()?;
        Ok(AndroidContext {
            vm: env.get_java_vm()?,
            context: env.new_global_ref(&context)?,
        })
    })?;
    if !stored {
        return Ok(());
    }

    let registered = CONTEXT.get()?;
    unsafe {
        ndk_context::initialize_android_context(
            registered.vm.get_java_vm_pointer().cast(),
            registered.context.as_obj().as_raw().cast(),
        );
    }
    log::info!("Android context registered");
    Ok(())
}

/// Current grant status, queried from whatever thread calls this.
pub fn poll_grant_status(permission: &Permission) -> Result<GrantStatus> {
    let registered = CONTEXT.get()?;
    let mut env = registered.vm.attach_current_thread()?;

    let result: Result<i32, jni::errors::Error> = (|| {
        let name = env.new_string(permission.as_str())?;
        env.call_method(
            registered.context.as_obj(),
            "checkSelfPermission",
            "(Ljava/lang/String;)I",
            &[(&name).into()],
        )?
        .i()
    })();

    match result {
        Ok(raw) => Ok(GrantStatus::from_raw(raw)),
        Err(e) => {
            // No Java caller on this thread to rethrow to
            if env.exception_check()? {
                env.exception_clear()?;
            }
            Err(e.into())
        }
    }
}

pub fn is_granted(permission: &Permission) -> bool {
    match poll_grant_status(permission) {
        Ok(status) => status.is_granted(),
        Err(e) => {
            log::warn!("Failed to poll {}: {:?}", permission, e);
            false
        }
    }
}
