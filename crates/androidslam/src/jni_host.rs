/// `ActivityHost` backed by the running `NativeActivity`
///
/// Each trait method is one JNI call into the framework. A thrown Java
/// exception surfaces as an error and is left pending for the JVM.
use androidslam_bootstrap::{ActivityHost, GrantStatus, Permission};
use anyhow::{Result, bail};
use jni::{
    JNIEnv,
    objects::{JObject, JValue},
};

const NATIVE_ACTIVITY: &str = "android/app/NativeActivity";
const CONTEXT_COMPAT: &str = "androidx/core/content/ContextCompat";
const ACTIVITY_COMPAT: &str = "androidx/core/app/ActivityCompat";

pub struct JniActivity<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
}

impl<'a, 'local> JniActivity<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>, activity: &'a JObject<'local>) -> Self {
        Self { env, activity }
    }

    /// Resolve `R.layout.<name>` at runtime
    fn layout_id(&mut self, layout: &str) -> Result<i32> {
        let resources = self
            .env
            .call_method(
                self.activity,
                "getResources",
                "()Landroid/content/res/Resources;",
                &[],
            )?
            .l()?;
        let package = self
            .env
            .call_method(self.activity, "getPackageName", "()Ljava/lang/String;", &[])?
            .l()?;
        let name = self.env.new_string(layout)?;
        let kind = self.env.new_string("layout")?;

        let id = self
            .env
            .call_method(
                &resources,
                "getIdentifier",
                "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)I",
                &[(&name).into(), (&kind).into(), (&package).into()],
            )?
            .i()?;
        if id == 0 {
            bail!("layout resource '{}' not found", layout);
        }
        Ok(id)
    }
}

impl<'a, 'local> ActivityHost for JniActivity<'a, 'local> {
    type SavedState = JObject<'local>;

    fn on_create_default(&mut self, saved_state: JObject<'local>) -> Result<()> {
        self.env.call_nonvirtual_method(
            self.activity,
            NATIVE_ACTIVITY,
            "onCreate",
            "(Landroid/os/Bundle;)V",
            &[(&saved_state).into()],
        )?;
        Ok(())
    }

    fn check_self_permission(&mut self, permission: &Permission) -> Result<GrantStatus> {
        let name = self.env.new_string(permission.as_str())?;
        let raw = self
            .env
            .call_static_method(
                CONTEXT_COMPAT,
                "checkSelfPermission",
                "(Landroid/content/Context;Ljava/lang/String;)I",
                &[self.activity.into(), (&name).into()],
            )?
            .i()?;
        log::debug!("checkSelfPermission({}) = {}", permission, raw);
        Ok(GrantStatus::from_raw(raw))
    }

    fn request_permissions(
        &mut self,
        permissions: &[Permission],
        request_code: i32,
    ) -> Result<()> {
        let array = self.env.new_object_array(
            permissions.len() as i32,
            "java/lang/String",
            JObject::null(),
        )?;
        for (index, permission) in permissions.iter().enumerate() {
            let name = self.env.new_string(permission.as_str())?;
            self.env
                .set_object_array_element(&array, index as i32, &name)?;
        }

        self.env.call_static_method(
            ACTIVITY_COMPAT,
            "requestPermissions",
            "(Landroid/app/Activity;[Ljava/lang/String;I)V",
            &[
                self.activity.into(),
                (&array).into(),
                JValue::Int(request_code),
            ],
        )?;
        Ok(())
    }

    fn set_content_view(&mut self, layout: &str) -> Result<()> {
        let id = self.layout_id(layout)?;
        self.env
            .call_method(self.activity, "setContentView", "(I)V", &[JValue::Int(id)])?;
        log::info!("Content view set to {} ({:#x})", layout, id);
        Ok(())
    }
}
