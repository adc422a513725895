use std::collections::BTreeMap;

use crate::config::HooksConfig;

/// Points in the release where a hook can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookType {
    PrePush,
    PostVersion,
    PostDeploy,
}

impl HookType {
    /// Get the hook name as a string
    pub fn name(&self) -> &'static str {
        match self {
            HookType::PrePush => "pre-push",
            HookType::PostVersion => "post-version",
            HookType::PostDeploy => "post-deploy",
        }
    }

    /// Configured script path for this hook, if any
    pub fn script<'a>(&self, hooks: &'a HooksConfig) -> Option<&'a str> {
        let path = match self {
            HookType::PrePush => hooks.pre_push.as_deref(),
            HookType::PostVersion => hooks.post_version.as_deref(),
            HookType::PostDeploy => hooks.post_deploy.as_deref(),
        };
        path.filter(|p| !p.trim().is_empty())
    }

    /// Whether a failure of this hook aborts the release
    pub fn is_fatal(&self) -> bool {
        !matches!(self, HookType::PostDeploy)
    }
}

/// Context information passed to a hook
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Type of hook being executed
    pub hook_type: HookType,
    /// Description used for the version and deployment
    pub description: String,
    /// Run timestamp embedded in the description
    pub timestamp: String,
    /// Version number once it is known
    pub version: Option<String>,
}

impl HookContext {
    /// Convert context to environment variables for the hook script
    ///
    /// Maps context fields to CLASP_RELEASE_* environment variables
    pub fn to_env_vars(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();

        env.insert(
            "CLASP_RELEASE_HOOK".to_string(),
            self.hook_type.name().to_string(),
        );
        env.insert(
            "CLASP_RELEASE_DESCRIPTION".to_string(),
            self.description.clone(),
        );
        env.insert("CLASP_RELEASE_TIMESTAMP".to_string(), self.timestamp.clone());

        if let Some(ref version) = self.version {
            env.insert("CLASP_RELEASE_VERSION".to_string(), version.clone());
        }

        env
    }
}
