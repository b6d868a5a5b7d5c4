//! Procedural template initializers.
//!
//! Some templates are not static file trees but procedures, e.g. "clone this
//! repository and check out this branch". These are modeled as named hooks
//! registered ahead of time under a storage key, rather than scripts loaded
//! from a path at runtime.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};

/// A procedural template initializer.
///
/// The hook is fully responsible for populating the destination and may
/// perform network operations or process invocations. Any error it returns
/// aborts the initialization; whatever state it leaves behind stays on disk.
pub trait InitHook {
    /// Populate the destination directory.
    fn initialize(&self, dest: &Path) -> TemplateResult<()>;
}

/// Registry of initializer hooks, keyed by template storage key.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Arc<dyn InitHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook under a storage key.
    pub fn register(&mut self, storage_key: impl Into<String>, hook: Arc<dyn InitHook>) {
        self.hooks.insert(storage_key.into(), hook);
    }

    /// Look up the hook registered for a storage key.
    pub fn get(&self, storage_key: &str) -> Option<&Arc<dyn InitHook>> {
        self.hooks.get(storage_key)
    }

    /// Check if a hook is registered for a storage key.
    pub fn contains(&self, storage_key: &str) -> bool {
        self.hooks.contains_key(storage_key)
    }
}

/// Hook that clones a remote repository into the destination.
#[derive(Debug, Clone)]
pub struct GitCloneHook {
    repo_url: String,
    branch: Option<String>,
}

impl GitCloneHook {
    /// Create a hook cloning the default branch of a repository.
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            branch: None,
        }
    }

    /// Clone a specific branch instead of the default.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Check if git is available on the system.
    pub fn is_git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl InitHook for GitCloneHook {
    fn initialize(&self, dest: &Path) -> TemplateResult<()> {
        info!("Cloning {} into {}", self.repo_url, dest.display());

        let mut command = Command::new("git");
        command.args(["clone", "--depth", "1"]);
        if let Some(branch) = &self.branch {
            command.args(["--branch", branch]);
        }
        command.arg(&self.repo_url).arg(dest);

        let output = command.output().map_err(|e| TemplateError::HookFailed {
            hook: "git-clone".to_string(),
            message: format!("Failed to run git: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TemplateError::HookFailed {
                hook: "git-clone".to_string(),
                message: format!("git clone failed: {}", stderr),
            });
        }

        debug!("Clone complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHook;

    impl InitHook for NoopHook {
        fn initialize(&self, _dest: &Path) -> TemplateResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_hook_registry_lookup() {
        let mut hooks = HookRegistry::new();
        hooks.register("themed_blog", Arc::new(NoopHook));

        assert!(hooks.contains("themed_blog"));
        assert!(hooks.get("themed_blog").is_some());
        assert!(hooks.get("bare").is_none());
    }

    #[test]
    fn test_git_clone_hook_builder() {
        let hook = GitCloneHook::new("https://example.com/repo.git").with_branch("main");
        assert_eq!(hook.repo_url, "https://example.com/repo.git");
        assert_eq!(hook.branch.as_deref(), Some("main"));
    }
}
