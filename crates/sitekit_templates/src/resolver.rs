//! Template resolution and initialization orchestration.
//!
//! The resolver handles:
//! - Template name lookup in the combined (visible + hidden) registry
//! - The empty-destination precondition
//! - Choosing between the directory, hook, and archive source forms
//! - Materializing the base template and its feature layers in order

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::archive::{self, PackagedStore, ResourceStore};
use crate::error::{TemplateError, TemplateResult};
use crate::hook::{GitCloneHook, HookRegistry, InitHook};
use crate::materialize::materialize;
use crate::registry::TemplateRegistry;
use crate::tree::read_directory;

/// The source form a storage key resolved to.
enum SourceForm {
    /// Loose directory tree, usually used in development.
    Directory(PathBuf),
    /// Procedural initializer registered for the key.
    Hook(Arc<dyn InitHook>),
    /// Packaged archive resource, used in production.
    Archive(String),
}

/// Resolves template names to source forms and drives materialization.
pub struct TemplateResolver {
    registry: TemplateRegistry,
    templates_root: PathBuf,
    store: Box<dyn ResourceStore>,
    hooks: HookRegistry,
}

impl TemplateResolver {
    /// Create a resolver over the built-in packaged archives and hooks.
    ///
    /// `templates_root` is where loose template directories live; a missing
    /// root simply means every key resolves to its hook or archive form.
    pub fn new(registry: TemplateRegistry, templates_root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            templates_root: templates_root.into(),
            store: Box::new(PackagedStore),
            hooks: builtin_hooks(),
        }
    }

    /// Replace the packaged resource store.
    pub fn with_store(mut self, store: Box<dyn ResourceStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the initializer hook registry.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    /// Initialize a new site from a named template into an empty destination.
    ///
    /// The base template is materialized first, then each of its declared
    /// feature layers in order; later layers overwrite earlier files on path
    /// collisions. Nothing is written before the registry lookup and the
    /// empty-destination check pass. A failure partway through a layer leaves
    /// earlier layers on disk; there is no rollback.
    pub fn initialize(&self, name: &str, dest: &Path) -> TemplateResult<()> {
        let template = self
            .registry
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

        if fs::read_dir(dest)?.next().is_some() {
            return Err(TemplateError::DestinationNotEmpty(dest.to_path_buf()));
        }

        info!(
            "Initializing site from template '{}' at {}",
            template.name,
            dest.display()
        );

        self.apply_layer(&template.storage_key, dest)?;
        for feature in self.registry.features(&template.storage_key) {
            debug!("Applying feature layer: {}", feature);
            self.apply_layer(feature, dest)?;
        }

        Ok(())
    }

    /// Materialize a single storage key into the destination.
    fn apply_layer(&self, storage_key: &str, dest: &Path) -> TemplateResult<()> {
        match self.resolve_form(storage_key) {
            SourceForm::Directory(path) => {
                info!("Using template directory: {}", path.display());
                let entries = read_directory(&path)?;
                materialize(dest, &entries)
            }
            SourceForm::Hook(hook) => {
                info!("Running initializer hook for '{}'", storage_key);
                hook.initialize(dest)
            }
            SourceForm::Archive(resource) => {
                info!("Using packaged archive: {}", resource);
                let data = self
                    .store
                    .get(&resource)
                    .ok_or_else(|| TemplateError::ResourceMissing(resource.clone()))?;
                let entries = archive::read_archive(&data)?;
                materialize(dest, &entries)
            }
        }
    }

    /// Decide which source form applies to a storage key.
    ///
    /// Checked in order, first match wins: a loose directory under the
    /// templates root, then a registered hook, then the packaged archive
    /// named `<key>.zip`.
    fn resolve_form(&self, storage_key: &str) -> SourceForm {
        let dir = self.templates_root.join(storage_key);
        if dir.is_dir() {
            return SourceForm::Directory(dir);
        }
        if let Some(hook) = self.hooks.get(storage_key) {
            return SourceForm::Hook(Arc::clone(hook));
        }
        SourceForm::Archive(format!("{}.zip", storage_key))
    }
}

/// Hooks shipped with the built-in registry.
fn builtin_hooks() -> HookRegistry {
    let mut hooks = HookRegistry::new();
    hooks.register(
        "themed_blog",
        Arc::new(GitCloneHook::new(
            "https://github.com/sitekit/themed-blog.git",
        )),
    );
    hooks
}
