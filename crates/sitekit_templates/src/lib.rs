//! # sitekit_templates
//!
//! Template resolution and materialization engine for sitekit.
//!
//! A site template is a named, reusable initial file layout (or procedure)
//! for a new site workspace. A template's storage key resolves to one of
//! three source forms, checked in this order:
//!
//! - a loose directory tree under the templates root (development)
//! - a procedural initializer hook registered ahead of time
//! - a packaged zip archive embedded in the binary (production)
//!
//! The resolver materializes the chosen form into an empty destination
//! directory, then layers the template's declared feature templates on top
//! in order; later layers overwrite earlier files on path collisions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sitekit_templates::{TemplateRegistry, TemplateResolver};
//!
//! let resolver = TemplateResolver::new(TemplateRegistry::builtin(), "templates");
//! resolver.initialize("simple_blog", Path::new("./my-site")).unwrap();
//! ```

pub mod archive;
pub mod error;
pub mod hook;
pub mod materialize;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod tree;

pub use archive::{read_archive, PackagedStore, ResourceStore};
pub use error::{TemplateError, TemplateResult};
pub use hook::{GitCloneHook, HookRegistry, InitHook};
pub use materialize::materialize;
pub use registry::{SiteTemplate, TemplateRegistry};
pub use resolver::TemplateResolver;
pub use source::{resolve_dest_path, EntryContent, SourceEntry};
pub use tree::read_directory;
