//! Site template registry and feature map.
//!
//! The registry maps public template names to storage keys, and the feature
//! map declares which extra template layers are applied after a base
//! template. Both are defined at process start and never mutated afterwards.

use std::collections::HashMap;

use serde::Serialize;

/// A named site template known to the registry.
#[derive(Debug, Clone, Serialize)]
pub struct SiteTemplate {
    /// Public name users ask for.
    pub name: String,
    /// Human description shown in listings.
    pub description: String,
    /// On-disk/archive resource name the public name maps to. May differ
    /// from the public name.
    pub storage_key: String,
    /// Hidden templates resolve normally but are omitted from listings.
    pub hidden: bool,
}

impl SiteTemplate {
    /// A template shown in listings.
    pub fn visible(
        name: impl Into<String>,
        description: impl Into<String>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            storage_key: storage_key.into(),
            hidden: false,
        }
    }

    /// A template omitted from listings.
    pub fn hidden(
        name: impl Into<String>,
        description: impl Into<String>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            hidden: true,
            ..Self::visible(name, description, storage_key)
        }
    }
}

/// Registry of available site templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<SiteTemplate>,
    features: HashMap<String, Vec<String>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in template set shipped with the binary.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(SiteTemplate::visible(
            "bare",
            "A blank site with no blog",
            "bare",
        ));
        registry.register(SiteTemplate::visible(
            "simple_blog",
            "A minimal blog with no theme",
            "simple_blog",
        ));
        registry.register(SiteTemplate::visible(
            "simple_html5_blog",
            "A minimal blog with no theme, in HTML5 markup",
            "simple_html5_blog",
        ));
        registry.register(SiteTemplate::visible(
            "showcase",
            "A fully themed blog cloned from a git repository (requires git)",
            "themed_blog",
        ));
        registry.register(SiteTemplate::hidden(
            "blog_unit_test",
            "A simple site used by the test suite",
            "blog_unit_test",
        ));

        registry.add_features("simple_blog", ["blog_features"]);
        registry.add_features("simple_html5_blog", ["blog_features", "html5_blog_features"]);
        registry.add_features("blog_unit_test", ["blog_features"]);

        registry
    }

    /// Register a template.
    pub fn register(&mut self, template: SiteTemplate) {
        self.templates.push(template);
    }

    /// Declare the feature layers applied after a base storage key, in order.
    pub fn add_features<I, S>(&mut self, storage_key: &str, features: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.insert(
            storage_key.to_string(),
            features.into_iter().map(Into::into).collect(),
        );
    }

    /// Look up a template by public name, hidden entries included.
    pub fn get(&self, name: &str) -> Option<&SiteTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Check if a template exists.
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Templates shown in listings, in registration order.
    pub fn list_visible(&self) -> Vec<&SiteTemplate> {
        self.templates.iter().filter(|t| !t.hidden).collect()
    }

    /// All templates, hidden entries included.
    pub fn list_all(&self) -> Vec<&SiteTemplate> {
        self.templates.iter().collect()
    }

    /// Feature layers declared for a storage key, in application order.
    /// An absent key means no extra features, not an error.
    pub fn features(&self, storage_key: &str) -> &[String] {
        self.features
            .get(storage_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.exists("bare"));
        assert!(registry.exists("simple_blog"));
        assert!(!registry.exists("no_such_template"));
    }

    #[test]
    fn test_storage_key_aliasing() {
        let registry = TemplateRegistry::builtin();
        let showcase = registry.get("showcase").unwrap();
        assert_eq!(showcase.storage_key, "themed_blog");
    }

    #[test]
    fn test_hidden_templates_resolve_but_are_not_listed() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.get("blog_unit_test").is_some());
        assert!(registry
            .list_visible()
            .iter()
            .all(|t| t.name != "blog_unit_test"));
        assert!(registry
            .list_all()
            .iter()
            .any(|t| t.name == "blog_unit_test"));
    }

    #[test]
    fn test_feature_layers_in_order() {
        let registry = TemplateRegistry::builtin();
        let features = registry.features("simple_html5_blog");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0], "blog_features");
        assert_eq!(features[1], "html5_blog_features");
    }

    #[test]
    fn test_absent_feature_key_means_no_features() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.features("bare").is_empty());
    }
}
