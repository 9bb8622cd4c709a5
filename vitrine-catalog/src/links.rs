//! Routed URL production.
//!
//! URL dispatch belongs to the host framework; the catalog only needs the
//! resulting strings. [`PathLinks`] is the default shape: a base path, module
//! pages under it, components as anchors on their module page.

/// Produces the three routed URLs of the styleguide surface.
pub trait LinkResolver: Send + Sync {
    /// URL of the index page.
    fn index(&self) -> String;

    /// URL of a module page.
    fn module(&self, module_id: &str) -> String;

    /// Anchor-style URL of a component on its module page.
    fn component(&self, module_id: &str, component_id: &str) -> String;
}

/// Path-rooted link resolver: `/base/`, `/base/<module>/`,
/// `/base/<module>#<component>`.
#[derive(Debug, Clone)]
pub struct PathLinks {
    base: String,
}

impl PathLinks {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }
}

impl LinkResolver for PathLinks {
    fn index(&self) -> String {
        self.base.clone()
    }

    fn module(&self, module_id: &str) -> String {
        format!("{}{}/", self.base, module_id)
    }

    fn component(&self, module_id: &str, component_id: &str) -> String {
        format!("{}{}#{}", self.base, module_id, component_id)
    }
}
