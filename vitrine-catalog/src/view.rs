//! Request-scoped view assembly.
//!
//! The host framework owns routing and rendering; this layer owns everything
//! in between: the access check, the cache lookup, the rebuild on miss, the
//! module selection from the route parameter, and the context the index
//! template is rendered with. Denied users get [`ViewOutcome::NotFound`].

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use vitrine_config::StyleguideConfig;

use crate::access::{AccessPolicy, StaffAccess, UserProfile};
use crate::cache::{GuideCache, MemoryCache};
use crate::component::Module;
use crate::error::CatalogError;
use crate::guide::Styleguide;
use crate::links::{LinkResolver, PathLinks};

/// Everything the index template needs.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Template the host engine should render, e.g. `styleguide/index.html`
    pub template: String,
    /// All modules, in discovery order
    pub modules: Vec<Module>,
    /// The selected module, if the route named one
    pub current_module: Option<Module>,
    /// True iff no module is selected
    pub is_index: bool,
}

/// Outcome of a styleguide request.
#[derive(Debug, Clone)]
pub enum ViewOutcome {
    /// User may not see the styleguide
    NotFound,
    /// Render the index template with this context
    Page(RenderContext),
}

/// The styleguide view, wired with its collaborators.
///
/// Construction picks defaults for every seam (path links from the settings,
/// an in-memory cache, staff-only access); `with_*` swaps them out.
pub struct StyleguideView {
    roots: Vec<PathBuf>,
    settings: StyleguideConfig,
    links: Arc<dyn LinkResolver>,
    cache: Arc<dyn GuideCache>,
    policy: Arc<dyn AccessPolicy>,
}

impl StyleguideView {
    pub fn new(roots: Vec<PathBuf>, settings: StyleguideConfig) -> Self {
        let links: Arc<dyn LinkResolver> = Arc::new(PathLinks::new(settings.link_base.clone()));
        Self {
            roots,
            settings,
            links,
            cache: Arc::new(MemoryCache::new()),
            policy: Arc::new(StaffAccess),
        }
    }

    pub fn with_links(mut self, links: Arc<dyn LinkResolver>) -> Self {
        self.links = links;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn GuideCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Handle one styleguide request.
    ///
    /// The debug flag bypasses the cache in both directions. Unknown module
    /// names fall through to the index page rather than erroring.
    pub fn render(
        &self,
        user: &UserProfile,
        module_name: Option<&str>,
    ) -> Result<ViewOutcome, CatalogError> {
        if !self.policy.allows(user) {
            debug!(user = %user.username, "styleguide access denied");
            return Ok(ViewOutcome::NotFound);
        }

        let mut guide = Styleguide::new(
            self.roots.clone(),
            self.settings.clone(),
            self.links.clone(),
        );

        let mut primed = false;
        if !self.settings.debug {
            if let Some(modules) = self.cache.get(&self.settings.cache_name) {
                debug!(key = %self.settings.cache_name, "guide cache hit");
                guide.prime(modules);
                primed = true;
            }
        }

        let modules = guide.modules()?.to_vec();
        if !self.settings.debug && !primed {
            debug!(key = %self.settings.cache_name, "storing rebuilt guide");
            self.cache.set(&self.settings.cache_name, modules.clone());
        }

        if let Some(name) = module_name {
            guide.set_current_module(name)?;
        }

        Ok(ViewOutcome::Page(RenderContext {
            template: format!("{}/index.html", self.settings.dir_name),
            current_module: guide.current_module().cloned(),
            is_index: guide.is_index(),
            modules,
        }))
    }

    /// Drop the cached guide; the next request rebuilds.
    pub fn clear_cache(&self) {
        self.cache.clear(&self.settings.cache_name);
    }
}
