//! The styleguide aggregator.
//!
//! [`StyleguideLoader`] runs one full discovery pass: styleguide directories
//! out of the template roots, one [`Module`] per top-level subfolder, each
//! filled by the folder walker. [`Styleguide`] wraps a loader with the lazy
//! state the view layer works against: memoized modules, a current-module
//! selection, and the index predicate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;
use vitrine_config::StyleguideConfig;

use crate::component::{Component, Module};
use crate::discover::styleguide_dirs;
use crate::error::CatalogError;
use crate::links::LinkResolver;
use crate::naming::{format_file_id, format_file_name};
use crate::walker::{components_from_folder, docfile_from_folder};

/// Runs discovery passes over template roots.
#[derive(Clone)]
pub struct StyleguideLoader {
    settings: StyleguideConfig,
    links: Arc<dyn LinkResolver>,
}

impl StyleguideLoader {
    pub fn new(settings: StyleguideConfig, links: Arc<dyn LinkResolver>) -> Self {
        Self { settings, links }
    }

    /// Build all modules found under the given template roots.
    ///
    /// Top-level subfolders of each styleguide directory become modules, in
    /// sorted folder order per root. Ignored folders are skipped. When two
    /// roots carry a folder of the same name, the later root's module wins
    /// but keeps the earlier position.
    pub fn load<P: AsRef<Path>>(&self, template_roots: &[P]) -> Result<Vec<Module>, CatalogError> {
        let mut modules: IndexMap<String, Module> = IndexMap::new();

        for dir in styleguide_dirs(template_roots, &self.settings) {
            for folder_name in sorted_subfolders(&dir)? {
                if self.settings.ignore_folders.contains(&folder_name) {
                    continue;
                }
                modules.insert(folder_name.clone(), self.build_module(&dir, &folder_name)?);
            }
        }

        debug!(count = modules.len(), "discovery pass complete");
        Ok(modules.into_values().collect())
    }

    fn build_module(&self, dir: &Path, folder_name: &str) -> Result<Module, CatalogError> {
        let ext = &self.settings.template_extension;
        let module_id = format_file_id(folder_name, ext);
        let components = components_from_folder(
            dir,
            folder_name,
            &module_id,
            &self.settings,
            self.links.as_ref(),
        )?;
        let doc = docfile_from_folder(dir, folder_name, &self.settings)?;

        Ok(Module {
            name: format_file_name(folder_name, ext),
            link: self.links.module(&module_id),
            id: module_id,
            doc,
            components,
        })
    }
}

/// List the names of a directory's immediate subfolders, sorted.
fn sorted_subfolders(dir: &Path) -> Result<Vec<String>, CatalogError> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            folders.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    folders.sort();
    Ok(folders)
}

/// The aggregate the view layer is handed.
///
/// Modules are built lazily on first access and memoized; [`Styleguide::prime`]
/// short-circuits the build with modules restored from a cache. Selection
/// state is per-instance, i.e. per request.
pub struct Styleguide {
    loader: StyleguideLoader,
    roots: Vec<PathBuf>,
    modules: Option<Vec<Module>>,
    current: Option<String>,
}

impl Styleguide {
    pub fn new(
        roots: Vec<PathBuf>,
        settings: StyleguideConfig,
        links: Arc<dyn LinkResolver>,
    ) -> Self {
        Self {
            loader: StyleguideLoader::new(settings, links),
            roots,
            modules: None,
            current: None,
        }
    }

    /// Install prebuilt modules, skipping the discovery pass.
    pub fn prime(&mut self, modules: Vec<Module>) {
        self.modules = Some(modules);
    }

    /// All modules, in discovery order. Built on first call.
    pub fn modules(&mut self) -> Result<&[Module], CatalogError> {
        if self.modules.is_none() {
            self.modules = Some(self.loader.load(&self.roots)?);
        }
        Ok(self.modules.as_deref().unwrap_or_default())
    }

    /// All components across all modules, flattened in module order.
    pub fn components(&mut self) -> Result<Vec<&Component>, CatalogError> {
        Ok(self
            .modules()?
            .iter()
            .flat_map(|m| m.components.iter())
            .collect())
    }

    /// Select the current module by id or display name. Unknown names leave
    /// the selection unchanged.
    pub fn set_current_module(&mut self, name: &str) -> Result<(), CatalogError> {
        let found = self
            .modules()?
            .iter()
            .find(|m| m.id == name || m.name == name)
            .map(|m| m.id.clone());
        if let Some(id) = found {
            self.current = Some(id);
        }
        Ok(())
    }

    /// The selected module, if any. `None` until modules are built.
    pub fn current_module(&self) -> Option<&Module> {
        let current = self.current.as_deref()?;
        self.modules
            .as_deref()?
            .iter()
            .find(|m| m.id == current)
    }

    /// Components of the selected module; empty on the index page.
    pub fn current_components(&self) -> &[Component] {
        self.current_module()
            .map(|m| m.components.as_slice())
            .unwrap_or_default()
    }

    /// True iff no module is selected.
    pub fn is_index(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use vitrine_config::load_defaults;

    use super::*;
    use crate::links::PathLinks;

    fn settings() -> StyleguideConfig {
        load_defaults().expect("defaults to load").styleguide
    }

    fn links() -> Arc<dyn LinkResolver> {
        Arc::new(PathLinks::new("/styleguide/"))
    }

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, contents).expect("write");
    }

    /// Mirror of the project layout the walker docs describe:
    /// templates/styleguide/{components,layout}/*.html
    fn mock_root() -> TempDir {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(
            root,
            "styleguide/layout/area.html",
            "{% comment %}\n@doc\n@name layout area\n@description Nothing more than an area\n{% endcomment %}",
        );
        write(root, "styleguide/components/bar.html", "<div/>");
        write(root, "styleguide/layout/footer.html", "<footer/>");
        write(root, "styleguide/layout/header.html", "<header/>");
        write(root, "styleguide/includes/helper.html", "<div/>");
        tmp
    }

    #[test]
    fn test_modules_in_sorted_order() {
        let tmp = mock_root();
        let loader = StyleguideLoader::new(settings(), links());
        let modules = loader.load(&[tmp.path()]).expect("load");

        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["components", "layout"]);
    }

    #[test]
    fn test_ignored_folders_are_not_modules() {
        let tmp = mock_root();
        let loader = StyleguideLoader::new(settings(), links());
        let modules = loader.load(&[tmp.path()]).expect("load");

        assert!(modules.iter().all(|m| m.id != "includes"));
    }

    #[test]
    fn test_module_links_and_ids() {
        let tmp = mock_root();
        let loader = StyleguideLoader::new(settings(), links());
        let modules = loader.load(&[tmp.path()]).expect("load");

        let layout = &modules[1];
        assert_eq!(layout.id, "layout");
        assert_eq!(layout.link, "/styleguide/layout/");
    }

    #[test]
    fn test_same_folder_in_two_roots_last_wins() {
        let first = TempDir::new().expect("tempdir");
        let second = TempDir::new().expect("tempdir");
        write(first.path(), "styleguide/layout/a.html", "<div/>");
        write(second.path(), "styleguide/layout/b.html", "<div/>");

        let loader = StyleguideLoader::new(settings(), links());
        let modules = loader
            .load(&[first.path(), second.path()])
            .expect("load");

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].components[0].id, "b");
    }

    #[test]
    fn test_flattened_components() {
        let tmp = mock_root();
        let mut guide = Styleguide::new(vec![tmp.path().to_path_buf()], settings(), links());

        let names: Vec<String> = guide
            .components()
            .expect("components")
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["bar", "layout area", "footer", "header"]);
    }

    #[test]
    fn test_selection_state() {
        let tmp = mock_root();
        let mut guide = Styleguide::new(vec![tmp.path().to_path_buf()], settings(), links());

        assert!(guide.is_index());
        assert!(guide.current_module().is_none());
        assert!(guide.current_components().is_empty());

        guide.set_current_module("layout").expect("select");
        assert!(!guide.is_index());
        let current = guide.current_module().expect("current module");
        assert_eq!(current.id, "layout");
        assert_eq!(guide.current_components().len(), 3);
    }

    #[test]
    fn test_unknown_module_leaves_selection() {
        let tmp = mock_root();
        let mut guide = Styleguide::new(vec![tmp.path().to_path_buf()], settings(), links());

        guide.set_current_module("nope").expect("select");
        assert!(guide.is_index());
    }

    #[test]
    fn test_selection_by_display_name() {
        let tmp = TempDir::new().expect("tempdir");
        write(tmp.path(), "styleguide/02-page_chrome/x.html", "<div/>");

        let mut guide = Styleguide::new(vec![tmp.path().to_path_buf()], settings(), links());
        guide.set_current_module("page chrome").expect("select");

        assert_eq!(guide.current_module().expect("current").id, "page-chrome");
    }

    #[test]
    fn test_prime_skips_discovery() {
        // Roots with no styleguide dir would yield zero modules if walked
        let mut guide = Styleguide::new(
            vec![PathBuf::from("/definitely/not/here")],
            settings(),
            links(),
        );
        guide.prime(vec![Module {
            id: "cached".to_string(),
            name: "cached".to_string(),
            link: "/styleguide/cached/".to_string(),
            doc: Default::default(),
            components: vec![],
        }]);

        let modules = guide.modules().expect("modules");
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].id, "cached");
    }

    #[test]
    fn test_module_docfile_attached() {
        let tmp = mock_root();
        write(
            tmp.path(),
            "styleguide/layout/__doc__.html",
            "{% comment %}\n@description yada yada yada\n{% endcomment %}",
        );

        let loader = StyleguideLoader::new(settings(), links());
        let modules = loader.load(&[tmp.path()]).expect("load");
        let layout = modules.iter().find(|m| m.id == "layout").expect("layout");

        assert_eq!(
            layout.doc.get("description").map(String::as_str),
            Some("yada yada yada")
        );
        // The doc file itself never shows up as a component
        assert!(layout.components.iter().all(|c| c.file_name != "__doc__.html"));
    }
}
