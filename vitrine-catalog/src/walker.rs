//! Folder walker: one module folder in, ordered components out.
//!
//! Listing order is part of the contract: directories and files are sorted
//! before iteration, so component order is stable across platforms and runs.

use std::path::Path;

use tracing::{debug, trace};
use vitrine_config::StyleguideConfig;
use vitrine_parser::{extract_doc_from_file, parse_doc, DocMap};
use walkdir::WalkDir;

use crate::component::Component;
use crate::error::CatalogError;
use crate::links::LinkResolver;
use crate::naming::{format_file_id, format_file_name};

/// Build the ordered component list for one module folder.
///
/// Walks `styleguide_dir/folder_name` recursively in sorted order. Files
/// keep their module membership however deep they sit; their template path
/// reflects the true path under the reserved directory. The reserved doc
/// file and files without the template extension are skipped.
pub fn components_from_folder(
    styleguide_dir: &Path,
    folder_name: &str,
    module_id: &str,
    settings: &StyleguideConfig,
    links: &dyn LinkResolver,
) -> Result<Vec<Component>, CatalogError> {
    let folder = styleguide_dir.join(folder_name);
    let mut components = Vec::new();

    for entry in WalkDir::new(&folder).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name == settings.docfile_name {
            continue;
        }
        if !file_name.ends_with(&settings.template_extension) {
            trace!(file = %file_name, "skipping non-template file");
            continue;
        }

        let doc = parse_doc(&extract_doc_from_file(entry.path())?);
        let component_id = format_file_id(&file_name, &settings.template_extension);

        let relative = entry
            .path()
            .strip_prefix(styleguide_dir)
            .unwrap_or_else(|_| entry.path());
        let template = join_template_path(&settings.dir_name, relative);

        let name_source = doc.get("name").map(String::as_str).unwrap_or(&file_name);
        let component = Component {
            id: component_id.clone(),
            name: format_file_name(name_source, &settings.template_extension),
            file_name,
            template,
            doc,
            link: links.component(module_id, &component_id),
        };
        components.push(component);
    }

    debug!(
        folder = folder_name,
        count = components.len(),
        "walked module folder"
    );
    Ok(components)
}

/// Parse the reserved doc file of a module folder, if present.
///
/// The file is treated like any template: its doc lives in a leading
/// `{% comment %}` block. Doc files written as bare tag lines (no comment
/// block) are parsed raw as a fallback.
pub fn docfile_from_folder(
    styleguide_dir: &Path,
    folder_name: &str,
    settings: &StyleguideConfig,
) -> Result<DocMap, CatalogError> {
    let path = styleguide_dir.join(folder_name).join(&settings.docfile_name);
    if !path.is_file() {
        return Ok(DocMap::new());
    }

    let source = std::fs::read_to_string(&path)?;
    let extracted = vitrine_parser::extract_doc(&source);
    if extracted.is_empty() {
        Ok(parse_doc(&source))
    } else {
        Ok(parse_doc(&extracted))
    }
}

/// Join the reserved dir name with a relative file path, always with
/// forward slashes. Template paths are engine lookups, not OS paths.
fn join_template_path(dir_name: &str, relative: &Path) -> String {
    let mut parts = vec![dir_name.to_string()];
    parts.extend(
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string()),
    );
    parts.join("/")
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

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, contents).expect("write");
    }

    #[test]
    fn test_components_in_alphabetical_order() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(root, "layout/header.html", "<header/>");
        write(root, "layout/footer.html", "<footer/>");

        let links = PathLinks::new("/styleguide/");
        let components =
            components_from_folder(root, "layout", "layout", &settings(), &links).expect("walk");

        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["footer", "header"]);

        let footer = &components[0];
        assert_eq!(footer.id, "footer");
        assert_eq!(footer.file_name, "footer.html");
        assert_eq!(footer.template, "styleguide/layout/footer.html");
        assert_eq!(footer.link, "/styleguide/layout#footer");
        assert!(footer.doc.is_empty());
    }

    #[test]
    fn test_doc_name_overrides_display_name() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(
            root,
            "layout/area.html",
            "{% comment %}\n@doc\n@name layout_area\n{% endcomment %}<div/>",
        );

        let links = PathLinks::new("/styleguide/");
        let components =
            components_from_folder(root, "layout", "layout", &settings(), &links).expect("walk");

        // The doc name runs through the display formatter too
        assert_eq!(components[0].name, "layout area");
        // But the id always comes from the file name
        assert_eq!(components[0].id, "area");
    }

    #[test]
    fn test_reserved_and_foreign_files_are_skipped() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(root, "layout/__doc__.html", "@name layout");
        write(root, "layout/notes.txt", "not a template");
        write(root, "layout/bar.html", "<div/>");

        let links = PathLinks::new("/styleguide/");
        let components =
            components_from_folder(root, "layout", "layout", &settings(), &links).expect("walk");

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].id, "bar");
    }

    #[test]
    fn test_nested_files_keep_true_template_path() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(root, "forms/fields/input.html", "<input/>");

        let links = PathLinks::new("/styleguide/");
        let components =
            components_from_folder(root, "forms", "forms", &settings(), &links).expect("walk");

        assert_eq!(components[0].template, "styleguide/forms/fields/input.html");
        assert_eq!(components[0].link, "/styleguide/forms#input");
    }

    #[test]
    fn test_numbered_prefix_strips_for_name_and_id() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(root, "layout/01-main_header.html", "<header/>");

        let links = PathLinks::new("/styleguide/");
        let components =
            components_from_folder(root, "layout", "layout", &settings(), &links).expect("walk");

        assert_eq!(components[0].name, "main header");
        assert_eq!(components[0].id, "main-header");
        assert_eq!(components[0].file_name, "01-main_header.html");
    }

    #[test]
    fn test_docfile_with_comment_block() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(
            root,
            "layout/__doc__.html",
            "{% comment %}\n@description yada yada yada\n{% endcomment %}",
        );

        let doc = docfile_from_folder(root, "layout", &settings()).expect("docfile");
        assert_eq!(
            doc.get("description").map(String::as_str),
            Some("yada yada yada")
        );
    }

    #[test]
    fn test_docfile_raw_fallback() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        write(root, "layout/__doc__.html", "@description yada yada yada");

        let doc = docfile_from_folder(root, "layout", &settings()).expect("docfile");
        assert_eq!(
            doc.get("description").map(String::as_str),
            Some("yada yada yada")
        );
    }

    #[test]
    fn test_missing_docfile_is_empty() {
        let tmp = TempDir::new().expect("tempdir");
        let doc = docfile_from_folder(tmp.path(), "layout", &settings()).expect("docfile");
        assert!(doc.is_empty());
    }
}
