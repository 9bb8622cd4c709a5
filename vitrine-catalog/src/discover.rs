//! Template-root discovery.
//!
//! How template roots are found (installed apps, settings, search paths) is
//! the host framework's business; the catalog takes the resolved list and
//! keeps only the roots that actually contain the reserved styleguide
//! directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use vitrine_config::StyleguideConfig;

/// Filter template roots down to their styleguide directories.
///
/// For each root, `root/<dir_name>` is kept iff it exists and is a
/// directory. Order follows the input roots.
pub fn styleguide_dirs<P: AsRef<Path>>(
    template_roots: &[P],
    settings: &StyleguideConfig,
) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for root in template_roots {
        let candidate = root.as_ref().join(&settings.dir_name);
        if candidate.is_dir() {
            debug!(dir = %candidate.display(), "found styleguide directory");
            dirs.push(candidate);
        }
    }
    dirs
}
