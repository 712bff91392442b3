//! Module paths derived from file locations.

use std::path::{Component, Path};

/// File stems that name their directory's module rather than a child.
const DIRECTORY_MODULES: [&str; 3] = ["lib", "main", "mod"];

/// Returns the module path of `file` relative to the source `root`.
///
/// Files outside `root` are treated as if they sat directly in it.
///
/// ```
/// use observable_settings_cli::module_path::module_path;
/// use std::path::Path;
///
/// let root = Path::new("src");
/// assert_eq!(module_path(root, Path::new("src/lib.rs")), Vec::<String>::new());
/// assert_eq!(module_path(root, Path::new("src/net/mod.rs")), vec!["net"]);
/// assert_eq!(module_path(root, Path::new("src/net/proxy.rs")), vec!["net", "proxy"]);
/// ```
pub fn module_path(root: &Path, file: &Path) -> Vec<String> {
    let relative = match file.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => file.file_name().map_or(file, Path::new),
    };

    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(stem) = relative.file_stem().map(|stem| stem.to_string_lossy())
        && !DIRECTORY_MODULES.contains(&stem.as_ref())
    {
        segments.push(stem.into_owned());
    }

    segments
}
