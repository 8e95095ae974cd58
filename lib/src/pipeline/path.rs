use std::path::{Path, PathBuf};

use crate::util::PathExt;

/// A file the watcher saw change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangedFile {
    pub path: PathBuf,
    pub extension: String,
}

/// Name endings of files this pipeline writes itself.
const ARTIFACT_SUFFIXES: &[&str] = &[".min.js", ".min.css"];

impl ChangedFile {
    pub fn new<P: Into<PathBuf>, E: Into<String>>(path: P, extension: E) -> Self {
        ChangedFile { path: path.into(), extension: extension.into() }
    }

    /// A changed file with the extension taken from `path`, if it has one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let extension = path.extension()?.to_str()?;
        Some(ChangedFile::new(path, extension))
    }

    /// Whether this is a minified artifact, e.g. `app.min.js`.
    pub fn is_artifact(&self) -> bool {
        self.path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| ARTIFACT_SUFFIXES.iter().any(|s| name.ends_with(s)))
    }
}

/// Where the output of one changed file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    /// The changed path rebased under the destination root.
    pub destination: PathBuf,
    /// The directory the output is written into.
    pub parent: PathBuf,
    /// Destination file name before its first `.`.
    pub stem: String,
}

/// Plans the output of `changed`, a file under `source`, in `destination`.
///
/// Returns `None` if `changed` is not strictly under `source` or its name has
/// no stem. Containment is judged by whole components.
pub fn resolve(changed: &Path, source: &Path, destination: &Path) -> Option<PathPlan> {
    let source = source.collapse_cur_dir();
    let relative = changed.collapse_cur_dir().strip_prefix(&source).ok()?.to_path_buf();
    if relative.as_os_str().is_empty() {
        return None;
    }

    let destination = relative.with_root(destination).collapse_cur_dir();
    let parent = destination.parent()?.to_path_buf();
    let stem = destination.first_stem()?.to_owned();
    Some(PathPlan { destination, parent, stem })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &[&str] = &[
        "/site/src/index.ktml",
        "/site/src/blog/2021/post.ktml",
        "/site/src/js/app.js",
        "/site/src/./css/site.v2.css",
        "/site/src/a/b/c/d/e.js",
    ];

    #[test]
    fn rebase_preserves_the_suffix() {
        let (source, dest) = (Path::new("/site/src"), Path::new("/site/./out"));
        for changed in NESTED.iter().map(Path::new) {
            let plan = resolve(changed, source, dest).unwrap();
            let expected = changed.collapse_cur_dir();
            let expected = expected.strip_prefix(source).unwrap();
            assert_eq!(plan.destination.strip_prefix("/site/out").unwrap(), expected);
            assert_eq!(plan.parent, plan.destination.parent().unwrap());
            assert!(!plan.destination.to_string_lossy().contains("/./"));
        }
    }

    #[test]
    fn same_source_and_destination() {
        let root = Path::new("/site");
        let plan = resolve(Path::new("/site/js/app.js"), root, root).unwrap();
        assert_eq!(plan.destination, Path::new("/site/js/app.js"));
        assert_eq!(plan.parent, Path::new("/site/js"));
        assert_eq!(plan.stem, "app");
    }

    #[test]
    fn outside_the_source_tree() {
        let (source, dest) = (Path::new("/site/src"), Path::new("/site/out"));
        assert_eq!(resolve(Path::new("/elsewhere/a.js"), source, dest), None);
        assert_eq!(resolve(Path::new("/site/src2/a.js"), source, dest), None);
        assert_eq!(resolve(Path::new("/site/src"), source, dest), None);
        assert_eq!(resolve(Path::new("src/a.js"), source, dest), None);
    }

    #[test]
    fn stems() {
        let (source, dest) = (Path::new("/s"), Path::new("/d"));
        assert_eq!(resolve(Path::new("/s/x/site.v2.css"), source, dest).unwrap().stem, "site");
        assert_eq!(resolve(Path::new("/s/.eslintrc.js"), source, dest), None);
    }

    #[test]
    fn changed_files() {
        let file = ChangedFile::from_path("/s/app.js").unwrap();
        assert_eq!(file.extension, "js");
        assert!(!file.is_artifact());

        assert!(ChangedFile::from_path("/s/app.min.js").unwrap().is_artifact());
        assert!(ChangedFile::from_path("/s/site.min.css").unwrap().is_artifact());
        assert!(!ChangedFile::from_path("/s/admin.js").unwrap().is_artifact());
        assert_eq!(ChangedFile::from_path("/s/Makefile"), None);
    }
}
