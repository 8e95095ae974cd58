use std::path::{Path, PathBuf, Component};

pub trait PathExt: AsRef<Path> {
    /// `self` with every interior `.` segment removed.
    fn collapse_cur_dir(&self) -> PathBuf;

    /// `self`, which must be relative, placed beneath `root`. Root and prefix
    /// components of `self` are ignored so the result never escapes `root`.
    fn with_root<P: AsRef<Path>>(&self, root: P) -> PathBuf;

    /// The file name up to its first `.`, if that is non-empty.
    fn first_stem(&self) -> Option<&str>;
}

impl PathExt for Path {
    fn collapse_cur_dir(&self) -> PathBuf {
        let mut components = self.components().peekable();
        let mut path = PathBuf::new();
        if let Some(Component::CurDir) = components.peek() {
            path.push(".");
        }

        path.extend(components.filter(|c| !matches!(c, Component::CurDir)));
        path
    }

    fn with_root<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref()
            .components()
            .chain(self.components().filter(|c| matches!(c, Component::Normal(_))))
            .collect()
    }

    fn first_stem(&self) -> Option<&str> {
        let name = self.file_name()?.to_str()?;
        match name.split('.').next() {
            Some(stem) if !stem.is_empty() => Some(stem),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        assert_eq!(Path::new("/site/./out/./a.js").collapse_cur_dir(), Path::new("/site/out/a.js"));
        assert_eq!(Path::new("./out/.").collapse_cur_dir(), Path::new("./out"));
        assert_eq!(Path::new("a/b").collapse_cur_dir(), Path::new("a/b"));
    }

    #[test]
    fn rooted() {
        assert_eq!(Path::new("sub/a.js").with_root("/out"), Path::new("/out/sub/a.js"));
        assert_eq!(Path::new("/sub/a.js").with_root("/out/."), Path::new("/out/sub/a.js"));
        assert_eq!(Path::new("../a.js").with_root("/out"), Path::new("/out/a.js"));
    }

    #[test]
    fn stems() {
        assert_eq!(Path::new("/x/app.min.js").first_stem(), Some("app"));
        assert_eq!(Path::new("index.ktml").first_stem(), Some("index"));
        assert_eq!(Path::new("README").first_stem(), Some("README"));
        assert_eq!(Path::new("/x/.hidden.css").first_stem(), None);
        assert_eq!(Path::new("/").first_stem(), None);
    }
}
