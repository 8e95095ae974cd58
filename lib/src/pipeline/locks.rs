use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::FxHasher;

type Hasher = BuildHasherDefault<FxHasher>;

/// One lock per destination path so two writes to a path never interleave.
#[derive(Debug, Default)]
pub struct WriteLocks {
    locks: DashMap<PathBuf, Arc<Mutex<()>>, Hasher>,
}

impl WriteLocks {
    pub fn new() -> Self {
        WriteLocks::default()
    }

    /// Runs `f` while holding the lock for `path`.
    pub fn with<T, F: FnOnce() -> T>(&self, path: &Path, f: F) -> T {
        // The map entry must not be held while waiting on the lock.
        let lock = Arc::clone(&self.locks.entry(path.to_path_buf()).or_default());
        let _guard = lock.lock();
        f()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rayon::prelude::*;

    use super::*;

    #[test]
    fn one_writer_per_path() {
        let locks = WriteLocks::new();
        let inside = AtomicUsize::new(0);

        (0..64).into_par_iter().for_each(|i| {
            let path = Path::new(if i % 2 == 0 { "/out/a.html" } else { "/out/b.html" });
            locks.with(path, || {
                let before = inside.fetch_add(1, Ordering::SeqCst);
                assert!(before < 2);
                std::thread::yield_now();
                inside.fetch_sub(1, Ordering::SeqCst);
            });
        });

        assert_eq!(locks.len(), 2);
    }

    #[test]
    fn returns_the_closure_value() {
        let locks = WriteLocks::new();
        assert!(locks.is_empty());
        assert_eq!(locks.with(Path::new("/x"), || 7), 7);
    }
}
