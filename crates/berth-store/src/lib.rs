use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// All well-known paths under the shared coordination store.
///
/// One store per host; every peer on the host reads and writes the same
/// directory. Each record is a whole small file: no append logs, no
/// versioning, every write fully replaces the file.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub root: PathBuf,
    pub active_window_file: PathBuf,
    pub leases_dir: PathBuf,
    pub lock_file: PathBuf,
}

impl StorePaths {
    /// Derive all paths from a store root. Pure computation, no I/O.
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            active_window_file: root.join("active_window.json"),
            leases_dir: root.join("leases"),
            lock_file: root.join("LOCK"),
            root,
        }
    }

    /// The per-host default store root under the OS temp location.
    pub fn default_root() -> PathBuf {
        std::env::temp_dir().join("berth-coordination")
    }

    /// Create all required directories. Idempotent.
    pub fn ensure_layout(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.leases_dir)?;
        Ok(())
    }

    /// Lease file for a resource key: `leases/lease.<port>.json`.
    pub fn lease_path(&self, key: u16) -> PathBuf {
        self.leases_dir.join(format!("lease.{key}.json"))
    }

    /// All lease files currently present in the store.
    /// A missing leases directory reads as an empty store.
    pub fn list_lease_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.leases_dir) {
            Ok(e) => e,
            Err(_) => return Vec::new(),
        };
        let mut files = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("lease.") && name.ends_with(".json") {
                files.push(entry.path());
            }
        }
        files
    }
}

/// Atomic write: write to a temp file in the same dir, then rename.
pub fn write_atomic(path: &std::path::Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

/// Advisory-lock guard for the lease acquisition critical section.
/// Released when dropped.
pub struct StoreLock {
    _file: fs::File,
}

/// Try to take the store's advisory lock (non-blocking).
///
/// Returns `None` when another peer holds the lock or the lock file cannot
/// be opened; callers fall back to the plain optimistic protocol, which
/// keeps record shapes compatible with peers that never lock.
pub fn try_lock(paths: &StorePaths) -> Option<StoreLock> {
    fs::create_dir_all(&paths.root).ok()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(&paths.lock_file)
        .ok()?;
    file.try_lock_exclusive().ok()?;
    Some(StoreLock { _file: file })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_builds_correct_paths() {
        let p = StorePaths::discover("/tmp/store");
        assert_eq!(p.root, PathBuf::from("/tmp/store"));
        assert_eq!(
            p.active_window_file,
            PathBuf::from("/tmp/store/active_window.json")
        );
        assert_eq!(p.leases_dir, PathBuf::from("/tmp/store/leases"));
        assert_eq!(p.lock_file, PathBuf::from("/tmp/store/LOCK"));
        assert_eq!(
            p.lease_path(5678),
            PathBuf::from("/tmp/store/leases/lease.5678.json")
        );
    }

    #[test]
    fn default_root_is_not_empty() {
        assert!(!StorePaths::default_root().as_os_str().is_empty());
    }

    #[test]
    fn ensure_layout_creates_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let p = StorePaths::discover(tmp.path());
        p.ensure_layout().unwrap();
        assert!(p.leases_dir.is_dir());
    }

    #[test]
    fn write_atomic_creates_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rec.json");
        write_atomic(&path, b"first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn list_lease_files_filters_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        let p = StorePaths::discover(tmp.path());
        p.ensure_layout().unwrap();
        fs::write(p.lease_path(5678), "{}").unwrap();
        fs::write(p.leases_dir.join("unrelated.txt"), "x").unwrap();
        let files = p.list_lease_files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0], p.lease_path(5678));
    }

    #[test]
    fn list_lease_files_empty_on_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let p = StorePaths::discover(tmp.path().join("never-created"));
        assert!(p.list_lease_files().is_empty());
    }

    #[test]
    fn lock_is_exclusive_until_dropped() {
        let tmp = tempfile::tempdir().unwrap();
        let p = StorePaths::discover(tmp.path());
        let lock = try_lock(&p).unwrap();
        assert!(try_lock(&p).is_none());
        drop(lock);
        assert!(try_lock(&p).is_some());
    }
}
