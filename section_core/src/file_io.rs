//! # File I/O Module
//!
//! Project files and exports are written with two guarantees:
//! - **Atomic saves**: bytes go to `<name>.tmp`, are fsynced, then renamed
//!   over the target, so a reader never sees a half-written file
//! - **Exclusive locks**: concurrent runs writing the same export fail fast
//!   with [`CalcError::FileLocked`] instead of interleaving
//!
//! Loading a project also checks its schema version.
//!
//! Lock files sit next to the target (`results.csv` → `results.csv.lock`)
//! and carry JSON metadata naming the holder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::file_io::{save_project, load_project, FileLock};
//! use section_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::with_documented_sections("Engineer", "25-001", "Client");
//! let path = Path::new("sections.json");
//!
//! let lock = FileLock::acquire(path, "engineer@company.com").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock);
//!
//! let reloaded = load_project(path).unwrap();
//! assert_eq!(reloaded.items.len(), 3);
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Age after which a leftover lock file is ignored
const STALE_LOCK_AGE_MINUTES: i64 = 60;

/// Metadata written into a `.lock` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// Who holds the lock (login name or email)
    pub user_id: String,
    /// Host the lock was taken on
    pub machine: String,
    /// Holder's process id
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Lock metadata for the running process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname(),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// A lock is stale once it is older than an hour, or when its holder
    /// was on this machine and that process has exited.
    fn is_stale(&self) -> bool {
        if Utc::now() - self.locked_at >= Duration::minutes(STALE_LOCK_AGE_MINUTES) {
            return true;
        }
        self.machine == hostname() && !process_alive(self.pid)
    }

    fn holder(&self) -> String {
        format!("{} ({})", self.user_id, self.machine)
    }
}

fn hostname() -> String {
    ["HOSTNAME", "COMPUTERNAME", "HOST"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists() || !Path::new("/proc").exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Login name of the current user, for lock metadata
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Build a `FileError` for an I/O failure on `path`
fn io_error(operation: &str, path: &Path) -> impl FnOnce(std::io::Error) -> CalcError {
    let operation = operation.to_string();
    let path = path.display().to_string();
    move |e| CalcError::file_error(operation, path, e.to_string())
}

/// Exclusive lock on a target file, released on drop.
///
/// Holds an OS advisory lock (fs2) on the `.lock` file for process safety,
/// and writes [`LockInfo`] into it so other users can see who holds it.
pub struct FileLock {
    target_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS lock alive
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on `path`.
    ///
    /// Fails with [`CalcError::FileLocked`] when a live lock exists or the
    /// OS lock is held by another process. Stale lock files are taken over.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);

        if let Some(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    existing.holder(),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            log::info!("taking over stale lock on {} held by {}", path.display(), existing.holder());
        }

        let mut lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(io_error("create lock", &lock_path))?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        let info = LockInfo::new(user_id);
        let json = serde_json::to_vec_pretty(&info).map_err(|e| CalcError::serialization(e.to_string()))?;
        lock_file.write_all(&json).map_err(io_error("write lock", &lock_path))?;
        lock_file.sync_all().map_err(io_error("sync lock", &lock_path))?;

        Ok(FileLock {
            target_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Current live lock on `path`, if any, without taking it.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path)).filter(|info| !info.is_stale())
    }

    /// Path of the locked file
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    with_extra_extension(path, "lock")
}

/// `report.csv` + `tmp` → `report.csv.tmp`
fn with_extra_extension(path: &Path, extra: &str) -> PathBuf {
    let mut out = path.to_path_buf();
    let extension = match out.extension() {
        Some(e) => format!("{}.{}", e.to_string_lossy(), extra),
        None => extra.to_string(),
    };
    out.set_extension(extension);
    out
}

/// Lock metadata at `lock_path`; `None` if missing or unreadable.
fn read_lock_info(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contents).ok()
}

fn ensure_parent_dir(path: &Path) -> CalcResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }
    Ok(())
}

/// Write bytes to `path` atomically, creating missing parent folders.
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    ensure_parent_dir(path)?;

    let tmp_path = with_extra_extension(path, "tmp");
    {
        let mut tmp = File::create(&tmp_path).map_err(io_error("create temp file", &tmp_path))?;
        tmp.write_all(contents).map_err(io_error("write temp file", &tmp_path))?;
        tmp.sync_all().map_err(io_error("sync temp file", &tmp_path))?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error("rename to final", path)(e));
    }

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Write bytes atomically while holding an exclusive lock on `path`.
///
/// The parent folder is created first, since the lock file lives in it.
pub fn write_locked(path: &Path, contents: &[u8]) -> CalcResult<()> {
    ensure_parent_dir(path)?;
    let _lock = FileLock::acquire(path, current_user())?;
    write_atomic(path, contents)
}

/// Save a project as pretty JSON.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_vec_pretty(project).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)
}

/// Load a project file.
///
/// # Errors
///
/// * `FileError` - the file cannot be read
/// * `SerializationError` - the file is not a valid project
/// * `VersionMismatch` - the schema version is not readable by this build
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
    let project: Project = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid project file {}: {}", path.display(), e))
    })?;
    validate_version(&project.meta.version)?;
    log::debug!("loaded project {} with {} sections", path.display(), project.items.len());
    Ok(project)
}

/// `major.minor` of a version string
fn major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(str::parse::<u32>);
    let major = parts.next()?.ok()?;
    let minor = parts.next().and_then(Result::ok).unwrap_or(0);
    Some((major, minor))
}

/// Majors must match; while on 0.x a newer minor is also unreadable.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = major_minor(file_version).ok_or_else(mismatch)?;
    let (major, minor) = major_minor(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major || (major == 0 && file_minor > minor) {
        return Err(mismatch());
    }
    Ok(())
}
