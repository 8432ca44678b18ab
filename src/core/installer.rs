use crate::domain::model::{HookPlan, InstallReport};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FsOperation, HookError, Result};
use std::fs::{self, File, FileTimes, Metadata};
use std::io;
use std::path::{Path, PathBuf};

pub const START_MESSAGE: &str = "Setting up git hooks...";
pub const SUCCESS_MESSAGE: &str = "Git hooks installed successfully!";

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;

pub struct HookInstaller {
    plan: HookPlan,
}

impl HookInstaller {
    pub fn new(plan: HookPlan) -> Self {
        Self { plan }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, project_root: &Path) -> Self {
        Self::new(HookPlan::resolve(config, project_root))
    }

    pub fn plan(&self) -> &HookPlan {
        &self.plan
    }

    /// Copies the staged hook into the hooks directory and makes it executable.
    ///
    /// The source is checked before anything is created, so a missing or
    /// unreadable source leaves the destination tree untouched. Any later
    /// failure aborts the remaining steps; the success line is only printed
    /// once every step has completed.
    pub fn install(&self) -> Result<InstallReport> {
        println!("{}", START_MESSAGE);

        let source_meta = self.preflight()?;

        tracing::debug!("Ensuring hooks directory {}", self.plan.hooks_dir.display());
        ensure_dir(&self.plan.hooks_dir)?;

        tracing::debug!(
            "Copying {} -> {}",
            self.plan.source.display(),
            self.plan.destination.display()
        );
        let (installed, bytes_copied) =
            copy_with_metadata(&self.plan.source, &self.plan.destination, &source_meta)?;

        let mode = make_executable(&installed, &self.plan.destination)?;
        if let Some(mode) = mode {
            tracing::debug!("Hook mode set to {:o}", mode);
        }

        println!("{}", SUCCESS_MESSAGE);

        Ok(InstallReport {
            destination: self.plan.destination.clone(),
            bytes_copied,
            mode,
        })
    }

    /// Checks everything that can be checked without writing.
    pub fn preflight(&self) -> Result<Metadata> {
        let source = &self.plan.source;

        let meta = fs::metadata(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => HookError::SourceNotFound {
                path: source.clone(),
            },
            _ => HookError::io(FsOperation::ReadSource, source, e),
        })?;

        if !meta.is_file() {
            return Err(HookError::SourceNotAFile {
                path: source.clone(),
            });
        }

        File::open(source).map_err(|e| HookError::io(FsOperation::ReadSource, source, e))?;

        if is_same_file(source, &self.plan.destination) {
            return Err(HookError::SameFile {
                path: self.plan.destination.clone(),
            });
        }

        Ok(meta)
    }
}

/// Device and inode comparison, so hard links count as the same file.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| match blocking_file(dir) {
        Some(path) => HookError::NotADirectory { path },
        None => HookError::io(FsOperation::CreateDir, dir, e),
    })
}

/// First ancestor of `dir` (itself included) that exists but is not a directory.
fn blocking_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|p| p.exists() && !p.is_dir())
        .map(Path::to_path_buf)
}

/// Overwrites `dest` with the contents of `source`, then carries over the
/// source's permission bits and modification/access times.
fn copy_with_metadata(source: &Path, dest: &Path, source_meta: &Metadata) -> Result<(File, u64)> {
    let mut reader =
        File::open(source).map_err(|e| HookError::io(FsOperation::ReadSource, source, e))?;
    remove_read_only(dest)?;
    let mut writer = File::create(dest).map_err(|e| HookError::io(FsOperation::Copy, dest, e))?;

    let bytes = io::copy(&mut reader, &mut writer)
        .map_err(|e| HookError::io(FsOperation::Copy, dest, e))?;

    writer
        .set_permissions(source_meta.permissions())
        .map_err(|e| HookError::io(FsOperation::SetPermissions, dest, e))?;

    let modified = source_meta
        .modified()
        .map_err(|e| HookError::io(FsOperation::SetTimes, source, e))?;
    let mut times = FileTimes::new().set_modified(modified);
    if let Ok(accessed) = source_meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer
        .set_times(times)
        .map_err(|e| HookError::io(FsOperation::SetTimes, dest, e))?;

    Ok((writer, bytes))
}

/// A previous install of a read-only hook leaves a destination that cannot be
/// opened for writing; unlink it so the overwrite still succeeds.
fn remove_read_only(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_file() && meta.permissions().readonly() => {
            tracing::debug!("Removing read-only hook {}", dest.display());
            fs::remove_file(dest).map_err(|e| HookError::io(FsOperation::Copy, dest, e))
        }
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn make_executable(file: &File, path: &Path) -> Result<Option<u32>> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = file
        .metadata()
        .map_err(|e| HookError::io(FsOperation::SetPermissions, path, e))?
        .permissions();
    let mode = perms.mode() | EXECUTE_BITS;
    perms.set_mode(mode);
    file.set_permissions(perms)
        .map_err(|e| HookError::io(FsOperation::SetPermissions, path, e))?;

    Ok(Some(mode & 0o7777))
}

#[cfg(not(unix))]
fn make_executable(_file: &File, _path: &Path) -> Result<Option<u32>> {
    Ok(None)
}
