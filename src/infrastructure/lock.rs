//! File Setup Lock
//!
//! Advisory exclusive lock (`fs2`) so two launchers started at once do not
//! clone or create the environment into the same directory concurrently.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::SetupLock;
use crate::error::{LauncherError, LauncherResult};
use crate::infrastructure::repositories::STATE_DIR;

pub const LOCK_FILE: &str = "setup.lock";

pub struct FileSetupLock {
    path: PathBuf,
    held: RefCell<Option<fs::File>>,
}

impl FileSetupLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            held: RefCell::new(None),
        }
    }

    /// Lock for the standard location under `base_dir`
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self::new(base_dir.join(STATE_DIR).join(LOCK_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> LauncherResult<fs::File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LauncherError::io(parent, e))?;
        }
        fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.path)
            .map_err(|e| LauncherError::io(&self.path, e))
    }
}

impl SetupLock for FileSetupLock {
    fn try_acquire(&self) -> LauncherResult<bool> {
        if self.held.borrow().is_some() {
            return Ok(true);
        }

        let file = self.open()?;
        match file.try_lock_exclusive() {
            Ok(()) => {
                *self.held.borrow_mut() = Some(file);
                Ok(true)
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => Ok(false),
            Err(e) => Err(LauncherError::io(&self.path, e)),
        }
    }

    fn acquire(&self) -> LauncherResult<()> {
        if self.held.borrow().is_some() {
            return Ok(());
        }

        let file = self.open()?;
        file.lock_exclusive()
            .map_err(|e| LauncherError::io(&self.path, e))?;
        *self.held.borrow_mut() = Some(file);
        Ok(())
    }

    fn release(&self) {
        if let Some(file) = self.held.borrow_mut().take() {
            // Closing the file drops the lock even if unlock fails
            if let Err(e) = file.unlock() {
                tracing::debug!(path = %self.path.display(), error = %e, "setup lock unlock failed");
            }
        }
    }
}

impl Drop for FileSetupLock {
    fn drop(&mut self) {
        self.release();
    }
}
