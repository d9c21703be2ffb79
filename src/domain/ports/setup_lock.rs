//! SetupLock port - serializes setup between concurrent launcher invocations

use crate::error::LauncherResult;

pub trait SetupLock {
    /// Take the lock without waiting; `Ok(false)` when another holder has it
    fn try_acquire(&self) -> LauncherResult<bool>;

    /// Block until the lock is ours
    fn acquire(&self) -> LauncherResult<()>;

    fn release(&self);
}

impl<T: SetupLock + ?Sized> SetupLock for &T {
    fn try_acquire(&self) -> LauncherResult<bool> {
        (**self).try_acquire()
    }

    fn acquire(&self) -> LauncherResult<()> {
        (**self).acquire()
    }

    fn release(&self) {
        (**self).release()
    }
}
