//! StateRepository port - persistence of setup completion records

use crate::domain::entities::SetupState;
use crate::error::LauncherResult;

pub trait StateRepository {
    /// Load the state, or an empty one when nothing was saved yet
    fn load(&self) -> LauncherResult<SetupState>;

    fn save(&self, state: &SetupState) -> LauncherResult<()>;
}

impl<T: StateRepository + ?Sized> StateRepository for &T {
    fn load(&self) -> LauncherResult<SetupState> {
        (**self).load()
    }

    fn save(&self, state: &SetupState) -> LauncherResult<()> {
        (**self).save(state)
    }
}
