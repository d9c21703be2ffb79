//! InterruptSource port - Ctrl+C handling around the foreground UI process

/// Keeps the launcher alive across an interrupt aimed at its foreground child
///
/// Once armed, an interrupt no longer terminates the launcher; the terminal still
/// delivers it to the child, and `interrupted()` reports that it happened.
pub trait InterruptSource {
    /// Install the handler; `false` when it could not be installed
    fn arm(&self) -> bool;

    fn interrupted(&self) -> bool;
}

impl<T: InterruptSource + ?Sized> InterruptSource for &T {
    fn arm(&self) -> bool {
        (**self).arm()
    }

    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}
