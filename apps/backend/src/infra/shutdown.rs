//! Bounded graceful-shutdown window.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// The drain finished inside the window.
    Completed,
    /// The window elapsed first; the caller must force-exit.
    TimedOut,
}

/// Race a shutdown future against a deadline.
pub async fn run_with_deadline<F>(stop: F, window: Duration) -> Shutdown
where
    F: Future<Output = ()>,
{
    tokio::select! {
        _ = stop => Shutdown::Completed,
        _ = tokio::time::sleep(window) => Shutdown::TimedOut,
    }
}
