use std::io;
use std::process::Command;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};
use url::Url;

/// Performs "go to this URL" on behalf of the redirect view.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, url: &Url) -> io::Result<()>;
}

/// Prints the destination so it can be piped or clicked in a terminal.
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, url: &Url) -> io::Result<()> {
        println!("{url}");
        Ok(())
    }
}

/// Hands the destination to the platform's URL opener.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &Url) -> io::Result<()> {
        let status = opener_command(url).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("url opener exited with {status}")))
        }
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &Url) -> Command {
    let mut command = Command::new("open");
    command.arg(url.as_str());
    command
}

// rundll32 takes the URL as one argument; `cmd /C start` would split it on `&`.
#[cfg(target_os = "windows")]
fn opener_command(url: &Url) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url.as_str()]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &Url) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url.as_str());
    command
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated,
    Failed(String),
    Cancelled,
}

/// A navigation that fires once after a delay unless cancelled first.
///
/// Dropping the handle cancels the navigation.
pub struct ScheduledNavigation {
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl ScheduledNavigation {
    pub fn schedule(navigator: Arc<dyn Navigator>, url: Url, delay: Duration) -> Self {
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            info!(redirect_url = %url, "navigating to group");
            tokio::task::spawn_blocking(move || navigator.navigate(&url))
                .await
                .map_err(io::Error::other)
                .and_then(|navigated| navigated)
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Waits for the navigation to settle. Safe to drop mid-wait; the timer keeps running.
    pub async fn wait(&mut self) -> NavigationOutcome {
        let Some(handle) = self.handle.as_mut() else {
            return NavigationOutcome::Cancelled;
        };

        let joined = handle.await;
        self.handle = None;

        match joined {
            Ok(Ok(())) => NavigationOutcome::Navigated,
            Ok(Err(error)) => {
                warn!(error = %error, "navigation failed");
                NavigationOutcome::Failed(error.to_string())
            }
            Err(error) if error.is_cancelled() => NavigationOutcome::Cancelled,
            Err(error) => NavigationOutcome::Failed(error.to_string()),
        }
    }
}

impl Drop for ScheduledNavigation {
    fn drop(&mut self) {
        self.cancel();
    }
}
