use std::io;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::directory::DirectoryClient;
use crate::error::RedirectError;
use crate::models::redirect::parse_redirect_url;
use crate::redirect::navigation::{NavigationOutcome, Navigator, ScheduledNavigation};
use crate::redirect::state::RedirectState;
use crate::utils::constants::REDIRECT_DELAY;

/// Looks up one available group and forwards the visitor to it.
pub struct RedirectView {
    directory: Arc<dyn DirectoryClient>,
    navigator: Arc<dyn Navigator>,
    state: RedirectState,
    requested: bool,
    navigation: Option<ScheduledNavigation>,
}

impl RedirectView {
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            directory,
            navigator,
            state: RedirectState::Loading,
            requested: false,
            navigation: None,
        }
    }

    pub fn state(&self) -> &RedirectState {
        &self.state
    }

    /// Issues the directory request on first call only; later calls return the current state.
    ///
    /// On success, navigation to the group is scheduled after the fixed redirect delay.
    pub async fn mount(&mut self) -> &RedirectState {
        if self.requested {
            debug!("redirect view already mounted");
            return &self.state;
        }
        self.requested = true;

        let outcome = self.directory.find_available_group().await;
        match &outcome {
            Ok(response) => info!(
                group_name = %response.group_name,
                group_id = response.group_id.as_deref().unwrap_or("-"),
                "directory selected a group"
            ),
            Err(RedirectError::Unavailable { status }) => {
                warn!(status, "directory has no available group")
            }
            Err(error) => warn!(error = %error, "directory lookup failed"),
        }

        let previous = std::mem::replace(&mut self.state, RedirectState::Loading);
        self.state = previous.apply(outcome);

        if let Some(raw) = self.state.destination() {
            match parse_redirect_url(raw) {
                Ok(url) => {
                    self.navigation = Some(ScheduledNavigation::schedule(
                        Arc::clone(&self.navigator),
                        url,
                        REDIRECT_DELAY,
                    ));
                }
                Err(error) => warn!(error = %error, "refusing to navigate to redirect_url"),
            }
        }

        &self.state
    }

    /// Resolves once the scheduled navigation settles; `None` when nothing was scheduled.
    pub async fn wait_for_navigation(&mut self) -> Option<NavigationOutcome> {
        match self.navigation.as_mut() {
            Some(navigation) => Some(navigation.wait().await),
            None => None,
        }
    }

    /// Like `wait_for_navigation`, but tears the view down if `interrupt` resolves with `Ok`
    /// first. An interrupt that fails is ignored and the navigation proceeds.
    pub async fn wait_or_interrupt<F>(&mut self, interrupt: F) -> Option<NavigationOutcome>
    where
        F: Future<Output = io::Result<()>>,
    {
        tokio::select! {
            outcome = self.wait_for_navigation() => return outcome,
            Ok(()) = interrupt => {}
        }

        self.unmount();
        Some(NavigationOutcome::Cancelled)
    }

    /// Tears the view down, suppressing a navigation that has not fired yet.
    pub fn unmount(&mut self) {
        if let Some(mut navigation) = self.navigation.take() {
            navigation.cancel();
            info!("pending navigation cancelled");
        }
    }
}
