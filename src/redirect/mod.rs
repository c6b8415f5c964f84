//! Redirect view: one directory lookup, three states, one deferred navigation.

pub mod navigation;
pub mod state;
pub mod view;

pub use navigation::{BrowserNavigator, NavigationOutcome, Navigator, StdoutNavigator};
pub use state::RedirectState;
pub use view::RedirectView;
