/// Interactive sessions
///
/// Component-local state for the builder and browsing screens. Each session
/// translates user events (typing, focus changes, clicks) into build and
/// filter operations.
mod browse_session;
mod builder_session;
mod selector_session;

pub use browse_session::BrowseSession;
pub use builder_session::BuilderSession;
pub use selector_session::{Dropdown, SelectorSession};
