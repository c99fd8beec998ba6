//! Core crate exports for searching mind maps and browsing them in a
//! terminal interface.
//!
//! [`api`] talks to the backend, [`view`] holds the search state machine and
//! [`ui`] drives it from the keyboard. The root re-exports the types needed
//! to embed the screen without digging through the module hierarchy.

pub mod api;
pub mod app_dirs;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod view;

pub use api::{HttpBackend, Routes, SearchBackend, SearchRequest, SearchResult};
pub use theme::{Theme, default_theme};
pub use ui::{App, SearchUi, SessionOutcome, UiConfig};
pub use view::{SearchState, SearchView, Status, StatusKind};
