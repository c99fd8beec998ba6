//! Interactive terminal UI for browsing mind maps.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, key
//! handling, the background request runtime and the reusable widgets.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
pub mod render;
mod runtime;
mod search;
mod state;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use outcome::SessionOutcome;
pub use state::App;

#[cfg(test)]
mod tests;
