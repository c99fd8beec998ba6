//! UI building blocks shared across rendering and state modules.

/// Result details for the highlighted row.
pub mod detail;
/// Title bar.
pub mod header;
/// Runtime log viewer.
pub mod logs;
/// Paging controls and key hints.
pub mod pager;
/// Query field with page counters and the busy indicator.
pub mod prompt;
pub mod results;
pub mod status;

pub use detail::render_detail;
pub use header::render_header;
pub use logs::{LogPane, render_logs};
pub use pager::{PagerState, render_pager};
pub use prompt::{InputContext, ProgressState, render_input};
pub use results::render_results;
pub use status::render_status;
