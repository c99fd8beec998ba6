//! Terminal event loop and start-up hydration.

mod event_loop;
mod hydration;
