//! Integration tests for the terminal editor.
//!
//! These tests drive the app through `apply_event` the way the event loop
//! does, and render into a `TestBackend` to check what ends up on screen.

mod app_state;
mod panel_flow;
mod widget_tests;
