//! # Module: TUI Dashboard Editor
//!
//! ## Responsibility
//! Terminal front end of the editor built on Ratatui: draws categories of
//! widget cards, the add-widget panel and the help overlay, and turns key
//! presses into state-container intents.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic
//! - Redraw after every handled event
//!
//! ## NOT Responsible For
//! - State transitions (delegates to `crate::state` and `crate::panel`)
//! - Loading catalogs or configuration (see `crate::config`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
