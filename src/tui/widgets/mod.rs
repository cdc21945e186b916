//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Rendering functions for each part of the editor. Each one takes borrowed
//! state and a layout rect and renders into a frame.
//!
//! ## Guarantees
//! - Empty inputs render an empty state instead of panicking
//! - Chart colours and proportions are computed the same way everywhere

pub mod card;
pub mod category;
pub mod panel;
