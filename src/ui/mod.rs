//! Terminal rendering.
//!
//! Rendering is a pure function of [`AppState`](crate::AppState):
//! `compute_viewmodel` flattens state into a [`UIViewModel`] of display-ready
//! strings and the components print it with ANSI escapes.
//!
//! - [`viewmodel`]: what a frame shows
//! - [`renderer`]: frame entry point
//! - [`components`]: per-region drawing
//! - [`helpers`]: cursor moves, match highlighting, wrapping
//! - [`theme`]: colors and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, ModalView, NoticeLine, SearchBarInfo, UIViewModel,
};
