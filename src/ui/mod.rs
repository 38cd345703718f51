//! UI layer
//!
//! Contains views, widgets, components, the plot drawing surface, symbols,
//! and theme definitions.

pub mod components;
pub mod surface;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
