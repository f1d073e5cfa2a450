//! UI module - views, widgets, and shared rendering helpers

pub mod components;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
