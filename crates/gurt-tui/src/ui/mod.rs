//! UI module for the gurt terminal menu

pub mod app;
