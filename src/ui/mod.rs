//! GUI module for Titan Crash
//!
//! This module provides a native Rust GUI using egui/eframe. It only
//! reads [`GameSnapshot`](crate::GameSnapshot)s and forwards input to the
//! [`GameController`](crate::GameController).

mod app;
mod board_view;
mod theme;

pub use app::TitanCrashApp;
