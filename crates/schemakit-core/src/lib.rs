//! # SchemaKit Core
//!
//! Core types, constants, and utilities for SchemaKit.
//! Provides the geometric primitives shared by the editor and settings
//! crates, plus the workspace error type.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Point, Rect};
