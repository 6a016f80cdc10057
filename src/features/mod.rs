//! Features - Vertical Feature Slices
//!
//! Each feature contains its controllers and configuration.

pub mod crud;
