//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions for the regions of the
//! maintenance page (document shell, banner, main content, sidebars,
//! footer). Each component reads precomputed values from the render
//! context and handles its own presence checks.

pub mod banner;
pub mod document;
pub mod regions;
