//! File operations module for steptabs
//!
//! Native dialogs for choosing where the tutorial document is exported.

pub mod dialogs;
