//! Scales, geometry, and frame composition for the daily climate scatterplot.
//!
//! This crate is the data-to-visual pipeline: typed records in, one plain
//! [`frame::Frame`] value out. Nothing here touches the DOM, so the whole
//! pipeline is unit tested on the native target. The rendering shell walks
//! the frame and emits SVG elements 1:1.

pub mod axis;
pub mod frame;
pub mod layout;
pub mod legend;
pub mod marks;
pub mod scale;
pub mod state;
