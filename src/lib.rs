//! # Mosaic
//!
//! A layout engine for scrollable, sectioned collections.
//!
//! Hosts hand the engine a viewport width, a configuration, and a
//! per-section descriptor provider; the engine runs one deterministic
//! pass and answers geometry queries from an attribute cache. It never
//! renders anything and never owns item content: counts and sizes in,
//! frames and a content size out.
//!
//! ## Architecture
//!
//! ```text
//! Input (host provider / JSON request)
//!       ↓
//!   [model]    — sections, configuration, viewport
//!       ↓
//!   [layout]   — one pass: grid + list strategies fill the cache
//!       ↓
//!   [snapshot] — content size + every frame, serializable
//! ```
//!
//! Two section kinds exist. Grid sections place equal-width square cells
//! round-robin across a configured number of columns. List sections stack
//! rows in index order: full-width on compact viewports, packed two-up
//! into strictly alternating half-width columns on regular viewports,
//! with grid sections acting as synchronization barriers between the two
//! list columns.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod snapshot;

pub use error::LayoutError;
pub use geometry::{Edges, Rect, Size};
pub use layout::LayoutEngine;
pub use model::{
    DeviceClass, ElementKind, LayoutAttributes, LayoutConfig, LayoutKind, LayoutRequest, Section,
    SectionSource, Viewport, DEFAULT_ROW_HEIGHT,
};
pub use snapshot::LayoutSnapshot;

/// Run one full layout pass for a request.
///
/// This is the primary entry point for hosts that do not keep a live
/// engine around: build a request, get back every frame plus the content
/// size. Hosts that re-query between invalidations should hold a
/// [`LayoutEngine`] instead.
pub fn compute(request: &LayoutRequest) -> Result<LayoutSnapshot, LayoutError> {
    let mut engine = LayoutEngine::new();
    engine.configure(request.config)?;
    engine.prepare(&request.viewport, &request.sections[..]);
    Ok(LayoutSnapshot::from_engine(&engine))
}

/// Run a layout pass for a request described as JSON, returning the
/// snapshot as JSON.
pub fn compute_json(json: &str) -> Result<String, LayoutError> {
    let request: LayoutRequest = serde_json::from_str(json)?;
    let snapshot = compute(&request)?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
