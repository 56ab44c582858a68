//! # Layout Snapshots
//!
//! A serializable dump of a completed pass: the content size plus every
//! record in cache order. This is what the CLI prints and what debug
//! overlays consume; the engine never reads a snapshot back.

use serde::Serialize;

use crate::geometry::Size;
use crate::layout::LayoutEngine;
use crate::model::LayoutAttributes;

/// Complete geometry of one layout pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub content_size: Size,
    /// Every placed record, in the cache's section-major order.
    pub attributes: Vec<LayoutAttributes>,
}

impl LayoutSnapshot {
    /// Capture the engine's current cache. Call after `prepare`; on an
    /// unprepared engine the snapshot is empty with a zero content size.
    pub fn from_engine(engine: &LayoutEngine) -> Self {
        Self {
            content_size: engine.content_size(),
            attributes: engine.attributes().cloned().collect(),
        }
    }
}
