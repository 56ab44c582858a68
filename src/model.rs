//! # Layout Model
//!
//! The input side of the engine: everything the host must describe before
//! a pass can run. A collection is a flat list of sections; each section
//! declares a layout kind, an item count, and optional header/footer
//! heights. The engine never sees item content, only counts and sizes.
//!
//! Hosts with a live data source implement [`SectionSource`] directly.
//! Hosts that just have data build a `Vec<Section>` and hand the engine a
//! slice; `[Section]` implements the trait.

use crate::geometry::{Edges, Rect};
use serde::{Deserialize, Serialize};

/// Row height for list cells when the provider yields none.
pub const DEFAULT_ROW_HEIGHT: f64 = 44.0;

/// How a section arranges its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Equal-width square cells, filled round-robin across columns.
    #[default]
    Grid,
    /// Rows stacked in index order: full-width on compact viewports,
    /// column-width on regular ones.
    List,
}

/// The visual role of a computed frame. Headers and footers are
/// supplementary; cells are primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementKind {
    Cell,
    Header,
    Footer,
}

impl ElementKind {
    pub fn is_supplementary(&self) -> bool {
        !matches!(self, ElementKind::Cell)
    }
}

/// Which size class the host resolved the viewport to.
///
/// Resolved once by the host and passed in as configuration, never
/// queried from a platform API inside the engine. This keeps the core
/// platform-independent and testable without a UI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Narrow viewports (phones): list sections stack full-width.
    #[default]
    Compact,
    /// Wide viewports (tablets): list sections pack two-up into
    /// alternating columns.
    Regular,
}

/// Engine configuration. Immutable per layout pass; installing a new
/// configuration discards all cached geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Grid column count. Must be at least 1. No effect on list sections.
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Symmetric inset applied to every cell and supplementary frame
    /// after position and size are computed. Shrinks the visual frame
    /// only; packing offsets advance by un-padded extents.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub device_class: DeviceClass,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            padding: default_padding(),
            device_class: DeviceClass::Compact,
        }
    }
}

fn default_columns() -> usize {
    4
}

fn default_padding() -> f64 {
    8.0
}

/// The scrollable viewport the host is laying out into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f64,
    /// Visible extent. Scrolling changes it; geometry never depends on it.
    #[serde(default)]
    pub height: f64,
    /// Content insets. Only the horizontal component affects layout.
    #[serde(default)]
    pub insets: Edges,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            insets: Edges::default(),
        }
    }

    /// Width actually available to content.
    pub fn content_width(&self) -> f64 {
        self.width - self.insets.horizontal()
    }

    /// Whether moving to `new` requires discarding cached geometry.
    ///
    /// Only width-affecting changes qualify. A height-only change (plain
    /// scrolling) never invalidates; that is a performance contract, not
    /// a default.
    pub fn requires_invalidation(&self, new: &Viewport) -> bool {
        self.content_width() != new.content_width()
    }
}

/// The host-side descriptor provider, queried once per section per pass.
///
/// Implementations must behave as synchronous, side-effect-free queries:
/// counts and heights must not change between the first and last call
/// within a single `prepare` pass. If they do, the resulting geometry is
/// unspecified and the host must invalidate and run a fresh pass.
pub trait SectionSource {
    fn section_count(&self) -> usize;

    fn item_count(&self, section: usize) -> usize;

    fn layout_kind(&self, section: usize) -> LayoutKind;

    /// Header height for the section. `None` or a value `<= 0` means the
    /// section has no header.
    fn header_height(&self, section: usize) -> Option<f64>;

    /// Footer height for the section, with the same absence rule as
    /// headers.
    fn footer_height(&self, section: usize) -> Option<f64>;

    /// Row height for one list item. `None` means [`DEFAULT_ROW_HEIGHT`].
    /// Ignored for grid sections; grid cells are square and width-derived.
    fn cell_height(&self, section: usize, item: usize) -> Option<f64>;
}

/// A concrete, serde-friendly section descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub kind: LayoutKind,
    pub item_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_height: Option<f64>,
    /// Uniform row height for list items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    /// Per-item row heights; overrides `row_height` where present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_heights: Vec<f64>,
}

impl Section {
    /// Create a grid section with `item_count` items.
    pub fn grid(item_count: usize) -> Self {
        Self {
            kind: LayoutKind::Grid,
            item_count,
            header_height: None,
            footer_height: None,
            row_height: None,
            row_heights: vec![],
        }
    }

    /// Create a list section with `item_count` rows.
    pub fn list(item_count: usize) -> Self {
        Self {
            kind: LayoutKind::List,
            ..Self::grid(item_count)
        }
    }

    pub fn with_header(mut self, height: f64) -> Self {
        self.header_height = Some(height);
        self
    }

    pub fn with_footer(mut self, height: f64) -> Self {
        self.footer_height = Some(height);
        self
    }

    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = Some(height);
        self
    }

    pub fn with_row_heights(mut self, heights: Vec<f64>) -> Self {
        self.row_heights = heights;
        self
    }
}

impl SectionSource for [Section] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).map_or(0, |s| s.item_count)
    }

    fn layout_kind(&self, section: usize) -> LayoutKind {
        self.get(section).map_or(LayoutKind::Grid, |s| s.kind)
    }

    fn header_height(&self, section: usize) -> Option<f64> {
        self.get(section).and_then(|s| s.header_height)
    }

    fn footer_height(&self, section: usize) -> Option<f64> {
        self.get(section).and_then(|s| s.footer_height)
    }

    fn cell_height(&self, section: usize, item: usize) -> Option<f64> {
        self.get(section)
            .and_then(|s| s.row_heights.get(item).copied().or(s.row_height))
    }
}

/// A computed placement for one element.
///
/// Produced exactly once per `(kind, section, item)` within a pass and
/// immutable until the next invalidation. `item` is 0 for supplementary
/// records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAttributes {
    pub kind: ElementKind,
    pub section: usize,
    pub item: usize,
    pub frame: Rect,
}

/// A complete layout request: everything [`crate::compute`] needs for one
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub viewport: Viewport,
    #[serde(default)]
    pub config: LayoutConfig,
    pub sections: Vec<Section>,
}
