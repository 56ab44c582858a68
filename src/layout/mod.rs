//! # Collection Layout Engine
//!
//! One deterministic pass over all sections turns counts and size hints
//! into a frame for every cell, header, and footer. The engine owns an
//! attribute cache keyed by `(kind, section, item)`; queries answer from
//! the cache, and the cache only ever changes wholesale: `prepare`
//! populates it, `invalidate` empties it, nothing patches it in place.
//!
//! ## Lifecycle
//!
//! ```text
//!   Empty ────prepare()────▶ Populated
//!     ▲                         │
//!     └──────invalidate()───────┘
//! ```
//!
//! `prepare` on a populated cache is a no-op: recomputation is triggered
//! only by explicit invalidation (or reconfiguration), never by repeated
//! calls. The host invalidates when the viewport width changes;
//! height-only changes from scrolling must not invalidate.

pub mod grid;
pub mod list;

use indexmap::IndexMap;

use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use crate::model::{
    DeviceClass, ElementKind, LayoutAttributes, LayoutConfig, LayoutKind, SectionSource, Viewport,
    DEFAULT_ROW_HEIGHT,
};
use list::{ColumnFlow, ColumnSide, SectionPlan};

/// Cache key: one record per element kind / section / item. Item is 0
/// for supplementary records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AttributeKey {
    kind: ElementKind,
    section: usize,
    item: usize,
}

/// The layout engine.
///
/// Owns the attribute cache and the content-size counters; everything
/// else is read from the host's [`SectionSource`] during a pass. The
/// engine is single-threaded and non-reentrant: the host serializes all
/// calls from one execution context, and no query is answered mid-pass.
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    cache: IndexMap<AttributeKey, LayoutAttributes>,
    content_width: f64,
    content_height: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            cache: IndexMap::new(),
            content_width: 0.0,
            content_height: 0.0,
        }
    }

    /// Install a new configuration.
    ///
    /// Rejects a zero column count before any pass can run. On success
    /// all cached geometry is discarded; the next `prepare` recomputes
    /// under the new configuration.
    pub fn configure(&mut self, config: LayoutConfig) -> Result<(), LayoutError> {
        if config.columns < 1 {
            return Err(LayoutError::InvalidColumnCount {
                columns: config.columns,
            });
        }
        self.config = config;
        self.invalidate();
        Ok(())
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Discard all cached geometry and reset the content size to zero.
    ///
    /// The column offsets and the left/right toggle live on the stack of
    /// `prepare`, so clearing the cache is all an invalidation needs;
    /// the next pass starts from a fresh [`ColumnFlow`] on the initial
    /// (left) side. There is no partial invalidation: any geometry
    /// change discards the whole pass.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.content_width = 0.0;
        self.content_height = 0.0;
    }

    /// Whether a pass has populated the cache.
    pub fn is_prepared(&self) -> bool {
        !self.cache.is_empty()
    }

    /// Run one layout pass: iterate sections in index order, dispatch on
    /// each section's layout kind, and fill the cache.
    ///
    /// A no-op if the cache is already populated. The source must answer
    /// consistently for the duration of the call; see [`SectionSource`].
    pub fn prepare<S: SectionSource + ?Sized>(&mut self, viewport: &Viewport, source: &S) {
        if self.is_prepared() {
            return;
        }
        self.content_width = viewport.content_width();

        let mut flow = ColumnFlow::new(0.0);
        for section in 0..source.section_count() {
            match source.layout_kind(section) {
                LayoutKind::Grid => self.place_grid_section(section, source, &mut flow),
                LayoutKind::List => match self.config.device_class {
                    DeviceClass::Compact => self.place_full_width_list(section, source, &mut flow),
                    DeviceClass::Regular => self.place_column_list(section, source, &mut flow),
                },
            }
        }
    }

    /// Content size of the last pass; `(0, 0)` before any pass. The
    /// width is fixed per pass; the height is the maximum padded bottom
    /// edge observed across all placed records.
    pub fn content_size(&self) -> Size {
        Size {
            width: self.content_width,
            height: self.content_height,
        }
    }

    /// All cached records (cells, headers, footers) whose frame
    /// intersects `rect`; touching edges count.
    ///
    /// The sequence follows the cache's insertion order, section-major,
    /// so identical cache state always yields an identical ordering.
    pub fn attributes_intersecting(&self, rect: &Rect) -> Vec<&LayoutAttributes> {
        self.cache
            .values()
            .filter(|a| a.frame.intersects(rect))
            .collect()
    }

    /// The cached cell record, or `None` when out of range or not yet
    /// computed. Absence is an ordinary answer, never a fault; hosts use
    /// it to detect stale queries.
    pub fn attributes_for_cell(&self, section: usize, item: usize) -> Option<&LayoutAttributes> {
        self.cache.get(&AttributeKey {
            kind: ElementKind::Cell,
            section,
            item,
        })
    }

    /// The cached header/footer record for a section. `None` when the
    /// section declared no such element, or when `kind` is
    /// [`ElementKind::Cell`], which is never supplementary.
    pub fn attributes_for_supplementary(
        &self,
        kind: ElementKind,
        section: usize,
    ) -> Option<&LayoutAttributes> {
        if !kind.is_supplementary() {
            return None;
        }
        self.cache.get(&AttributeKey {
            kind,
            section,
            item: 0,
        })
    }

    /// All cached records in insertion (section-major) order.
    pub fn attributes(&self) -> impl Iterator<Item = &LayoutAttributes> + '_ {
        self.cache.values()
    }

    // ── One section at a time ──────────────────────────────────────

    /// Grid sections span the full content width and act as a barrier:
    /// both list columns restart below them.
    fn place_grid_section<S: SectionSource + ?Sized>(
        &mut self,
        section: usize,
        source: &S,
        flow: &mut ColumnFlow,
    ) {
        let width = self.content_width;
        let mut y = flow.max_y();

        if let Some(h) = effective_height(source.header_height(section)) {
            self.insert(ElementKind::Header, section, 0, Rect::new(0.0, y, width, h));
            y += h;
        }

        let cell_width = width / self.config.columns as f64;
        let plan = grid::place_cells(source.item_count(section), self.config.columns, cell_width, y);
        for (item, frame) in plan.frames.iter().enumerate() {
            self.insert(ElementKind::Cell, section, item, *frame);
        }
        y = plan.end_y;

        if let Some(h) = effective_height(source.footer_height(section)) {
            self.insert(ElementKind::Footer, section, 0, Rect::new(0.0, y, width, h));
            y += h;
        }

        flow.sync(y);
    }

    /// Compact list sections stack sequentially at full width, keeping
    /// both columns in lockstep.
    fn place_full_width_list<S: SectionSource + ?Sized>(
        &mut self,
        section: usize,
        source: &S,
        flow: &mut ColumnFlow,
    ) {
        let plan = list::stack_section(
            0.0,
            self.content_width,
            flow.max_y(),
            effective_height(source.header_height(section)),
            effective_height(source.footer_height(section)),
            &self.row_heights(section, source),
        );
        self.insert_plan(section, &plan);
        flow.sync(plan.end_y);
    }

    /// Regular list sections occupy one of two half-width columns,
    /// alternating strictly left, right, left, ... regardless of how
    /// unbalanced the columns become.
    fn place_column_list<S: SectionSource + ?Sized>(
        &mut self,
        section: usize,
        source: &S,
        flow: &mut ColumnFlow,
    ) {
        let side = flow.next;
        let column_width = self.content_width / 2.0;
        let x = match side {
            ColumnSide::Left => 0.0,
            ColumnSide::Right => column_width,
        };

        let plan = list::stack_section(
            x,
            column_width,
            flow.offset(side),
            effective_height(source.header_height(section)),
            effective_height(source.footer_height(section)),
            &self.row_heights(section, source),
        );
        self.insert_plan(section, &plan);

        flow.set_offset(side, plan.end_y);
        flow.next = side.other();
    }

    fn row_heights<S: SectionSource + ?Sized>(&self, section: usize, source: &S) -> Vec<f64> {
        (0..source.item_count(section))
            .map(|item| source.cell_height(section, item).unwrap_or(DEFAULT_ROW_HEIGHT))
            .collect()
    }

    fn insert_plan(&mut self, section: usize, plan: &SectionPlan) {
        if let Some(frame) = plan.header {
            self.insert(ElementKind::Header, section, 0, frame);
        }
        for (item, frame) in plan.rows.iter().enumerate() {
            self.insert(ElementKind::Cell, section, item, *frame);
        }
        if let Some(frame) = plan.footer {
            self.insert(ElementKind::Footer, section, 0, frame);
        }
    }

    /// Pad the frame, record it, and fold its bottom edge into the
    /// running content height (monotonically non-decreasing per pass).
    fn insert(&mut self, kind: ElementKind, section: usize, item: usize, frame: Rect) {
        let frame = frame.inset(self.config.padding);
        self.content_height = self.content_height.max(frame.max_y());
        self.cache.insert(
            AttributeKey {
                kind,
                section,
                item,
            },
            LayoutAttributes {
                kind,
                section,
                item,
                frame,
            },
        );
    }
}

/// A declared height of zero or less means "no such element"; absence of
/// supplementary geometry is a valid state, not a fault.
fn effective_height(height: Option<f64>) -> Option<f64> {
    height.filter(|&h| h > 0.0)
}
