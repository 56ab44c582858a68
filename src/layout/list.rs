//! # List Placement
//!
//! Stacks rows in index order. On compact viewports a list section spans
//! the full content width. On regular viewports the width splits into two
//! equal columns and successive list sections alternate strictly left,
//! right, left, ... each column keeping its own running offset. Grid
//! sections interrupt the flow and re-synchronize both columns.

use crate::geometry::Rect;

/// Which of the two list columns a section lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSide {
    Left,
    Right,
}

impl ColumnSide {
    pub fn other(self) -> ColumnSide {
        match self {
            ColumnSide::Left => ColumnSide::Right,
            ColumnSide::Right => ColumnSide::Left,
        }
    }
}

/// Running state of the two-column list flow, threaded through a layout
/// pass: the two column offsets plus the side the next list section will
/// occupy. No other cross-section state exists, so dropping this value
/// is all an invalidation needs to reset the flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFlow {
    pub left_y: f64,
    pub right_y: f64,
    pub next: ColumnSide,
}

impl ColumnFlow {
    /// A fresh flow with both columns at `y` and the toggle on its
    /// initial (left) side.
    pub fn new(y: f64) -> Self {
        Self {
            left_y: y,
            right_y: y,
            next: ColumnSide::Left,
        }
    }

    /// The taller of the two column offsets.
    pub fn max_y(&self) -> f64 {
        self.left_y.max(self.right_y)
    }

    /// Pull both columns down to the same offset. Full-width sections use
    /// this as a synchronization barrier; the toggle is left untouched.
    pub fn sync(&mut self, y: f64) {
        self.left_y = y;
        self.right_y = y;
    }

    pub fn offset(&self, side: ColumnSide) -> f64 {
        match side {
            ColumnSide::Left => self.left_y,
            ColumnSide::Right => self.right_y,
        }
    }

    pub fn set_offset(&mut self, side: ColumnSide, y: f64) {
        match side {
            ColumnSide::Left => self.left_y = y,
            ColumnSide::Right => self.right_y = y,
        }
    }
}

/// Un-padded frames for one stacked section.
#[derive(Debug, Clone)]
pub struct SectionPlan {
    pub header: Option<Rect>,
    /// One frame per row, in item order.
    pub rows: Vec<Rect>,
    pub footer: Option<Rect>,
    /// Offset just below the section's last element.
    pub end_y: f64,
}

/// Stack a section's header, rows, and footer at `x` within `width`,
/// starting from `start_y`.
///
/// Used both for full-width compact sections and for one column of the
/// regular two-column flow; the caller decides `x` and `width`. Header
/// and footer heights must already be filtered for absence (`> 0`).
pub fn stack_section(
    x: f64,
    width: f64,
    start_y: f64,
    header_height: Option<f64>,
    footer_height: Option<f64>,
    row_heights: &[f64],
) -> SectionPlan {
    let mut y = start_y;

    let header = header_height.map(|h| {
        let frame = Rect::new(x, y, width, h);
        y += h;
        frame
    });

    let rows = row_heights
        .iter()
        .map(|&h| {
            let frame = Rect::new(x, y, width, h);
            y += h;
            frame
        })
        .collect();

    let footer = footer_height.map(|h| {
        let frame = Rect::new(x, y, width, h);
        y += h;
        frame
    });

    SectionPlan {
        header,
        rows,
        footer,
        end_y: y,
    }
}
