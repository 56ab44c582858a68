//! # Grid Placement
//!
//! Places equal-width square cells round-robin across a fixed number of
//! columns. Each column keeps its own running y offset so the next cell
//! in a column starts exactly below the previous one; the section's
//! extent is the tallest column once every item has been placed.

use crate::geometry::Rect;

/// Un-padded cell frames for one grid section.
#[derive(Debug, Clone)]
pub struct GridPlan {
    /// One frame per item, in item order.
    pub frames: Vec<Rect>,
    /// Maximum column offset after placement: the y where content below
    /// this section's cells starts.
    pub end_y: f64,
}

/// Place `item_count` square cells into `columns` columns of
/// `cell_width`, starting at `start_y`.
///
/// Item `i` lands in column `i % columns`; a column's offset advances by
/// the un-padded cell height after each placement. `columns` must be at
/// least 1, which the engine enforces at configuration time.
pub fn place_cells(item_count: usize, columns: usize, cell_width: f64, start_y: f64) -> GridPlan {
    let x_offsets: Vec<f64> = (0..columns).map(|c| c as f64 * cell_width).collect();
    let mut y_offsets = vec![start_y; columns];
    let mut frames = Vec::with_capacity(item_count);

    let mut column = 0;
    for _ in 0..item_count {
        frames.push(Rect::new(
            x_offsets[column],
            y_offsets[column],
            cell_width,
            cell_width,
        ));
        y_offsets[column] += cell_width;
        column = (column + 1) % columns;
    }

    let end_y = y_offsets.into_iter().fold(start_y, f64::max);
    GridPlan { frames, end_y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_columns() {
        let plan = place_cells(6, 4, 100.0, 0.0);
        assert_eq!(plan.frames.len(), 6);
        for (i, frame) in plan.frames.iter().enumerate() {
            let column = i % 4;
            let row = i / 4;
            assert!((frame.x - column as f64 * 100.0).abs() < 0.001);
            assert!((frame.y - row as f64 * 100.0).abs() < 0.001);
            assert!((frame.width - 100.0).abs() < 0.001);
            assert!((frame.height - 100.0).abs() < 0.001);
        }
        // Two columns hold two cells, so the section ends one full row
        // below the second row's start.
        assert!((plan.end_y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_start_offset_carried_into_frames() {
        let plan = place_cells(2, 2, 50.0, 300.0);
        assert!((plan.frames[0].y - 300.0).abs() < 0.001);
        assert!((plan.frames[1].y - 300.0).abs() < 0.001);
        assert!((plan.end_y - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_single_column_stacks_vertically() {
        let plan = place_cells(3, 1, 80.0, 0.0);
        assert!((plan.frames[1].y - 80.0).abs() < 0.001);
        assert!((plan.frames[2].y - 160.0).abs() < 0.001);
        assert!((plan.end_y - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_section_leaves_offset_unchanged() {
        let plan = place_cells(0, 4, 100.0, 120.0);
        assert!(plan.frames.is_empty());
        assert!((plan.end_y - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_same_column_cells_do_not_overlap() {
        let plan = place_cells(9, 3, 60.0, 0.0);
        for i in 0..plan.frames.len() {
            for j in (i + 1)..plan.frames.len() {
                if i % 3 == j % 3 {
                    let (a, b) = (&plan.frames[i], &plan.frames[j]);
                    assert!(a.max_y() <= b.y + 0.001, "cells {i} and {j} overlap");
                }
            }
        }
    }
}
