//! # Figure Renderer
//!
//! Pure layout: `(width, height, size)` → a sequence of colored cells.
//! Stateless and referentially transparent; the TUI adapter replays the
//! sequence into a ratatui buffer, so later cells overwrite earlier ones
//! at the same position (the trunk overwrites the canopy's center column).
//!
//! The figure is a triangular canopy anchored to the bottom of the grid,
//! a trunk column at horizontal center, and a four-glyph topper above the
//! apex. Canopy height equals `size`; canopy row width is `2*depth + 1`
//! where depth counts down from the apex, so the apex is a single cell.

use crate::core::state::{MAX_SIZE, MIN_SIZE};

/// A concrete foreground/background pairing over the basic 8-color
/// terminal palette. The canopy tier steps with `size`; trunk and topper
/// pairs are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPair {
    YellowOnGreen,
    RedOnBlue,
    BlueOnYellow,
    WhiteOnRed,
    CyanOnWhite,
    RedOnRed,
    WhiteOnYellow,
}

/// One character cell of the rendered figure. Coordinates are already
/// clipped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
    pub glyph: char,
    pub color: ColorPair,
}

/// Canopy color for a given growth level.
///
/// Expressed as sequential threshold overwrites, not an if/else chain:
/// each threshold met replaces the previous choice, so only the highest
/// one wins, and the exact ceiling (50) deliberately resets to the base
/// pair. Step function with breakpoints at 1, 11, 21, 31, 41, 50.
pub fn canopy_color(size: u16) -> ColorPair {
    let mut color = ColorPair::YellowOnGreen;
    if size > 10 {
        color = ColorPair::RedOnBlue;
    }
    if size > 20 {
        color = ColorPair::BlueOnYellow;
    }
    if size > 30 {
        color = ColorPair::WhiteOnRed;
    }
    if size > 40 {
        color = ColorPair::CyanOnWhite;
    }
    if size == MAX_SIZE {
        color = ColorPair::YellowOnGreen;
    }
    color
}

/// Lay out the figure for the given grid. Degenerate grids yield no
/// cells; everything else is clipped to the grid bounds.
pub fn render(width: u16, height: u16, size: u16) -> Vec<Cell> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let w = i32::from(width);
    let h = i32::from(height);
    let size = i32::from(size.clamp(MIN_SIZE, MAX_SIZE));

    let mid = w / 2;
    // Row of the canopy's single-cell tip. Negative when the tree is
    // taller than the grid; those rows are clipped below.
    let apex = h - size;

    let mut cells = Vec::new();

    // Canopy: one tier color for the whole triangle, chosen up front.
    let color = canopy_color(size as u16);
    for row in apex..h {
        let half_width = row - apex;
        for col in (mid - half_width)..=(mid + half_width) {
            push_clipped(&mut cells, w, h, row, col, '*', color);
        }
    }

    // Trunk: center column from the apex to the bottom row. Clipped to
    // the grid; the historical layout ran one row past the bottom.
    for row in apex..h {
        push_clipped(&mut cells, w, h, row, mid, '|', ColorPair::RedOnRed);
    }

    // Topper: a small diamond anchored just above the apex.
    for (row_off, col_off) in [(-1, 0), (-2, -1), (-2, 1), (-3, 0)] {
        push_clipped(
            &mut cells,
            w,
            h,
            apex + row_off,
            mid + col_off,
            '*',
            ColorPair::WhiteOnYellow,
        );
    }

    cells
}

fn push_clipped(
    cells: &mut Vec<Cell>,
    width: i32,
    height: i32,
    row: i32,
    col: i32,
    glyph: char,
    color: ColorPair,
) {
    if row < 0 || row >= height || col < 0 || col >= width {
        return;
    }
    cells.push(Cell {
        row: row as u16,
        col: col as u16,
        glyph,
        color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const W: u16 = 200;
    const H: u16 = 60;

    /// Canopy cells grouped by row: glyph '*' in the current tier color.
    fn canopy_rows(cells: &[Cell], size: u16) -> BTreeMap<u16, Vec<u16>> {
        let tier = canopy_color(size);
        let mut rows: BTreeMap<u16, Vec<u16>> = BTreeMap::new();
        for cell in cells {
            if cell.glyph == '*' && cell.color == tier {
                rows.entry(cell.row).or_default().push(cell.col);
            }
        }
        rows
    }

    #[test]
    fn test_canopy_height_equals_size() {
        for size in MIN_SIZE..=MAX_SIZE {
            let cells = render(W, H, size);
            let rows = canopy_rows(&cells, size);
            assert_eq!(rows.len() as u16, size, "size {size}");
        }
    }

    #[test]
    fn test_canopy_rows_widen_downward() {
        for size in [1, 10, 25, 50] {
            let rows = canopy_rows(&render(W, H, size), size);
            for (depth, (_, cols)) in rows.iter().enumerate() {
                assert_eq!(cols.len(), 2 * depth + 1, "size {size} depth {depth}");
            }
        }
    }

    #[test]
    fn test_apex_is_a_single_centered_cell() {
        let rows = canopy_rows(&render(W, H, 5), 5);
        let (&apex_row, apex_cols) = rows.iter().next().unwrap();
        assert_eq!(apex_row, H - 5);
        assert_eq!(apex_cols, &vec![W / 2]);
    }

    #[test]
    fn test_trunk_spans_apex_to_bottom_within_grid() {
        let cells = render(W, H, 5);
        let trunk: Vec<&Cell> = cells.iter().filter(|c| c.glyph == '|').collect();
        assert_eq!(trunk.len(), 5);
        for cell in &trunk {
            assert_eq!(cell.col, W / 2);
            assert_eq!(cell.color, ColorPair::RedOnRed);
            assert!(cell.row < H);
        }
        assert_eq!(trunk.first().unwrap().row, H - 5);
        assert_eq!(trunk.last().unwrap().row, H - 1);
    }

    #[test]
    fn test_topper_is_anchored_above_the_apex() {
        let cells = render(W, H, 5);
        let mid = W / 2;
        let apex = H - 5;
        let topper: Vec<(u16, u16)> = cells
            .iter()
            .filter(|c| c.color == ColorPair::WhiteOnYellow)
            .map(|c| (c.row, c.col))
            .collect();
        assert_eq!(
            topper,
            vec![
                (apex - 1, mid),
                (apex - 2, mid - 1),
                (apex - 2, mid + 1),
                (apex - 3, mid),
            ]
        );
    }

    #[test]
    fn test_color_tier_breakpoints() {
        for size in 1..=10 {
            assert_eq!(canopy_color(size), ColorPair::YellowOnGreen, "size {size}");
        }
        for size in 11..=20 {
            assert_eq!(canopy_color(size), ColorPair::RedOnBlue, "size {size}");
        }
        for size in 21..=30 {
            assert_eq!(canopy_color(size), ColorPair::BlueOnYellow, "size {size}");
        }
        for size in 31..=40 {
            assert_eq!(canopy_color(size), ColorPair::WhiteOnRed, "size {size}");
        }
        for size in 41..=49 {
            assert_eq!(canopy_color(size), ColorPair::CyanOnWhite, "size {size}");
        }
        // The ceiling resets to the base pair.
        assert_eq!(canopy_color(50), ColorPair::YellowOnGreen);
    }

    #[test]
    fn test_render_is_referentially_transparent() {
        assert_eq!(render(80, 24, 12), render(80, 24, 12));
    }

    #[test]
    fn test_degenerate_grid_renders_nothing() {
        assert!(render(0, 24, 10).is_empty());
        assert!(render(80, 0, 10).is_empty());
    }

    #[test]
    fn test_oversized_tree_is_clipped_not_panicking() {
        // Grid shorter than the tree: apex rows fall off the top.
        let cells = render(20, 10, 50);
        for cell in &cells {
            assert!(cell.row < 10);
            assert!(cell.col < 20);
        }
        assert!(!cells.is_empty());
    }
}
