use crate::core::render::{ColorPair, render};
use crate::core::state::Tree;

use ratatui::Frame;
use ratatui::style::{Color, Style};

/// Draw one frame: run the pure renderer over the current frame area and
/// replay the cell sequence into the buffer. Sequence order matters — the
/// trunk overwrites the canopy's center column — so cells are applied in
/// the order the renderer emits them.
pub fn draw(frame: &mut Frame, tree: &Tree) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for cell in render(area.width, area.height, tree.size) {
        // cell_mut drops out-of-bounds positions, matching the terminal
        // surface contract of clipping stray writes.
        if let Some(buf_cell) = buf.cell_mut((cell.col, cell.row)) {
            buf_cell.set_char(cell.glyph).set_style(style_for(cell.color));
        }
    }
}

fn style_for(pair: ColorPair) -> Style {
    match pair {
        ColorPair::YellowOnGreen => Style::default().fg(Color::Yellow).bg(Color::Green),
        ColorPair::RedOnBlue => Style::default().fg(Color::Red).bg(Color::Blue),
        ColorPair::BlueOnYellow => Style::default().fg(Color::Blue).bg(Color::Yellow),
        ColorPair::WhiteOnRed => Style::default().fg(Color::White).bg(Color::Red),
        ColorPair::CyanOnWhite => Style::default().fg(Color::Cyan).bg(Color::White),
        ColorPair::RedOnRed => Style::default().fg(Color::Red).bg(Color::Red),
        ColorPair::WhiteOnYellow => Style::default().fg(Color::White).bg(Color::Yellow),
    }
}
