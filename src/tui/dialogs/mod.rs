pub mod delete_confirmation;
pub mod event_form;
pub mod help;

use ratatui::layout::Rect;

/// Centers a `width` x `height` box in `area`, shrinking it to fit when the
/// terminal is smaller than the dialog.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}
