//! Layout helpers: panel frame, position readout, value fields.

use egui::{Color32, CornerRadius, Frame, Key, Margin, RichText, Stroke, TextEdit, Ui};
use kurbo::Point;

use crate::{sizing, theme};

/// Create a standard panel frame with shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}

/// Format a position the way the readout shows it.
pub fn format_position(position: Point) -> String {
    format!("X = {:.2}, Y = {:.2}", position.x, position.y)
}

/// Draw the position readout.
pub fn position_readout(ui: &mut Ui, position: Point) {
    ui.label(
        RichText::new(format_position(position))
            .monospace()
            .color(theme::TEXT),
    );
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_MUTED));
}

/// Parse a committed field value. Unparseable text reads as zero.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// A single-line numeric field. Returns the value when Enter commits it.
pub fn value_field(ui: &mut Ui, hint: &str, text: &mut String) -> Option<f64> {
    let response = ui.add(
        TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(sizing::FIELD_WIDTH),
    );
    let committed = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    committed.then(|| parse_field(text))
}
