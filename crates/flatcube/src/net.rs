//! 2D unfolded-net rendering.

use flatcube_core::{CubeState, Face, FACE_SIZE};
use strum::IntoEnumIterator;

use crate::preferences::Preferences;

/// Gap between faces of the net, in points.
const FACE_PADDING: f32 = 10.0;

/// Position of each face in the net, in face-sized units: the classic cross
/// with Back unfolded past Right.
fn net_pos(face: Face) -> (usize, usize) {
    match face {
        Face::Up => (0, 1),
        Face::Left => (1, 0),
        Face::Front => (1, 1),
        Face::Right => (1, 2),
        Face::Back => (1, 3),
        Face::Down => (2, 1),
    }
}

fn net_size(cell: f32) -> egui::Vec2 {
    let face_span = cell * FACE_SIZE as f32 + FACE_PADDING;
    egui::vec2(4.0 * face_span, 3.0 * face_span)
}

/// Paints the cube as an unfolded net at the current layout position.
pub fn draw_cube_net(ui: &mut egui::Ui, cube: &CubeState, prefs: &Preferences) {
    let cell = prefs.cell_size;
    let face_span = cell * FACE_SIZE as f32 + FACE_PADDING;
    let (response, painter) = ui.allocate_painter(net_size(cell), egui::Sense::hover());
    let top_left = response.rect.min;

    for face in Face::iter() {
        let (net_row, net_col) = net_pos(face);
        let face_origin =
            top_left + egui::vec2(net_col as f32 * face_span, net_row as f32 * face_span);

        for row in 0..FACE_SIZE {
            for col in 0..FACE_SIZE {
                let color = match cube.sticker(face, row, col) {
                    Ok(sticker) => prefs.colors.sticker(sticker),
                    Err(_) => prefs.colors.fallback,
                };
                let min = face_origin + egui::vec2(col as f32 * cell, row as f32 * cell);
                let rect = egui::Rect::from_min_size(min, egui::vec2(cell - 1.0, cell - 1.0));
                painter.rect_filled(rect, 0.0, color);
            }
        }

        let border = egui::Rect::from_min_size(
            face_origin,
            egui::Vec2::splat(cell * FACE_SIZE as f32 - 1.0),
        );
        painter.rect_stroke(border, 0.0, egui::Stroke::new(2.0, prefs.colors.border));
    }
}
