use egui::{Button, Ui, Vec2};

/// Botón de ancho fijo que puede aparecer deshabilitado.
pub fn action_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Reparte `total_width` entre `count` botones con un hueco fijo entre ellos.
pub fn button_width(total_width: f32, count: usize) -> f32 {
    let gap = 8.0;
    let count = count.max(1) as f32;
    ((total_width - gap * (count - 1.0)) / count).max(60.0)
}
