use egui::{Color32, Visuals, style::Widgets};

pub(crate) mod config;
pub(crate) mod dashboard;

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_BROWN: Color32 = Color32::from_rgb(72, 30, 20);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);
pub(crate) const PALETTE_ORANGE: Color32 = Color32::from_rgb(242, 97, 63);
pub(crate) const PALETTE_SKY: Color32 = Color32::from_rgb(86, 180, 233);

pub(crate) fn dashboard_visuals() -> Visuals {
    Visuals {
        dark_mode: true,
        hyperlink_color: PALETTE_MAROON,
        faint_bg_color: PALETTE_BLACK,
        extreme_bg_color: PALETTE_BROWN,
        panel_fill: PALETTE_BLACK,
        button_frame: true,
        window_fill: PALETTE_BLACK,
        widgets: Widgets::dark(),
        striped: true,
        ..Default::default()
    }
}

/// Linear blend between two colors, `y` in `[0, 1]`.
pub(crate) fn stroke_shade(start: Color32, end: Color32, y: f32) -> Color32 {
    let channel = |s: u8, e: u8| -> u8 {
        (s as f32 + y * (e as f32 - s as f32)).clamp(0., 255.) as u8
    };
    Color32::from_rgb(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
    )
}

/// Color for the `index`-th of `count` chart categories, spread from orange to sky blue.
pub(crate) fn category_color(index: usize, count: usize) -> Color32 {
    if count <= 1 {
        return PALETTE_ORANGE;
    }
    stroke_shade(
        PALETTE_ORANGE,
        PALETTE_SKY,
        index as f32 / (count - 1) as f32,
    )
}
