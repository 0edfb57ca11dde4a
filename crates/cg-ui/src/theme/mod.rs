use egui::{Color32, Context, Rounding, Stroke, Style, Visuals};

/// Blue accent used for the active nav item, underline and buttons
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
/// Darker blue for the hero backdrop
pub const ACCENT_DARK: Color32 = Color32::from_rgb(30, 58, 138);
/// Primary body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(55, 65, 81);
/// Secondary/muted text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
/// Plain page background
pub const PAGE_BG: Color32 = Color32::WHITE;
/// Alternating section background
pub const SECTION_BG: Color32 = Color32::from_rgb(249, 250, 251);
/// Footer background
pub const FOOTER_BG: Color32 = Color32::from_rgb(17, 24, 39);
/// Validation error text
pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
/// Success note text
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "CGI Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the site theme (light, white panels, blue accent)
pub fn apply_theme(ctx: &Context, _theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    let widget_bg = Color32::from_rgb(243, 244, 246);
    let hover_color = Color32::from_rgb(229, 231, 235);
    let border_color = Color32::from_rgb(229, 229, 229);

    visuals.window_fill = PAGE_BG;
    visuals.panel_fill = PAGE_BG;
    visuals.extreme_bg_color = PAGE_BG;
    visuals.faint_bg_color = SECTION_BG;

    visuals.widgets.noninteractive.bg_fill = PAGE_BG;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = hover_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;

    style.visuals = visuals;
    ctx.set_style(style);
}
