use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use gantt_view::layout::primitives::Role;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_ROW: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 6);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(90, 140, 220);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ON_BAR: Color32 = Color32::from_rgb(255, 255, 255);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const TODAY_FILL: Color32 = Color32::from_rgba_premultiplied(240, 75, 75, 28);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);
pub const ARROW_COLOR: Color32 = Color32::from_rgb(155, 160, 178);

pub const BAR_TASK: Color32 = Color32::from_rgb(66, 133, 244);
pub const BAR_PROJECT: Color32 = Color32::from_rgb(171, 71, 188);
pub const BAR_MILESTONE: Color32 = Color32::from_rgb(251, 140, 0);
pub const BAR_DISABLED: Color32 = Color32::from_rgb(90, 94, 108);
pub const PROGRESS_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 55);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDE_PANEL_WIDTH: f32 = 260.0;
pub const BAR_ROUNDING: f32 = 4.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_bar() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Primitive styling ────────────────────────────────────────────────────────

/// Fill color for rect/polygon primitives by role.
pub fn role_fill(role: Role) -> Color32 {
    match role {
        Role::HeaderBackground => BG_HEADER,
        Role::RowBackground => BG_ROW,
        Role::TodayHighlight => TODAY_FILL,
        Role::ArrowHead => ARROW_COLOR,
        _ => Color32::TRANSPARENT,
    }
}

/// Stroke for line/path primitives by role.
pub fn role_stroke(role: Role) -> Stroke {
    match role {
        Role::RowLine => Stroke::new(0.5, BORDER_SUBTLE),
        Role::TickLine => Stroke::new(0.5, GRID_LINE),
        Role::HeaderDivider => Stroke::new(1.0, BORDER_SUBTLE),
        Role::ArrowLine => Stroke::new(1.5, ARROW_COLOR),
        _ => Stroke::NONE,
    }
}

/// Font and color for text primitives by role.
pub fn role_text(role: Role) -> (FontId, Color32) {
    match role {
        Role::HeaderUpperText => (font_header(), TEXT_PRIMARY),
        _ => (font_sub(), TEXT_SECONDARY),
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 28);
    visuals.faint_bg_color = BG_ROW;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
