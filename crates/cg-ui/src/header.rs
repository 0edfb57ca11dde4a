//! Sticky site header with section navigation and animated underline

use ahash::AHashMap;
use cg_core::{HighlightTracker, SectionEngine};
use egui::{
    Align, Color32, Context, Id, Layout, Margin, Rect, RichText, Stroke, TopBottomPanel,
};
use std::sync::Arc;

use crate::i18n::Language;
use crate::theme;

const HEADER_HEIGHT: f32 = 56.0;
const UNDERLINE_ANIM_SECS: f32 = 0.2;

/// Actions the header asks the page shell to perform. The header itself
/// never mutates app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Navigate(String),
    SetLanguage(Language),
}

/// The sticky top bar: brand, one nav button per registered section, a
/// moving underline below the active one, and the DE/EN language pill.
pub struct HeaderBar {
    engine: Arc<SectionEngine>,
    highlight: HighlightTracker,
    nav_rects: AHashMap<String, Rect>,
}

impl HeaderBar {
    pub fn new(engine: Arc<SectionEngine>) -> Self {
        Self {
            engine,
            highlight: HighlightTracker::default(),
            nav_rects: AHashMap::new(),
        }
    }

    /// Render the header and return the actions to apply this frame
    pub fn show(&mut self, ctx: &Context, language: Language) -> Vec<HeaderAction> {
        let strings = language.strings();
        let active = self.engine.active_section();
        let mut actions = Vec::new();

        TopBottomPanel::top("site_header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(theme::PAGE_BG)
                    .inner_margin(Margin::symmetric(16.0, 8.0))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(229, 229, 229))),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // Brand, scrolls back home
                    let brand = ui.add(
                        egui::Button::new(
                            RichText::new("CGI").strong().color(Color32::WHITE),
                        )
                        .fill(theme::ACCENT)
                        .rounding(egui::Rounding::same(14.0)),
                    );
                    if brand.clicked() {
                        actions.push(HeaderAction::Navigate("home".to_string()));
                    }
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        ui.label(RichText::new(strings.header.brand_line1).color(theme::TEXT_PRIMARY));
                        ui.label(
                            RichText::new(strings.header.brand_line2)
                                .small()
                                .color(theme::TEXT_SECONDARY),
                        );
                    });
                    ui.add_space(24.0);

                    // Nav buttons in page order; the container rect anchors
                    // the underline geometry
                    let nav_start = ui.cursor().min;
                    self.nav_rects.clear();
                    let mut container =
                        Rect::from_min_size(nav_start, egui::vec2(0.0, ui.available_height()));

                    for id in self.engine.registry().iter() {
                        let Some(label) = strings.header.label_for(id) else {
                            continue;
                        };
                        let color = if active == id {
                            theme::ACCENT
                        } else {
                            theme::TEXT_PRIMARY
                        };
                        let response = ui.add(
                            egui::Button::new(RichText::new(label).color(color)).frame(false),
                        );
                        container = container.union(response.rect);
                        self.nav_rects.insert(id.to_string(), response.rect);
                        if response.clicked() {
                            actions.push(HeaderAction::Navigate(id.to_string()));
                        }
                    }

                    // Moving underline below the active button. Geometry is
                    // recomputed every frame, so resizes are picked up
                    // without extra plumbing; a missing button keeps the
                    // last rectangle instead of flashing to zero width.
                    let geometry = self
                        .highlight
                        .update(self.nav_rects.get(active.as_str()).copied(), container);
                    let left = ctx.animate_value_with_time(
                        Id::new("nav_underline_left"),
                        geometry.offset_left,
                        UNDERLINE_ANIM_SECS,
                    );
                    let width = ctx.animate_value_with_time(
                        Id::new("nav_underline_width"),
                        geometry.width,
                        UNDERLINE_ANIM_SECS,
                    );
                    let underline = Rect::from_min_size(
                        egui::pos2(container.left() + left, ui.max_rect().bottom() - 2.0),
                        egui::vec2(width, 2.0),
                    );
                    ui.painter().rect_filled(underline, 0.0, theme::ACCENT);

                    // Language pill, right aligned
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for (lang, label) in [(Language::En, "EN"), (Language::De, "DE")] {
                            let selected = language == lang;
                            if ui.selectable_label(selected, label).clicked() && !selected {
                                actions.push(HeaderAction::SetLanguage(lang));
                            }
                        }
                    });
                });
            });

        actions
    }
}
