//! About section: description, mission and the four community values

use cg_ui::i18n::AboutStrings;
use cg_ui::theme;
use egui::{Margin, Rect, RichText, Ui};

pub fn show(ui: &mut Ui, strings: &AboutStrings) -> Rect {
    let response = egui::Frame::none()
        .fill(theme::SECTION_BG)
        .inner_margin(Margin::symmetric(48.0, 56.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(strings.title)
                        .heading()
                        .size(28.0)
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(RichText::new(strings.subtitle).size(18.0).color(theme::TEXT_SECONDARY));
            });
            ui.add_space(24.0);

            ui.label(RichText::new(strings.description).color(theme::TEXT_PRIMARY));
            ui.add_space(16.0);

            ui.label(
                RichText::new(strings.mission)
                    .heading()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(RichText::new(strings.mission_text).color(theme::TEXT_PRIMARY));
            ui.add_space(24.0);

            ui.label(
                RichText::new(strings.values)
                    .heading()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            ui.columns(2, |columns| {
                for (i, (title, text)) in strings.value_items.iter().enumerate() {
                    let column = &mut columns[i % 2];
                    column.label(RichText::new(*title).strong().color(theme::ACCENT));
                    column.label(RichText::new(*text).color(theme::TEXT_SECONDARY));
                    column.add_space(10.0);
                }
            });
        });

    response.response.rect
}
