//! Hero section: welcome banner with the service-times card

use cg_ui::i18n::HeroStrings;
use cg_ui::theme;
use egui::{Color32, Margin, Rect, RichText, Ui};

/// Render the hero. Returns the section rect and, if a CTA was clicked,
/// the section to navigate to.
pub fn show(ui: &mut Ui, strings: &HeroStrings) -> (Rect, Option<&'static str>) {
    let mut nav_target = None;

    let response = egui::Frame::none()
        .fill(theme::ACCENT_DARK)
        .inner_margin(Margin::symmetric(48.0, 64.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                RichText::new(strings.welcome)
                    .color(Color32::WHITE)
                    .italics(),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(strings.title)
                    .heading()
                    .size(32.0)
                    .color(Color32::WHITE),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(strings.subtitle).size(18.0).color(Color32::from_white_alpha(230)));
            ui.add_space(24.0);

            // Service times card
            egui::Frame::none()
                .fill(theme::PAGE_BG)
                .rounding(egui::Rounding::same(12.0))
                .inner_margin(Margin::same(24.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(strings.service_times)
                            .heading()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    ui.label(RichText::new(strings.sunday_service).color(theme::TEXT_PRIMARY));
                    ui.label(
                        RichText::new(strings.sunday_time)
                            .size(22.0)
                            .color(theme::ACCENT),
                    );
                    ui.add_space(8.0);

                    ui.label(RichText::new(strings.prayer_meeting).color(theme::TEXT_PRIMARY));
                    ui.label(
                        RichText::new(strings.prayer_time)
                            .size(22.0)
                            .color(theme::ACCENT),
                    );
                    ui.add_space(8.0);

                    ui.label(RichText::new(strings.location).color(theme::TEXT_SECONDARY));
                });

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                let join = ui.add(
                    egui::Button::new(RichText::new(strings.join_us).color(Color32::WHITE))
                        .fill(theme::ACCENT),
                );
                if join.clicked() {
                    nav_target = Some("contact");
                }
                if ui.button(strings.learn_more).clicked() {
                    nav_target = Some("about");
                }
            });
        });

    (response.response.rect, nav_target)
}
