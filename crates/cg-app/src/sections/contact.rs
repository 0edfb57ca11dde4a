//! Contact section: address, service times, first-time note and the form

use cg_ui::i18n::ContactStrings;
use cg_ui::theme;
use cg_ui::ContactForm;
use egui::{Margin, Rect, RichText, Ui};

pub fn show(ui: &mut Ui, strings: &ContactStrings, form: &mut ContactForm, now: f64) -> Rect {
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

            ui.columns(2, |columns| {
                let info = &mut columns[0];
                info.label(
                    RichText::new(strings.address_title)
                        .heading()
                        .color(theme::TEXT_PRIMARY),
                );
                info.label(RichText::new(strings.address).color(theme::TEXT_PRIMARY));
                info.add_space(12.0);

                info.label(
                    RichText::new(strings.times_title)
                        .heading()
                        .color(theme::TEXT_PRIMARY),
                );
                info.label(RichText::new(strings.sunday).color(theme::TEXT_PRIMARY));
                info.label(RichText::new(strings.wednesday).color(theme::TEXT_PRIMARY));
                info.add_space(12.0);

                info.label(
                    RichText::new(strings.visit_title)
                        .heading()
                        .color(theme::TEXT_PRIMARY),
                );
                info.label(RichText::new(strings.visit_text).color(theme::TEXT_PRIMARY));
                info.add_space(12.0);

                info.label(RichText::new(strings.first_time_title).strong().color(theme::ACCENT));
                info.label(RichText::new(strings.first_time_text).color(theme::TEXT_SECONDARY));

                form.show(&mut columns[1], strings, now);
            });
        });

    response.response.rect
}
