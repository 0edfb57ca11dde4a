//! Church-life section: services, prayer hour and what to expect

use cg_ui::i18n::ChurchLifeStrings;
use cg_ui::theme;
use egui::{Margin, Rect, RichText, Ui};

pub fn show(ui: &mut Ui, strings: &ChurchLifeStrings) -> Rect {
    let response = egui::Frame::none()
        .fill(theme::PAGE_BG)
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
                event_card(
                    &mut columns[0],
                    strings.sunday_service_title,
                    strings.sunday_service_desc,
                    strings.sunday_service_time,
                    strings.sunday_service_details,
                    None,
                );
                event_card(
                    &mut columns[1],
                    strings.prayer_hour_title,
                    strings.prayer_hour_desc,
                    strings.prayer_hour_time,
                    strings.prayer_hour_details,
                    Some((strings.prayer_link_label, strings.prayer_link_url)),
                );
            });
            ui.add_space(24.0);

            ui.label(
                RichText::new(strings.what_to_expect)
                    .heading()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            ui.columns(4, |columns| {
                for (i, (title, text)) in strings.expect_items.iter().enumerate() {
                    columns[i].label(RichText::new(*title).strong().color(theme::TEXT_PRIMARY));
                    columns[i].label(RichText::new(*text).small().color(theme::TEXT_SECONDARY));
                }
            });
        });

    response.response.rect
}

fn event_card(
    ui: &mut Ui,
    title: &str,
    desc: &str,
    time: &str,
    details: &str,
    link: Option<(&str, &str)>,
) {
    egui::Frame::none()
        .fill(theme::SECTION_BG)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.label(RichText::new(title).heading().color(theme::TEXT_PRIMARY));
            ui.label(RichText::new(desc).color(theme::TEXT_SECONDARY));
            ui.label(RichText::new(time).strong().color(theme::ACCENT));
            ui.add_space(6.0);
            ui.label(RichText::new(details).color(theme::TEXT_PRIMARY));
            if let Some((label, url)) = link {
                ui.add_space(6.0);
                ui.hyperlink_to(label, url);
            }
        });
}
