//! Page footer: brand, quick links and service times on a dark band

use egui::{Color32, Margin, RichText, Ui};

use crate::i18n::{FooterStrings, HeaderStrings};
use crate::theme;

/// Actions emitted by footer quick links
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterAction {
    Navigate(String),
}

const QUICK_LINK_IDS: [&str; 4] = ["home", "about", "church-life", "contact"];

pub fn footer(ui: &mut Ui, strings: &FooterStrings, header: &HeaderStrings) -> Vec<FooterAction> {
    let mut actions = Vec::new();
    let muted = Color32::from_rgb(156, 163, 175);

    egui::Frame::none()
        .fill(theme::FOOTER_BG)
        .inner_margin(Margin::symmetric(32.0, 28.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(3, |columns| {
                columns[0].label(
                    RichText::new(header.brand_line1).strong().color(Color32::WHITE),
                );
                columns[0].label(RichText::new(header.brand_line2).color(Color32::WHITE));
                columns[0].add_space(6.0);
                columns[0].label(RichText::new(strings.tagline).color(muted));

                columns[1].label(RichText::new(strings.quick_links).strong().color(Color32::WHITE));
                columns[1].add_space(4.0);
                for id in QUICK_LINK_IDS {
                    let Some(label) = header.label_for(id) else {
                        continue;
                    };
                    if columns[1].link(RichText::new(label).color(muted)).clicked() {
                        actions.push(FooterAction::Navigate(id.to_string()));
                    }
                }

                columns[2].label(
                    RichText::new(strings.service_times).strong().color(Color32::WHITE),
                );
                columns[2].add_space(4.0);
                columns[2].label(RichText::new(strings.sunday).color(muted));
                columns[2].label(RichText::new(strings.wednesday).color(muted));
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);
            ui.label(RichText::new(strings.copyright).small().color(muted));
        });

    actions
}
