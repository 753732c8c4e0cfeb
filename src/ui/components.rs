//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use eframe::egui;

use crate::constants::placeholders;
use crate::theme;
use crate::types::Business;

/// Render one business record as a card. Every field is always present in the
/// block; fields the scraper could not fill show their placeholder, dimmed.
pub fn business_card(ui: &mut egui::Ui, business: &Business) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        let name = business.display_name();
        let name_color = if name == placeholders::NO_NAME {
            theme::TEXT_DIM
        } else {
            theme::TEXT_PRIMARY
        };
        ui.add(
            egui::Label::new(
                egui::RichText::new(name).size(15.0).strong().color(name_color),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        let address = business.display_address();
        let website = business.display_website();
        let phone = business.display_phone();
        let reviews = business.display_reviews_count();
        let rating = business.display_rating();
        let coordinates = business.display_coordinates();

        field_row(ui, egui_phosphor::regular::BUILDINGS, "Address", address,
            address == placeholders::NO_ADDRESS);
        field_row(ui, egui_phosphor::regular::GLOBE, "Website", website,
            website == placeholders::NO_WEBSITE);
        field_row(ui, egui_phosphor::regular::PHONE, "Phone", phone,
            phone == placeholders::NO_PHONE);
        field_row(ui, egui_phosphor::regular::CHAT_CIRCLE, "Reviews Count", &reviews,
            reviews == placeholders::NO_REVIEWS_COUNT);
        field_row(ui, egui_phosphor::regular::STAR, "Average Rating", &rating,
            rating == placeholders::NO_RATING);
        field_row(ui, egui_phosphor::regular::MAP_PIN, "Coordinates", &coordinates, false);
    });
}

/// One labeled field line inside a card. `muted` dims placeholder values.
fn field_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, muted: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.add(
            egui::Label::new(
                egui::RichText::new(icon).size(13.0).color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{label}:"))
                    .size(13.0)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        let value_color = if muted {
            theme::TEXT_DIM
        } else {
            theme::TEXT_SECONDARY
        };
        ui.add(egui::Label::new(
            egui::RichText::new(value).size(13.0).color(value_color),
        ));
    });
}

/// Centered icon + message block for the Idle/Empty/Error panel states.
pub fn centered_notice(ui: &mut egui::Ui, icon: &str, message: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            egui::RichText::new(icon)
                .size(48.0)
                .color(theme::TEXT_DIM),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(egui::RichText::new(message).size(16.0).color(color));
    });
}
