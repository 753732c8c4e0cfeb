//! Modal dialogs (alert, settings) and toast notification

use std::path::PathBuf;

use eframe::egui;
use tracing::info;

use super::App;
use crate::client::ScrapeClient;
use crate::constants::DEFAULT_ENDPOINT;
use crate::export::ExportFormat;
use crate::theme;

impl App {
    /// Blocking alert dialog, used for validation failures and request errors.
    pub(crate) fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        let modal_response = egui::Modal::new(egui::Id::new("alert_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::WARNING)
                            .size(36.0)
                            .color(theme::STATUS_ERROR),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&message).color(theme::TEXT_SECONDARY),
                        )
                        .wrap(),
                    );
                    ui.add_space(theme::SPACING_XL);
                    if ui
                        .add(theme::button_accent(format!(
                            "{}  OK",
                            egui_phosphor::regular::CHECK
                        )))
                        .clicked()
                    {
                        dismissed = true;
                    }
                });
            });

        if dismissed || modal_response.should_close() {
            self.alert = None;
        }
    }

    /// Settings modal (endpoint override, export directory and format).
    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut close_requested = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Settings").size(16.0).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
                            .clicked()
                        {
                            close_requested = true;
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Scraping Service —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Scraping Service")
                            .size(13.0)
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                theme::input_frame().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.endpoint_str)
                            .frame(false)
                            .desired_width(ui.available_width())
                            .font(egui::FontId::proportional(13.0)),
                    );
                });
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Base URL of the scrape service")
                            .size(10.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Export —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Export").size(13.0).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Format").size(13.0).color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut xlsx_active = self.export_format == ExportFormat::Xlsx;
                        if theme::segmented_toggle(ui, "XLSX", "CSV", &mut xlsx_active) {
                            self.export_format = if xlsx_active {
                                ExportFormat::Xlsx
                            } else {
                                ExportFormat::Csv
                            };
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    let browse_width = 28.0 + 4.0;
                    let frame_padding = 16.0 + 2.0;
                    let text_width =
                        (ui.available_width() - browse_width - frame_padding).max(40.0);
                    theme::input_frame().show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.export_dir_str)
                                .frame(false)
                                .desired_width(text_width)
                                .font(egui::FontId::proportional(13.0)),
                        );
                    });
                    if ui
                        .add(egui::Button::new(egui_phosphor::regular::FOLDER_OPEN).frame(false))
                        .on_hover_text("Browse")
                        .clicked()
                    {
                        std::fs::create_dir_all(&self.export_dir).ok();
                        if let Some(path) = rfd::FileDialog::new()
                            .set_directory(&self.export_dir)
                            .pick_folder()
                        {
                            self.export_dir_str = path.to_string_lossy().to_string();
                        }
                    }
                });
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Where exported spreadsheets are written")
                            .size(10.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });

        if close_requested || modal_response.should_close() {
            self.show_settings = false;
            self.apply_settings();
        }
    }

    /// Applies edited settings when the modal closes: rebuilds the client on
    /// endpoint changes and persists everything.
    fn apply_settings(&mut self) {
        if self.endpoint_str.trim().is_empty() {
            self.endpoint_str = DEFAULT_ENDPOINT.to_owned();
        }
        match ScrapeClient::new(self.endpoint_str.trim()) {
            Ok(client) => {
                if client.endpoint() != self.client.endpoint() {
                    info!(endpoint = %client.endpoint(), "Endpoint updated");
                    self.client = client;
                }
            }
            Err(e) => {
                self.alert = Some(e.to_string());
            }
        }

        if self.export_dir_str.trim().is_empty() {
            self.export_dir_str = self.export_dir.to_string_lossy().to_string();
        } else {
            self.export_dir = PathBuf::from(self.export_dir_str.trim());
        }

        self.save_settings();
    }

    /// Toast notification (bottom-right of central panel, 3s visible then
    /// fade, pause on hover).
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("export_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x1a,
                        0x1a,
                        0x1e,
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&msg).color(
                            egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
