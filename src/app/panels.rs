//! Sidebar form and central results panel

use eframe::egui;

use super::App;
use crate::constants::{APP_VERSION, GENERIC_SCRAPE_ERROR};
use crate::theme;
use crate::types::ScrapePhase;
use crate::ui::components;
use crate::utils;

impl App {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("form_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin {
                        left: 16,
                        right: 16,
                        top: 0,
                        bottom: 12,
                    }),
            )
            .show(ctx, |ui| {
                let mut submit_requested = false;
                let scraping = self.phase == ScrapePhase::Loading;

                // Header with logo, centered
                ui.add_space(21.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(96);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(48.0, 48.0),
                    ));
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("MAPS BUSINESS SCRAPER")
                                .size(11.0)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(11.0);

                // SEARCH TERM section
                theme::section_frame().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("SEARCH TERM")
                                .color(theme::TEXT_DIM)
                                .size(11.0),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    theme::input_frame().show(ui, |ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                                        .size(14.0)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut self.search_term)
                                    .hint_text("e.g. coffee shops in Jakarta")
                                    .frame(false)
                                    .desired_width(ui.available_width()),
                            );
                            if self.focus_search {
                                self.focus_search = false;
                                response.request_focus();
                            }
                            if response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                submit_requested = true;
                            }
                        });
                    });
                });
                ui.add_space(theme::SPACING_SM);

                // RESULT LIMIT section
                theme::section_frame().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("RESULT LIMIT")
                                .color(theme::TEXT_DIM)
                                .size(11.0),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    theme::input_frame().show(ui, |ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(egui_phosphor::regular::HASH)
                                        .size(14.0)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut self.total_results)
                                    .hint_text("1000")
                                    .frame(false)
                                    .desired_width(ui.available_width()),
                            );
                            if response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                submit_requested = true;
                            }
                        });
                    });
                });

                ui.add_space(theme::SPACING_LG);

                let full_width = ui.available_width();

                // Scrape button - disabled while a request is pending
                let scrape_btn = ui.add_enabled(
                    !scraping,
                    theme::button_accent(format!(
                        "{}  Scrape",
                        egui_phosphor::regular::MAGNIFYING_GLASS
                    ))
                    .min_size(egui::vec2(full_width, theme::BUTTON_HEIGHT_LARGE)),
                );
                if scrape_btn.clicked() || (submit_requested && !scraping) {
                    self.submit(ctx);
                }

                // Clear button - wipes the inputs without touching results
                let has_input =
                    !self.search_term.is_empty() || !self.total_results.is_empty();
                if has_input && !scraping {
                    ui.add_space(theme::SPACING_SM);
                    if ui
                        .add(
                            theme::button(format!("{}  Clear", egui_phosphor::regular::X))
                                .min_size(egui::vec2(full_width, 28.0)),
                        )
                        .clicked()
                    {
                        self.search_term.clear();
                        self.total_results.clear();
                        self.focus_search = true;
                    }
                }

                // Download / Reset, shown on the success path (incl. empty results)
                if self.phase.shows_result_controls() {
                    ui.add_space(theme::SPACING_LG);
                    if ui
                        .add(
                            theme::button_accent(format!(
                                "{}  Download {}",
                                egui_phosphor::regular::DOWNLOAD_SIMPLE,
                                self.export_format.ext().to_uppercase()
                            ))
                            .min_size(egui::vec2(full_width, theme::BUTTON_HEIGHT_LARGE)),
                        )
                        .clicked()
                    {
                        self.export_results();
                    }
                }
                if self.phase.shows_result_controls() || self.phase == ScrapePhase::Error {
                    ui.add_space(theme::SPACING_SM);
                    if ui
                        .add(
                            theme::button(format!(
                                "{}  Reset",
                                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                            ))
                            .min_size(egui::vec2(full_width, 28.0)),
                        )
                        .clicked()
                    {
                        self.reset();
                    }
                }

                // Version at the very bottom
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("v{APP_VERSION}"))
                                .size(10.0)
                                .color(egui::Color32::from_rgb(0x45, 0x45, 0x4c)),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                // Header bar with status text and icons
                ui.horizontal(|ui| {
                    let status_text = match self.phase {
                        ScrapePhase::Idle => "Ready".to_owned(),
                        ScrapePhase::Loading => {
                            format!("Scraping \"{}\"...", self.active_term)
                        }
                        ScrapePhase::Results => format!(
                            "Showing {} businesses for \"{}\"",
                            self.businesses.len(),
                            self.active_term
                        ),
                        ScrapePhase::Empty => {
                            format!("No results for \"{}\"", self.active_term)
                        }
                        ScrapePhase::Error => "Scrape failed".to_owned(),
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(status_text).color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new(egui_phosphor::regular::GEAR).frame(false))
                            .on_hover_text("Settings")
                            .clicked()
                        {
                            self.show_settings = !self.show_settings;
                        }
                        if ui
                            .add(
                                egui::Button::new(egui_phosphor::regular::FOLDER_OPEN)
                                    .frame(false),
                            )
                            .on_hover_text("Open export folder")
                            .clicked()
                        {
                            std::fs::create_dir_all(&self.export_dir).ok();
                            let _ = open::that(&self.export_dir);
                        }
                        if let Some(path) = self.last_export.clone() {
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui_phosphor::regular::ARROW_SQUARE_OUT,
                                    )
                                    .frame(false),
                                )
                                .on_hover_text("Open last export")
                                .clicked()
                            {
                                let _ = open::that(&path);
                            }
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);

                match self.phase {
                    ScrapePhase::Idle => {
                        components::centered_notice(
                            ui,
                            egui_phosphor::regular::MAP_PIN,
                            "Enter a search term to get started",
                            theme::TEXT_MUTED,
                        );
                    }
                    ScrapePhase::Loading => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(ui.available_height() / 3.0);
                            ui.add(egui::Spinner::new().size(32.0).color(theme::ACCENT));
                            ui.add_space(theme::SPACING_LG);
                            ui.label(
                                egui::RichText::new("Scraping Google Maps...")
                                    .size(16.0)
                                    .color(theme::TEXT_MUTED),
                            );
                            ui.add_space(theme::SPACING_SM);
                            ui.label(
                                egui::RichText::new(
                                    "This can take a while for large result limits.",
                                )
                                .size(12.0)
                                .color(theme::TEXT_DIM),
                            );
                        });
                    }
                    ScrapePhase::Empty => {
                        components::centered_notice(
                            ui,
                            egui_phosphor::regular::MAGNIFYING_GLASS,
                            "No results found.",
                            theme::TEXT_MUTED,
                        );
                    }
                    ScrapePhase::Error => {
                        let message = self
                            .error_message
                            .clone()
                            .unwrap_or_else(|| GENERIC_SCRAPE_ERROR.to_owned());
                        components::centered_notice(
                            ui,
                            egui_phosphor::regular::WARNING,
                            &message,
                            theme::STATUS_ERROR,
                        );
                    }
                    ScrapePhase::Results => {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false; 2])
                            .show(ui, |ui| {
                                for business in &self.businesses {
                                    components::business_card(ui, business);
                                    ui.add_space(theme::SPACING_MD);
                                }
                            });
                    }
                }
            });
    }
}
