//! App module - contains the main application state and logic

mod export;
mod modals;
mod panels;
mod scrape;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use eframe::egui;
use tracing::{info, warn};

use crate::client::{ScrapeClient, ScrapeOutcome};
use crate::constants::DEFAULT_ENDPOINT;
use crate::export::ExportFormat;
use crate::settings::Settings;
use crate::theme;
use crate::types::{Business, ScrapePhase};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form inputs (raw text; validated on submit)
    pub(crate) search_term: String,
    pub(crate) total_results: String,
    pub(crate) focus_search: bool,

    // Request lifecycle
    pub(crate) phase: ScrapePhase,
    pub(crate) businesses: Vec<Business>,
    pub(crate) error_message: Option<String>,
    // Term captured at submit time; drives the results header and export name
    pub(crate) active_term: String,
    pub(crate) scrape_slot: Arc<Mutex<Option<ScrapeOutcome>>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: ScrapeClient,

    // Alert dialog & toast
    pub(crate) alert: Option<String>,
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<Instant>,

    // Settings
    pub(crate) show_settings: bool,
    pub(crate) endpoint_str: String,
    pub(crate) export_dir: PathBuf,
    pub(crate) export_dir_str: String,
    pub(crate) export_format: ExportFormat,
    pub(crate) last_export: Option<PathBuf>,

    // Window chrome
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        needs_center: bool,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let endpoint = settings.endpoint_or_default();
        let client = match ScrapeClient::new(&endpoint) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, endpoint = %endpoint, "Invalid endpoint in settings, falling back");
                ScrapeClient::new(DEFAULT_ENDPOINT).expect("default endpoint is valid")
            }
        };
        info!(endpoint = %client.endpoint(), "Scrape client ready");

        let export_dir = settings.export_dir_or_default();

        Self {
            search_term: String::new(),
            total_results: String::new(),
            focus_search: true,
            phase: ScrapePhase::Idle,
            businesses: Vec::new(),
            error_message: None,
            active_term: String::new(),
            scrape_slot: Arc::new(Mutex::new(None)),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            client,
            alert: None,
            toast_message: None,
            toast_start: None,
            show_settings: false,
            endpoint_str: endpoint,
            export_dir: export_dir.clone(),
            export_dir_str: export_dir.to_string_lossy().to_string(),
            export_format: settings.export_format,
            last_export: None,
            logo_texture: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            endpoint: Some(self.endpoint_str.clone()),
            export_dir: Some(self.export_dir_str.clone()),
            export_format: self.export_format,
        };
        settings.save(&self.data_dir);
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(Instant::now());
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Apply a finished request, if any
        self.poll_scrape_result();

        self.render_alert_modal(ctx);
        self.render_settings_modal(ctx);
        self.render_sidebar(ctx);
        self.render_central_panel(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
