//! Export action

use tracing::{error, info};

use super::App;
use crate::export;

impl App {
    /// Writes the current result set to the configured export directory.
    /// Only the records captured by the last successful response are written,
    /// so the file always matches the rendered list.
    pub fn export_results(&mut self) {
        let file_name = export::export_file_name(&self.active_term, self.export_format);
        info!(
            file = %file_name,
            rows = self.businesses.len(),
            dir = %self.export_dir.display(),
            "Export: Begin"
        );

        match export::export_businesses(
            &self.export_dir,
            &self.active_term,
            &self.businesses,
            self.export_format,
        ) {
            Ok(path) => {
                info!(path = %path.display(), "Export: OK");
                self.last_export = Some(path);
                self.show_toast(format!("Exported {file_name}"));
            }
            Err(e) => {
                error!(error = %e, "Export: Error");
                self.alert = Some(format!("Export failed: {e}"));
            }
        }
    }
}
