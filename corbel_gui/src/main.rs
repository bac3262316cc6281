//! # Corbel GUI Application
//!
//! Desktop front end for the corbel check, built with Iced.
//!
//! The window holds the input form on the left and the results with the
//! corbel diagram on the right. Each "Run calculation" evaluates the form
//! once; the export button writes that same result to a date-named file.

mod form;
mod ui;

use std::path::{Path, PathBuf};

use chrono::Local;
use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Size};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corbel_core::calculations::{evaluate, CorbelInput, CorbelResult};
use corbel_core::errors::CalcResult;
use corbel_core::export::{export_file_name, save_export_to, ExportFormat};
use corbel_core::settings::{Settings, SETTINGS_FILE_NAME};

use form::{Field, FormFields};

#[derive(Debug, Clone)]
pub enum Message {
    LabelChanged(String),
    FieldChanged(Field, String),
    Calculate,
    ResetDefaults,
    Export,
}

/// One submitted evaluation: the input and the result computed from it
pub struct Evaluation {
    pub input: CorbelInput,
    pub result: CorbelResult,
}

pub struct App {
    pub fields: FormFields,
    pub evaluation: Option<Evaluation>,
    pub error_message: Option<String>,
    pub status: String,
    pub last_export: Option<PathBuf>,
    settings: Settings,
}

impl App {
    fn new() -> Self {
        let settings = match Settings::load_or_default(Path::new(SETTINGS_FILE_NAME)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "settings unreadable, using defaults");
                Settings::default()
            }
        };

        App {
            fields: FormFields::default(),
            evaluation: None,
            error_message: None,
            status: "Ready".to_string(),
            last_export: None,
            settings,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::LabelChanged(value) => self.fields.label = value,
            Message::FieldChanged(field, value) => self.fields.set(field, value),
            Message::Calculate => self.calculate(),
            Message::ResetDefaults => {
                self.fields = FormFields::default();
                self.evaluation = None;
                self.error_message = None;
                self.status = "Defaults restored".to_string();
            }
            Message::Export => self.export(),
        }
    }

    fn calculate(&mut self) {
        let outcome = self.fields.to_input().and_then(|input| {
            let result = evaluate(&input)?;
            Ok(Evaluation { input, result })
        });

        match outcome {
            Ok(evaluation) => {
                info!(verified = evaluation.result.verified, "calculation complete");
                self.status = "Calculation complete".to_string();
                self.error_message = None;
                self.evaluation = Some(evaluation);
            }
            Err(e) => {
                warn!(code = e.error_code(), "calculation rejected: {}", e);
                self.status = "Calculation failed".to_string();
                self.error_message = Some(e.to_string());
                self.evaluation = None;
            }
        }
    }

    fn export(&mut self) {
        let Some(evaluation) = &self.evaluation else {
            self.status = "Run a calculation before exporting".to_string();
            return;
        };

        let default_format = self.settings.export_format;
        let file_name = export_file_name(Local::now().date_naive(), default_format);

        let dialog = rfd::FileDialog::new()
            .set_title("Export results")
            .set_directory(&self.settings.export_dir)
            .set_file_name(&file_name);
        let dialog = export_filter_order(default_format)
            .into_iter()
            .fold(dialog, |dialog, format| {
                dialog.add_filter(format.description(), &[format.extension()])
            });

        let Some(path) = dialog.save_file() else {
            self.status = "Export cancelled".to_string();
            return;
        };

        match write_export(&path, default_format, evaluation) {
            Ok(()) => {
                self.status = format!("Exported to {}", path.display());
                self.last_export = Some(path);
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header("Short reinforced-concrete corbel");
        let toolbar = ui::toolbar::view_toolbar(self.evaluation.is_some());

        let panels = row![
            ui::input_panel::view_input_panel(self, 0.4),
            ui::results_panel::view_results_panel(self, 0.4),
        ]
        .spacing(10)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(&self.status, self.last_export.as_deref());

        container(
            column![header, toolbar, rule::horizontal(1), panels, rule::horizontal(1), status_bar]
                .spacing(6),
        )
        .padding(10)
        .into()
    }
}

/// Dialog filters with the configured format first
fn export_filter_order(default_format: ExportFormat) -> Vec<ExportFormat> {
    let mut formats = vec![default_format];
    formats.extend(ExportFormat::ALL.into_iter().filter(|f| *f != default_format));
    formats
}

/// The file extension picked in the dialog wins over the configured format
fn write_export(path: &Path, default_format: ExportFormat, evaluation: &Evaluation) -> CalcResult<()> {
    let format = path
        .extension()
        .and_then(|ext| ExportFormat::from_name(&ext.to_string_lossy()))
        .unwrap_or(default_format);
    save_export_to(path, format, &evaluation.input, &evaluation.result)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CORBEL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("corbel_core=info,corbel_gui=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    iced::application(App::new, App::update, App::view)
        .title("Corbel Check")
        .window_size(Size::new(1100.0, 720.0))
        .run()
}
