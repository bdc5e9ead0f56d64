//! Nitinol Extractor Main Application
//! Single window: a "Load File" button, the rendered plot, and result dialogs.

use crate::gui::PlotViewer;
use nitinol_extractor::{run_pipeline, AnalysisResult};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

const PROMPT: &str = "Load your CSV or Excel file";

/// Pipeline result from background thread
enum PipelineResult {
    Complete(AnalysisResult),
    Error(String),
}

/// Main application window.
pub struct ExtractorApp {
    plot_viewer: PlotViewer,
    status: String,

    // Async pipeline run
    run_rx: Option<Receiver<PipelineResult>>,
    is_processing: bool,
}

impl ExtractorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            plot_viewer: PlotViewer::new(),
            status: String::new(),
            run_rx: None,
            is_processing: false,
        }
    }

    /// Fixed prompt, the "Load File" button and the current run status. Returns true on click.
    fn controls(&self, ui: &mut egui::Ui) -> bool {
        ui.add_space(6.0);
        ui.label(PROMPT);
        ui.add_space(4.0);

        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!self.is_processing, |ui| {
                clicked = ui.button("Load File").clicked();
            });
            if !self.status.is_empty() {
                ui.label(&self.status);
            }
        });
        ui.add_space(6.0);
        clicked
    }

    /// Ask for an input file and run the pipeline on it in the background.
    fn handle_load_file(&mut self) {
        if self.is_processing {
            return; // One run at a time
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Open File")
            .add_filter("CSV Files", &["csv"])
            .add_filter("Excel Files", &["xlsx"])
            .pick_file()
        else {
            return;
        };

        self.start_pipeline(path);
    }

    fn start_pipeline(&mut self, path: PathBuf) {
        let (tx, rx) = channel();
        self.run_rx = Some(rx);
        self.is_processing = true;
        self.status = format!("Processing {}...", path.display());

        thread::spawn(move || {
            let result = match run_pipeline(&path) {
                Ok(outputs) => PipelineResult::Complete(outputs),
                Err(e) => PipelineResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for a finished pipeline run
    fn check_pipeline_results(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.run_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(PipelineResult::Complete(outputs)) => {
                self.is_processing = false;
                self.finish_success(ctx, &outputs);
            }
            Ok(PipelineResult::Error(message)) => {
                self.is_processing = false;
                self.finish_error(&message);
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                // Put receiver back, still running
                self.run_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.is_processing = false;
                self.finish_error("Processing stopped unexpectedly");
            }
        }
    }

    fn finish_success(&mut self, ctx: &egui::Context, outputs: &AnalysisResult) {
        if let Err(e) = self.plot_viewer.set_plot(ctx, &outputs.plot_path) {
            self.finish_error(&format!("{e:#}"));
            return;
        }

        self.status = "Analysis complete".to_string();
        show_message(
            "Success",
            &format!(
                "Plot saved to {}\nResults saved to {}",
                outputs.plot_path.display(),
                outputs.stats_path.display()
            ),
        );
    }

    fn finish_error(&mut self, message: &str) {
        log::error!("Analysis failed: {message}");
        self.status = format!("Error: {message}");
        show_error(message);
    }
}

/// Display an informational message box.
fn show_message(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Display an error message box with the failure text verbatim.
fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(format!("An error occurred\n\n{message}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_pipeline_results(ctx);

        // Request repaint while processing
        if self.is_processing {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if self.controls(ui) {
                self.handle_load_file();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_viewer.show(ui);
        });
    }
}
