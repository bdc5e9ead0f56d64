//! Plot Viewer Widget
//! Central area showing the most recently rendered stress-strain plot.

use anyhow::Context;
use egui::{RichText, TextureHandle, TextureOptions};
use std::path::Path;

/// Largest size the plot is drawn at; the aspect ratio is kept.
const DISPLAY_SIZE: [f32; 2] = [600.0, 400.0];

#[derive(Default)]
pub struct PlotViewer {
    texture: Option<TextureHandle>,
}

impl PlotViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the PNG at `path` and replace the displayed plot.
    pub fn set_plot(&mut self, ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
        let img = image::open(path)
            .with_context(|| format!("reading plot image {}", path.display()))?
            .to_rgba8();
        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());

        self.texture = Some(ctx.load_texture("stress_strain_plot", color_image, TextureOptions::LINEAR));
        Ok(())
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(texture) = &self.texture else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No plot loaded").size(16.0));
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .max_size(egui::vec2(DISPLAY_SIZE[0], DISPLAY_SIZE[1]))
                    .maintain_aspect_ratio(true),
            );
        });
    }
}
