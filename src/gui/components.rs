use std::path::PathBuf;

use eframe::egui::{
    Align, Color32, ComboBox, DragValue, Frame, Layout, ProgressBar, RichText, Ui,
};

use super::models::SquarepadGui;
use crate::core::selection::base_name;
use crate::types::{BatchOutcome, SquarePolicy};

const COMPONENT_WIDTH: f32 = 160.0;

pub struct SelectionComponent;

impl SelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut SquarepadGui) {
        ui.heading("Select Images");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.add_enabled_ui(!app.is_processing, |ui| {
                if ui.button("Select Individual Image(s)").clicked() {
                    app.select_images();
                }
                if ui.button("Select Folder of Images").clicked() {
                    app.select_folder_images();
                }
                if ui.button("Reset Image Selection").clicked() {
                    app.reset_selection();
                }
            });

            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("Images Selected: {}", app.session.selection().len()))
                    .strong(),
            );
        });
    }
}

pub struct DestinationComponent;

impl DestinationComponent {
    pub fn render(ui: &mut Ui, app: &mut SquarepadGui) {
        ui.heading("Destination Folder");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.add_enabled_ui(!app.is_processing, |ui| {
                if ui.button("Select Folder").clicked() {
                    app.select_destination();
                }
            });

            ui.add_space(5.0);
            if let Some(dir) = app.session.destination() {
                ui.label(
                    RichText::new(format!("Save To: {}", dir.display()))
                        .color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("Save To: Not Selected").color(Color32::from_gray(120)));
            }
        });
    }
}

pub struct OptionsComponent;

impl OptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut SquarepadGui) {
        ui.heading("Normalize Options");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Near-square policy:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ComboBox::from_id_salt("square_policy")
                        .selected_text(app.params.policy.to_string())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut app.params.policy,
                                SquarePolicy::Stretch,
                                "Stretch to square",
                            );
                            ui.selectable_value(
                                &mut app.params.policy,
                                SquarePolicy::Keep,
                                "Keep original",
                            );
                        });
                });
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Padding threshold:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add(DragValue::new(&mut app.params.threshold).range(0..=512));
                });
            });
        });
    }
}

pub struct PreviewListComponent;

impl PreviewListComponent {
    pub fn render(ui: &mut Ui, app: &mut SquarepadGui) {
        let mut to_remove: Option<PathBuf> = None;

        ui.add_enabled_ui(!app.is_processing, |ui| {
            for path in app.session.selection().iter() {
                ui.horizontal(|ui| {
                    ui.label(base_name(path))
                        .on_hover_text(path.display().to_string());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("✕").color(Color32::from_rgb(255, 100, 100)))
                            .clicked()
                        {
                            to_remove = Some(path.clone());
                        }
                    });
                });
            }
        });

        if let Some(path) = to_remove {
            app.remove_image(&path);
        }
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &SquarepadGui) {
        ui.horizontal(|ui| {
            let status_color = match app.last_result.as_ref().map(|r| r.outcome()) {
                Some(BatchOutcome::AllSucceeded) => Color32::from_rgb(100, 255, 100),
                Some(BatchOutcome::Partial) => Color32::from_rgb(255, 200, 100),
                Some(BatchOutcome::AllFailed) => Color32::from_rgb(255, 100, 100),
                None => Color32::from_gray(220),
            };
            ui.label(RichText::new(&app.status_message).color(status_color));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(duration) = app.last_processing_duration {
                    ui.label(
                        RichText::new(format!("Finished in {:.2?}", duration))
                            .color(Color32::from_gray(150)),
                    );
                }
            });
        });

        if let Some((completed, total)) = app.progress {
            let fraction = if total == 0 {
                0.0
            } else {
                completed as f32 / total as f32
            };
            ui.add(
                ProgressBar::new(fraction)
                    .text(format!("{} / {}", completed, total)),
            );
        }
    }
}
