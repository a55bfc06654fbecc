use eframe::egui;
use tracing::Level;

use super::components::{
    DestinationComponent, FooterComponent, OptionsComponent, PreviewListComponent,
    SelectionComponent,
};
use super::models::SquarepadGui;
use crate::gui::logging::{LogEntry, get_log_buffer};

fn format_log_entry(entry: &LogEntry) -> egui::RichText {
    let color = match entry.level {
        Level::ERROR => egui::Color32::from_rgb(255, 100, 100),
        Level::WARN => egui::Color32::from_rgb(255, 200, 100),
        Level::INFO => egui::Color32::from_rgb(100, 200, 255),
        Level::DEBUG | Level::TRACE => egui::Color32::from_gray(150),
    };

    egui::RichText::new(format!(
        "[{}] {}: {}",
        entry.timestamp, entry.level, entry.message
    ))
    .color(color)
    .monospace()
}

impl eframe::App for SquarepadGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initialize logging on first update
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            crate::gui::models::init_gui_logging();
        });

        // Dark theme
        let mut style = (*ctx.style()).clone();
        style.visuals.override_text_color = Some(egui::Color32::from_gray(220));
        style.visuals.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(40, 40, 40);
        style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(50, 50, 50);
        style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(60, 60, 60);
        style.visuals.widgets.active.bg_fill = egui::Color32::from_rgb(70, 70, 70);
        style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 30);
        style.visuals.window_fill = egui::Color32::from_rgb(25, 25, 25);
        ctx.set_style(style);

        self.poll_background();

        // Handle incoming log messages
        let log_buffer = get_log_buffer();
        let mut new_messages = Vec::new();
        if let Ok(mut buf) = log_buffer.lock() {
            if !buf.is_empty() {
                new_messages.extend(buf.drain(..));
            }
        }
        if !new_messages.is_empty() || self.is_processing {
            ctx.request_repaint();
        }
        if !new_messages.is_empty() {
            let mut logs = self.log_messages.lock().unwrap();
            logs.extend(new_messages);
            // Keep only the most recent entries
            let len = logs.len();
            if len > 1000 {
                logs.drain(0..(len - 1000));
            }
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("SQUAREPAD")
                            .size(32.0)
                            .color(egui::Color32::from_gray(220))
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new("BATCH SQUARE IMAGE NORMALIZER")
                            .size(11.0)
                            .color(egui::Color32::from_gray(220))
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(10.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_enabled_ui(!self.is_processing, |ui| {
                        if ui
                            .button(
                                egui::RichText::new("Process Images")
                                    .size(16.0)
                                    .color(egui::Color32::WHITE),
                            )
                            .clicked()
                        {
                            self.start_processing();
                        }
                    });
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            FooterComponent::render(ui, self);
        });

        egui::SidePanel::left("left_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(10.0);

                        SelectionComponent::render(ui, self);

                        ui.separator();

                        DestinationComponent::render(ui, self);

                        ui.separator();

                        OptionsComponent::render(ui, self);

                        ui.add_space(20.0);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Selected Images");
            ui.add_space(5.0);

            egui::ScrollArea::vertical()
                .id_salt("selection_list")
                .max_height(ui.available_height() * 0.55)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if self.session.selection().is_empty() {
                        ui.centered_and_justified(|ui| {
                            ui.label(
                                egui::RichText::new("No images selected")
                                    .color(egui::Color32::from_gray(120)),
                            );
                        });
                    } else {
                        PreviewListComponent::render(ui, self);
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Activity Log");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(&mut self.min_log_level, Level::ERROR, "ERROR");
                    ui.selectable_value(&mut self.min_log_level, Level::WARN, "WARN");
                    ui.selectable_value(&mut self.min_log_level, Level::INFO, "INFO");
                    ui.selectable_value(&mut self.min_log_level, Level::TRACE, "ALL");
                });
            });

            ui.add_space(5.0);

            egui::ScrollArea::vertical()
                .id_salt("activity_log")
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if let Ok(logs) = self.log_messages.lock() {
                        if logs.is_empty() {
                            ui.label(
                                egui::RichText::new("No log messages")
                                    .color(egui::Color32::from_gray(120)),
                            );
                        } else {
                            for entry in logs.iter() {
                                if entry.level <= self.min_log_level {
                                    ui.label(format_log_entry(entry));
                                }
                            }
                        }
                    }
                });
        });
    }
}
