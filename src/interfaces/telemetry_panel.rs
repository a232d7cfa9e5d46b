//! Collapsible plot of the most recent spin's velocity decay curve.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::application::SpinTrace;
use crate::interfaces::design_system::DesignSystem;

pub fn telemetry_panel(ui: &mut egui::Ui, trace: &SpinTrace) {
    ui.collapsing("Spin telemetry", |ui| {
        if trace.is_empty() {
            ui.label(
                egui::RichText::new("No spin recorded yet.")
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
            );
            return;
        }

        ui.label(
            egui::RichText::new(format!(
                "{} frames, peak {:.3} rad/frame",
                trace.frames(),
                trace.peak_velocity()
            ))
            .size(11.0)
            .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        let line = Line::new("Velocity", PlotPoints::from(trace.points().to_vec()))
            .color(DesignSystem::ACCENT_PRIMARY)
            .width(2.0);

        Plot::new("spin_telemetry_plot")
            .height(160.0)
            .show_axes([true, true])
            .show_grid([true, true])
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    });
}
