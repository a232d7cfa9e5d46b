use eframe::egui;

use crate::domain::wheel::MAX_WEDGES;

/// Warm Dark Mode Design System
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(18, 14, 12); // #120E0C
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(18, 14, 12); // #120E0C
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(32, 26, 22); // #201A16
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(40, 33, 28);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(24, 19, 16);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 138, 43); // #FF8A2B (Amber)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 171, 94); // Lighter Amber

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(102, 187, 106); // #66BB6A
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(229, 57, 53); // #E53935
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 179, 0); // #FFB300

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(250, 243, 235);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(165);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(62, 51, 43);
    pub const BORDER_FOCUS: egui::Color32 = egui::Color32::from_rgb(255, 160, 72);

    // --- Wheel ---

    /// Wedge fill colors, one per wedge, all dark enough to carry the
    /// near-white label text. The wheel never has more wedges than this
    /// palette has entries; `WedgeRing` enforces the bound at
    /// construction.
    pub const WEDGE_PALETTE: [egui::Color32; MAX_WEDGES] = [
        egui::Color32::from_rgb(198, 40, 40),  // crimson
        egui::Color32::from_rgb(239, 108, 0),  // burnt orange
        egui::Color32::from_rgb(46, 125, 50),  // leaf green
        egui::Color32::from_rgb(21, 101, 192), // lake blue
        egui::Color32::from_rgb(106, 27, 154), // plum
        egui::Color32::from_rgb(0, 131, 143),  // teal
        egui::Color32::from_rgb(173, 20, 87),  // raspberry
        egui::Color32::from_rgb(85, 139, 47),  // olive
        egui::Color32::from_rgb(69, 39, 160),  // violet
        egui::Color32::from_rgb(216, 67, 21),  // paprika
        egui::Color32::from_rgb(40, 53, 147),  // indigo
        egui::Color32::from_rgb(78, 52, 46),   // cocoa
    ];

    /// Hairline between adjacent wedges.
    pub const WEDGE_DIVIDER: egui::Color32 = egui::Color32::from_rgb(18, 14, 12);

    pub const POINTER_FILL: egui::Color32 = egui::Color32::from_rgb(250, 243, 235);
    pub const HUB_FILL: egui::Color32 = egui::Color32::from_rgb(32, 26, 22);
    pub const HUB_RING: egui::Color32 = egui::Color32::from_rgb(255, 138, 43);

    pub const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(250, 243, 235);
    pub const LABEL_HIGHLIGHT_COLOR: egui::Color32 = egui::Color32::WHITE;
    pub const LABEL_SIZE: f32 = 14.0;
    // The default egui fonts have no bold face, so the highlighted label is
    // emphasized with size and brightness instead of weight.
    pub const LABEL_HIGHLIGHT_SIZE: f32 = 18.0;

    pub fn wedge_color(index: usize) -> egui::Color32 {
        Self::WEDGE_PALETTE[index % Self::WEDGE_PALETTE.len()]
    }

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_max_wedges() {
        assert_eq!(DesignSystem::WEDGE_PALETTE.len(), MAX_WEDGES);
    }

    #[test]
    fn test_palette_colors_distinct() {
        for (i, a) in DesignSystem::WEDGE_PALETTE.iter().enumerate() {
            for b in DesignSystem::WEDGE_PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
