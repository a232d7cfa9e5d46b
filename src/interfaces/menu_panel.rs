//! Menu editor: add, remove, and enable/disable dishes.

use eframe::egui;
use tracing::info;
use uuid::Uuid;

use crate::domain::menu::Menu;
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;

/// Editor widget state that survives between frames.
#[derive(Default)]
pub struct MenuPanelState {
    pub new_dish: String,
    pub feedback: Option<String>,
}

/// Draws the dish editor. Returns `true` when the menu changed, so the
/// caller can rebuild the wheel's working set and persist.
///
/// While a spin is running the editor is locked: the working choice set
/// belongs to the active spin and must not be rebuilt under it.
pub fn menu_editor(
    ui: &mut egui::Ui,
    menu: &mut Menu,
    state: &mut MenuPanelState,
    locked: bool,
) -> bool {
    let mut changed = false;

    Card::new().title("MENU").show(ui, |ui| {
        // Add row
        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut state.new_dish)
                .hint_text("Add a dish")
                .desired_width(ui.available_width() - 64.0);
            let response = ui.add_enabled(!locked, edit);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(!locked, egui::Button::new("Add"))
                .clicked();

            if clicked || submitted {
                match menu.add(&state.new_dish) {
                    Ok(choice) => {
                        info!("Added '{}' to the menu", choice.label);
                        state.new_dish.clear();
                        state.feedback = None;
                        changed = true;
                    }
                    Err(e) => state.feedback = Some(e.to_string()),
                }
            }
        });

        if let Some(feedback) = &state.feedback {
            ui.colored_label(DesignSystem::WARNING, feedback);
        }

        ui.add_space(DesignSystem::SPACING_SMALL);

        // Dish list
        let mut toggle: Option<(Uuid, bool)> = None;
        let mut remove: Option<Uuid> = None;

        egui::ScrollArea::vertical()
            .max_height(320.0)
            .show(ui, |ui| {
                for choice in menu.choices() {
                    ui.horizontal(|ui| {
                        let mut enabled = choice.enabled;
                        if ui
                            .add_enabled(!locked, egui::Checkbox::without_text(&mut enabled))
                            .changed()
                        {
                            toggle = Some((choice.key, enabled));
                        }

                        let color = if choice.enabled {
                            DesignSystem::TEXT_PRIMARY
                        } else {
                            DesignSystem::TEXT_MUTED
                        };
                        ui.label(egui::RichText::new(&choice.label).color(color));

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add_enabled(!locked, egui::Button::new("✕").small())
                                    .clicked()
                                {
                                    remove = Some(choice.key);
                                }
                            },
                        );
                    });
                }
            });

        if let Some((key, enabled)) = toggle {
            if menu.set_enabled(key, enabled).is_ok() {
                state.feedback = None;
                changed = true;
            }
        }
        if let Some(key) = remove {
            if let Ok(removed) = menu.remove(key) {
                info!("Removed '{}' from the menu", removed.label);
                state.feedback = None;
                changed = true;
            }
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(
            egui::RichText::new(format!(
                "{} of {} enabled",
                menu.enabled_count(),
                menu.len()
            ))
            .size(11.0)
            .color(DesignSystem::TEXT_MUTED),
        );
    });

    changed
}
