//! The eframe application shell: status bar, menu editor side panel, and
//! the central wheel panel with the spin button and result banner.
//!
//! The shell owns all mutable state (menu, spinner, view, trace) on the UI
//! thread. Animation frames are pulled, not pushed: while a spin is live the
//! spinner asks for one more repaint per tick through the scheduler seam,
//! and closing the window simply drops everything, so no callback can fire
//! into a torn-down wheel.

use chrono::Utc;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::warn;

use crate::application::{
    FrameScheduler, RandomImpulse, SpinHooks, SpinImpulse, SpinTrace, Spinner,
};
use crate::config::Config;
use crate::domain::menu::Menu;
use crate::domain::wheel::{SpinTuning, WedgeRing};
use crate::infrastructure::{MenuStore, PersistedWheel};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::menu_panel::{MenuPanelState, menu_editor};
use crate::interfaces::telemetry_panel::telemetry_panel;
use crate::interfaces::wheel_view::WheelView;

const ACTIVITY_CAPACITY: usize = 200;

/// Maps the spinner's "one more frame, please" onto an egui repaint.
struct RepaintScheduler<'a> {
    ctx: &'a egui::Context,
}

impl FrameScheduler for RepaintScheduler<'_> {
    fn request_frame(&self) {
        self.ctx.request_repaint();
    }
}

/// Hook results for the frame in flight, shared between the spin closures
/// and the shell. Single-threaded, so a plain `Rc<RefCell>` is enough.
#[derive(Default)]
struct WheelEvents {
    /// Label reported by the most recent crossing event.
    live: Option<String>,
    /// Final angle and winner, set exactly once per spin on settle.
    settled: Option<(f32, String)>,
}

pub struct DinnerWheelApp {
    config: Config,
    ring: WedgeRing,
    tuning: SpinTuning,
    menu: Menu,
    store: MenuStore,
    /// `None` while fewer than two dishes are enabled; the spin button is
    /// disabled and the central panel explains why.
    spinner: Option<Spinner>,
    wheel_view: WheelView,
    impulse: RandomImpulse,
    events: Rc<RefCell<WheelEvents>>,
    trace: SpinTrace,
    menu_panel: MenuPanelState,
    log_rx: Receiver<String>,
    activity: VecDeque<String>,
    /// Angle the wheel last settled at, restored across runs.
    resting_angle: f32,
    last_winner: Option<String>,
}

impl DinnerWheelApp {
    pub fn new(
        config: Config,
        menu: Menu,
        store: MenuStore,
        resting_angle: f32,
        last_winner: Option<String>,
        log_rx: Receiver<String>,
    ) -> anyhow::Result<Self> {
        let ring = config.to_wedge_ring()?;
        let tuning = config.to_spin_tuning();
        let wheel_view = WheelView::new(ring, config.radius_px, config.margin_px);
        let impulse = RandomImpulse {
            base_deg: config.impulse_base_deg,
            range_deg: config.impulse_range_deg,
        };

        let mut app = Self {
            config,
            ring,
            tuning,
            menu,
            store,
            spinner: None,
            wheel_view,
            impulse,
            events: Rc::new(RefCell::new(WheelEvents::default())),
            trace: SpinTrace::new(),
            menu_panel: MenuPanelState::default(),
            log_rx,
            activity: VecDeque::new(),
            resting_angle,
            last_winner,
        };
        app.rebuild_spinner();
        Ok(app)
    }

    /// Rebuilds the wheel from the current enabled dishes, resting at the
    /// last settled angle. Called at startup and after every menu edit.
    fn rebuild_spinner(&mut self) {
        match Spinner::resumed_at(
            self.ring,
            self.tuning,
            self.menu.enabled_choices(),
            self.resting_angle,
        ) {
            Ok(spinner) => self.spinner = Some(spinner),
            Err(e) => {
                warn!("Wheel unavailable: {}", e);
                self.spinner = None;
            }
        }
    }

    fn start_spin(&mut self, ctx: &egui::Context) {
        let Some(spinner) = self.spinner.as_mut() else {
            return;
        };

        let velocity = self.impulse.draw_velocity();
        let live = Rc::clone(&self.events);
        let done = Rc::clone(&self.events);
        let hooks = SpinHooks::new()
            .on_update(move |choice| live.borrow_mut().live = Some(choice.label.clone()))
            .on_spin_end(move |angle, choice| {
                done.borrow_mut().settled = Some((angle, choice.label.clone()));
            });

        if spinner.spin(velocity, hooks) {
            self.events.borrow_mut().live = None;
            self.trace.begin();
            self.trace.record(0, spinner.state().velocity);
            ctx.request_repaint();
        }
    }

    /// Per-frame housekeeping: drain the log channel, advance a live spin
    /// by one tick, and absorb a settle event.
    fn pump(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.log_rx.try_recv() {
            let line = msg.trim_end();
            if !line.is_empty() {
                self.activity.push_back(line.to_string());
            }
        }
        while self.activity.len() > ACTIVITY_CAPACITY {
            self.activity.pop_front();
        }

        if let Some(spinner) = self.spinner.as_mut() {
            if spinner.is_spinning() {
                spinner.tick(&RepaintScheduler { ctx });
                self.trace.record(spinner.frames(), spinner.state().velocity);
            }
        }

        let settled = self.events.borrow_mut().settled.take();
        if let Some((angle, winner)) = settled {
            self.resting_angle = angle;
            self.last_winner = Some(winner);
            self.events.borrow_mut().live = None;
            self.save_state();
        }
    }

    fn save_state(&self) {
        if !self.config.autosave {
            return;
        }
        let snapshot = PersistedWheel::new(
            self.menu.choices().to_vec(),
            self.resting_angle,
            self.last_winner.clone(),
        );
        if let Err(e) = self.store.save(&snapshot) {
            warn!("Failed to save wheel state: {:#}", e);
        }
    }

    fn is_spinning(&self) -> bool {
        self.spinner.as_ref().is_some_and(|s| s.is_spinning())
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("🍽 Dinner Wheel");
            ui.separator();
            ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = if self.is_spinning() {
                    egui::RichText::new("● SPINNING").color(DesignSystem::WARNING)
                } else if self.spinner.is_some() {
                    egui::RichText::new("● READY").color(DesignSystem::SUCCESS)
                } else {
                    egui::RichText::new("● NO WHEEL").color(DesignSystem::DANGER)
                };
                ui.label(status.small());
            });
        });
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        let locked = self.is_spinning();
        if menu_editor(ui, &mut self.menu, &mut self.menu_panel, locked) {
            self.rebuild_spinner();
            self.save_state();
        }

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        self.activity_feed(ui);
    }

    fn activity_feed(&self, ui: &mut egui::Ui) {
        Card::new().title("ACTIVITY").show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("activity_feed_scroll")
                .max_height(260.0)
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.activity.is_empty() {
                        ui.label(
                            egui::RichText::new("No activity yet.")
                                .italics()
                                .color(DesignSystem::TEXT_MUTED),
                        );
                        return;
                    }
                    for line in &self.activity {
                        let color = if line.contains("ERROR") {
                            DesignSystem::DANGER
                        } else if line.contains("WARN") {
                            DesignSystem::WARNING
                        } else {
                            DesignSystem::TEXT_SECONDARY
                        };
                        ui.label(egui::RichText::new(line).size(11.0).color(color));
                    }
                });
        });
    }

    fn wheel_panel(&mut self, ui: &mut egui::Ui) {
        let mut spin_clicked = false;

        ui.vertical_centered(|ui| {
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            if let Some(spinner) = &self.spinner {
                let side = self
                    .wheel_view
                    .desired_size()
                    .min(ui.available_width() - 16.0)
                    .min(ui.available_height() - 180.0)
                    .max(220.0);
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::splat(side), egui::Sense::hover());

                let state = spinner.state();
                self.wheel_view.paint(
                    ui,
                    rect,
                    state.angle,
                    Some(state.pointer_index),
                    spinner.working(),
                );

                ui.add_space(DesignSystem::SPACING_MEDIUM);

                let button = egui::Button::new(
                    egui::RichText::new("SPIN")
                        .size(18.0)
                        .strong()
                        .color(DesignSystem::BG_WINDOW),
                )
                .min_size(egui::vec2(180.0, 48.0))
                .corner_radius(DesignSystem::ROUNDING_MEDIUM)
                .fill(DesignSystem::ACCENT_PRIMARY);
                if ui.add_enabled(!spinner.is_spinning(), button).clicked() {
                    spin_clicked = true;
                }

                ui.add_space(DesignSystem::SPACING_MEDIUM);

                if spinner.is_spinning() {
                    let live = self
                        .events
                        .borrow()
                        .live
                        .clone()
                        .unwrap_or_else(|| spinner.aligned_choice().label.clone());
                    Card::new().show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(live)
                                .size(20.0)
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                    });
                } else if let Some(winner) = &self.last_winner {
                    Card::new().accent(DesignSystem::ACCENT_PRIMARY).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("TONIGHT")
                                .size(12.0)
                                .strong()
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(winner)
                                .size(24.0)
                                .strong()
                                .color(DesignSystem::ACCENT_PRIMARY),
                        );
                    });
                } else {
                    ui.label(
                        egui::RichText::new("Press SPIN to decide dinner.")
                            .italics()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
            } else {
                ui.add_space(48.0);
                ui.colored_label(
                    DesignSystem::WARNING,
                    "Enable at least two dishes to build the wheel.",
                );
            }

            ui.add_space(DesignSystem::SPACING_LARGE);
        });

        telemetry_panel(ui, &self.trace);

        if spin_clicked {
            self.start_spin(ui.ctx());
        }
    }
}

impl eframe::App for DinnerWheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump(ctx);

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::SidePanel::left("menu_panel")
            .default_width(340.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.side_panel(ui);
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.wheel_panel(ui);
            });

        // Spin frames are requested through the scheduler; while idle a slow
        // repaint keeps the clock and the activity feed current.
        if !self.is_spinning() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
