use anyhow::Context as _;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

use dinnerwheel::config::Config;
use dinnerwheel::domain::menu::Menu;
use dinnerwheel::infrastructure::MenuStore;
use dinnerwheel::interfaces::design_system::DesignSystem;
use dinnerwheel::interfaces::ui::DinnerWheelApp;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Create Log Channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    // We use a registry to add multiple layers
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false); // cleaner

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Dinner Wheel...");

    // 3. Load Config
    let config = Config::from_env().context("Failed to load config")?;

    // 4. Restore the saved menu and resting angle, falling back to the
    // default dishes on a fresh install or an unreadable file.
    let store = MenuStore::new(config.storage_dir_override.as_deref())?;
    let (menu, resting_angle, last_winner) = match store.load() {
        Ok(Some(persisted)) => {
            info!(
                "Restored {} dishes from {}",
                persisted.menu.len(),
                store.file_path().display()
            );
            (
                Menu::new(persisted.menu),
                persisted.last_angle,
                persisted.last_winner,
            )
        }
        Ok(None) => {
            info!("No saved wheel found. Starting with the default menu.");
            (Menu::default_dishes(), 0.0, None)
        }
        Err(e) => {
            warn!("Could not read saved wheel ({:#}). Starting fresh.", e);
            (Menu::default_dishes(), 0.0, None)
        }
    };

    let app = DinnerWheelApp::new(config, menu, store, resting_angle, last_winner, log_rx)?;

    info!("Launching UI.");

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_title("Dinner Wheel"),
        ..Default::default()
    };

    eframe::run_native(
        "Dinner Wheel",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
