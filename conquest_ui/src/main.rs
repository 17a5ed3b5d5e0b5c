// main.rs - Color conquest desktop driver
// The window owns a headless Driver and forwards ticks, keys and pointer input to it.

use eframe::egui;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;

use conquest::{ColorConquestEngine, Driver};

mod palette;   // Cell state -> display color
mod ui;        // eframe::App impl: render sink, input source, status sink

const DEFAULT_LOG_FILTER: &str = "conquest=debug,conquest_ui=debug";

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Conquest(#[from] conquest::Error),
    #[error(transparent)]
    Window(#[from] eframe::Error),
    #[error(transparent)]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error(transparent)]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

fn main() -> Result<(), Error> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter),
    )?;

    let app = ConquestApp::new(Driver::new(ColorConquestEngine::default())?);
    info!("starting color conquest");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Color Conquest",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct ConquestApp {
    driver: Driver,
    selected_layout: usize,
}

impl ConquestApp {
    pub fn new(driver: Driver) -> Self {
        Self {
            driver,
            selected_layout: 0,
        }
    }
}
