use std::fmt;

use async_trait::async_trait;
use tracing::{info, warn};

use super::AppContext;
use crate::{Result, settings::Settings};

/// Mode flag value selecting the console front end.
pub const MODE_CONSOLE: &str = "console";

/// Mode flag value selecting the graphical front end.
pub const MODE_GUI: &str = "gui";

/// The two mutually exclusive front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEndKind {
    /// Graphical front end.
    Gui,
    /// Text console.
    Console,
}

impl fmt::Display for FrontEndKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontEndKind::Gui => write!(f, "{MODE_GUI}"),
            FrontEndKind::Console => write!(f, "{MODE_CONSOLE}"),
        }
    }
}

/// An interactive surface the bootstrap hands control to.
#[async_trait]
pub trait FrontEnd: Send {
    /// Which slot this front end fills.
    fn kind(&self) -> FrontEndKind;

    /// Whether the assets this front end needs are present and readable.
    fn assets_available(&self) -> bool {
        true
    }

    /// Runs the front end until the user quits.
    ///
    /// # Errors
    /// Returns `SlmError::FrontEnd` or any error the front end cannot recover from.
    async fn start(self: Box<Self>, context: AppContext) -> Result<()>;
}

/// Picks the front end for this run.
///
/// A `mode_flag` of exactly `"console"` or `"gui"` decides outright; an empty
/// or unrecognised flag is ignored. Otherwise the persisted preference
/// applies, unless the graphical assets are missing, which forces the
/// console. The override is never written back to the settings document.
pub fn resolve_front_end(
    persisted_gui: bool,
    assets_available: bool,
    mode_flag: Option<&str>,
) -> FrontEndKind {
    let use_gui = match mode_flag {
        Some(MODE_CONSOLE) => false,
        Some(MODE_GUI) => true,
        other => {
            if let Some(unknown) = other.filter(|flag| !flag.is_empty()) {
                warn!(mode = unknown, "Ignoring unknown mode flag");
            }

            if persisted_gui && !assets_available {
                warn!("Graphical front-end assets unavailable, falling back to console");
            }

            persisted_gui && assets_available
        }
    };

    if use_gui {
        FrontEndKind::Gui
    } else {
        FrontEndKind::Console
    }
}

/// Holds the available front ends and starts exactly one of them.
pub struct Dispatcher {
    console: Box<dyn FrontEnd>,
    gui: Option<Box<dyn FrontEnd>>,
}

impl Dispatcher {
    /// Dispatcher with only a console front end.
    pub fn new(console: Box<dyn FrontEnd>) -> Self {
        Self { console, gui: None }
    }

    /// Plugs in a graphical front end.
    pub fn with_gui(mut self, gui: Box<dyn FrontEnd>) -> Self {
        self.gui = Some(gui);
        self
    }

    /// Whether a graphical front end is plugged in and its assets are readable.
    pub fn gui_assets_available(&self) -> bool {
        self.gui.as_ref().is_some_and(|gui| gui.assets_available())
    }

    /// Front end this run should use.
    pub fn select(&self, settings: &Settings, mode_flag: Option<&str>) -> FrontEndKind {
        resolve_front_end(settings.gui, self.gui_assets_available(), mode_flag)
    }

    /// Starts the selected front end; control stays with it until it returns.
    ///
    /// # Errors
    /// Propagates the front end's error.
    pub async fn launch(self, kind: FrontEndKind, context: AppContext) -> Result<()> {
        let front_end = match (kind, self.gui) {
            (FrontEndKind::Gui, Some(gui)) => gui,
            (FrontEndKind::Gui, None) => {
                warn!("No graphical front end available, starting console");
                self.console
            }
            (FrontEndKind::Console, _) => self.console,
        };

        info!(front_end = %front_end.kind(), "Starting front end");
        front_end.start(context).await
    }
}
