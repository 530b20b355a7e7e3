//! Unit tests for startup helpers
//!
//! Tests working directory resolution and front-end selection.

#![allow(clippy::unwrap_used)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::{
    Result, SlmError,
    bootstrap::{
        AppContext, Dispatcher, FrontEnd, FrontEndKind, default_level, resolve_front_end,
        resolve_working_dir,
    },
    settings::{Settings, SettingsStore},
};

struct RecordingFrontEnd {
    kind: FrontEndKind,
    assets: bool,
    started: Arc<Mutex<Vec<FrontEndKind>>>,
}

#[async_trait]
impl FrontEnd for RecordingFrontEnd {
    fn kind(&self) -> FrontEndKind {
        self.kind
    }

    fn assets_available(&self) -> bool {
        self.assets
    }

    async fn start(self: Box<Self>, _context: AppContext) -> Result<()> {
        self.started.lock().unwrap().push(self.kind);
        Ok(())
    }
}

fn recording(
    kind: FrontEndKind,
    assets: bool,
    started: &Arc<Mutex<Vec<FrontEndKind>>>,
) -> Box<dyn FrontEnd> {
    Box::new(RecordingFrontEnd {
        kind,
        assets,
        started: Arc::clone(started),
    })
}

fn context(temp: &TempDir) -> AppContext {
    AppContext::new(temp.path().to_path_buf(), SettingsStore::new(temp.path()))
}

#[test]
fn working_dir_is_executable_parent() {
    let dir = resolve_working_dir(Path::new("/opt/slm/slm"), "linux").unwrap();

    assert_eq!(dir, PathBuf::from("/opt/slm"));
}

#[test]
fn working_dir_trims_macos_bundle() {
    let exe = Path::new("/Users/me/Games/SLM.app/Contents/MacOS/slm");

    let dir = resolve_working_dir(exe, "macos").unwrap();

    assert_eq!(dir, PathBuf::from("/Users/me/Games"));
}

#[test]
fn working_dir_keeps_bundle_path_on_other_platforms() {
    let exe = Path::new("/Users/me/Games/SLM.app/Contents/MacOS/slm");

    let dir = resolve_working_dir(exe, "linux").unwrap();

    assert_eq!(dir, PathBuf::from("/Users/me/Games/SLM.app/Contents/MacOS"));
}

#[test]
fn working_dir_ignores_names_merely_containing_app() {
    let exe = Path::new("/Users/me/my.apps/slm.application/slm");

    let dir = resolve_working_dir(exe, "macos").unwrap();

    assert_eq!(dir, PathBuf::from("/Users/me/my.apps/slm.application"));
}

#[test]
fn working_dir_without_parent_is_platform_error() {
    let result = resolve_working_dir(Path::new("slm"), "linux");

    assert!(matches!(result, Err(SlmError::Platform(_))));
}

#[test]
fn mode_flag_overrides_persisted_preference() {
    assert_eq!(
        resolve_front_end(true, true, Some("console")),
        FrontEndKind::Console
    );
    assert_eq!(resolve_front_end(false, true, Some("gui")), FrontEndKind::Gui);
}

#[test]
fn missing_mode_flag_uses_persisted_preference() {
    assert_eq!(resolve_front_end(true, true, None), FrontEndKind::Gui);
    assert_eq!(resolve_front_end(false, true, None), FrontEndKind::Console);
}

#[test]
fn empty_or_unknown_mode_flag_is_ignored() {
    assert_eq!(resolve_front_end(true, true, Some("")), FrontEndKind::Gui);
    assert_eq!(resolve_front_end(false, true, Some("tui")), FrontEndKind::Console);
    assert_eq!(resolve_front_end(true, true, Some("GUI")), FrontEndKind::Gui);
}

#[test]
fn missing_assets_override_persisted_preference() {
    assert_eq!(resolve_front_end(true, false, None), FrontEndKind::Console);
    assert_eq!(resolve_front_end(true, false, Some("")), FrontEndKind::Console);
    assert_eq!(resolve_front_end(true, false, Some("tui")), FrontEndKind::Console);
}

#[test]
fn explicit_gui_flag_wins_over_missing_assets() {
    assert_eq!(resolve_front_end(true, false, Some("gui")), FrontEndKind::Gui);
    assert_eq!(resolve_front_end(false, false, Some("gui")), FrontEndKind::Gui);
}

#[test]
fn log_level_follows_debug_flag() {
    assert_eq!(default_level(false), "info");
    assert_eq!(default_level(true), "debug");
}

#[test]
fn dispatcher_without_gui_selects_console() {
    let started = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Dispatcher::new(recording(FrontEndKind::Console, true, &started));

    assert!(!dispatcher.gui_assets_available());
    assert_eq!(
        dispatcher.select(&Settings::default(), None),
        FrontEndKind::Console
    );
}

#[test]
fn dispatcher_checks_gui_assets() {
    let started = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Dispatcher::new(recording(FrontEndKind::Console, true, &started))
        .with_gui(recording(FrontEndKind::Gui, false, &started));

    assert!(!dispatcher.gui_assets_available());
    assert_eq!(
        dispatcher.select(&Settings::default(), None),
        FrontEndKind::Console
    );
    assert_eq!(
        dispatcher.select(&Settings::default(), Some("gui")),
        FrontEndKind::Gui
    );
}

#[tokio::test]
async fn dispatcher_starts_exactly_one_front_end() {
    let temp = TempDir::new().unwrap();
    let started = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Dispatcher::new(recording(FrontEndKind::Console, true, &started))
        .with_gui(recording(FrontEndKind::Gui, true, &started));

    let kind = dispatcher.select(&Settings::default(), None);
    dispatcher.launch(kind, context(&temp)).await.unwrap();

    assert_eq!(*started.lock().unwrap(), vec![FrontEndKind::Gui]);
}

#[tokio::test]
async fn dispatcher_gui_request_without_gui_starts_console() {
    let temp = TempDir::new().unwrap();
    let started = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = Dispatcher::new(recording(FrontEndKind::Console, true, &started));

    dispatcher
        .launch(FrontEndKind::Gui, context(&temp))
        .await
        .unwrap();

    assert_eq!(*started.lock().unwrap(), vec![FrontEndKind::Console]);
}
