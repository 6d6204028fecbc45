// Tauri shell: commands the frontend invokes and the events it listens to
use crate::config::{DeskConfig, CONFIG_FILE_NAME};
use crate::error::DeskError;
use crate::geometry::{Point, Rect, ResizeEdge, Size};
use crate::local_store::{LocalStore, ScoreRecord};
use crate::logging::init_logging;
use crate::score_board::{GameLeaderboard, GameName, LeaderboardClient, LeaderboardView};
use crate::state::catalog::WindowKind;
use crate::state::window::WindowHandle;
use crate::state::{DeskSnapshot, OpenOutcome, WindowManager};
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;
use tauri::{AppHandle, Emitter, Manager, State};
use tracing::info;

// Event payload types for frontend communication
#[derive(Clone, Serialize)]
struct WindowMovedPayload {
    id: String,
    rect: Rect,
}

#[derive(Clone, Serialize)]
struct LauncherToggledPayload {
    open: bool,
}

fn emit<S: Serialize + Clone>(app: &AppHandle, event: &str, payload: S) -> Result<(), String> {
    app.emit(event, payload).map_err(|e| e.to_string())
}

fn emit_dock(app: &AppHandle, manager: &WindowManager) -> Result<(), String> {
    emit(app, "dock-changed", manager.dock().to_vec())
}

fn emit_outcome(app: &AppHandle, manager: &WindowManager, outcome: &OpenOutcome) -> Result<(), String> {
    match outcome {
        OpenOutcome::Opened { window } => {
            emit(app, "window-created", window.clone())?;
            emit_dock(app, manager)
        }
        OpenOutcome::Focused { window } => emit(app, "window-focused", window.clone()),
        OpenOutcome::LauncherToggled { open } => {
            emit(app, "launcher-toggled", LauncherToggledPayload { open: *open })
        }
    }
}

fn not_found(id: &str) -> String {
    DeskError::WindowNotFound(id.to_string()).to_string()
}

fn parse_game(game: &str) -> Result<GameName, String> {
    game.parse::<GameName>().map_err(|e| e.to_string())
}

// ===== Window Management Commands =====

#[tauri::command]
fn open_window(
    kind: WindowKind,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<OpenOutcome, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let outcome = manager.open_or_focus(kind);
    emit_outcome(&app, &manager, &outcome)?;
    Ok(outcome)
}

#[tauri::command]
fn open_new_window(
    kind: WindowKind,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<OpenOutcome, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let outcome = manager.open_new(kind);
    emit_outcome(&app, &manager, &outcome)?;
    Ok(outcome)
}

#[tauri::command]
fn focus_window(
    id: String,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowHandle, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let window = manager.focus(&id).ok_or_else(|| not_found(&id))?;
    emit(&app, "window-focused", window.clone())?;
    Ok(window)
}

/// Returns false when the window was already gone
#[tauri::command]
fn close_window(
    id: String,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<bool, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    if manager.close(&id).is_none() {
        return Ok(false);
    }

    emit(&app, "window-closed", id)?;
    emit_dock(&app, &manager)?;
    Ok(true)
}

#[tauri::command]
fn drag_end(
    id: String,
    delta: Point,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowHandle, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let window = manager.on_drag_end(&id, delta).ok_or_else(|| not_found(&id))?;
    emit(&app, "window-updated", window.clone())?;
    Ok(window)
}

#[tauri::command]
fn resize_end(
    id: String,
    edge: ResizeEdge,
    delta: Point,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowHandle, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let window = manager
        .on_resize_end(&id, edge, delta)
        .ok_or_else(|| not_found(&id))?;
    emit(&app, "window-updated", window.clone())?;
    Ok(window)
}

// ===== Pointer Commands =====

#[tauri::command]
fn pointer_down_drag(
    id: String,
    pointer: Point,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowHandle, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let window = manager
        .pointer_down_drag(&id, pointer)
        .ok_or_else(|| not_found(&id))?;
    emit(&app, "window-focused", window.clone())?;
    Ok(window)
}

#[tauri::command]
fn pointer_down_resize(
    id: String,
    edge: ResizeEdge,
    pointer: Point,
    state: State<Mutex<WindowManager>>,
) -> Result<WindowHandle, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    manager
        .pointer_down_resize(&id, edge, pointer)
        .ok_or_else(|| not_found(&id))
}

/// Live preview while the pointer is held. Nothing is committed.
#[tauri::command]
fn pointer_move(
    pointer: Point,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<Option<Rect>, String> {
    let manager = state.lock().map_err(|e| e.to_string())?;
    match manager.pointer_move(pointer) {
        Some((id, rect)) => {
            emit(&app, "window-moved", WindowMovedPayload { id, rect })?;
            Ok(Some(rect))
        }
        None => Ok(None),
    }
}

#[tauri::command]
fn pointer_up(
    pointer: Point,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<Option<WindowHandle>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let committed = manager.pointer_up(pointer);
    if let Some(window) = &committed {
        emit(&app, "window-updated", window.clone())?;
    }
    Ok(committed)
}

#[tauri::command]
fn cancel_gesture(state: State<Mutex<WindowManager>>) -> Result<(), String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    manager.cancel_gesture();
    Ok(())
}

// ===== Desktop Commands =====

#[tauri::command]
fn set_viewport(width: f64, height: f64, state: State<Mutex<WindowManager>>) -> Result<(), String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    manager.set_viewport(Size::new(width, height));
    Ok(())
}

#[tauri::command]
fn toggle_launcher(app: AppHandle, state: State<Mutex<WindowManager>>) -> Result<bool, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let open = manager.toggle_launcher();
    emit(&app, "launcher-toggled", LauncherToggledPayload { open })?;
    Ok(open)
}

#[tauri::command]
fn launch_from_drawer(
    kind: WindowKind,
    app: AppHandle,
    state: State<Mutex<WindowManager>>,
) -> Result<OpenOutcome, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let outcome = manager.launch_from_drawer(kind);
    emit(&app, "launcher-toggled", LauncherToggledPayload { open: false })?;
    if outcome.window().is_some() {
        emit_outcome(&app, &manager, &outcome)?;
    }
    Ok(outcome)
}

#[tauri::command]
fn get_desktop_snapshot(state: State<Mutex<WindowManager>>) -> Result<DeskSnapshot, String> {
    let manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.snapshot())
}

// ===== Leaderboard Commands =====

#[tauri::command]
async fn fetch_leaderboard(
    game: String,
    wallet_address: Option<String>,
    client: State<'_, LeaderboardClient>,
) -> Result<LeaderboardView, String> {
    let game = parse_game(&game)?;
    Ok(client.fetch_game(game, wallet_address.as_deref()).await)
}

#[tauri::command]
async fn fetch_all_leaderboards(
    client: State<'_, LeaderboardClient>,
) -> Result<Vec<GameLeaderboard>, String> {
    Ok(client.fetch_all().await)
}

// ===== Local Store Commands =====

#[tauri::command]
async fn get_best_score(
    game: String,
    variant: Option<String>,
    store: State<'_, LocalStore>,
) -> Result<Option<i64>, String> {
    let game = parse_game(&game)?;
    store
        .best_score(game, variant.as_deref())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
async fn record_score(
    game: String,
    variant: Option<String>,
    score: i64,
    store: State<'_, LocalStore>,
) -> Result<ScoreRecord, String> {
    let game = parse_game(&game)?;
    store
        .record_score(game, variant.as_deref(), score)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
async fn read_blob(key: String, store: State<'_, LocalStore>) -> Result<Option<Value>, String> {
    store.read_blob(&key).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn write_blob(key: String, value: Value, store: State<'_, LocalStore>) -> Result<(), String> {
    store.write_blob(&key, &value).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn remove_blob(key: String, store: State<'_, LocalStore>) -> Result<bool, String> {
    store.remove_blob(&key).await.map_err(|e| e.to_string())
}

pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config_path = app.path().app_config_dir()?.join(CONFIG_FILE_NAME);
            let config = DeskConfig::load_or_default(&config_path).unwrap_or_else(|e| {
                eprintln!("Ignoring unreadable {}: {}", config_path.display(), e);
                DeskConfig::default()
            });

            init_logging(&config.logging);
            info!(config = %config_path.display(), "Desktop starting");

            let store = LocalStore::in_app_data(&app.path().app_data_dir()?);
            let client = LeaderboardClient::new(&config.leaderboard)?;
            info!(api_base = client.api_base(), "Leaderboard client ready");

            app.manage(Mutex::new(WindowManager::new(config.windows.clone())));
            app.manage(store);
            app.manage(client);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Window management commands
            open_window,
            open_new_window,
            focus_window,
            close_window,
            drag_end,
            resize_end,
            // Pointer commands
            pointer_down_drag,
            pointer_down_resize,
            pointer_move,
            pointer_up,
            cancel_gesture,
            // Desktop commands
            set_viewport,
            toggle_launcher,
            launch_from_drawer,
            get_desktop_snapshot,
            // Leaderboard
            fetch_leaderboard,
            fetch_all_leaderboards,
            // Local store
            get_best_score,
            record_score,
            read_blob,
            write_blob,
            remove_blob,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
