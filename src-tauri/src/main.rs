#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod backend_config;
mod backend_launch;
mod backend_monitor;
mod backend_path;
mod backend_process_lifecycle;
mod backend_readiness;
mod debug_mode;
mod desktop_bridge;
mod desktop_bridge_commands;
mod exit_cleanup;
mod exit_events;
mod exit_state;
mod logging;
mod main_window;
mod origin_policy;
mod process_control;
mod runtime_paths;
mod single_instance;
mod startup_task;
mod ui_dispatch;
mod update_checker;
mod update_events;
mod update_feed;
mod update_install_flow;
mod update_poller;
mod update_status;
mod update_transport;
mod webui_paths;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{
    append_debug_log, append_desktop_log, append_shutdown_log, append_startup_log,
    append_update_log,
};
pub(crate) use app_types::{
    AtomicFlagGuard, BackendProcess, DesktopBridgeResult, DownloadedUpdate, LaunchPlan, ShellState,
    WindowContent,
};

fn main() {
    app_runtime::run();
}
