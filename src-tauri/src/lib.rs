// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod commands;
pub mod config;
pub mod delivery;
pub mod dossier;
pub mod notify;
pub mod wizard;

use crate::commands::*;
use crate::config::BriefingConfig;
use crate::delivery::{DeliveryDispatcher, NoShareHost, SystemOpener};
use crate::notify::EventNotifier;
use crate::wizard::FormStateMachine;
use std::sync::{Arc, Mutex};
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = BriefingConfig::from_env();
            log::info!(
                "briefing intake ready, saving dossiers to {}",
                config.save_dir.display()
            );
            let notifier = Arc::new(EventNotifier::new(app.handle().clone()));
            let dispatcher = DeliveryDispatcher::new(
                config,
                notifier,
                Arc::new(NoShareHost),
                Box::new(SystemOpener),
            );
            app.manage(AppState {
                machine: Mutex::new(FormStateMachine::new()),
                dispatcher,
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            briefing_state,
            briefing_options,
            update_field,
            select_service,
            next_step,
            prev_step,
            reset_briefing,
            submit_briefing
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
