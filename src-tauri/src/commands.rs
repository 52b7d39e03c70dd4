use crate::delivery::{DeliveryDispatcher, Outcome};
use crate::wizard::{
    BriefingRecord, FormStateMachine, ProjectStatus, Service, Step, INVESTMENT_RANGES,
};
use serde::Serialize;
use std::sync::Mutex;
use tauri::command;

/// Everything the shell needs, managed once at startup.
pub struct AppState {
    pub machine: Mutex<FormStateMachine>,
    pub dispatcher: DeliveryDispatcher,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub step: u8,
    pub title: &'static str,
    pub record: BriefingRecord,
}

impl WizardSnapshot {
    fn of(machine: &FormStateMachine) -> Self {
        Self {
            step: machine.step().ordinal(),
            title: machine.step().title(),
            record: machine.record().clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub ordinal: u8,
    pub title: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingOptions {
    pub steps: Vec<StepInfo>,
    pub services: Vec<&'static str>,
    pub project_status: Vec<&'static str>,
    pub investment_ranges: Vec<&'static str>,
}

/* ---------- 1.  WIZARD STATE ---------- */

#[command]
pub fn briefing_state(state: tauri::State<'_, AppState>) -> Result<WizardSnapshot, String> {
    let machine = state.machine.lock().unwrap();
    Ok(WizardSnapshot::of(&machine))
}

#[command]
pub fn briefing_options() -> BriefingOptions {
    BriefingOptions {
        steps: Step::ALL
            .iter()
            .map(|s| StepInfo {
                ordinal: s.ordinal(),
                title: s.title(),
            })
            .collect(),
        services: Service::ALL.iter().map(|s| s.label()).collect(),
        project_status: ProjectStatus::ALL.iter().map(|s| s.label()).collect(),
        investment_ranges: INVESTMENT_RANGES.to_vec(),
    }
}

/* ---------- 2.  SETTERS ---------- */

#[command]
pub fn update_field(
    field: String,
    value: String,
    state: tauri::State<'_, AppState>,
) -> Result<String, String> {
    let mut machine = state.machine.lock().unwrap();
    machine.edit(&field, value).map_err(|e| e.to_string())?;
    Ok("Field stored".to_string())
}

#[command]
pub fn select_service(service: u8, state: tauri::State<'_, AppState>) -> Result<String, String> {
    let service = Service::select_service(service)?;
    let mut machine = state.machine.lock().unwrap();
    machine.select_service(service);
    Ok("Service stored".to_string())
}

/* ---------- 3.  NAVIGATION ---------- */

#[command]
pub fn next_step(state: tauri::State<'_, AppState>) -> Result<WizardSnapshot, String> {
    let mut machine = state.machine.lock().unwrap();
    machine.next().map_err(|e| e.to_string())?;
    Ok(WizardSnapshot::of(&machine))
}

#[command]
pub fn prev_step(state: tauri::State<'_, AppState>) -> Result<WizardSnapshot, String> {
    let mut machine = state.machine.lock().unwrap();
    machine.prev();
    Ok(WizardSnapshot::of(&machine))
}

#[command]
pub fn reset_briefing(state: tauri::State<'_, AppState>) -> Result<WizardSnapshot, String> {
    let mut machine = state.machine.lock().unwrap();
    machine.reset();
    Ok(WizardSnapshot::of(&machine))
}

/* ---------- 4.  SUBMISSION PIPELINE ---------- */

#[command]
pub async fn submit_briefing(state: tauri::State<'_, AppState>) -> Result<Outcome, String> {
    // Snapshot under the lock; the dispatcher runs without it.
    let record = {
        let machine = state.machine.lock().unwrap();
        machine.submission().map_err(|e| e.to_string())?
    };

    let outcome = state.dispatcher.submit(&record).await;

    // A delivered briefing ends the session.
    if matches!(outcome, Outcome::Shared | Outcome::SavedForManualSend) {
        state.machine.lock().unwrap().reset();
    }
    Ok(outcome)
}
