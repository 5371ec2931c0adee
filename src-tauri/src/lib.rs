use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use log::{info, warn};
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use pathway_core::{quiz, ConfigError, ModelSettings};
use pathway_suggest::LlmGenerator;

/// Model client for the whole process. Set once, when the user enters a key.
#[derive(Default)]
struct GeneratorState {
    generator: OnceLock<LlmGenerator>,
    busy: AtomicBool,
}

/// Held while a submission runs. Submissions are serialized: a second one is
/// refused until the guard drops.
struct SubmissionGuard<'a>(&'a AtomicBool);

impl<'a> SubmissionGuard<'a> {
    fn acquire(busy: &'a AtomicBool) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(busy))
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[tauri::command]
fn list_career_goals() -> Vec<String> {
    quiz::career_goals().map(str::to_string).collect()
}

#[tauri::command]
fn quiz_questions(goal: String) -> Vec<String> {
    quiz::questions_for(&goal)
        .iter()
        .map(|q| q.question.to_string())
        .collect()
}

/// Connect the model with the key from the startup prompt.
///
/// A blank or cancelled prompt is fatal: an error dialog is shown and the
/// app exits once it is dismissed.
#[tauri::command]
fn configure_api_key(
    api_key: String,
    app: AppHandle,
    state: tauri::State<'_, GeneratorState>,
) -> Result<(), String> {
    let settings = ModelSettings::for_key(api_key);
    if let Err(e) = settings.require_credential() {
        warn!("no API key entered, shutting down");
        let handle = app.clone();
        app.dialog()
            .message("You must enter an API key to proceed.")
            .title("Key Required")
            .kind(MessageDialogKind::Error)
            .show(move |_| handle.exit(1));
        return Err(e.to_string());
    }

    let generator = LlmGenerator::connect(&settings).map_err(|e| e.to_string())?;
    state
        .generator
        .set(generator)
        .map_err(|_| "API key is already configured".to_string())?;
    info!("model configured: {:?}", settings);
    Ok(())
}

#[tauri::command]
async fn generate_pathway(
    career_goal: String,
    skills: String,
    answers: Vec<String>,
    state: tauri::State<'_, GeneratorState>,
) -> Result<String, String> {
    let generator = state
        .generator
        .get()
        .ok_or_else(|| ConfigError::MissingCredential.to_string())?;
    let _guard = SubmissionGuard::acquire(&state.busy)
        .ok_or_else(|| "A pathway is already being generated".to_string())?;

    let report =
        pathway_suggest::generate_pathway(generator, &career_goal, &skills, &answers).await;
    Ok(report.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(GeneratorState::default())
        .invoke_handler(tauri::generate_handler![
            list_career_goals,
            quiz_questions,
            configure_api_key,
            generate_pathway,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
