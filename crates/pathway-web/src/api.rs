//! HTTP routes for the browser form.

use actix_web::{
    error::InternalError, middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer,
    Responder,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use pathway_core::{quiz, ModelSettings, PathwayReport};
use pathway_suggest::{Connector, LlmConnector};

const INDEX_HTML: &str = include_str!("../static/index.html");

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared, immutable server state.
///
/// Holds a connector rather than a model client: every submission connects
/// with its own API key, so requests never share a credential.
pub struct AppState {
    pub connector: Box<dyn Connector>,
}

impl AppState {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
        }
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct GoalQuiz {
    pub goal: &'static str,
    pub questions: Vec<&'static str>,
}

#[derive(Deserialize)]
pub struct QuizQuery {
    pub goal: String,
}

#[derive(Deserialize)]
pub struct PathwayRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub career_goal: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Serialize)]
pub struct PathwayResponse {
    /// Rendered report, shown as-is by the form
    pub report: String,
    pub details: PathwayReport,
}

fn question_texts(goal: &str) -> Vec<&'static str> {
    quiz::questions_for(goal).iter().map(|q| q.question).collect()
}

// ============================================================
// API HANDLERS
// ============================================================

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Pathway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// All career goals with their quiz questions
async fn list_goals() -> impl Responder {
    let goals: Vec<GoalQuiz> = quiz::career_goals()
        .map(|goal| GoalQuiz {
            goal,
            questions: question_texts(goal),
        })
        .collect();
    HttpResponse::Ok().json(ApiResponse::success(goals))
}

/// Question labels for one goal; empty for goals without a quiz
async fn quiz_labels(query: web::Query<QuizQuery>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(question_texts(&query.goal)))
}

/// Run the pathway generator for one form submission.
async fn generate_pathway(
    data: web::Data<AppState>,
    req: web::Json<PathwayRequest>,
) -> impl Responder {
    let settings = ModelSettings::for_key(req.api_key.as_str());
    let generator = match data.connector.connect(&settings) {
        Ok(g) => g,
        Err(e) => {
            warn!("rejecting submission: {}", e);
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error(&format!("Failed to configure API: {e}")));
        }
    };

    let report = pathway_suggest::generate_pathway(
        generator.as_ref(),
        &req.career_goal,
        &req.skills,
        &req.answers,
    )
    .await;

    HttpResponse::Ok().json(ApiResponse::success(PathwayResponse {
        report: report.to_string(),
        details: report,
    }))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Malformed JSON bodies get the same envelope as every other failure.
fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request: {err}");
    warn!("{}", message);
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message));
    InternalError::from_response(err, response).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/api/goals", web::get().to(list_goals))
        .route("/api/quiz", web::get().to(quiz_labels))
        .route("/api/pathway", web::post().to(generate_pathway));
}

/// Configure and run the form server
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(LlmConnector));

    info!("Career Pathway form at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
