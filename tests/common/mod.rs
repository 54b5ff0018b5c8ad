#![allow(dead_code)]

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use frequencia_client::core::config::ApiConfig;
use frequencia_client::core::http::HttpClient;
use frequencia_client::shared::ui::Dialogs;

/// Everything the fake backend received
#[derive(Debug, Default)]
pub struct Recorded {
    pub search_terms: Vec<String>,
    pub attendance_bodies: Vec<Value>,
    pub unavailability_forms: Vec<HashMap<String, String>>,
    pub report_queries: Vec<HashMap<String, String>>,
    pub password_bodies: Vec<Value>,
    pub headers: Vec<HashMap<String, String>>,
}

pub type Shared = Arc<Mutex<Recorded>>;

pub struct FakeBackend {
    pub http: Arc<HttpClient>,
    pub recorded: Shared,
}

fn personnel() -> Value {
    json!([
        {"id": 1, "nome": "João Silva", "matricula": "M-100", "base": "Centro", "prefixo": "EQ-01", "polo": "Ana", "regional": "Leste"},
        {"id": 2, "nome": "Silvana Souza", "matricula": "M-200", "base": "Norte", "prefixo": null, "polo": null, "regional": null}
    ])
}

async fn search_personnel(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let term = params.get("q").cloned().unwrap_or_default();
    state.lock().unwrap().search_terms.push(term.clone());

    let needle = term.to_lowercase();
    let found: Vec<Value> = personnel()
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["nome"].as_str().unwrap().to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Json(json!({ "eletricistas": found }))
}

async fn search_prefixes(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let term = params.get("q").cloned().unwrap_or_default().to_uppercase();
    let prefixos: Vec<Value> = ["EQ-01", "EQ-07", "EQ-12"]
        .iter()
        .filter(|p| p.contains(&term))
        .map(|p| json!({"prefixo": p, "base": "Centro", "total_eletricistas": 3}))
        .collect();
    Json(json!({ "prefixos": prefixos }))
}

async fn save_attendance(
    State(state): State<Shared>,
    headers: axum::http::HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let total = body["associacoes"].as_array().map(Vec::len).unwrap_or(0);
    let mut recorded = state.lock().unwrap();
    recorded.attendance_bodies.push(body);
    recorded.headers.push(
        headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect(),
    );
    Json(json!({ "success": true, "total": total }))
}

async fn reassign(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "success": false, "erro": "Eletricista já está na sua supervisão" }))
}

async fn save_unavailability(State(state): State<Shared>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        fields.insert(name, value);
    }
    state.lock().unwrap().unavailability_forms.push(fields);
    Json(json!({ "success": true }))
}

async fn report_by_supervisor(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let periodo = json!({
        "inicio": params.get("data_inicio"),
        "fim": params.get("data_fim"),
    });
    state.lock().unwrap().report_queries.push(params);
    Json(json!({
        "success": true,
        "periodo": periodo,
        "total_geral": 0,
        "motivos": [],
        "dados": []
    }))
}

async fn report_by_prefix(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "periodo": {"inicio": params.get("data_inicio"), "fim": params.get("data_fim")},
        "total_prefixos": 1,
        "total_registros": 2,
        "dados": [
            {"prefixo": "EQ-12", "data": "2024-05-01", "motivo1": "PRESENTE", "motivo2": null},
            {"prefixo": "EQ-12", "data": "2024-05-02", "motivo1": "Férias", "motivo2": null}
        ]
    }))
}

async fn report_overall() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

async fn reset_password(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    state.lock().unwrap().password_bodies.push(body);
    Json(json!({ "success": true, "mensagem": "Senha alterada com sucesso" }))
}

async fn toggle_status(Json(_body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "success": false, "erro": "Acesso negado" })),
    )
}

/// Serve the fake backend on an ephemeral port
pub async fn spawn_backend() -> FakeBackend {
    let recorded: Shared = Arc::default();

    let app = Router::new()
        .route("/api/buscar-eletricistas", get(search_personnel))
        .route("/api/buscar-prefixos", get(search_prefixes))
        .route("/api/salvar-frequencia", post(save_attendance))
        .route("/api/remanejar-eletricista", post(reassign))
        .route("/api/salvar-indisponibilidade", post(save_unavailability))
        .route("/api/relatorio-geral", get(report_overall))
        .route("/api/relatorio-por-supervisor", get(report_by_supervisor))
        .route("/api/relatorio-por-prefixo", get(report_by_prefix))
        .route("/api/usuarios/toggle-status", post(toggle_status))
        .route("/api/usuarios/resetar-senha", post(reset_password))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = ApiConfig::with_base_url(format!("http://{}", addr));
    config.session_cookie = Some("session=abc123".to_string());

    FakeBackend {
        http: Arc::new(HttpClient::new(&config).unwrap()),
        recorded,
    }
}

/// Dialogs that confirm everything, answer prompts from a queue and keep
/// every alert
#[derive(Default)]
pub struct RecordingDialogs {
    pub alerts: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingDialogs {
    pub fn with_prompts(answers: &[&str]) -> Self {
        Self {
            alerts: Mutex::default(),
            prompts: Mutex::new(answers.iter().rev().map(|a| a.to_string()).collect()),
        }
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts.lock().unwrap().last().cloned()
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.prompts.lock().unwrap().pop()
    }
}
