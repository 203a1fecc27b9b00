//! HTTP front end and request orchestration. The `/animate` handler is the
//! only caller of the extraction pipelines; every failure path downgrades to
//! the hardcoded defaults instead of surfacing an error page.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::extract::{self, defaults, AnimationSequence, MoleculeStructure};
use crate::llm::openai;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const MOLECULE_HTML: &str = include_str!("../assets/molecule.html");
const MOLECULE_JS: &str = include_str!("../assets/molecule.js");

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Last submitted form pair. Held per process so a reload can show what was
/// asked for; the extraction core never reads it.
#[derive(Debug, Default)]
struct Session {
    formula: String,
    api_key: String,
}

#[derive(Clone)]
struct AppState {
    llm: openai::OpenAiClient,
    session: Arc<Mutex<Session>>,
}

#[derive(Debug, Deserialize)]
struct AnimateForm {
    #[serde(default)]
    formula: String,
    #[serde(default)]
    api_key: String,
}

pub async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let state = AppState {
        llm: openai::OpenAiClient::new(),
        session: Arc::new(Mutex::new(Session::default())),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/animate", post(animate))
        .route("/static/molecule.js", get(molecule_js))
        .with_state(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    info!("serving on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn molecule_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], MOLECULE_JS)
}

async fn animate(State(state): State<AppState>, Form(form): Form<AnimateForm>) -> Html<String> {
    let formula = {
        let trimmed = form.formula.trim();
        if trimmed.is_empty() { "H2O" } else { trimmed }.to_string()
    };
    let api_key = form.api_key.trim().to_string();

    if let Ok(mut session) = state.session.lock() {
        session.formula = formula.clone();
        session.api_key = api_key.clone();
    }

    let (structure, animation) = resolve_molecule(&state.llm, &formula, &api_key).await;
    Html(render_molecule_page(&formula, &structure, &animation))
}

/// Produces the structure/animation pair for a request. Without a key the
/// hardcoded defaults are served and no model call is made. A failed
/// structure call serves both defaults without issuing the animation call; a
/// failed animation call keeps the extracted structure and serves the default
/// script. Transport errors stop here.
async fn resolve_molecule(
    llm: &openai::OpenAiClient,
    formula: &str,
    api_key: &str,
) -> (MoleculeStructure, AnimationSequence) {
    if api_key.is_empty() {
        return (defaults::water_structure(), defaults::default_animation());
    }

    let structure = match llm.request_structure(api_key, formula).await {
        Ok(text) => extract::extract_structure(&text, formula),
        Err(err) => {
            warn!(formula = %formula, error = %err, "structure request failed, serving defaults");
            return (defaults::water_structure(), defaults::default_animation());
        }
    };
    let animation = match llm.request_animation(api_key, formula).await {
        Ok(text) => extract::extract_animation(&text),
        Err(err) => {
            warn!(formula = %formula, error = %err, "animation request failed, using default script");
            defaults::default_animation()
        }
    };
    (structure, animation)
}

fn render_molecule_page(
    formula: &str,
    structure: &MoleculeStructure,
    animation: &AnimationSequence,
) -> String {
    let structure_json = serde_json::to_string(structure)
        .unwrap_or_else(|_| r#"{"atoms":[],"description":""}"#.to_string());
    let animation_json =
        serde_json::to_string(animation.steps()).unwrap_or_else(|_| "[]".to_string());
    MOLECULE_HTML
        .replace("{{formula}}", &escape_html(formula))
        .replace("{{structure_json}}", &escape_for_script(&structure_json))
        .replace("{{animation_json}}", &escape_for_script(&animation_json))
}

// keeps "</script>" in extracted text from breaking out of the inline block
fn escape_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
