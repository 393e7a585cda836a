use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

use crate::engine::{evaluate, EvaluationResult, OddsInput, PerformanceSignals, SignalInputs, Sportsbook};
use crate::error::EvalError;
use crate::ledger::{self, EvaluationLedger, EvaluationRecord};

/// State for one local evaluation session.
///
/// The dashboard serves a single session, so it owns a single ledger. The
/// mutex only bridges axum's worker threads.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Mutex<EvaluationLedger>>,
    pub default_sportsbook: Sportsbook,
}

impl AppState {
    pub fn new(ledger: EvaluationLedger, default_sportsbook: Sportsbook) -> Self {
        AppState {
            ledger: Arc::new(Mutex::new(ledger)),
            default_sportsbook,
        }
    }
}

type ApiError = (StatusCode, String);

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/defaults", get(defaults_handler))
        .route("/api/sportsbooks", get(sportsbooks_handler))
        .route("/api/evaluate", post(evaluate_handler))
        .route(
            "/api/evaluations",
            get(list_handler).post(save_handler).delete(reset_handler),
        )
        .with_state(Arc::new(state))
}

// ── Request / response bodies ────────────────────────────────────────────────

/// Odds as sent by a form: either a JSON number or text such as "+120".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OddsField {
    Number(i64),
    /// Non-integral numbers are accepted here only to be rejected as invalid odds
    Fractional(f64),
    Text(String),
}

impl OddsField {
    fn parse(&self) -> Result<OddsInput, EvalError> {
        match self {
            OddsField::Number(n) => {
                let odds = i32::try_from(*n).map_err(|_| EvalError::InvalidOdds(n.to_string()))?;
                OddsInput::new(odds)
            }
            OddsField::Fractional(x) => Err(EvalError::InvalidOdds(x.to_string())),
            OddsField::Text(s) => s.parse(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(flatten)]
    pub signals: SignalInputs,
    pub odds: OddsField,
}

impl EvaluateRequest {
    fn run(&self) -> Result<EvaluationResult, EvalError> {
        let signals = PerformanceSignals::new(self.signals)?;
        let odds = self.odds.parse()?;
        Ok(evaluate(&signals, odds))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sportsbook: Option<String>,
    #[serde(flatten)]
    pub evaluation: EvaluateRequest,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved: bool,
    pub result: EvaluationResult,
    pub records: Vec<EvaluationRecord>,
}

/// Values a fresh (or cleared) form starts from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefaults {
    pub name: String,
    #[serde(flatten)]
    pub signals: SignalInputs,
    pub odds: i32,
    pub sportsbook: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/defaults
async fn defaults_handler(State(state): State<Arc<AppState>>) -> Json<FormDefaults> {
    Json(FormDefaults {
        name: String::new(),
        signals: SignalInputs::default(),
        odds: OddsInput::default().value(),
        sportsbook: state.default_sportsbook.label().to_string(),
    })
}

/// GET /api/sportsbooks
async fn sportsbooks_handler() -> Json<Vec<String>> {
    Json(
        Sportsbook::KNOWN
            .iter()
            .map(|b| b.label().to_string())
            .collect(),
    )
}

/// POST /api/evaluate
async fn evaluate_handler(
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, ApiError> {
    req.run().map(Json).map_err(bad_request)
}

/// POST /api/evaluations — evaluate, then save under `name` if one was given.
async fn save_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let result = req.evaluation.run().map_err(bad_request)?;
    // A blank selection falls back to the configured book
    let sportsbook = match req.sportsbook.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.parse().map_err(bad_request)?,
        _ => state.default_sportsbook.clone(),
    };

    let mut session_ledger = lock_ledger(&state)?;
    let saved = ledger::save_evaluation(&mut session_ledger, &req.name, &result, &sportsbook);
    Ok(Json(SaveResponse {
        saved,
        result,
        records: ledger::list_evaluations(&session_ledger).to_vec(),
    }))
}

/// GET /api/evaluations
async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EvaluationRecord>>, ApiError> {
    let session_ledger = lock_ledger(&state)?;
    Ok(Json(ledger::list_evaluations(&session_ledger).to_vec()))
}

/// DELETE /api/evaluations
async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    let mut session_ledger = lock_ledger(&state)?;
    ledger::reset_ledger(&mut session_ledger);
    Ok(StatusCode::NO_CONTENT)
}

fn lock_ledger(state: &AppState) -> Result<MutexGuard<'_, EvaluationLedger>, ApiError> {
    state.ledger.lock().map_err(|_| {
        warn!("Evaluation ledger lock poisoned");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ledger unavailable".to_string(),
        )
    })
}

fn bad_request(e: EvalError) -> ApiError {
    warn!("Rejected request: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

/// Embedded single-file dashboard (HTML + CSS + JS)
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Sports Bet Evaluator</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --green: #00c896;
    --red: #ff4f6a;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; max-width: 860px; margin: 0 auto; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  .panel h2 { font-size: 1rem; margin-bottom: .8rem; }
  label { display: grid; grid-template-columns: 180px 1fr 3rem; gap: .8rem; align-items: center; margin: .4rem 0; font-size: .9rem; }
  input[type=text], input[type=number], select { background: var(--bg); color: var(--text); border: 1px solid var(--border); border-radius: 6px; padding: .4rem .6rem; }
  .row { display: flex; gap: 1rem; flex-wrap: wrap; align-items: center; }
  .metric { font-size: 1.5rem; font-weight: 700; }
  .pos { color: var(--green); }
  .neg { color: var(--red); }
  .grade { font-size: 1.8rem; font-weight: 800; color: var(--accent); }
  button { background: var(--accent); color: #fff; border: none; border-radius: 6px; padding: .5rem 1rem; cursor: pointer; font-weight: 600; }
  button.secondary { background: var(--border); }
  table { width: 100%; border-collapse: collapse; }
  th { padding: .6rem .8rem; text-align: left; font-size: .75rem; text-transform: uppercase; color: var(--muted); border-bottom: 1px solid var(--border); }
  td { padding: .55rem .8rem; font-size: .88rem; border-bottom: 1px solid #1e2130; }
  .empty { color: var(--muted); text-align: center; padding: 1.5rem; font-size: .9rem; }
  #error { color: var(--red); min-height: 1.2rem; }
</style>
</head>
<body>
<header><h1>📊 Sports Bet Evaluator</h1></header>
<main>
  <section class="panel">
    <div class="row"><span>📝 Bet name</span><input type="text" id="name" size="40"></div>
  </section>
  <section class="panel">
    <h2>📈 Success Rate Inputs (%)</h2>
    <div id="sliders"></div>
  </section>
  <section class="panel">
    <h2>💰 Best Sportsbook Odds</h2>
    <div class="row">
      <input type="text" id="odds" placeholder="+120 or -135">
      <select id="sportsbook"></select>
      <input type="text" id="custom-book" placeholder="custom sportsbook">
    </div>
  </section>
  <section class="panel">
    <div class="row">
      <div>🎯 Win probability <div class="metric" id="winprob">–</div></div>
      <div>📈 +EV % <div class="metric" id="ev">–</div></div>
      <div>🏅 Grade <div class="grade" id="grade">–</div></div>
      <div id="stars"></div>
    </div>
    <div id="error"></div>
    <div class="row">
      <button id="save">💾 Save Evaluation</button>
      <button id="clear" class="secondary">🧹 Clear All Inputs</button>
      <button id="reset" class="secondary">🗑 Reset Saved</button>
    </div>
  </section>
  <section class="panel">
    <h2>📋 Saved Evaluations</h2>
    <table>
      <thead><tr><th>Bet</th><th>Win Probability</th><th>+EV %</th><th>Grade</th><th>AI Confidence</th><th>Sportsbook</th></tr></thead>
      <tbody id="saved"><tr><td colspan="6" class="empty">No saved evaluations</td></tr></tbody>
    </table>
  </section>
</main>
<script>
const SIGNALS = [
  ['last5', 'Last 5 Games', 0], ['last10', 'Last 10 Games', 0], ['last20', 'Last 20 Games', 0],
  ['h2h', 'H2H Matchups', 0], ['season', 'Current Season', 0], ['prevSeason', 'Previous Season', 0],
  ['aiConfidence', '🤖 AI Confidence Score (1–100)', 1],
];

function el(id) { return document.getElementById(id); }

function buildSliders() {
  el('sliders').innerHTML = SIGNALS.map(([key, label, min]) =>
    `<label>${label}<input type="range" id="${key}" min="${min}" max="100" value="50"><span id="${key}-v">50</span></label>`
  ).join('');
  for (const [key] of SIGNALS) {
    el(key).addEventListener('input', () => { el(key + '-v').textContent = el(key).value; evaluate(); });
  }
}

function payload() {
  const body = { odds: el('odds').value };
  for (const [key] of SIGNALS) body[key] = Number(el(key).value);
  return body;
}

function sportsbook() {
  const label = el('custom-book').value.trim() || el('sportsbook').value;
  return label || null;
}

function render(r) {
  el('winprob').textContent = r.estimatedWinProbability.toFixed(2) + '%';
  el('ev').textContent = r.evPercent.toFixed(2) + '%';
  el('ev').className = 'metric ' + (r.evPercent >= 0 ? 'pos' : 'neg');
  el('grade').textContent = r.grade;
  el('stars').textContent = '⭐'.repeat(r.stars);
}

function renderSaved(rows) {
  if (!rows.length) {
    el('saved').innerHTML = '<tr><td colspan="6" class="empty">No saved evaluations</td></tr>';
    return;
  }
  const body = el('saved');
  body.replaceChildren();
  for (const r of rows) {
    const tr = document.createElement('tr');
    for (const value of [r.name, r.winProbabilityDisplay, r.evPercentDisplay, r.grade, r.confidenceDisplay, r.sportsbookName]) {
      const td = document.createElement('td');
      td.textContent = value;
      tr.appendChild(td);
    }
    body.appendChild(tr);
  }
}

async function call(method, url, body) {
  const r = await fetch(url, {
    method, headers: { 'Content-Type': 'application/json' },
    body: body ? JSON.stringify(body) : undefined,
  });
  if (!r.ok) throw new Error(await r.text());
  return r.status === 204 ? null : r.json();
}

async function evaluate() {
  try {
    render(await call('POST', '/api/evaluate', payload()));
    el('error').textContent = '';
  } catch (e) { el('error').textContent = e.message; }
}

async function save() {
  try {
    const body = Object.assign(payload(), { name: el('name').value, sportsbook: sportsbook() });
    const r = await call('POST', '/api/evaluations', body);
    render(r.result);
    renderSaved(r.records);
  } catch (e) { el('error').textContent = e.message; }
}

async function clearInputs() {
  const d = await call('GET', '/api/defaults');
  el('name').value = d.name;
  for (const [key] of SIGNALS) { el(key).value = d[key]; el(key + '-v').textContent = d[key]; }
  el('odds').value = d.odds;
  const known = Array.from(el('sportsbook').options).some(o => o.value === d.sportsbook);
  el('sportsbook').value = known ? d.sportsbook : el('sportsbook').options[0].value;
  el('custom-book').value = known ? '' : d.sportsbook;
  evaluate();
}

async function init() {
  buildSliders();
  const books = await call('GET', '/api/sportsbooks');
  for (const b of books) {
    const option = document.createElement('option');
    option.textContent = b;
    el('sportsbook').appendChild(option);
  }
  el('odds').addEventListener('input', evaluate);
  el('save').addEventListener('click', save);
  el('clear').addEventListener('click', clearInputs);
  el('reset').addEventListener('click', async () => { await call('DELETE', '/api/evaluations'); renderSaved([]); });
  await clearInputs();
  renderSaved(await call('GET', '/api/evaluations'));
}

init();
</script>
</body>
</html>
"#;
