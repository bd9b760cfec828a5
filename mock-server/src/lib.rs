//! In-process stand-in for the PokeAPI v2 endpoints the client uses.
//!
//! Serves `/pokemon`, `/pokemon/{key}`, `/pokemon-species/{key}` and
//! `/type/{key}` from the fixtures in [`fixtures`]. Keys match an id or an
//! exact (case-sensitive) name; anything else is a 404.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use fixtures::Dex;

/// Upstream's default page size.
const DEFAULT_LIMIT: usize = 20;

#[derive(Debug)]
pub struct MockState {
    base_url: String,
    dex: Dex,
}

pub type SharedState = Arc<MockState>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Router whose generated URLs are rooted at `base_url`.
pub fn app_with_base(base_url: &str) -> Router {
    let base_url = base_url.trim_end_matches('/').to_string();
    let state = Arc::new(MockState {
        dex: Dex::new(&base_url),
        base_url,
    });
    Router::new()
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/{key}", get(get_pokemon))
        .route("/pokemon-species/{key}", get(get_species))
        .route("/type/{key}", get(get_type))
        .with_state(state)
}

pub fn app() -> Router {
    app_with_base("http://localhost:3000")
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "mock PokeAPI listening");
    axum::serve(listener, app_with_base(&format!("http://{addr}"))).await
}

type Lookup = Result<Json<Value>, (StatusCode, &'static str)>;

fn find(records: &[Value], key: &str) -> Lookup {
    let hit = match key.parse::<u64>() {
        Ok(id) => records.iter().find(|r| r["id"].as_u64() == Some(id)),
        Err(_) => records.iter().find(|r| r["name"].as_str() == Some(key)),
    };
    match hit {
        Some(record) => Ok(Json(record.clone())),
        None => {
            tracing::debug!(key, "no fixture");
            Err((StatusCode::NOT_FOUND, "Not Found"))
        }
    }
}

async fn get_pokemon(State(state): State<SharedState>, Path(key): Path<String>) -> Lookup {
    find(&state.dex.pokemon, &key)
}

async fn get_species(State(state): State<SharedState>, Path(key): Path<String>) -> Lookup {
    find(&state.dex.species, &key)
}

async fn get_type(State(state): State<SharedState>, Path(key): Path<String>) -> Lookup {
    find(&state.dex.types, &key)
}

async fn list_pokemon(State(state): State<SharedState>, Query(query): Query<ListQuery>) -> Json<Value> {
    Json(list_page(&state, query))
}

fn list_page(state: &MockState, query: ListQuery) -> Value {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);
    let all = &state.dex.pokemon;
    let count = all.len();
    let base = &state.base_url;

    let results: Vec<Value> = all
        .iter()
        .skip(offset)
        .take(limit)
        .map(|p| {
            json!({
                "name": p["name"],
                "url": format!("{base}/pokemon/{}/", p["id"]),
            })
        })
        .collect();

    let page_url = |offset: usize| format!("{base}/pokemon?offset={offset}&limit={limit}");
    let next = (offset.saturating_add(limit) < count).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": results,
    })
}
