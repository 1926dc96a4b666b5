//! In-process stand-in for the Live API.
//!
//! Serves every public endpoint under `/public/v2` from `Fixtures`, wrapped
//! in the same `{errorCode, result}` envelope the real service uses. Requests
//! without the expected bearer key get error code 4 and a 401.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, Query, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod fixtures;

pub use fixtures::Fixtures;

pub const API_PREFIX: &str = "/public/v2";
pub const DEFAULT_API_KEY: &str = "test-key";
/// Logbook page size. Small so a handful of fixtures spans several pages.
pub const PAGE_SIZE: usize = 2;
pub const MAX_BATCH_USERS: usize = 25;

/// Error codes placed in `errorCode`.
pub mod codes {
    pub const OK: i32 = 0;
    pub const USER_NOT_FOUND: i32 = 1;
    pub const MISSING_PARAMETERS: i32 = 2;
    pub const ENDPOINT_ERROR: i32 = 3;
    pub const NOT_AUTHORIZED: i32 = 4;
    pub const SERVER_NOT_FOUND: i32 = 5;
    pub const FLIGHT_NOT_FOUND: i32 = 6;
    pub const NO_ATIS: i32 = 7;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub error_code: i32,
    pub result: Value,
}

impl Envelope {
    pub fn ok(result: Value) -> Self {
        Self {
            error_code: codes::OK,
            result,
        }
    }

    pub fn error(code: i32) -> Self {
        Self {
            error_code: code,
            result: Value::Null,
        }
    }
}

/// Body of `POST /users`. Any list may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatsQuery {
    pub user_ids: Option<Vec<String>>,
    pub discourse_names: Option<Vec<String>>,
    pub user_hashes: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

pub struct World {
    api_key: String,
    fixtures: Fixtures,
}

pub type Shared = Arc<World>;

type Outcome = Result<Value, i32>;

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    let world: Shared = Arc::new(World {
        api_key: api_key.to_string(),
        fixtures: Fixtures::standard(),
    });

    let api = Router::new()
        .route("/sessions", get(list_sessions))
        .route("/sessions/{session_id}", get(get_session))
        .route("/sessions/{session_id}/flights", get(list_flights))
        .route("/sessions/{session_id}/flights/{flight_id}", get(get_flight))
        .route("/sessions/{session_id}/flights/{flight_id}/route", get(get_route))
        .route(
            "/sessions/{session_id}/flights/{flight_id}/flightplan",
            get(get_flight_plan),
        )
        .route("/sessions/{session_id}/atc", get(list_atc))
        .route("/sessions/{session_id}/airport/{icao}/atis", get(get_atis))
        .route("/sessions/{session_id}/airport/{icao}/status", get(get_airport_status))
        .route("/sessions/{session_id}/world", get(get_world))
        .route("/sessions/{session_id}/notams", get(list_notams))
        .route("/users", post(post_user_stats))
        .route("/users/{user_id}", get(get_user_grade))
        .route("/users/{user_id}/flights", get(list_user_flights))
        .route("/users/{user_id}/flights/{flight_id}", get(get_user_flight))
        .route("/users/{user_id}/atc", get(list_user_atc))
        .route("/users/{user_id}/atc/{atc_session_id}", get(get_user_atc))
        .route("/tracks", get(list_tracks))
        .route("/aircraft", get(list_aircraft))
        .route("/aircraft/liveries", get(list_liveries))
        .route("/aircraft/{aircraft_id}/liveries", get(list_aircraft_liveries))
        .with_state(world);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn(log_request))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_key(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(api_key)).await
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::info!(%method, %uri, status = response.status().as_u16(), "served request");
    response
}

/// Extractor that passes only requests carrying the expected bearer key.
pub struct Authorized;

impl FromRequestParts<Shared> for Authorized {
    type Rejection = (StatusCode, Json<Envelope>);

    async fn from_request_parts(parts: &mut Parts, world: &Shared) -> Result<Self, Self::Rejection> {
        let expected = format!("Bearer {}", world.api_key);
        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if presented == Some(expected.as_str()) {
            return Ok(Authorized);
        }
        tracing::warn!(uri = %parts.uri, "rejected request with missing or unknown api key");
        Err((
            StatusCode::UNAUTHORIZED,
            Json(Envelope::error(codes::NOT_AUTHORIZED)),
        ))
    }
}

fn reply(outcome: Outcome) -> Json<Envelope> {
    Json(match outcome {
        Ok(result) => Envelope::ok(result),
        Err(code) => Envelope::error(code),
    })
}

/// Lower-case hyphenated form of a UUID, or `None` if `raw` is not one.
fn canonical(raw: &str) -> Option<String> {
    Uuid::parse_str(raw).ok().map(|id| id.hyphenated().to_string())
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn find<'a>(items: &'a [Value], key: &str, id: &str) -> Option<&'a Value> {
    items.iter().find(|item| str_field(item, key) == Some(id))
}

fn paginate(items: &[Value], page: Option<u32>) -> Outcome {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(codes::MISSING_PARAMETERS);
    }
    let total_count = items.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE);
    let index = page as usize;
    let data: Vec<Value> = items
        .iter()
        .skip((index - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Ok(json!({
        "pageIndex": page,
        "totalPages": total_pages,
        "totalCount": total_count,
        "hasPreviousPage": index > 1,
        "hasNextPage": index < total_pages,
        "data": data,
    }))
}

impl World {
    fn session_id(&self, raw: &str) -> Result<String, i32> {
        let id = canonical(raw).ok_or(codes::SERVER_NOT_FOUND)?;
        find(&self.fixtures.sessions, "id", &id).ok_or(codes::SERVER_NOT_FOUND)?;
        Ok(id)
    }

    fn user_id(&self, raw: &str) -> Result<String, i32> {
        let id = canonical(raw).ok_or(codes::USER_NOT_FOUND)?;
        find(&self.fixtures.user_stats, "userId", &id).ok_or(codes::USER_NOT_FOUND)?;
        Ok(id)
    }

    fn flights_in(&self, session_id: &str) -> &[Value] {
        self.fixtures
            .flights
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Resolve `(session, flight)` path parameters to a canonical flight id.
    fn flight_id(&self, raw_session: &str, raw_flight: &str) -> Result<String, i32> {
        let session_id = self.session_id(raw_session)?;
        let flight_id = canonical(raw_flight).ok_or(codes::FLIGHT_NOT_FOUND)?;
        find(self.flights_in(&session_id), "flightId", &flight_id).ok_or(codes::FLIGHT_NOT_FOUND)?;
        Ok(flight_id)
    }

    fn per_session(&self, map: &HashMap<String, Vec<Value>>, raw: &str) -> Outcome {
        let session_id = self.session_id(raw)?;
        Ok(Value::Array(map.get(&session_id).cloned().unwrap_or_default()))
    }

    fn user_stats(&self, query: UserStatsQuery) -> Outcome {
        let ids: Vec<String> = query
            .user_ids
            .unwrap_or_default()
            .iter()
            .filter_map(|raw| canonical(raw))
            .collect();
        let names = query.discourse_names.unwrap_or_default();
        let hashes = query.user_hashes.unwrap_or_default();

        let requested = ids.len() + names.len() + hashes.len();
        if requested == 0 {
            return Err(codes::MISSING_PARAMETERS);
        }
        if requested > MAX_BATCH_USERS {
            return Err(codes::ENDPOINT_ERROR);
        }

        let matches: Vec<Value> = self
            .fixtures
            .user_stats
            .iter()
            .filter(|stats| {
                let by_id = str_field(stats, "userId").is_some_and(|id| ids.iter().any(|i| i == id));
                let by_name = str_field(stats, "discourseUsername")
                    .is_some_and(|name| names.iter().any(|n| n.eq_ignore_ascii_case(name)));
                let by_hash = str_field(stats, "hash")
                    .is_some_and(|hash| hashes.iter().any(|h| h.eq_ignore_ascii_case(hash)));
                by_id || by_name || by_hash
            })
            .cloned()
            .collect();
        Ok(Value::Array(matches))
    }
}

async fn list_sessions(_: Authorized, State(world): State<Shared>) -> Json<Envelope> {
    reply(Ok(Value::Array(world.fixtures.sessions.clone())))
}

async fn get_session(
    _: Authorized,
    State(world): State<Shared>,
    Path(session_id): Path<String>,
) -> Json<Envelope> {
    reply(world.session_id(&session_id).and_then(|id| {
        find(&world.fixtures.sessions, "id", &id)
            .cloned()
            .ok_or(codes::SERVER_NOT_FOUND)
    }))
}

async fn list_flights(
    _: Authorized,
    State(world): State<Shared>,
    Path(session_id): Path<String>,
) -> Json<Envelope> {
    reply(world.per_session(&world.fixtures.flights, &session_id))
}

async fn get_flight(
    _: Authorized,
    State(world): State<Shared>,
    Path((session_id, flight_id)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.flight_id(&session_id, &flight_id).and_then(|flight_id| {
        let session_id = world.session_id(&session_id)?;
        find(world.flights_in(&session_id), "flightId", &flight_id)
            .cloned()
            .ok_or(codes::FLIGHT_NOT_FOUND)
    }))
}

async fn get_route(
    _: Authorized,
    State(world): State<Shared>,
    Path((session_id, flight_id)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.flight_id(&session_id, &flight_id).map(|flight_id| {
        Value::Array(world.fixtures.routes.get(&flight_id).cloned().unwrap_or_default())
    }))
}

async fn get_flight_plan(
    _: Authorized,
    State(world): State<Shared>,
    Path((session_id, flight_id)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.flight_id(&session_id, &flight_id).and_then(|flight_id| {
        world
            .fixtures
            .flight_plans
            .get(&flight_id)
            .cloned()
            .ok_or(codes::ENDPOINT_ERROR)
    }))
}

async fn list_atc(
    _: Authorized,
    State(world): State<Shared>,
    Path(session_id): Path<String>,
) -> Json<Envelope> {
    reply(world.per_session(&world.fixtures.atc, &session_id))
}

async fn get_atis(
    _: Authorized,
    State(world): State<Shared>,
    Path((session_id, icao)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.session_id(&session_id).and_then(|session_id| {
        world
            .fixtures
            .atis
            .get(&(session_id, icao.to_ascii_uppercase()))
            .map(|text| Value::String(text.clone()))
            .ok_or(codes::NO_ATIS)
    }))
}

async fn get_airport_status(
    _: Authorized,
    State(world): State<Shared>,
    Path((session_id, icao)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.session_id(&session_id).map(|session_id| {
        let icao = icao.to_ascii_uppercase();
        world
            .fixtures
            .world
            .get(&session_id)
            .and_then(|statuses| find(statuses, "airportIcao", &icao))
            .cloned()
            .unwrap_or_else(|| {
                json!({
                    "airportIcao": icao,
                    "inboundFlightsCount": 0,
                    "inboundFlights": [],
                    "outboundFlightsCount": 0,
                    "outboundFlights": [],
                    "atcFacilities": [],
                })
            })
    }))
}

async fn get_world(
    _: Authorized,
    State(world): State<Shared>,
    Path(session_id): Path<String>,
) -> Json<Envelope> {
    reply(world.per_session(&world.fixtures.world, &session_id))
}

async fn list_notams(
    _: Authorized,
    State(world): State<Shared>,
    Path(session_id): Path<String>,
) -> Json<Envelope> {
    reply(world.per_session(&world.fixtures.notams, &session_id))
}

async fn post_user_stats(
    _: Authorized,
    State(world): State<Shared>,
    Json(query): Json<UserStatsQuery>,
) -> Json<Envelope> {
    reply(world.user_stats(query))
}

async fn get_user_grade(
    _: Authorized,
    State(world): State<Shared>,
    Path(user_id): Path<String>,
) -> Json<Envelope> {
    reply(world.user_id(&user_id).and_then(|user_id| {
        world
            .fixtures
            .user_grades
            .get(&user_id)
            .cloned()
            .ok_or(codes::USER_NOT_FOUND)
    }))
}

async fn list_user_flights(
    _: Authorized,
    State(world): State<Shared>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Json<Envelope> {
    reply(world.user_id(&user_id).and_then(|user_id| {
        let entries = world.fixtures.logged_flights.get(&user_id);
        paginate(entries.map(Vec::as_slice).unwrap_or_default(), query.page)
    }))
}

async fn get_user_flight(
    _: Authorized,
    State(world): State<Shared>,
    Path((user_id, flight_id)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.user_id(&user_id).and_then(|user_id| {
        let flight_id = canonical(&flight_id).ok_or(codes::FLIGHT_NOT_FOUND)?;
        world
            .fixtures
            .logged_flights
            .get(&user_id)
            .and_then(|entries| find(entries, "id", &flight_id))
            .cloned()
            .ok_or(codes::FLIGHT_NOT_FOUND)
    }))
}

async fn list_user_atc(
    _: Authorized,
    State(world): State<Shared>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Json<Envelope> {
    reply(world.user_id(&user_id).and_then(|user_id| {
        let entries = world.fixtures.logged_atc.get(&user_id);
        paginate(entries.map(Vec::as_slice).unwrap_or_default(), query.page)
    }))
}

async fn get_user_atc(
    _: Authorized,
    State(world): State<Shared>,
    Path((user_id, atc_session_id)): Path<(String, String)>,
) -> Json<Envelope> {
    reply(world.user_id(&user_id).and_then(|user_id| {
        let atc_session_id = canonical(&atc_session_id).ok_or(codes::ENDPOINT_ERROR)?;
        world
            .fixtures
            .logged_atc
            .get(&user_id)
            .and_then(|entries| find(entries, "id", &atc_session_id))
            .cloned()
            .ok_or(codes::ENDPOINT_ERROR)
    }))
}

async fn list_tracks(_: Authorized, State(world): State<Shared>) -> Json<Envelope> {
    reply(Ok(Value::Array(world.fixtures.tracks.clone())))
}

async fn list_aircraft(_: Authorized, State(world): State<Shared>) -> Json<Envelope> {
    reply(Ok(Value::Array(world.fixtures.aircraft.clone())))
}

async fn list_liveries(_: Authorized, State(world): State<Shared>) -> Json<Envelope> {
    reply(Ok(Value::Array(world.fixtures.liveries.clone())))
}

async fn list_aircraft_liveries(
    _: Authorized,
    State(world): State<Shared>,
    Path(aircraft_id): Path<String>,
) -> Json<Envelope> {
    let outcome = canonical(&aircraft_id)
        .filter(|id| find(&world.fixtures.aircraft, "id", id).is_some())
        .ok_or(codes::ENDPOINT_ERROR)
        .map(|id| {
            let liveries = world
                .fixtures
                .liveries
                .iter()
                .filter(|livery| str_field(livery, "aircraftID") == Some(id.as_str()))
                .cloned()
                .collect();
            Value::Array(liveries)
        });
    reply(outcome)
}
