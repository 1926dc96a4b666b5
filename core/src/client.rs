//! Typed operations over the Live API.
//!
//! # Design
//! `LiveClient` holds a `ClientConfig` and a `Transport` and nothing else, so
//! it is immutable once built and can be shared across threads when the
//! transport allows it. Each operation builds one request, executes it once,
//! and decodes the envelope. There is no retry, paging loop, or cache.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::decode_envelope;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{
    ActiveAtcFacility, Aircraft, AirportStatus, AtcLogbookPage, Flight, FlightLogbookPage,
    FlightPlan, Livery, LoggedAtcSession, LoggedFlight, Notam, PositionReport, Session, Track,
    UserGrade, UserStats, UserStatsQuery,
};

#[derive(Debug, Clone)]
pub struct LiveClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> LiveClient<T> {
    /// Client for the public origin authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, transport: T) -> Self {
        Self::with_config(ClientConfig::new(api_key), transport)
    }

    pub fn with_config(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authenticated GET for `path`, relative to the base URL.
    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.config.base_url()),
            headers: vec![self.authorization()],
            body: None,
        }
    }

    /// Authenticated POST for `path` carrying `body` as JSON.
    pub fn build_post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, Error> {
        let body = serde_json::to_string(body).map_err(Error::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.config.base_url()),
            headers: vec![
                self.authorization(),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    fn authorization(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.config.api_key()),
        )
    }
}

impl<T: Transport> LiveClient<T> {
    fn send<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, Error> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "live api request");
        let response = self.transport.execute(&request).map_err(|err| {
            tracing::debug!(url = %request.url, error = %err, "live api transport failed");
            Error::Transport(Box::new(err))
        })?;
        tracing::debug!(url = %request.url, status = response.status, "live api response");
        decode_envelope(&response)
    }

    fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        self.send(self.build_get(path))
    }

    /// All public sessions.
    pub fn sessions(&self) -> Result<Vec<Session>, Error> {
        self.get("sessions")
    }

    pub fn session(&self, session_id: &str) -> Result<Session, Error> {
        self.get(&format!("sessions/{}", segment(session_id)?))
    }

    /// Every flight currently in a session.
    pub fn flights(&self, session_id: &str) -> Result<Vec<Flight>, Error> {
        self.get(&format!("sessions/{}/flights", segment(session_id)?))
    }

    pub fn flight(&self, session_id: &str, flight_id: &str) -> Result<Flight, Error> {
        self.get(&format!(
            "sessions/{}/flights/{}",
            segment(session_id)?,
            segment(flight_id)?
        ))
    }

    /// The flown path of a flight, oldest report first.
    pub fn flight_route(
        &self,
        session_id: &str,
        flight_id: &str,
    ) -> Result<Vec<PositionReport>, Error> {
        self.get(&format!(
            "sessions/{}/flights/{}/route",
            segment(session_id)?,
            segment(flight_id)?
        ))
    }

    pub fn flight_plan(&self, session_id: &str, flight_id: &str) -> Result<FlightPlan, Error> {
        self.get(&format!(
            "sessions/{}/flights/{}/flightplan",
            segment(session_id)?,
            segment(flight_id)?
        ))
    }

    /// Frequencies staffed by controllers in a session.
    pub fn active_atc(&self, session_id: &str) -> Result<Vec<ActiveAtcFacility>, Error> {
        self.get(&format!("sessions/{}/atc", segment(session_id)?))
    }

    /// Batch lookup of user statistics.
    ///
    /// The service caps a batch at 25 users across all three lists; larger
    /// batches come back as an API error rather than being split here.
    pub fn user_stats(&self, query: &UserStatsQuery) -> Result<Vec<UserStats>, Error> {
        self.send(self.build_post("users", query)?)
    }

    pub fn user_grade(&self, user_id: &str) -> Result<UserGrade, Error> {
        self.get(&format!("users/{}", segment(user_id)?))
    }

    /// Current ATIS broadcast text for an airport.
    pub fn atis(&self, session_id: &str, icao: &str) -> Result<String, Error> {
        self.get(&format!(
            "sessions/{}/airport/{}/atis",
            segment(session_id)?,
            segment(icao)?
        ))
    }

    pub fn airport_status(&self, session_id: &str, icao: &str) -> Result<AirportStatus, Error> {
        self.get(&format!(
            "sessions/{}/airport/{}/status",
            segment(session_id)?,
            segment(icao)?
        ))
    }

    /// Status of every active airport in a session.
    pub fn world_status(&self, session_id: &str) -> Result<Vec<AirportStatus>, Error> {
        self.get(&format!("sessions/{}/world", segment(session_id)?))
    }

    pub fn tracks(&self) -> Result<Vec<Track>, Error> {
        self.get("tracks")
    }

    /// One page of a user's flight logbook; `page` starts at 1.
    pub fn user_flights(&self, user_id: &str, page: u32) -> Result<FlightLogbookPage, Error> {
        self.get(&format!("users/{}/flights?page={page}", segment(user_id)?))
    }

    pub fn user_flight(&self, user_id: &str, flight_id: &str) -> Result<LoggedFlight, Error> {
        self.get(&format!(
            "users/{}/flights/{}",
            segment(user_id)?,
            segment(flight_id)?
        ))
    }

    /// One page of a user's ATC logbook; `page` starts at 1.
    pub fn user_atc_sessions(&self, user_id: &str, page: u32) -> Result<AtcLogbookPage, Error> {
        self.get(&format!("users/{}/atc?page={page}", segment(user_id)?))
    }

    pub fn user_atc_session(
        &self,
        user_id: &str,
        atc_session_id: &str,
    ) -> Result<LoggedAtcSession, Error> {
        self.get(&format!(
            "users/{}/atc/{}",
            segment(user_id)?,
            segment(atc_session_id)?
        ))
    }

    pub fn notams(&self, session_id: &str) -> Result<Vec<Notam>, Error> {
        self.get(&format!("sessions/{}/notams", segment(session_id)?))
    }

    /// Every aircraft model.
    pub fn aircraft(&self) -> Result<Vec<Aircraft>, Error> {
        self.get("aircraft")
    }

    pub fn aircraft_liveries(&self, aircraft_id: &str) -> Result<Vec<Livery>, Error> {
        self.get(&format!("aircraft/{}/liveries", segment(aircraft_id)?))
    }

    /// Every livery of every aircraft.
    pub fn liveries(&self) -> Result<Vec<Livery>, Error> {
        self.get("aircraft/liveries")
    }
}

/// Accept a caller-supplied id as a single path segment, verbatim.
fn segment(value: &str) -> Result<&str, Error> {
    let unusable = value.is_empty()
        || value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control());
    if unusable {
        return Err(Error::InvalidPath {
            segment: value.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ErrorKind;
    use crate::http::HttpResponse;

    const BASE_URL: &str = "https://api.infiniteflight.com/public/v2/";

    /// Records every request and answers each with the same body.
    struct MockTransport {
        body: String,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        fn replying(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.url.clone())
                .collect()
        }
    }

    impl Transport for MockTransport {
        type Error = std::io::Error;

        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, std::io::Error> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HttpResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    struct RefusingTransport;

    impl Transport for RefusingTransport {
        type Error = std::io::Error;

        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, std::io::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }

    fn client(body: &str) -> LiveClient<MockTransport> {
        LiveClient::new("test-key", MockTransport::replying(body))
    }

    #[test]
    fn build_get_attaches_bearer_key_only() {
        let req = client("").build_get("sessions");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}sessions"));
        assert_eq!(
            req.headers,
            vec![("Authorization".to_string(), "Bearer test-key".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_post_adds_json_content_type_and_body() {
        let query = UserStatsQuery::by_user_ids(["u-1", "u-2"]);
        let req = client("").build_post("users", &query).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}users"));
        assert_eq!(req.header("authorization"), Some("Bearer test-key"));
        assert_eq!(req.header("content-type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userIds"], serde_json::json!(["u-1", "u-2"]));
        assert_eq!(body["discourseNames"], serde_json::json!([]));
        assert_eq!(body["userHashes"], serde_json::json!([]));
    }

    #[test]
    fn session_decodes_exact_fields() {
        let c = client(
            r#"{"errorCode":0,"result":{"id":"abc","name":"Test Session","maxUsers":100,"UserCount":5,"type":1}}"#,
        );
        let session = c.session("abc").unwrap();
        assert_eq!(
            session,
            Session {
                max_users: 100,
                id: "abc".to_string(),
                name: "Test Session".to_string(),
                user_count: 5,
                kind: 1,
            }
        );
        assert_eq!(c.transport().urls(), vec![format!("{BASE_URL}sessions/abc")]);
    }

    #[test]
    fn flight_route_path() {
        let c = client(r#"{"errorCode":0,"result":[]}"#);
        let route = c.flight_route("S1", "F1").unwrap();
        assert!(route.is_empty());
        assert_eq!(
            c.transport().urls(),
            vec![format!("{BASE_URL}sessions/S1/flights/F1/route")]
        );
    }

    #[test]
    fn logbook_pages_use_query_string() {
        let c = client(r#"{"errorCode":4,"result":null}"#);
        let _ = c.user_flights("U1", 3);
        let _ = c.user_atc_sessions("U1", 1);
        assert_eq!(
            c.transport().urls(),
            vec![
                format!("{BASE_URL}users/U1/flights?page=3"),
                format!("{BASE_URL}users/U1/atc?page=1"),
            ]
        );
    }

    #[test]
    fn every_operation_reports_not_authorized() {
        let c = client(r#"{"errorCode":4,"result":null}"#);
        let query = UserStatsQuery::by_hashes(["h"]);

        let results: Vec<Result<(), Error>> = vec![
            c.sessions().map(drop),
            c.session("s").map(drop),
            c.flights("s").map(drop),
            c.flight("s", "f").map(drop),
            c.flight_route("s", "f").map(drop),
            c.flight_plan("s", "f").map(drop),
            c.active_atc("s").map(drop),
            c.user_stats(&query).map(drop),
            c.user_grade("u").map(drop),
            c.atis("s", "EGLL").map(drop),
            c.airport_status("s", "EGLL").map(drop),
            c.world_status("s").map(drop),
            c.tracks().map(drop),
            c.user_flights("u", 1).map(drop),
            c.user_flight("u", "f").map(drop),
            c.user_atc_sessions("u", 1).map(drop),
            c.user_atc_session("u", "a").map(drop),
            c.notams("s").map(drop),
            c.aircraft().map(drop),
            c.aircraft_liveries("a").map(drop),
            c.liveries().map(drop),
        ];

        assert_eq!(results.len(), 21);
        for result in results {
            let err = result.unwrap_err();
            assert_eq!(err.api().map(|e| e.kind()), Some(ErrorKind::NotAuthorized));
        }
        assert_eq!(c.transport().urls().len(), 21);
    }

    #[test]
    fn every_path_template() {
        let c = client(r#"{"errorCode":3,"result":null}"#);
        let _ = c.sessions();
        let _ = c.flights("s");
        let _ = c.flight("s", "f");
        let _ = c.flight_plan("s", "f");
        let _ = c.active_atc("s");
        let _ = c.user_stats(&UserStatsQuery::default());
        let _ = c.user_grade("u");
        let _ = c.atis("s", "KSFO");
        let _ = c.airport_status("s", "KSFO");
        let _ = c.world_status("s");
        let _ = c.tracks();
        let _ = c.user_flight("u", "f");
        let _ = c.user_atc_session("u", "a");
        let _ = c.notams("s");
        let _ = c.aircraft();
        let _ = c.aircraft_liveries("a");
        let _ = c.liveries();

        let expected: Vec<String> = [
            "sessions",
            "sessions/s/flights",
            "sessions/s/flights/f",
            "sessions/s/flights/f/flightplan",
            "sessions/s/atc",
            "users",
            "users/u",
            "sessions/s/airport/KSFO/atis",
            "sessions/s/airport/KSFO/status",
            "sessions/s/world",
            "tracks",
            "users/u/flights/f",
            "users/u/atc/a",
            "sessions/s/notams",
            "aircraft",
            "aircraft/a/liveries",
            "aircraft/liveries",
        ]
        .iter()
        .map(|path| format!("{BASE_URL}{path}"))
        .collect();
        assert_eq!(c.transport().urls(), expected);
    }

    #[test]
    fn user_stats_is_a_post() {
        let c = client(r#"{"errorCode":0,"result":[]}"#);
        let stats = c
            .user_stats(&UserStatsQuery::by_discourse_names(["pilot"]))
            .unwrap();
        assert!(stats.is_empty());

        let requests = c.transport().requests.lock().unwrap();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert!(requests[0].body.as_deref().unwrap().contains("\"pilot\""));
    }

    #[test]
    fn unusable_segments_never_reach_the_transport() {
        let c = client(r#"{"errorCode":0,"result":[]}"#);
        for bad in ["", "a/b", "a?b", "a#b", "a b", "a\nb"] {
            let err = c.flights(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidPath { .. }), "{bad:?}");
        }
        assert!(c.transport().urls().is_empty());
    }

    #[test]
    fn transport_errors_propagate_unchanged() {
        use std::error::Error as _;

        let c = LiveClient::new("test-key", RefusingTransport);
        let err = c.sessions().unwrap_err();
        assert!(err.api().is_none());
        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<std::io::Error>())
            .expect("io error source");
        assert_eq!(source.kind(), std::io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn custom_base_url() {
        let config = ClientConfig::new("k").with_base_url("http://127.0.0.1:9000/public/v2");
        let c = LiveClient::with_config(config, MockTransport::replying(""));
        assert_eq!(
            c.build_get("tracks").url,
            "http://127.0.0.1:9000/public/v2/tracks"
        );
    }
}
