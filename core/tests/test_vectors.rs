//! Verify request construction and envelope decoding against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use std::sync::Mutex;

use liveapi_core::{
    decode_envelope, Error, HttpMethod, HttpRequest, HttpResponse, LiveClient, Session, Transport,
    UserStatsQuery, DEFAULT_BASE_URL,
};

/// Records the request and answers with an endpoint error, so only the
/// request side of each operation is exercised.
#[derive(Default)]
struct Recorder {
    requests: Mutex<Vec<HttpRequest>>,
}

impl Transport for Recorder {
    type Error = std::io::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, std::io::Error> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: 200,
            body: r#"{"errorCode":3,"result":null}"#.to_string(),
        })
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

/// Invoke the named operation with string arguments and discard the result.
fn dispatch(
    client: &LiveClient<&Recorder>,
    operation: &str,
    args: &[&str],
    body: Option<&serde_json::Value>,
) -> Result<(), Error> {
    fn page(s: &str) -> u32 {
        s.parse().unwrap()
    }

    match (operation, args) {
        ("sessions", []) => client.sessions().map(drop),
        ("session", [s]) => client.session(s).map(drop),
        ("flights", [s]) => client.flights(s).map(drop),
        ("flight", [s, f]) => client.flight(s, f).map(drop),
        ("flight_route", [s, f]) => client.flight_route(s, f).map(drop),
        ("flight_plan", [s, f]) => client.flight_plan(s, f).map(drop),
        ("active_atc", [s]) => client.active_atc(s).map(drop),
        ("user_stats", []) => {
            let query: UserStatsQuery = serde_json::from_value(body.unwrap().clone()).unwrap();
            client.user_stats(&query).map(drop)
        }
        ("user_grade", [u]) => client.user_grade(u).map(drop),
        ("atis", [s, icao]) => client.atis(s, icao).map(drop),
        ("airport_status", [s, icao]) => client.airport_status(s, icao).map(drop),
        ("world_status", [s]) => client.world_status(s).map(drop),
        ("tracks", []) => client.tracks().map(drop),
        ("user_flights", [u, p]) => client.user_flights(u, page(p)).map(drop),
        ("user_flight", [u, f]) => client.user_flight(u, f).map(drop),
        ("user_atc_sessions", [u, p]) => client.user_atc_sessions(u, page(p)).map(drop),
        ("user_atc_session", [u, a]) => client.user_atc_session(u, a).map(drop),
        ("notams", [s]) => client.notams(s).map(drop),
        ("aircraft", []) => client.aircraft().map(drop),
        ("aircraft_liveries", [a]) => client.aircraft_liveries(a).map(drop),
        ("liveries", []) => client.liveries().map(drop),
        (other, args) => panic!("unknown operation {other} with {} args", args.len()),
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

#[test]
fn route_test_vectors() {
    let raw = include_str!("../../test-vectors/routes.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let recorder = Recorder::default();
    let client = LiveClient::new("vector-key", &recorder);

    let cases = vectors["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 21, "one case per catalog operation");

    for case in cases {
        let operation = case["operation"].as_str().unwrap();
        let args: Vec<&str> = case["args"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a.as_str().unwrap())
            .collect();

        let err = dispatch(&client, operation, &args, case.get("body")).unwrap_err();
        assert_eq!(err.api().map(|e| e.code), Some(3), "{operation}: api error");

        let req = recorder.requests.lock().unwrap().pop().unwrap();
        assert_eq!(req.method, parse_method(case["method"].as_str().unwrap()), "{operation}: method");
        assert_eq!(
            req.url,
            format!("{DEFAULT_BASE_URL}{}", case["path"].as_str().unwrap()),
            "{operation}: url"
        );
        assert_eq!(req.header("authorization"), Some("Bearer vector-key"), "{operation}: auth");

        match case.get("body") {
            Some(expected) => {
                assert_eq!(req.header("content-type"), Some("application/json"), "{operation}");
                let body: serde_json::Value =
                    serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{operation}: body");
            }
            None => {
                assert!(req.body.is_none(), "{operation}: body should be None");
                assert_eq!(req.headers.len(), 1, "{operation}: only the auth header");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[test]
fn envelope_test_vectors() {
    let raw = include_str!("../../test-vectors/envelope.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = decode_envelope::<Session>(&response);

        match case.get("expected_error") {
            Some(expected) if expected.get("decode").is_some() => {
                let err = result.unwrap_err();
                assert!(matches!(err, Error::Decode { .. }), "{name}: expected decode error, got {err}");
            }
            Some(expected) => {
                let err = result.unwrap_err();
                let api = err.api().unwrap_or_else(|| panic!("{name}: expected api error, got {err}"));
                assert_eq!(api.code, expected["code"].as_i64().unwrap(), "{name}: code");
                assert_eq!(err.to_string(), expected["message"].as_str().unwrap(), "{name}: message");
            }
            None => {
                let session = result.unwrap();
                let expected: Session =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(session, expected, "{name}: parsed result");
            }
        }
    }
}
