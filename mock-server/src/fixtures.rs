//! Canned Live API data.
//!
//! Records are kept as JSON documents in the exact wire shape, literal
//! timestamps included, so the client decodes the same bytes it would get
//! from the real service.

use std::collections::HashMap;

use serde_json::{json, Value};

pub const CASUAL_SESSION: &str = "7e5dcd44-1fb5-49cc-bc2c-a9aab1f6a856";
pub const EXPERT_SESSION: &str = "df2a8d19-3a54-4ce5-ae65-0b722186e44c";

pub const FLIGHT_BAW: &str = "2b7e5b4c-98d1-4e0c-9f43-5c0b8e1d2a01";
pub const FLIGHT_UAL: &str = "2b7e5b4c-98d1-4e0c-9f43-5c0b8e1d2a02";
pub const FLIGHT_N172: &str = "2b7e5b4c-98d1-4e0c-9f43-5c0b8e1d2a03";

pub const USER_ALICE: &str = "3c1f0a9e-5b6d-4e7f-8a9b-0c1d2e3f4a01";
pub const USER_BOB: &str = "3c1f0a9e-5b6d-4e7f-8a9b-0c1d2e3f4a02";
pub const ALICE_HASH: &str = "1A2B3C4D";

pub const AIRCRAFT_A320: &str = "4ba0b0f6-4c2a-4f49-8c0e-3d2a1b0c9e01";
pub const AIRCRAFT_B789: &str = "4ba0b0f6-4c2a-4f49-8c0e-3d2a1b0c9e02";

pub const ATC_SESSION: &str = "5d6e7f80-9a0b-4c1d-8e2f-3a4b5c6d7e01";

/// Every fixture the router serves, indexed the way the handlers look it up.
pub struct Fixtures {
    pub sessions: Vec<Value>,
    /// Flights keyed by session id.
    pub flights: HashMap<String, Vec<Value>>,
    /// Position reports keyed by flight id.
    pub routes: HashMap<String, Vec<Value>>,
    pub flight_plans: HashMap<String, Value>,
    /// Active ATC keyed by session id.
    pub atc: HashMap<String, Vec<Value>>,
    /// ATIS text keyed by (session id, ICAO).
    pub atis: HashMap<(String, String), String>,
    /// Airport statuses keyed by session id.
    pub world: HashMap<String, Vec<Value>>,
    pub user_stats: Vec<Value>,
    pub user_grades: HashMap<String, Value>,
    pub tracks: Vec<Value>,
    /// Logbook entries keyed by user id.
    pub logged_flights: HashMap<String, Vec<Value>>,
    pub logged_atc: HashMap<String, Vec<Value>>,
    pub notams: HashMap<String, Vec<Value>>,
    pub aircraft: Vec<Value>,
    pub liveries: Vec<Value>,
}

impl Fixtures {
    pub fn standard() -> Self {
        let sessions = vec![
            json!({"maxUsers": 3000, "id": CASUAL_SESSION, "name": "Casual Server", "UserCount": 1, "type": 0}),
            json!({"maxUsers": 1500, "id": EXPERT_SESSION, "name": "Expert Server", "UserCount": 2, "type": 1}),
        ];

        let flights = HashMap::from([
            (
                EXPERT_SESSION.to_string(),
                vec![
                    flight(FLIGHT_BAW, USER_ALICE, "Speedbird 117", 51.4706, -0.4619, 2400.0, Some("Alice")),
                    flight(FLIGHT_UAL, USER_BOB, "United 901", 40.6413, -73.7781, 36000.0, None),
                ],
            ),
            (
                CASUAL_SESSION.to_string(),
                vec![flight(FLIGHT_N172, USER_BOB, "N172SP", 37.6213, -122.379, 3500.0, None)],
            ),
        ]);

        let routes = HashMap::from([(
            FLIGHT_BAW.to_string(),
            vec![
                json!({"latitude": 51.4700, "longitude": -0.4543, "altitude": 83.0, "track": 270.0, "groundSpeed": 0.0, "date": "2023-06-01T12:00:00Z"}),
                json!({"latitude": 51.4702, "longitude": -0.4900, "altitude": 900.0, "track": 270.0, "groundSpeed": 160.0, "date": "2023-06-01T12:05:00Z"}),
                json!({"latitude": 51.4706, "longitude": -0.5619, "altitude": 2400.0, "track": 271.0, "groundSpeed": 210.0, "date": "2023-06-01T12:07:30.5Z"}),
            ],
        )]);

        let flight_plans = HashMap::from([(
            FLIGHT_BAW.to_string(),
            json!({
                "flightPlanId": "6e7f8091-a2b3-4c4d-9e5f-607182930a01",
                "flightId": FLIGHT_BAW,
                "waypoints": ["EGLL", "CPT", "KENET", "KJFK"],
                "lastUpdate": "2023-06-01 11:58:12Z",
                "flightPlanItems": [
                    {"name": "EGLL", "type": 5, "children": null, "identifier": "EGLL", "altitude": -1,
                     "location": {"latitude": 51.4706, "longitude": -0.4619, "altitude": 83.0}},
                    {"name": "CPT3F", "type": 1, "identifier": null, "altitude": -1,
                     "location": {"latitude": 0.0, "longitude": 0.0, "altitude": 0.0},
                     "children": [
                        {"name": "CPT", "type": 0, "children": null, "identifier": "CPT", "altitude": 6000,
                         "location": {"latitude": 51.4925, "longitude": -1.2196, "altitude": 0.0}}
                     ]},
                    {"name": "KJFK", "type": 5, "children": null, "identifier": "KJFK", "altitude": -1,
                     "location": {"latitude": 40.6413, "longitude": -73.7781, "altitude": 13.0}}
                ]
            }),
        )]);

        let heathrow_tower = json!({
            "frequencyId": "7f8091a2-b3c4-4d5e-8f60-718293a4b501",
            "userId": USER_ALICE,
            "username": "Alice",
            "virtualOrganization": null,
            "airportName": "EGLL",
            "type": 0,
            "latitude": 51.4706,
            "longitude": -0.4619,
            "startTime": "2023-06-01 10:15:00Z"
        });
        let kennedy_ground = json!({
            "frequencyId": "7f8091a2-b3c4-4d5e-8f60-718293a4b502",
            "userId": USER_BOB,
            "username": null,
            "virtualOrganization": "VATEST",
            "airportName": "KJFK",
            "type": 1,
            "latitude": 40.6413,
            "longitude": -73.7781,
            "startTime": "2023-06-01 11:00:00Z"
        });
        let atc = HashMap::from([(
            EXPERT_SESSION.to_string(),
            vec![heathrow_tower.clone(), kennedy_ground.clone()],
        )]);

        let atis = HashMap::from([(
            (EXPERT_SESSION.to_string(), "EGLL".to_string()),
            "Heathrow information Alpha. Runway 27L in use for departures, 27R for arrivals."
                .to_string(),
        )]);

        let world = HashMap::from([(
            EXPERT_SESSION.to_string(),
            vec![
                json!({
                    "airportIcao": "EGLL",
                    "inboundFlightsCount": 0,
                    "inboundFlights": [],
                    "outboundFlightsCount": 1,
                    "outboundFlights": [FLIGHT_BAW],
                    "atcFacilities": [heathrow_tower]
                }),
                json!({
                    "airportIcao": "KJFK",
                    "inboundFlightsCount": 2,
                    "inboundFlights": [FLIGHT_BAW, FLIGHT_UAL],
                    "outboundFlightsCount": 0,
                    "outboundFlights": [],
                    "atcFacilities": [kennedy_ground]
                }),
            ],
        )]);

        let user_stats = vec![
            json!({
                "onlineFlights": 812, "violations": 1, "xp": 1204500, "landingCount": 790,
                "flightTime": 98000, "atcOperations": 4200, "atcRank": 6, "grade": 5,
                "hash": ALICE_HASH, "violationCountByLevel": {"level1": 1, "level2": 0, "level3": 0},
                "roles": [1, 64], "userId": USER_ALICE, "virtualOrganization": null,
                "discourseUsername": "Alice", "errorCode": 0
            }),
            json!({
                "onlineFlights": 40, "violations": 0, "xp": 21000, "landingCount": 35,
                "flightTime": 3100, "atcOperations": 0, "atcRank": null, "grade": 2,
                "hash": "5E6F7A8B", "violationCountByLevel": {"level1": 0, "level2": 0, "level3": 0},
                "roles": [], "userId": USER_BOB, "virtualOrganization": "VATEST",
                "discourseUsername": null, "errorCode": 0
            }),
        ];

        let user_grades = HashMap::from([(USER_ALICE.to_string(), alice_grade())]);

        let tracks = vec![
            json!({"name": "A", "path": ["ERAKA", "5720N", "5830N", "5940N", "LOMSI"],
                   "eastLevels": null, "westLevels": [350, 360, 370], "type": "NAT",
                   "lastSeen": "2023-06-01T09:30:00Z"}),
            json!({"name": "Z", "path": ["SOORY", "4750N", "4650N", "BOBTU"],
                   "eastLevels": [330, 340], "westLevels": null, "type": "NAT",
                   "lastSeen": "2023-06-01T09:30:00+00:00"}),
        ];

        let logged_flights = HashMap::from([(
            USER_ALICE.to_string(),
            (1..=5)
                .map(|n| {
                    let destination = if n % 2 == 0 { Value::Null } else { json!("LFPG") };
                    json!({
                        "id": format!("8a9b0c1d-2e3f-4a5b-9c6d-7e8f90a1b2{n:02}"),
                        "created": format!("2023-05-0{n}T08:00:00.000Z"),
                        "userId": USER_ALICE,
                        "aircraftId": AIRCRAFT_A320,
                        "liveryId": "9b0c1d2e-3f4a-4b5c-8d6e-7f8091a2b301",
                        "callsign": format!("Speedbird {n}"),
                        "server": "Expert",
                        "dayTime": 90.5,
                        "nightTime": 0,
                        "totalTime": 90.5,
                        "landingCount": 1,
                        "originAirport": "EGLL",
                        "destinationAirport": destination,
                        "xp": 1200
                    })
                })
                .collect(),
        )]);

        let logged_atc = HashMap::from([(
            USER_ALICE.to_string(),
            vec![json!({
                "id": ATC_SESSION,
                "atcSessionGroupId": "5d6e7f80-9a0b-4c1d-8e2f-3a4b5c6d7eff",
                "facility": {"id": "fac-egll-twr", "airportIcao": "EGLL", "latitude": 51.4706,
                             "longitude": -0.4619, "frequencyType": 0},
                "created": "2023-05-20T18:00:00Z",
                "updated": "2023-05-20T19:30:00Z",
                "operations": 143,
                "totalTime": 90.0
            })],
        )]);

        let notams = HashMap::from([(
            EXPERT_SESSION.to_string(),
            vec![json!({
                "id": "a0b1c2d3-e4f5-4a6b-8c7d-8e9f0a1b2c01",
                "title": "EGLL fly-in",
                "author": "Alice",
                "type": 0,
                "sessionId": EXPERT_SESSION,
                "radius": 25,
                "message": "Expect delays into Heathrow.",
                "longitude": -0.4619,
                "latitude": 51.4706,
                "icao": "EGLL",
                "floor": 0,
                "ceiling": 10000,
                "startTime": "2023-06-01T10:00:00Z",
                "endTime": "2023-06-01T14:00:00Z"
            })],
        )]);

        let aircraft = vec![
            json!({"id": AIRCRAFT_A320, "name": "Airbus A320"}),
            json!({"id": AIRCRAFT_B789, "name": "Boeing 787-9"}),
        ];

        let liveries = vec![
            livery("9b0c1d2e-3f4a-4b5c-8d6e-7f8091a2b301", AIRCRAFT_A320, "Airbus A320", "British Airways"),
            livery("9b0c1d2e-3f4a-4b5c-8d6e-7f8091a2b302", AIRCRAFT_A320, "Airbus A320", "Generic"),
            livery("9b0c1d2e-3f4a-4b5c-8d6e-7f8091a2b303", AIRCRAFT_B789, "Boeing 787-9", "United"),
        ];

        Self {
            sessions,
            flights,
            routes,
            flight_plans,
            atc,
            atis,
            world,
            user_stats,
            user_grades,
            tracks,
            logged_flights,
            logged_atc,
            notams,
            aircraft,
            liveries,
        }
    }
}

fn flight(
    id: &str,
    user_id: &str,
    callsign: &str,
    latitude: f64,
    longitude: f64,
    altitude: f64,
    username: Option<&str>,
) -> Value {
    json!({
        "username": username,
        "callsign": callsign,
        "latitude": latitude,
        "longitude": longitude,
        "altitude": altitude,
        "speed": 250.0,
        "verticalSpeed": 1500.0,
        "track": 271.0,
        "lastReport": "2023-06-01 12:07:30Z",
        "flightId": id,
        "userId": user_id,
        "aircraftId": AIRCRAFT_A320,
        "liveryId": "9b0c1d2e-3f4a-4b5c-8d6e-7f8091a2b301",
        "heading": 270.5,
        "virtualOrganization": null
    })
}

fn livery(id: &str, aircraft_id: &str, aircraft_name: &str, livery_name: &str) -> Value {
    json!({
        "id": id,
        "aircraftID": aircraft_id,
        "aircraftName": aircraft_name,
        "liveryName": livery_name
    })
}

fn alice_grade() -> Value {
    let landings = json!({
        "name": "Landings", "description": "Landings in the last 90 days",
        "property": "landingCount", "operator": 0, "period": 90.0, "order": 0, "group": 0
    });
    json!({
        "total12MonthsViolations": 1,
        "gradeDetails": {
            "grades": [{
                "rules": [{
                    "ruleIndex": 0, "referenceValue": 50.0, "userValue": 790.0, "state": 0,
                    "userValueString": "790", "referenceValueString": "50",
                    "definition": landings
                }],
                "index": 4, "name": "Grade 5", "state": 0
            }],
            "gradeIndex": 4,
            "ruleDefinitions": [landings]
        },
        "totalXP": 1204500,
        "atcOperations": 4200,
        "atcRank": 6,
        "lastLevel1ViolationDate": "2023-02-11T16:20:00Z",
        "lastLevel2ViolationDate": "0001-01-01T00:00:00Z",
        "lastLevel3ViolationDate": "0001-01-01T00:00:00Z",
        "lastReportViolationDate": "0001-01-01T00:00:00Z",
        "violationCountByLevel": {"level1": 1, "level2": 0, "level3": 0},
        "roles": [1, 64],
        "userId": USER_ALICE,
        "virtualOrganization": null,
        "discourseUsername": "Alice",
        "groups": ["d07afad8-79df-4363-b1c7-a5a1dde6e3d8"],
        "errorCode": 0
    })
}
