//! Domain records returned by the Live API.
//!
//! # Design
//! Plain values decoded straight from the `result` field of an envelope.
//! Wire names follow the service exactly, including the irregular ones
//! (`UserCount`, `aircraftID`, `totalXP`). Fields whose absence means
//! something (no username, no virtual organization) are `Option`; everywhere
//! else a `null` or missing value reads as zero, empty or blank. Timestamps
//! stay strict. Ids are opaque strings; nothing here resolves one record
//! from another.

use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp::{LiteralTimestamp, ZonedTimestamp};

/// Read `null` or a missing field as the type's zero value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A multiplayer server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, deserialize_with = "nullable")]
    pub max_users: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "UserCount", default, deserialize_with = "nullable")]
    pub user_count: i32,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: i32,
}

/// A live flight within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub username: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub callsign: String,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub altitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub speed: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub vertical_speed: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub track: f64,
    pub last_report: LiteralTimestamp,
    #[serde(rename = "flightId", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub aircraft_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub livery_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub heading: f64,
    pub virtual_organization: Option<String>,
}

/// One sample of a flight's flown path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub altitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub track: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub ground_speed: f64,
    pub date: ZonedTimestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlan {
    #[serde(rename = "flightPlanId", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub flight_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub waypoints: Vec<String>,
    pub last_update: LiteralTimestamp,
    #[serde(default, deserialize_with = "nullable")]
    pub flight_plan_items: Vec<FlightPlanItem>,
}

/// A node of the flight plan tree. Procedures (SIDs, STARs, approaches)
/// carry their fixes as `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlanItem {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: i32,
    #[serde(default)]
    pub children: Option<Vec<FlightPlanItem>>,
    pub identifier: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub altitude: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub altitude: f64,
}

/// A controller currently staffing a frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAtcFacility {
    #[serde(default, deserialize_with = "nullable")]
    pub frequency_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: String,
    pub username: Option<String>,
    pub virtual_organization: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub airport_name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    pub start_time: LiteralTimestamp,
}

/// Summary statistics for one user, as returned by the batch lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default, deserialize_with = "nullable")]
    pub online_flights: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub violations: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub xp: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub landing_count: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub flight_time: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub atc_operations: i32,
    pub atc_rank: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub grade: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub hash: String,
    #[serde(default, deserialize_with = "nullable")]
    pub violation_count_by_level: ViolationCount,
    #[serde(default, deserialize_with = "nullable")]
    pub roles: Vec<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: String,
    pub virtual_organization: Option<String>,
    pub discourse_username: Option<String>,
    /// Per-user status inside a successful batch; non-zero when this entry
    /// could not be resolved.
    #[serde(default, deserialize_with = "nullable")]
    pub error_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationCount {
    #[serde(default, deserialize_with = "nullable")]
    pub level1: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub level2: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub level3: i32,
}

/// Full grade table for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGrade {
    #[serde(default, deserialize_with = "nullable")]
    pub total12_months_violations: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub grade_details: GradeConfiguration,
    #[serde(rename = "totalXP", default, deserialize_with = "nullable")]
    pub total_xp: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub atc_operations: i32,
    pub atc_rank: Option<i32>,
    pub last_level1_violation_date: ZonedTimestamp,
    pub last_level2_violation_date: ZonedTimestamp,
    pub last_level3_violation_date: ZonedTimestamp,
    pub last_report_violation_date: ZonedTimestamp,
    #[serde(default, deserialize_with = "nullable")]
    pub violation_count_by_level: ViolationCount,
    #[serde(default, deserialize_with = "nullable")]
    pub roles: Vec<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: String,
    pub virtual_organization: Option<String>,
    pub discourse_username: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub error_code: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeConfiguration {
    #[serde(default, deserialize_with = "nullable")]
    pub grades: Vec<Grade>,
    #[serde(default, deserialize_with = "nullable")]
    pub grade_index: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub rule_definitions: Vec<GradeRuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default, deserialize_with = "nullable")]
    pub rules: Vec<GradeRule>,
    #[serde(default, deserialize_with = "nullable")]
    pub index: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRule {
    #[serde(default, deserialize_with = "nullable")]
    pub rule_index: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub reference_value: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub user_value: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub state: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub user_value_string: String,
    #[serde(default, deserialize_with = "nullable")]
    pub reference_value_string: String,
    #[serde(default, deserialize_with = "nullable")]
    pub definition: GradeRuleDefinition,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRuleDefinition {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property: String,
    #[serde(default, deserialize_with = "nullable")]
    pub operator: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub period: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub group: i32,
}

/// Inbound/outbound traffic and staffed frequencies at one airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportStatus {
    #[serde(default, deserialize_with = "nullable")]
    pub airport_icao: String,
    #[serde(default, deserialize_with = "nullable")]
    pub inbound_flights_count: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub inbound_flights: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub outbound_flights_count: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub outbound_flights: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub atc_facilities: Vec<ActiveAtcFacility>,
}

/// An oceanic track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub path: Vec<String>,
    pub east_levels: Option<Vec<i32>>,
    pub west_levels: Option<Vec<i32>>,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    pub last_seen: ZonedTimestamp,
}

/// One page of a user's logbook. `page_index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookPage<T> {
    pub page_index: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<T>,
}

pub type FlightLogbookPage = LogbookPage<LoggedFlight>;
pub type AtcLogbookPage = LogbookPage<LoggedAtcSession>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFlight {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created: String,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub aircraft_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub livery_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub callsign: String,
    #[serde(default, deserialize_with = "nullable")]
    pub server: String,
    #[serde(default, deserialize_with = "nullable")]
    pub day_time: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub night_time: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub total_time: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub landing_count: i32,
    pub origin_airport: Option<String>,
    pub destination_airport: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub xp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedAtcSession {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "atcSessionGroupId", default, deserialize_with = "nullable")]
    pub session_group_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub facility: AtcFacility,
    #[serde(default, deserialize_with = "nullable")]
    pub created: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated: String,
    #[serde(default, deserialize_with = "nullable")]
    pub operations: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_time: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtcFacility {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "airportIcao", default, deserialize_with = "nullable")]
    pub icao: String,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(rename = "frequencyType", default, deserialize_with = "nullable")]
    pub kind: i32,
}

/// Notice to Airmen published for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notam {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub session_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub radius: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,
    pub icao: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub floor: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub ceiling: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub start_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Livery {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "aircraftID", default, deserialize_with = "nullable")]
    pub aircraft_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub aircraft_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub livery_name: String,
}

/// Request body of the batch user-stats lookup.
///
/// The three lists are independent; the service accepts up to 25 users in
/// total and reports anything beyond that through the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsQuery {
    #[serde(rename = "userIds")]
    pub user_ids: Vec<String>,
    #[serde(rename = "discourseNames")]
    pub discourse_names: Vec<String>,
    #[serde(rename = "userHashes")]
    pub user_hashes: Vec<String>,
}

impl UserStatsQuery {
    pub fn by_user_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn by_discourse_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            discourse_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn by_hashes<I, S>(hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_hashes: hashes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn session_uses_irregular_user_count_name() {
        let session: Session = serde_json::from_str(
            r#"{"id":"abc","name":"Test Session","maxUsers":100,"UserCount":5,"type":1}"#,
        )
        .unwrap();
        assert_eq!(session.user_count, 5);
        assert_eq!(session.kind, 1);

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["UserCount"], 5);
        assert!(json.get("userCount").is_none());
    }

    #[test]
    fn flight_last_report_uses_literal_layout() {
        let flight: Flight = serde_json::from_str(
            r#"{
                "username": null,
                "callsign": "N123AB",
                "latitude": 51.47,
                "longitude": -0.45,
                "altitude": 35000.0,
                "speed": 450.5,
                "verticalSpeed": -12.0,
                "track": 270.0,
                "lastReport": "2023-06-01 12:30:45Z",
                "flightId": "f-1",
                "userId": "u-1",
                "aircraftId": "a-1",
                "liveryId": "l-1",
                "heading": 268.5,
                "virtualOrganization": null
            }"#,
        )
        .unwrap();
        assert_eq!(flight.id, "f-1");
        assert!(flight.username.is_none());
        assert_eq!(flight.last_report.into_inner(), datetime!(2023-06-01 12:30:45));
    }

    #[test]
    fn position_report_rejects_literal_layout() {
        let result = serde_json::from_str::<PositionReport>(
            r#"{"latitude":0.0,"longitude":0.0,"altitude":0.0,"track":0.0,"groundSpeed":0.0,"date":"2023-06-01 12:30:45Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn flight_plan_items_nest() {
        let plan: FlightPlan = serde_json::from_str(
            r#"{
                "flightPlanId": "p-1",
                "flightId": "f-1",
                "waypoints": ["EGLL", "DVR", "LFPG"],
                "lastUpdate": "2023-06-01 12:00:00Z",
                "flightPlanItems": [
                    {
                        "name": "DVR1A",
                        "type": 1,
                        "children": [
                            {"name": "DVR", "type": 0, "children": null, "identifier": "DVR",
                             "altitude": -1, "location": {"latitude": 51.16, "longitude": 1.36, "altitude": 0.0}}
                        ],
                        "identifier": null,
                        "altitude": -1,
                        "location": {"latitude": 0.0, "longitude": 0.0, "altitude": 0.0}
                    }
                ]
            }"#,
        )
        .unwrap();
        let children = plan.flight_plan_items[0].children.as_ref().unwrap();
        assert_eq!(children[0].identifier.as_deref(), Some("DVR"));
        assert!(children[0].children.is_none());
    }

    #[test]
    fn user_stats_batch_keeps_unresolved_entries() {
        let stats: Vec<UserStats> = serde_json::from_str(
            r#"[
                {
                    "onlineFlights": 12, "violations": 0, "xp": 5000, "landingCount": 40,
                    "flightTime": 3600, "atcOperations": 0, "atcRank": null, "grade": 3,
                    "hash": "1A2B3C4D",
                    "violationCountByLevel": {"level1": 0, "level2": 0, "level3": 0},
                    "roles": [1], "userId": "u-1", "virtualOrganization": null,
                    "discourseUsername": "Alice", "errorCode": 0
                },
                {
                    "onlineFlights": 0, "violations": 0, "xp": 0, "landingCount": 0,
                    "flightTime": 0, "atcOperations": 0, "atcRank": null, "grade": 0,
                    "hash": null, "violationCountByLevel": null, "roles": null,
                    "userId": null, "virtualOrganization": null,
                    "discourseUsername": "nobody", "errorCode": 1
                }
            ]"#,
        )
        .unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].hash, "1A2B3C4D");

        let unresolved = &stats[1];
        assert_eq!(unresolved.error_code, 1);
        assert_eq!(unresolved.user_id, "");
        assert_eq!(unresolved.hash, "");
        assert!(unresolved.roles.is_empty());
        assert_eq!(unresolved.violation_count_by_level, ViolationCount::default());
        assert_eq!(unresolved.discourse_username.as_deref(), Some("nobody"));
    }

    #[test]
    fn notam_tolerates_null_and_missing_fields() {
        let notam: Notam = serde_json::from_str(
            r#"{
                "id": "n-1", "title": "Runway closed", "author": null, "type": 1,
                "sessionId": "s-1", "radius": 5, "message": "27L closed",
                "longitude": -0.45, "latitude": 51.47, "icao": "EGLL",
                "floor": 0, "ceiling": null, "startTime": "2023-06-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(notam.author, "");
        assert_eq!(notam.ceiling, 0);
        assert_eq!(notam.end_time, "");
        assert_eq!(notam.icao.as_deref(), Some("EGLL"));
    }

    #[test]
    fn null_timestamps_are_still_rejected() {
        let result = serde_json::from_str::<Track>(
            r#"{"name":"A","path":[],"eastLevels":null,"westLevels":null,"type":"NAT","lastSeen":null}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn livery_uses_upper_case_id_suffix() {
        let livery: Livery = serde_json::from_str(
            r#"{"id":"l-1","aircraftID":"a-1","aircraftName":"A320","liveryName":"Generic"}"#,
        )
        .unwrap();
        assert_eq!(livery.aircraft_id, "a-1");
    }

    #[test]
    fn user_stats_query_serializes_all_three_lists() {
        let query = UserStatsQuery::by_discourse_names(["Alice"]);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userIds": [], "discourseNames": ["Alice"], "userHashes": []})
        );
    }

    #[test]
    fn logbook_page_is_generic_over_items() {
        let page: AtcLogbookPage = serde_json::from_str(
            r#"{
                "pageIndex": 1, "totalPages": 3, "totalCount": 5,
                "hasPreviousPage": false, "hasNextPage": true,
                "data": [{
                    "id": "s-1", "atcSessionGroupId": "g-1",
                    "facility": {"id": "fac-1", "airportIcao": "KLAX", "latitude": 33.9, "longitude": -118.4, "frequencyType": 1},
                    "created": "2023-05-01T10:00:00Z", "updated": "2023-05-01T11:00:00Z",
                    "operations": 42, "totalTime": 60.0
                }]
            }"#,
        )
        .unwrap();
        assert!(page.has_next_page);
        assert_eq!(page.data[0].facility.icao, "KLAX");
        assert_eq!(page.data[0].facility.kind, 1);
    }
}
