use serde_json::json;
use whoop_client::http_client::ReqwestWhoopClient;
use whoop_client::{Config, Credentials, DateRange, WhoopError, get_cycle_data};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn login(server: &MockServer) -> ReqwestWhoopClient {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "user": {"id": 9}
        })))
        .mount(server)
        .await;
    let credentials =
        Credentials::resolve_with(Some("u@example.com".into()), Some("pw".into()), |_| None)
            .unwrap();
    let mut config = Config::new(credentials);
    config.auth_base_url = server.uri();
    config.api_base_url = server.uri();
    ReqwestWhoopClient::login(config).await.expect("login")
}

fn cycle_json(id: i64, day: &str, during: &str) -> serde_json::Value {
    json!({
        "id": id,
        "day": day,
        "during": during,
        "timezone_offset": "-0400",
        "day_strain": 14.3,
        "day_avg_heart_rate": 62,
        "day_max_heart_rate": 171,
        "day_kilojoules": 8500.0,
        "intensity_score": 10.2,
        "workouts": [{
            "id": 900,
            "sport_id": 0,
            "intensity_score": 12.1,
            "average_heart_rate": 140,
            "max_heart_rate": 181,
            "kilojoules": 2400.0,
            "distance_meter": 10000.0,
            "during": "['2025-10-01T16:00:00.000Z','2025-10-01T17:00:00.000Z')",
            "zone_durations": [60000, 120000, 300000]
        }]
    })
}

async fn mount_empty_vows(server: &MockServer, cycle_id: i64) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/vow-service/v1/vows/recovery/1d/cycle/{cycle_id}"
        )))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/vow-service/v1/vows/sleep/1d/cycle/{cycle_id}"
        )))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

#[tokio::test]
async fn merges_recovery_and_sleep_and_sorts_by_date() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    // page served out of date order; c2 has no recovery or sleep yet
    Mock::given(method("GET"))
        .and(path("/activities-service/v1/cycles/aggregate/range/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            cycle_json(102, "2025-10-02", "['2025-10-01T21:00:00.000Z',)"),
            cycle_json(101, "2025-10-01", "['2025-09-30T21:00:00.000Z','2025-10-01T21:00:00.000Z')"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vow-service/v1/vows/recovery/1d/cycle/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cycle_id": 101,
            "recovery_score": 67.0,
            "hrv_rmssd": 0.065,
            "resting_heart_rate": 52
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vow-service/v1/vows/sleep/1d/cycle/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sleeps": [{
                "id": 500,
                "cycle_id": 101,
                "score": 82.0,
                "quality_duration": 25_200_000_i64,
                "sleep_need": 28_800_000_i64,
                "during": "['2025-09-30T22:00:00.000Z','2025-10-01T06:00:00.000Z')"
            }]
        })))
        .mount(&server)
        .await;
    mount_empty_vows(&server, 102).await;

    let range = DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
    )
    .unwrap();
    let records = get_cycle_data(&client, &range).await.expect("cycles");

    assert_eq!(records.len(), 2);
    assert!(records[0].date < records[1].date);

    let first = &records[0];
    assert_eq!(first.cycle_id, 101);
    let recovery = first.recovery.as_ref().expect("recovery");
    assert_eq!(recovery.score, Some(67.0));
    assert_eq!(recovery.hrv_ms, Some(65.0));
    assert_eq!(recovery.resting_hr_bpm, Some(52));
    assert_eq!(first.sleep.len(), 1);
    assert_eq!(first.sleep[0].activity_id, 500);
    assert_eq!(first.sleep[0].quality_duration_ms, Some(25_200_000));

    // kilojoules pass through unconverted
    assert_eq!(first.strain.kilojoules, Some(8500.0));
    let workout = &first.workouts[0];
    assert_eq!(workout.sport_name, "Running");
    assert_eq!(
        workout.zone_duration_ms.as_ref().unwrap().get(&2),
        Some(&300_000)
    );

    // missing sub-resources are not an error for the rest of the batch
    let second = &records[1];
    assert!(second.recovery.is_none());
    assert!(second.sleep.is_empty());
}

#[tokio::test]
async fn follows_pagination_and_drops_duplicate_cycles() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/activities-service/v1/cycles/aggregate/range/9"))
        .and(query_param_is_missing("nextToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [cycle_json(201, "2025-10-01", "['2025-09-30T21:00:00.000Z','2025-10-01T21:00:00.000Z')")],
            "next_token": "page-2"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities-service/v1/cycles/aggregate/range/9"))
        .and(query_param("nextToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                // vendor repeats the boundary cycle on the next page
                cycle_json(201, "2025-10-01", "['2025-09-30T21:00:00.000Z','2025-10-01T21:00:00.000Z')"),
                cycle_json(202, "2025-10-02", "['2025-10-01T21:00:00.000Z',)")
            ]
        })))
        .mount(&server)
        .await;
    mount_empty_vows(&server, 201).await;
    mount_empty_vows(&server, 202).await;

    let range = DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
    )
    .unwrap();
    let records = get_cycle_data(&client, &range).await.expect("cycles");

    let ids: Vec<i64> = records.iter().map(|r| r.cycle_id).collect();
    assert_eq!(ids, vec![201, 202]);
}

#[tokio::test]
async fn single_day_range_returns_at_most_one_record() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    let day = chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
    Mock::given(method("GET"))
        .and(path("/activities-service/v1/cycles/aggregate/range/9"))
        .and(query_param("startTime", "2025-10-01T00:00:00.000Z"))
        .and(query_param("endTime", "2025-10-01T23:59:59.999Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            cycle_json(301, "2025-10-01", "['2025-09-30T21:00:00.000Z','2025-10-01T21:00:00.000Z')")
        ])))
        .mount(&server)
        .await;
    mount_empty_vows(&server, 301).await;

    let records = get_cycle_data(&client, &DateRange::single_day(day))
        .await
        .expect("cycles");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, day);
}

#[tokio::test]
async fn sub_fetch_failure_fails_the_whole_call() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/activities-service/v1/cycles/aggregate/range/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            cycle_json(401, "2025-10-01", "['2025-09-30T21:00:00.000Z','2025-10-01T21:00:00.000Z')")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vow-service/v1/vows/recovery/1d/cycle/401"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let range = DateRange::single_day(chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    let res = get_cycle_data(&client, &range).await;
    match res {
        Err(WhoopError::Api {
            endpoint, status, ..
        }) => {
            assert_eq!(status, 500);
            assert!(endpoint.contains("recovery"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn reversed_range_fails_before_any_network_call() {
    let res = DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
    );
    assert!(matches!(res, Err(WhoopError::Config(_))));
}
