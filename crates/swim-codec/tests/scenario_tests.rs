use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use swim_codec::{decode_scenario, encode_scenario, ConversionError};
use swim_model::{PlannerAlgorithm, SwimProtocol};
use swim_test_utils::{assert_close, full_scenario, init_tracing, minimal_scenario};

#[test]
fn test_full_scenario_roundtrip() {
    init_tracing();
    let document = full_scenario();
    let scenario = decode_scenario(&document).unwrap();

    assert!(scenario.has_time());
    assert!(scenario.has_obstacles());
    assert!(scenario.has_aircraft());
    assert!(scenario.has_waypoints());
    assert!(scenario.has_trajectory());
    assert!(scenario.planner_is_bound());
    assert_eq!(scenario.obstacles.len(), 3);
    assert_eq!(scenario.planner.algorithm(), PlannerAlgorithm::HeuristicRrt);
    assert!(scenario.swim.has_subscribed(SwimProtocol::Iwxxm));

    let encoded = encode_scenario(&scenario).unwrap();
    let expected_grid = document.environment.and_then(|e| e.grid).unwrap();
    let grid = encoded.environment.and_then(|e| e.grid).unwrap();
    assert_eq!(grid.division, expected_grid.division);
    assert_close(grid.south_west.latitude, expected_grid.south_west.latitude, 1e-6);
    assert_close(grid.north_east.longitude, expected_grid.north_east.longitude, 1e-6);
    assert_close(grid.top, expected_grid.top, 1e-3);

    assert_eq!(encoded.id, document.id);
    assert_eq!(encoded.time, document.time);
    assert_eq!(encoded.threshold, document.threshold);
    assert_eq!(encoded.globe, document.globe);
    assert_eq!(encoded.obstacles, document.obstacles);
    assert_eq!(encoded.aircraft, document.aircraft);
    assert_eq!(encoded.waypoints, document.waypoints);
    assert_eq!(encoded.trajectory, document.trajectory);
    assert_eq!(encoded.planner, document.planner);
    assert_eq!(encoded.datalink, document.datalink);
    assert_eq!(encoded.swim, document.swim);
}

#[test]
fn test_minimal_scenario_stays_minimal() {
    let document = minimal_scenario();
    let scenario = decode_scenario(&document).unwrap();
    assert!(!scenario.has_time());
    assert!(!scenario.has_obstacles());
    assert!(!scenario.has_aircraft());
    assert!(scenario.planner.aircraft.is_none());

    let encoded = encode_scenario(&scenario).unwrap();
    assert!(encoded.time.is_none());
    assert!(encoded.obstacles.is_none());
    assert!(encoded.aircraft.is_none());
    assert!(encoded.waypoints.is_none());
    assert!(encoded.trajectory.is_none());
    assert_eq!(encoded.planner, document.planner);
}

#[test]
fn test_planner_shares_scenario_aircraft() {
    let scenario = decode_scenario(&full_scenario()).unwrap();
    let aircraft = scenario.aircraft.as_ref().unwrap();
    let planned = scenario.planner.aircraft.as_ref().unwrap();
    assert!(Arc::ptr_eq(aircraft, planned));
    assert!(Arc::ptr_eq(&scenario.environment, &scenario.planner.environment));
}

#[test]
fn test_missing_planner_is_reported() {
    let mut document = minimal_scenario();
    document.planner = None;
    assert_eq!(
        decode_scenario(&document).unwrap_err(),
        ConversionError::missing("scenario.planner")
    );
}

#[test]
fn test_first_error_wins() {
    let mut document = full_scenario();
    document.time = Some("not a time".to_string());
    document.datalink = None;
    let err = decode_scenario(&document).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::MalformedValue { ref field, .. } if field == "scenario.time"
    ));
}

#[test]
fn test_concurrent_decoding_agrees() {
    let document = full_scenario();
    let decoded: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_scenario(&document)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    let first = encode_scenario(&decoded[0]).unwrap();
    for scenario in &decoded[1..] {
        assert_eq!(encode_scenario(scenario).unwrap(), first);
    }
}
