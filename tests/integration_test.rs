use geojson::Value;
use route_analyzer_wasm::converter::to_feature_collection;
use route_analyzer_wasm::options::AnalyzeOptions;
use route_analyzer_wasm::{extractor, sampler, stats};

fn load_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{path}")).unwrap()
}

// ---- basic/ ----

#[test]
fn test_01_alpine_track_extraction() {
    let track = extractor::extract(&load_fixture("basic/01_alpine_track.gpx"));
    assert_eq!(track.len(), 4);
    assert!((track.points[0].lat - 45.0).abs() < 1e-10);
    assert!((track.points[0].lon - 6.0).abs() < 1e-10);
    assert!((track.points[3].lat - 45.03).abs() < 1e-10);
    assert_eq!(track.elevations(), vec![1000.0, 1100.0, 1050.0, 1200.0]);
}

#[test]
fn test_01_alpine_track_stats() {
    let track = extractor::extract(&load_fixture("basic/01_alpine_track.gpx"));
    let stats = stats::compute(&track).unwrap();

    assert!((stats.total_ascent - 250.0).abs() < 1e-9);
    assert!((stats.total_descent - 50.0).abs() < 1e-9);
    assert!((stats.min_elevation - 1000.0).abs() < 1e-9);
    assert!((stats.max_elevation - 1200.0).abs() < 1e-9);

    // Three ~1.35 km diagonal segments.
    assert!(stats.total_distance_km > 3.5 && stats.total_distance_km < 4.5);
    let expected_gradient = stats.total_ascent / (stats.total_distance_km * 1000.0) * 100.0;
    assert!((stats.average_gradient_percent - expected_gradient).abs() < 1e-9);
}

#[test]
fn test_01_alpine_track_profile_and_geojson() {
    let track = extractor::extract(&load_fixture("basic/01_alpine_track.gpx"));

    // Well under the cap: the profile is the elevation sequence itself.
    let profile = sampler::sample(&track, sampler::DEFAULT_MAX_POINTS);
    assert_eq!(profile.values, vec![1000.0, 1100.0, 1050.0, 1200.0]);

    let fc = to_feature_collection(&track, &AnalyzeOptions::default());
    assert_eq!(fc.features.len(), 3); // line + start + finish
    let line = fc.features[0].geometry.as_ref().unwrap();
    if let Value::LineString(coords) = &line.value {
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[0], vec![6.0, 45.0, 1000.0]);
    } else {
        panic!("Expected LineString");
    }
}

#[test]
fn test_02_route_points() {
    let track = extractor::extract(&load_fixture("basic/02_route_points.gpx"));
    assert_eq!(track.len(), 3);

    let stats = stats::compute(&track).unwrap();
    assert!((stats.total_ascent - 15.0).abs() < 1e-9);
    assert!((stats.total_descent - 20.0).abs() < 1e-9);
    assert!((stats.min_elevation - 35.0).abs() < 1e-9);
    assert!((stats.max_elevation - 55.0).abs() < 1e-9);
}

#[test]
fn test_03_waypoints_with_elevation_gap() {
    let track = extractor::extract(&load_fixture("basic/03_waypoints.gpx"));
    assert_eq!(track.len(), 3);
    assert_eq!(track.points[1].ele, None);

    // Deltas walk the elevation-bearing points only: 40 -> 60.
    let stats = stats::compute(&track).unwrap();
    assert!((stats.total_ascent - 20.0).abs() < 1e-9);
    assert_eq!(stats.total_descent, 0.0);

    let profile = sampler::sample(&track, sampler::DEFAULT_MAX_POINTS);
    assert_eq!(profile.values, vec![40.0, 60.0]);
}

#[test]
fn test_04_track_points_win_over_waypoints() {
    let track = extractor::extract(&load_fixture("basic/04_mixed_tags.gpx"));
    // Three waypoints are present but the two trkpt elements take priority.
    assert_eq!(track.len(), 2);
    assert!((track.points[0].lat - 45.0).abs() < 1e-10);
    assert!((track.points[1].lat - 45.01).abs() < 1e-10);
}

// ---- edge_cases/ ----

#[test]
fn test_05_malformed_document_recovered() {
    let track = extractor::extract(&load_fixture("edge_cases/05_malformed.gpx"));
    assert_eq!(track.len(), 3);
    assert_eq!(track.elevations(), vec![1000.0, 1020.0, 990.0]);

    let stats = stats::compute(&track).unwrap();
    assert!((stats.total_ascent - 20.0).abs() < 1e-9);
    assert!((stats.total_descent - 30.0).abs() < 1e-9);
}

#[test]
fn test_06_plain_text_is_no_data_not_an_error() {
    let track = extractor::extract(&load_fixture("edge_cases/06_plain_text.gpx"));
    assert!(track.is_empty());
    assert!(stats::compute(&track).is_none());
    assert!(sampler::sample(&track, sampler::DEFAULT_MAX_POINTS).is_empty());

    let fc = to_feature_collection(&track, &AnalyzeOptions::default());
    assert!(fc.features.is_empty());
}

#[test]
fn test_07_track_without_elevation() {
    let track = extractor::extract(&load_fixture("edge_cases/07_no_elevation.gpx"));
    assert_eq!(track.len(), 3);

    // Coordinates alone are enough for the map but not for statistics.
    assert!(stats::compute(&track).is_none());
    assert!(sampler::sample(&track, sampler::DEFAULT_MAX_POINTS).is_empty());

    let fc = to_feature_collection(&track, &AnalyzeOptions::default());
    assert_eq!(fc.features.len(), 3);
    if let Value::LineString(coords) = &fc.features[0].geometry.as_ref().unwrap().value {
        assert!(coords.iter().all(|c| c.len() == 2));
    } else {
        panic!("Expected LineString");
    }
}

#[test]
fn test_08_bad_points_dropped_individually() {
    let track = extractor::extract(&load_fixture("edge_cases/08_bad_coordinates.gpx"));
    assert_eq!(track.len(), 2);
    assert_eq!(track.elevations(), vec![800.0, 830.0]);
}

#[test]
fn test_repeated_extraction_is_stable() {
    let gpx = load_fixture("basic/01_alpine_track.gpx");
    let first = extractor::extract(&gpx);
    let second = extractor::extract(&gpx);
    assert_eq!(first, second);
}
