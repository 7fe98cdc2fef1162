use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::options::AnalyzeOptions;
use crate::route_types::{Track, TrackPoint};

/// Project an extracted track onto GeoJSON for map rendering: one LineString
/// for the route polyline, plus optional start/finish marker points.
pub fn to_feature_collection(track: &Track, opts: &AnalyzeOptions) -> FeatureCollection {
    let mut features = Vec::new();

    match track.points.as_slice() {
        [] => {}
        [only] => features.push(point_feature(only, "route", opts)),
        [first, .., last] => {
            features.push(line_feature(track, opts));
            if opts.include_markers {
                features.push(point_feature(first, "start", opts));
                features.push(point_feature(last, "finish", opts));
            }
        }
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn line_feature(track: &Track, opts: &AnalyzeOptions) -> Feature {
    let coords: Vec<Vec<f64>> = track
        .points
        .iter()
        .map(|pt| point_coords(pt, opts.include_elevation))
        .collect();

    let mut props = Map::new();
    props.insert("kind".to_string(), JsonValue::String("route".to_string()));
    props.insert(
        "pointCount".to_string(),
        JsonValue::Number(track.len().into()),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coords))),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn point_feature(pt: &TrackPoint, kind: &str, opts: &AnalyzeOptions) -> Feature {
    let coords = point_coords(pt, opts.include_elevation);

    let mut props = Map::new();
    props.insert("kind".to_string(), JsonValue::String(kind.to_string()));
    if let Some(ele) = pt.ele {
        props.insert(
            "ele".to_string(),
            JsonValue::Number(serde_json::Number::from_f64(ele).unwrap_or(0.into())),
        );
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(coords))),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Build [lon, lat] or [lon, lat, ele] coordinate array.
fn point_coords(pt: &TrackPoint, include_elevation: bool) -> Vec<f64> {
    match (include_elevation, pt.ele) {
        (true, Some(ele)) => vec![pt.lon, pt.lat, ele],
        _ => vec![pt.lon, pt.lat],
    }
}
