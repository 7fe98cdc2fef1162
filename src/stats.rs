use crate::route_types::{ElevationStats, Track, TrackPoint};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Aggregate elevation statistics for a track.
///
/// Returns `None` when fewer than 2 points carry elevation; callers render a
/// "no data" state rather than zeros. Ascent and descent are raw adjacent
/// deltas with no smoothing, so GPS jitter inflates both sums on purpose.
pub fn compute(track: &Track) -> Option<ElevationStats> {
    let elevations = track.elevations();
    if elevations.len() < 2 {
        return None;
    }

    let min_elevation = elevations.iter().copied().fold(f64::INFINITY, f64::min);
    let max_elevation = elevations
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let mut total_ascent = 0.0;
    let mut total_descent = 0.0;
    for pair in elevations.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            total_ascent += delta;
        } else {
            total_descent += -delta;
        }
    }

    // Distance spans the full track, elevation-less points included.
    let total_distance_km: f64 = track
        .points
        .windows(2)
        .map(|pair| haversine_km(&pair[0], &pair[1]))
        .sum();

    let average_gradient_percent = if total_distance_km > 0.0 {
        total_ascent / (total_distance_km * 1000.0) * 100.0
    } else {
        0.0
    };

    Some(ElevationStats {
        min_elevation,
        max_elevation,
        total_ascent,
        total_descent,
        average_gradient_percent,
        total_distance_km,
    })
}

/// Great-circle distance between two samples, in kilometers.
fn haversine_km(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
