use crate::route_types::{ProfileSeries, Track};

/// Default cap on profile length, enough for a smooth chart path.
pub const DEFAULT_MAX_POINTS: usize = 200;

/// Downsample a track's elevation values for charting.
///
/// Uniform stride over the elevation-bearing values, first value always
/// included, final value appended when the stride skips past it. Empty series
/// when fewer than 2 values exist.
pub fn sample(track: &Track, max_points: usize) -> ProfileSeries {
    let elevations = track.elevations();
    if elevations.len() < 2 {
        return ProfileSeries::default();
    }

    let stride = (elevations.len() / max_points.max(1)).max(1);
    let mut values: Vec<f64> = elevations.iter().copied().step_by(stride).collect();

    if let Some(&last) = elevations.last() {
        if values.last() != Some(&last) {
            values.push(last);
        }
    }

    ProfileSeries { values }
}
