use serde::Serialize;

/// One recorded location sample, in traversal order within a [`Track`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    /// Meters. Absent when the source element carries no parseable <ele>.
    pub ele: Option<f64>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ele: None,
        }
    }

    pub fn with_ele(lat: f64, lon: f64, ele: f64) -> Self {
        Self {
            lat,
            lon,
            ele: Some(ele),
        }
    }
}

/// Ordered point sequence produced by one extraction call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Elevation values of the points that carry one, in track order.
    pub fn elevations(&self) -> Vec<f64> {
        self.points.iter().filter_map(|pt| pt.ele).collect()
    }
}

/// Aggregate elevation and distance figures for one track.
///
/// Ascent/descent come from raw adjacent-sample deltas over the points that
/// carry elevation; distance covers every point pair regardless of elevation.
/// Values are unrounded, display formatting belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationStats {
    pub min_elevation: f64,
    pub max_elevation: f64,
    pub total_ascent: f64,
    pub total_descent: f64,
    pub average_gradient_percent: f64,
    pub total_distance_km: f64,
}

/// Downsampled elevation series for charting. Bounded length, endpoint kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileSeries {
    pub values: Vec<f64>,
}

impl ProfileSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything the viewer needs from one analysis pass.
/// `stats` is `None` when fewer than 2 points carry elevation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalysis {
    pub point_count: usize,
    pub stats: Option<ElevationStats>,
    pub profile: ProfileSeries,
}
