use serde::Deserialize;

use crate::sampler;

/// Options for route analysis and GeoJSON projection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Cap on the sampled elevation profile length (default: 200)
    #[serde(default = "default_max_profile_points")]
    pub max_profile_points: usize,

    /// Include elevation as the 3rd coordinate value in GeoJSON (default: true)
    #[serde(default = "default_true")]
    pub include_elevation: bool,

    /// Emit start/finish marker Point features with the route line (default: true)
    #[serde(default = "default_true")]
    pub include_markers: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_profile_points: default_max_profile_points(),
            include_elevation: true,
            include_markers: true,
        }
    }
}

fn default_max_profile_points() -> usize {
    sampler::DEFAULT_MAX_POINTS
}

fn default_true() -> bool {
    true
}
