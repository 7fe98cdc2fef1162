pub mod converter;
pub mod error;
pub mod extractor;
pub mod options;
pub mod route_types;
pub mod sampler;
pub mod stats;

use wasm_bindgen::prelude::*;

use crate::error::RouteAnalyzerError;
use crate::options::AnalyzeOptions;
use crate::route_types::RouteAnalysis;

/// Analyze a raw GPX string: point extraction, elevation statistics and the
/// sampled profile series, returned as one JS object.
#[wasm_bindgen(js_name = analyzeRoute)]
pub fn analyze_route(gpx_string: &str, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let track = extractor::extract(gpx_string);
    let analysis = RouteAnalysis {
        point_count: track.len(),
        stats: stats::compute(&track),
        profile: sampler::sample(&track, opts.max_profile_points),
    };
    serde_wasm_bindgen::to_value(&analysis)
        .map_err(|e| RouteAnalyzerError::Serialize(e.to_string()).into())
}

/// Project a raw GPX string onto GeoJSON for map rendering, returned as a JS
/// object.
#[wasm_bindgen(js_name = routeToGeoJson)]
pub fn route_to_geojson(gpx_string: &str, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let track = extractor::extract(gpx_string);
    let fc = converter::to_feature_collection(&track, &opts);
    serde_wasm_bindgen::to_value(&fc)
        .map_err(|e| RouteAnalyzerError::Serialize(e.to_string()).into())
}

/// Project a raw GPX string onto GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = routeToGeoJsonString)]
pub fn route_to_geojson_string(gpx_string: &str, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let track = extractor::extract(gpx_string);
    let fc = converter::to_feature_collection(&track, &opts);
    serde_json::to_string(&fc).map_err(|e| RouteAnalyzerError::Serialize(e.to_string()).into())
}

fn parse_options(options: JsValue) -> Result<AnalyzeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(AnalyzeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| RouteAnalyzerError::InvalidOptions(e.to_string()).into())
    }
}
