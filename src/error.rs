use wasm_bindgen::JsValue;

/// Errors crossing the wasm boundary. Extraction itself never fails: bad XML
/// is recovered by the fallback scan and bad points are dropped one by one.
#[derive(Debug)]
pub enum RouteAnalyzerError {
    InvalidOptions(String),
    Serialize(String),
}

impl std::fmt::Display for RouteAnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOptions(msg) => write!(f, "Invalid options: {msg}"),
            Self::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RouteAnalyzerError {}

impl From<RouteAnalyzerError> for JsValue {
    fn from(e: RouteAnalyzerError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
