use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-supplied outfit attributes from the design form. Everything except
/// `prompt` is optional; missing fields fall back to generic default text at
/// prompt-assembly time and are never an error.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSpec {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color_theme: Option<String>,
    /// Hex string or color name, e.g. "#ff0055" or "navy".
    #[serde(default)]
    pub main_color: Option<String>,
    #[serde(default)]
    pub model_size: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub graphic_print: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub hairstyle: Option<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default)]
    pub upper_wear: Vec<String>,
    #[serde(default)]
    pub lower_wear: Vec<String>,
    #[serde(default)]
    pub shoes: Vec<String>,
    #[serde(default)]
    pub head_accessories: Vec<String>,
}

/// Per-garment narrative fields assembled by the gateway from the outfit
/// attributes and the synthesized styling text.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBreakdown {
    pub upper_wear: String,
    pub lower_wear: String,
    pub shoes: String,
    pub accessories: String,
    pub head_accessories: String,
    pub hairstyle: String,
    pub color_palette: String,
    pub fabric_details: String,
    pub occasion_fit: String,
    pub body_type_notes: String,
    pub seasonal_context: String,
    pub mood_styling: String,
    pub color_psychology: String,
    pub image_ratio: String,
    pub texture_notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStyling {
    pub fabric_tip: String,
    pub mood_tip: String,
    pub color_psychology: String,
    pub occasion_guide: String,
    pub body_type_notes: String,
}

/// Echo of the submitted outfit attributes plus all synthesized text.
/// Fully derived from a single [`OutfitSpec`]; no cross-design dependency.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color_theme: Option<String>,
    #[serde(default)]
    pub main_color: Option<String>,
    #[serde(default)]
    pub model_size: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub graphic_print: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub hairstyle: Option<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default)]
    pub upper_wear: Vec<String>,
    #[serde(default)]
    pub lower_wear: Vec<String>,
    #[serde(default)]
    pub shoes: Vec<String>,
    #[serde(default)]
    pub head_accessories: Vec<String>,
    pub description: String,
    pub story: String,
    pub styling_tip: String,
    pub quirky_caption: String,
    pub detailed_breakdown: DetailedBreakdown,
    pub advanced_styling: AdvancedStyling,
}

/// One generated candidate as returned by `/api/generate`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub image_url: String,
    pub specs: Specs,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A finished design as produced by the request orchestrator and persisted
/// into history. Never mutated after creation; removed only by FIFO eviction
/// or an explicit history clear.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDesign {
    pub id: Uuid,
    pub image_url: String,
    pub specs: Specs,
    pub is_best_pick: bool,
    pub timestamp: DateTime<Utc>,
}
