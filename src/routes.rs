use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::content;
use crate::models::{
    AdvancedStyling, ChatRequest, ChatResponse, DetailedBreakdown, DownloadRequest,
    GenerateResponse, OutfitSpec, Specs, Suggestion,
};
use crate::openai::{OpenAiClient, ProviderError};
use crate::prompt;

const STORY: &str = "Generated by AI based on your prompt and selections. Each piece is \
thoughtfully designed to create a cohesive, fashionable look that reflects your personal \
style preferences.";

#[derive(Clone)]
pub struct AppState {
    /// None when no provider credential is configured; every generation and
    /// chat request then fails with a configuration error.
    pub openai: Option<Arc<OpenAiClient>>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            openai: api_key.map(|key| Arc::new(OpenAiClient::new(key))),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client(openai: OpenAiClient) -> Self {
        Self {
            openai: Some(Arc::new(openai)),
            http: reqwest::Client::new(),
        }
    }
}

/// Request-level error taxonomy. Everything is caught at the handler boundary
/// and serialized as a JSON `{ error, details? }` payload; nothing escapes as
/// a process crash. No call is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key missing")]
    Configuration,
    #[error("{0}")]
    Validation(&'static str),
    #[error("OpenAI API error")]
    Upstream { details: String },
    #[error("{0}")]
    EmptyResult(&'static str),
    #[error("Failed to download image")]
    Fetch,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut body = json!({ "error": self.to_string() });
        if let ApiError::Upstream { details } = &self {
            body["details"] = json!(details);
        }
        (status, Json(body)).into_response()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/chat", post(chat))
        .route("/api/download-image", post(download_image))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// One outfit specification in, one decorated suggestion out. Exactly one
/// provider call per request; the synthesized text is attached only after the
/// image resolves.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<OutfitSpec>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let openai = state.openai.as_deref().ok_or(ApiError::Configuration)?;

    let full_prompt = prompt::assemble(&body);
    info!(prompt = %body.prompt, "generating design");

    let image_url = openai
        .generate_image(&full_prompt)
        .await
        .map_err(|e| match e {
            ProviderError::EmptyResult(_) => ApiError::EmptyResult("No image generated"),
            ProviderError::Upstream { body, .. } => ApiError::Upstream { details: body },
            ProviderError::Transport(e) => ApiError::Upstream {
                details: e.to_string(),
            },
        })?;

    let specs = decorate(&body);
    info!(%image_url, "design generated");

    Ok(Json(GenerateResponse {
        suggestions: vec![Suggestion { image_url, specs }],
    }))
}

/// Single-turn relay to the chat-completion provider.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or(ApiError::Validation("Message is required"))?;
    let openai = state.openai.as_deref().ok_or(ApiError::Configuration)?;

    let reply = openai.chat(&message).await.map_err(|e| match e {
        ProviderError::EmptyResult(_) => ApiError::EmptyResult("No reply from OpenAI"),
        ProviderError::Upstream { body, .. } => ApiError::Upstream { details: body },
        ProviderError::Transport(e) => ApiError::Upstream {
            details: e.to_string(),
        },
    })?;

    Ok(Json(ChatResponse { reply }))
}

/// CORS-avoidance proxy: fetches a remote image server-side and streams it
/// back as an attachment. No synthesized content is attached here.
pub async fn download_image(
    State(state): State<AppState>,
    Json(body): Json<DownloadRequest>,
) -> Result<Response, ApiError> {
    let image_url = body
        .image_url
        .filter(|u| !u.trim().is_empty())
        .ok_or(ApiError::Validation("Image URL is required"))?;

    let response = state.http.get(&image_url).send().await.map_err(|e| {
        warn!(%image_url, error = %e, "image fetch failed");
        ApiError::Fetch
    })?;
    if !response.status().is_success() {
        warn!(%image_url, status = %response.status(), "image fetch returned failure status");
        return Err(ApiError::Fetch);
    }
    let bytes = response.bytes().await.map_err(|_| ApiError::Fetch)?;

    let filename = body
        .filename
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| format!("fashion-design-{}.jpg", Utc::now().timestamp_millis()));

    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "image/jpeg".parse().unwrap());
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .map_err(|_| ApiError::Validation("Invalid filename"))?,
    );

    Ok((StatusCode::OK, headers, bytes).into_response())
}

fn join_or(values: &[String], default: &str) -> String {
    if values.is_empty() {
        default.to_string()
    } else {
        values.join(", ")
    }
}

/// Builds the full decorated spec record for one generated image: quirky
/// caption, styling tips, color psychology, body-type/occasion guidance, the
/// per-garment breakdown, and the one-sentence description.
pub fn decorate(spec: &OutfitSpec) -> Specs {
    let mood = spec.mood.as_deref().unwrap_or("");
    let style = spec.style.as_deref().unwrap_or("");
    let fabric = spec.fabric.as_deref().unwrap_or("quality fabric");
    let season = spec.season.as_deref().unwrap_or("all-season");
    let color_theme = spec.color_theme.as_deref().unwrap_or("beautiful");
    let main_color = spec.main_color.as_deref().unwrap_or("neutral");

    let quirky_caption = content::quirky_caption(mood);
    let tips = content::styling_tips(fabric, season, mood, color_theme);
    let seasonal_tip = tips.seasonal.clone();
    let psych = content::color_psychology(color_theme, main_color);
    let derived = content::body_type_and_occasion(style, fabric, mood);
    let image = content::image_spec();

    let upper_wear_text = join_or(
        &spec.upper_wear,
        "Stylish top piece with thoughtful design details",
    );
    let lower_wear_text = join_or(
        &spec.lower_wear,
        "Coordinating bottom that complements the overall aesthetic",
    );
    let shoes_text = join_or(
        &spec.shoes,
        "Footwear that completes the look with style and comfort",
    );
    let accessories_text = join_or(
        &spec.accessories,
        "Carefully curated accessories that enhance the outfit",
    );
    let head_accessories_text = join_or(
        &spec.head_accessories,
        "None - letting the outfit speak for itself",
    );

    let graphic_print = spec.graphic_print.as_deref().unwrap_or("none");
    let pattern = spec.pattern.as_deref().unwrap_or("solid");
    let texture_notes = if graphic_print != "none" {
        format!("Features {graphic_print} graphic elements")
    } else if pattern != "solid" {
        format!("{pattern} pattern adds visual interest")
    } else {
        "Clean, solid design focuses on silhouette and form".to_string()
    };

    let detailed_breakdown = DetailedBreakdown {
        upper_wear: upper_wear_text,
        lower_wear: lower_wear_text,
        shoes: shoes_text,
        accessories: accessories_text,
        head_accessories: head_accessories_text,
        hairstyle: spec
            .hairstyle
            .clone()
            .unwrap_or_else(|| "Natural styling that complements the overall aesthetic".to_string()),
        color_palette: format!(
            "{color_theme} theme featuring {main_color} as the primary color. {}",
            psych.theme
        ),
        fabric_details: format!("{fabric} chosen for its {}", tips.fabric),
        occasion_fit: format!("Perfect for {}", derived.occasions.join(", ")),
        body_type_notes: derived.body_type.clone(),
        seasonal_context: tips.seasonal.clone(),
        mood_styling: tips.mood.clone(),
        color_psychology: psych.main_color.clone(),
        image_ratio: format!("{} - {}", image.ratio, image.description),
        texture_notes,
    };

    let advanced_styling = AdvancedStyling {
        fabric_tip: tips.fabric,
        mood_tip: tips.mood,
        color_psychology: psych.main_color,
        occasion_guide: derived.occasions.join(", "),
        body_type_notes: derived.body_type,
    };

    Specs {
        style: spec.style.clone(),
        fabric: spec.fabric.clone(),
        color_theme: spec.color_theme.clone(),
        main_color: spec.main_color.clone(),
        model_size: spec.model_size.clone(),
        length: spec.length.clone(),
        mood: spec.mood.clone(),
        season: spec.season.clone(),
        target_audience: spec.target_audience.clone(),
        occasion: spec.occasion.clone(),
        graphic_print: spec.graphic_print.clone(),
        pattern: spec.pattern.clone(),
        hairstyle: spec.hairstyle.clone(),
        accessories: spec.accessories.clone(),
        upper_wear: spec.upper_wear.clone(),
        lower_wear: spec.lower_wear.clone(),
        shoes: spec.shoes.clone(),
        head_accessories: spec.head_accessories.clone(),
        description: compose_description(spec),
        story: STORY.to_string(),
        styling_tip: seasonal_tip,
        quirky_caption,
        detailed_breakdown,
        advanced_styling,
    }
}

/// One flowing sentence describing the design. Clauses for optional
/// attributes are appended only when the attribute was actually supplied;
/// there are no placeholder clauses, unlike the image prompt.
pub fn compose_description(spec: &OutfitSpec) -> String {
    let mut description = format!(
        "A {} {} in {} with a {} theme, {} length for size {}",
        spec.mood.as_deref().unwrap_or("stylish"),
        spec.style.as_deref().unwrap_or("design"),
        spec.fabric.as_deref().unwrap_or("quality fabric"),
        spec.color_theme.as_deref().unwrap_or("beautiful"),
        spec.length.as_deref().unwrap_or("perfect"),
        spec.model_size.as_deref().unwrap_or("M"),
    );

    if let Some(audience) = &spec.target_audience {
        description.push_str(&format!(" designed for {}", audience.to_lowercase()));
    }
    if let Some(occasion) = &spec.occasion {
        description.push_str(&format!(" perfect for {} occasions", occasion.to_lowercase()));
    }
    if !spec.accessories.is_empty() {
        description.push_str(&format!(
            ", accessorized with {}",
            spec.accessories.join(", ").to_lowercase()
        ));
    }
    if !spec.upper_wear.is_empty() {
        description.push_str(&format!(
            ". Features {} as upper wear",
            spec.upper_wear.join(", ").to_lowercase()
        ));
    }
    if !spec.lower_wear.is_empty() {
        description.push_str(&format!(
            " with {} as lower wear",
            spec.lower_wear.join(", ").to_lowercase()
        ));
    }
    if !spec.shoes.is_empty() {
        description.push_str(&format!(
            ", paired with {}",
            spec.shoes.join(", ").to_lowercase()
        ));
    }
    if let Some(hairstyle) = &spec.hairstyle {
        description.push_str(&format!(
            " and styled with {} hair",
            hairstyle.to_lowercase()
        ));
    }
    description.push('.');
    description
}
