//! Client-side batch orchestration.
//!
//! One form submission fans out into [`BATCH_SIZE`] independent generate
//! calls against the gateway, all carrying the same outfit spec; provider
//! non-determinism makes each candidate different. The batch waits for every
//! call to settle. Individual failures are dropped (logged, never surfaced
//! per-slot); only a batch with zero successes is reported as a failure.
//! Successes are persisted into history immediately.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::content;
use crate::history::{HistoryError, HistoryStore};
use crate::models::{GeneratedDesign, GenerateResponse, OutfitSpec, Suggestion};

/// Candidate designs requested per submission.
pub const BATCH_SIZE: usize = 3;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway returned status {status}: {message}")]
    Failed { status: u16, message: String },
    #[error("gateway response contained no suggestions")]
    Empty,
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("all generation requests failed")]
    AllRequestsFailed,
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// One generate call against the gateway. Implemented over HTTP by
/// [`GatewayClient`]; tests substitute scripted stubs.
#[async_trait]
pub trait GenerateService: Send + Sync {
    async fn generate(&self, spec: &OutfitSpec) -> Result<Suggestion, GatewayError>;
}

/// HTTP implementation of [`GenerateService`] against a running gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl GenerateService for GatewayClient {
    async fn generate(&self, spec: &OutfitSpec) -> Result<Suggestion, GatewayError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(spec)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Failed {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .suggestions
            .into_iter()
            .next()
            .ok_or(GatewayError::Empty)
    }
}

/// Issues the full batch concurrently, waits for all calls to settle, merges
/// the successes and persists each one. The first success in the output set
/// is tagged as the best pick; the tag is positional, not a quality ranking.
pub async fn run_batch(
    service: &(dyn GenerateService),
    history: &HistoryStore,
    spec: &OutfitSpec,
) -> Result<Vec<GeneratedDesign>, OrchestratorError> {
    info!(prompt = %spec.prompt, batch = BATCH_SIZE, "dispatching generation batch");

    // No concurrency cap, no per-call timeout, no cancellation of stragglers.
    let settled = tokio::join!(
        service.generate(spec),
        service.generate(spec),
        service.generate(spec),
    );

    let mut designs: Vec<GeneratedDesign> = Vec::with_capacity(BATCH_SIZE);
    for (slot, result) in [settled.0, settled.1, settled.2].into_iter().enumerate() {
        match result {
            Ok(suggestion) => {
                let best_pick = designs.is_empty();
                designs.push(build_design(spec, suggestion, best_pick));
            }
            Err(e) => warn!(slot, error = %e, "generation request failed, dropping slot"),
        }
    }

    if designs.is_empty() {
        return Err(OrchestratorError::AllRequestsFailed);
    }

    for design in &designs {
        history.add(design.clone())?;
    }
    info!(
        succeeded = designs.len(),
        failed = BATCH_SIZE - designs.len(),
        "batch resolved"
    );
    Ok(designs)
}

/// Wraps one gateway suggestion into a design record: collision-resistant id,
/// creation instant, the list selections from the submitted form, and the
/// client-side caption/tip overrides.
fn build_design(spec: &OutfitSpec, suggestion: Suggestion, best_pick: bool) -> GeneratedDesign {
    let mut specs = suggestion.specs;
    specs.accessories = spec.accessories.clone();
    specs.upper_wear = spec.upper_wear.clone();
    specs.lower_wear = spec.lower_wear.clone();
    specs.shoes = spec.shoes.clone();
    specs.head_accessories = spec.head_accessories.clone();
    specs.hairstyle = spec.hairstyle.clone();
    specs.styling_tip = content::generic_styling_tip(
        spec.style.as_deref().unwrap_or("design"),
        spec.fabric.as_deref().unwrap_or("quality fabric"),
        spec.season.as_deref().unwrap_or("all-season"),
    );
    specs.quirky_caption = content::quirky_caption(spec.mood.as_deref().unwrap_or(""));

    GeneratedDesign {
        id: Uuid::new_v4(),
        image_url: suggestion.image_url,
        specs,
        is_best_pick: best_pick,
        timestamp: Utc::now(),
    }
}
