use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

use crate::common::EngineError;
use crate::domains::ingest::activities::ingest_review::{ingest_review, ReviewIngest};
use crate::domains::ingest::activities::resolve_place::resolve_or_create_place;
use crate::domains::ingest::payload::{PlacePayload, RawReviewRecord};
use crate::kernel::EngineDeps;

/// Per-item tallies for a datapack upload. Failures never abort the batch.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct UploadReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Load a places datapack and ingest every record.
pub async fn upload_places(path: &Path, deps: &EngineDeps) -> Result<UploadReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading places datapack {}", path.display()))?;
    let payloads: Vec<PlacePayload> =
        serde_json::from_str(&raw).context("parsing places datapack")?;

    info!(count = payloads.len(), "Uploading places");
    let mut report = UploadReport::default();
    for payload in &payloads {
        match resolve_or_create_place(payload, &deps.db_pool).await {
            Ok(_) => report.inserted += 1,
            Err(e) => {
                error!(place_id = %payload.id, "Place upload failed: {:#}", e);
                report.failed += 1;
            }
        }
    }

    info!(?report, "Places upload finished");
    Ok(report)
}

/// Load a reviews datapack and ingest every record. Reviews for unknown
/// places are counted as skipped; other failures as failed.
pub async fn upload_reviews(path: &Path, deps: &EngineDeps) -> Result<UploadReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading reviews datapack {}", path.display()))?;
    let records: Vec<RawReviewRecord> =
        serde_json::from_str(&raw).context("parsing reviews datapack")?;

    info!(count = records.len(), "Uploading reviews");
    let mut report = UploadReport::default();
    for record in records {
        let payload = record.into_payload();
        match ingest_review(&payload, deps).await {
            Ok(ReviewIngest::Inserted) => report.inserted += 1,
            Ok(ReviewIngest::Duplicate) => report.duplicates += 1,
            Err(EngineError::NotFound { .. }) => report.skipped += 1,
            Err(e) => {
                error!(review_id = %payload.id, "Review upload failed: {:#}", e);
                report.failed += 1;
            }
        }
    }

    info!(?report, "Reviews upload finished");
    Ok(report)
}
