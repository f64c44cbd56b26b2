use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info, warn};

use crate::menu::load_menu_with_report;
use crate::models::ComboBatch;
use crate::planner::{create_batch, COMBOS_PER_DAY};
use crate::server::{ApiError, AppState};

/// Multipart field that carries the CSV menu.
pub const UPLOAD_FIELD: &str = "file";

/// Liveness check.
pub async fn health() -> &'static str {
    "ok"
}

/// `POST /daily-combos`: upload a CSV menu, get three combos of the day.
pub async fn daily_combos(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ComboBatch>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(%rejection, "request body is not multipart");
        ApiError::NoFile
    })?;

    let upload = read_upload(&mut multipart).await?.ok_or_else(|| {
        warn!("no `{}` upload in request", UPLOAD_FIELD);
        ApiError::NoFile
    })?;

    let (menu, report) = load_menu_with_report(upload.as_ref()).map_err(|err| {
        warn!(error = %err, "uploaded menu is unreadable");
        ApiError::from(err)
    })?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped_count(),
        "menu loaded"
    );
    for row in &report.skipped {
        debug!(line = row.line, reason = %row.reason, "row skipped");
    }

    if !menu.is_complete() {
        warn!(missing = ?menu.missing_categories(), "menu is missing categories");
        return Err(ApiError::IncompleteMenu);
    }

    let mut sampler = state.sampler();
    let batch = create_batch(&menu, sampler.as_mut(), COMBOS_PER_DAY)?;
    Ok(Json(batch))
}

/// Read the first file part named [`UPLOAD_FIELD`].
///
/// A body that cannot be parsed as multipart counts as having no upload.
/// Once a part has been read, and for an oversized body at any point, errors
/// are returned as they are.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    let mut seen_field = false;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(err) if !seen_field && err.status() != StatusCode::PAYLOAD_TOO_LARGE => {
                warn!(error = %err, "malformed multipart body");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        seen_field = true;

        if field.name() == Some(UPLOAD_FIELD) && field.file_name().is_some() {
            return Ok(Some(field.bytes().await?));
        }
    }
}
