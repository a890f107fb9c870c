//! Handlers for the `/inventory/records` resource.
//!
//! Inventory update records are scoped to the caller's store. The listing
//! pairs each record with the records of its time card; the "today" view
//! condenses the records of the shifts starting within the next 24 hours into
//! one line each.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use storekeep_core::error::CoreError;
use storekeep_core::grouping::distinct_shift_ids;
use storekeep_core::inventory::{validate_category, CreateInventoryRecordRequest};
use storekeep_core::today::{
    active_shifts, start_of_local_day, summarize_active_shifts, ShiftSummary,
};
use storekeep_core::types::DbId;
use storekeep_db::models::inventory_record::{
    CreateInventoryRecord, EntriesByTimeCard, InventoryRecordGroup, InventoryUpdateRecord,
};
use storekeep_db::models::time_card::TimeCard;
use storekeep_db::repositories::{InventoryRecordRepo, TimeCardRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::current_user::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One line of the "today" view.
pub type TodaySummary = ShiftSummary<TimeCard, InventoryUpdateRecord>;

/// Query parameters for the record listing endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    /// Optional category filter (e.g. `cigarette`).
    pub category: Option<String>,
}

/// GET /api/v1/inventory/records
///
/// List the store's records, optionally filtered by category. Each record
/// yields one entry carrying its own author, its time card, and all records
/// of that time card (filtered by the same category). A time card with
/// several records therefore appears once per record.
pub async fn list_records(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(params): Query<RecordQuery>,
) -> AppResult<Json<DataResponse<Vec<InventoryRecordGroup>>>> {
    let category = params.category.as_deref();
    if let Some(category) = category {
        validate_category(category)?;
    }

    let records = InventoryRecordRepo::list_by_store(&state.pool, user.store_id, category).await?;

    let card_ids = distinct_shift_ids(&records);
    let cards: HashMap<DbId, TimeCard> = TimeCardRepo::list_by_ids(&state.pool, &card_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let mut by_card: HashMap<DbId, Vec<InventoryUpdateRecord>> = HashMap::new();
    for &card_id in &card_ids {
        let card_records =
            InventoryRecordRepo::list_by_time_card(&state.pool, card_id, category).await?;
        by_card.insert(card_id, card_records);
    }

    let data = records
        .into_iter()
        .map(|record| -> AppResult<InventoryRecordGroup> {
            let time_card = cards.get(&record.time_card_id).cloned().ok_or_else(|| {
                CoreError::Internal(format!(
                    "Time card {} referenced by inventory record {} is missing",
                    record.time_card_id, record.id
                ))
            })?;
            Ok(InventoryRecordGroup {
                user_name: record.user_name,
                user_profile_code: record.user_profile_code,
                time_card,
                records: by_card
                    .get(&record.time_card_id)
                    .cloned()
                    .unwrap_or_default(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/inventory/records/today
///
/// Summarise the records of every shift active as of the start of today in
/// the business timezone. Most recently listed shift first.
///
/// Any time card of the store with an unparseable work time fails the whole
/// request with a 500.
pub async fn list_today(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TodaySummary>>>> {
    let reference = start_of_local_day(Utc::now(), state.config.business_offset);

    let cards = TimeCardRepo::list_by_store(&state.pool, user.store_id).await?;
    let active: Vec<TimeCard> = active_shifts(reference, &cards)
        .map_err(|invalid| {
            tracing::error!(
                time_card_id = invalid.shift.id,
                work_time = %invalid.shift.work_time,
                error = %invalid.error,
                "Time card has an unparseable work time",
            );
            CoreError::from(invalid.error)
        })?
        .into_iter()
        .cloned()
        .collect();

    let card_ids: Vec<DbId> = active.iter().map(|c| c.id).collect();
    let records = InventoryRecordRepo::list_by_time_cards(&state.pool, &card_ids).await?;
    let lookup = EntriesByTimeCard::from_records(records);

    let data = summarize_active_shifts(reference, &active, &lookup)?;

    tracing::debug!(
        store_id = user.store_id,
        %reference,
        shifts = cards.len(),
        active = active.len(),
        summaries = data.len(),
        "Built today's inventory summary",
    );

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/inventory/records
///
/// Log an inventory change against one of the store's time cards. The
/// caller is recorded as the author.
pub async fn create_record(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateInventoryRecordRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<InventoryUpdateRecord>>)> {
    input.check()?;

    TimeCardRepo::find_in_store(&state.pool, input.time_card_id, user.store_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TimeCard",
            id: input.time_card_id,
        })?;

    let record = InventoryRecordRepo::create(
        &state.pool,
        &CreateInventoryRecord {
            inventory_name: input.inventory_name,
            category: input.category,
            user_name: user.user_name.clone(),
            user_profile_code: user.user_profile_code,
            time_card_id: input.time_card_id,
            store_id: user.store_id,
        },
    )
    .await?;

    tracing::info!(
        record_id = record.id,
        user_id = user.id,
        store_id = user.store_id,
        category = %record.category,
        "Inventory record created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// DELETE /api/v1/inventory/records/{id}
///
/// Delete one of the store's records. Returns 404 if it does not exist or
/// belongs to another store.
pub async fn delete_record(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InventoryRecordRepo::delete_in_store(&state.pool, id, user.store_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "InventoryUpdateRecord",
            id,
        }));
    }

    tracing::info!(record_id = id, user_id = user.id, "Inventory record deleted");
    Ok(StatusCode::NO_CONTENT)
}
