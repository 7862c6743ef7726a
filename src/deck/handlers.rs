use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    catalog::Card,
    errors::DeckError,
    service::DeckService,
    types::{
        CreateDeckParams, CreateDeckResponse, DrawCardsParams, DrawCardsResponse,
        OpenDeckResponse, QueryPairs,
    },
};
use crate::shared::{AppError, AppState};

fn deck_service(state: &AppState) -> DeckService {
    DeckService::new(
        Arc::clone(&state.deck_repository),
        Arc::clone(&state.catalog),
    )
}

/// HTTP handler for creating a new deck
///
/// POST /deck?shuffle={true|false}&cards={AS,KD,...}
/// Shuffles unless `shuffle=false`; uses the full catalog when no known cards are given
#[instrument(name = "create_deck", skip(state, query))]
pub async fn create_deck(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<CreateDeckResponse>, AppError> {
    let params = CreateDeckParams::from_pairs(&query_pairs(query)?);
    let shuffle = parse_shuffle(params.shuffle.as_deref());
    let cards = parse_card_codes(params.cards.as_deref().unwrap_or(""))?;

    let deck = deck_service(&state).create_deck(shuffle, &cards).await?;

    info!(deck_id = %deck.deck_id, remaining = deck.remaining, "Deck created successfully");

    Ok(Json(deck))
}

/// HTTP handler for opening a deck
///
/// GET /deck/{id}/open
#[instrument(name = "open_deck", skip(state, uri, path))]
pub async fn open_deck(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<OpenDeckResponse>, AppError> {
    let deck_id = deck_id_from_path(&uri, path)?;
    let deck = deck_service(&state).open_deck(&deck_id).await?;
    Ok(Json(deck))
}

/// HTTP handler for drawing cards
///
/// POST /deck/{id}/draw-cards?draw={count}
#[instrument(name = "draw_cards", skip(state, uri, path, query))]
pub async fn draw_cards(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<DrawCardsResponse>, AppError> {
    let deck_id = deck_id_from_path(&uri, path)?;
    let params = DrawCardsParams::from_pairs(&query_pairs(query)?);
    let count = parse_draw_count(params.draw.as_deref())?;

    let drawn = deck_service(&state).draw_cards(&deck_id, count).await?;

    info!(deck_id = %deck_id, drawn = drawn.cards.len(), "Cards drawn successfully");

    Ok(Json(drawn))
}

/// The deck id from `/deck/{id}/...`. An id the extractor cannot decode is
/// reported as an unparseable id, using the raw path segment.
fn deck_id_from_path(
    uri: &Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    match path {
        Ok(Path(deck_id)) => Ok(deck_id),
        Err(rejection) => {
            let raw = uri.path().split('/').nth(2).unwrap_or_default();
            warn!(raw_id = %raw, reason = %rejection.body_text(), "Undecodable deck id in path");
            Err(DeckError::InvalidId(raw.to_string()).into())
        }
    }
}

fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<QueryPairs, AppError> {
    query
        .map(|Query(pairs)| pairs)
        .map_err(|rejection| AppError::InvalidParameter {
            name: "query",
            message: rejection.body_text(),
        })
}

/// `true`/`false` in any case; anything else means shuffle
fn parse_shuffle(raw: Option<&str>) -> bool {
    !matches!(raw.map(str::to_lowercase).as_deref(), Some("false"))
}

fn parse_card_codes(raw: &str) -> Result<Vec<Card>, DeckError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(Card::try_from).collect()
}

fn parse_draw_count(raw: Option<&str>) -> Result<u8, AppError> {
    raw.unwrap_or("")
        .parse::<u8>()
        .map_err(|e| AppError::InvalidParameter {
            name: "draw",
            message: e.to_string(),
        })
}
