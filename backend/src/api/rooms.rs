use crate::{
    api::AppState,
    auth::AuthUser,
    db::{
        models::{ParticipantRecord, RoomRecord},
        rooms,
    },
    error::{AppError, Result},
    lobby::{BettingInfo, DistributionType, PrizeStructure},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_ROOM_NAME_LEN: usize = 64;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub entry_fee: i64,
    /// Optional distribution ID (default: "winner-takes-all")
    pub distribution_type: Option<String>,
    #[serde(default)]
    pub allow_double_down: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct JoinRoomRequest {
    pub bet_amount: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub entry_fee: i64,
    pub distribution_type: DistributionType,
    pub allow_double_down: bool,
    pub created_at: String,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        Self {
            distribution_type: room.distribution(),
            id: room.id,
            name: room.name,
            entry_fee: room.entry_fee,
            allow_double_down: room.allow_double_down,
            created_at: room.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomResponse>,
}

#[derive(Debug, Serialize)]
pub struct RoomDetailResponse {
    pub room: RoomResponse,
    pub participants: Vec<ParticipantRecord>,
}

/// Response for available distribution types
#[derive(Debug, Serialize)]
pub struct DistributionsResponse {
    pub distributions: Vec<DistributionInfo>,
}

#[derive(Debug, Serialize)]
pub struct DistributionInfo {
    pub id: String,
    pub name: String,
    pub percentages: Vec<u32>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/distributions", get(list_distributions))
        .route("/:room_id", get(get_room))
        .route("/:room_id/join", post(join_room))
        .route("/:room_id/betting", get(betting_info))
}

async fn list_rooms(State(state): State<Arc<AppState>>) -> Result<Json<RoomListResponse>> {
    let rooms = rooms::list_rooms(&state.pool)
        .await?
        .into_iter()
        .map(RoomResponse::from)
        .collect();

    Ok(Json(RoomListResponse { rooms }))
}

async fn create_room(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: std::result::Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<Json<RoomResponse>> {
    let auth_user = AuthUser::from_headers(&state.jwt_manager, &headers)?;
    let Json(req) = body?;

    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > MAX_ROOM_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Room name must be between 1 and {} characters",
            MAX_ROOM_NAME_LEN
        )));
    }
    if req.entry_fee < 0 {
        return Err(AppError::Validation(
            "entry_fee must not be negative".to_string(),
        ));
    }

    let distribution = DistributionType::from_id(req.distribution_type.as_deref());
    let room = RoomRecord::new(
        name.to_string(),
        req.entry_fee,
        distribution,
        req.allow_double_down,
    );
    rooms::create_room(&state.pool, &room).await?;

    tracing::info!("User {} created room {}", auth_user.user_id, room.id);
    Ok(Json(RoomResponse::from(room)))
}

/// List all payout policies with their percentage tables
async fn list_distributions() -> Json<DistributionsResponse> {
    let distributions = DistributionType::ALL
        .into_iter()
        .map(|d| DistributionInfo {
            id: d.as_id().to_string(),
            name: d.name().to_string(),
            percentages: PrizeStructure::for_distribution(d).payouts,
        })
        .collect();

    Json(DistributionsResponse { distributions })
}

async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailResponse>> {
    let room = rooms::load_room(&state.pool, &room_id).await?;
    let participants = rooms::list_participants(&state.pool, &room_id).await?;

    Ok(Json(RoomDetailResponse {
        room: room.into(),
        participants,
    }))
}

async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: std::result::Result<Json<JoinRoomRequest>, JsonRejection>,
) -> Result<Json<ParticipantRecord>> {
    let auth_user = AuthUser::from_headers(&state.jwt_manager, &headers)?;

    // A join without a JSON body places no bet
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => JoinRoomRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let bet_amount = req.bet_amount.unwrap_or(0);
    if bet_amount < 0 {
        return Err(AppError::Validation(
            "bet_amount must not be negative".to_string(),
        ));
    }

    let record = rooms::load_room(&state.pool, &room_id).await?;
    let participants = rooms::list_participants(&state.pool, &room_id).await?;
    if record.to_room(&participants).is_participant(&auth_user.user_id) {
        return Err(AppError::Validation("Already joined this room".to_string()));
    }

    let participant =
        rooms::add_participant(&state.pool, &room_id, &auth_user.user_id, bet_amount).await?;

    Ok(Json(participant))
}

/// Betting panel for the caller; anonymous callers see a zero bet
async fn betting_info(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BettingInfo>> {
    let viewer = AuthUser::from_headers_optional(&state.jwt_manager, &headers)?;

    let record = rooms::load_room(&state.pool, &room_id).await?;
    let participants = rooms::list_participants(&state.pool, &room_id).await?;
    let room = record.to_room(&participants);

    let current_user = viewer.as_ref().map(|u| u.user_id.as_str());
    Ok(Json(BettingInfo::for_room(&room, current_user)))
}
