pub mod rooms;

use crate::{auth::JwtManager, db::DbPool};
use std::sync::Arc;

pub use rooms::router as rooms_router;

pub struct AppState {
    pub pool: DbPool,
    pub jwt_manager: Arc<JwtManager>,
}
