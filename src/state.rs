use std::sync::Arc;

use crate::{
    config::AppConfig,
    db,
    users::{repo::PgConnector, services::UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::create_pool(&config.database).await?;
        let connector = Arc::new(PgConnector::new(pool));
        Ok(Self::from_parts(Arc::new(UserService::new(connector))))
    }

    pub fn from_parts(users: Arc<UserService>) -> Self {
        Self { users }
    }
}
