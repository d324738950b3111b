use async_trait::async_trait;
use sqlx::{pool::PoolConnection, PgPool, Postgres};

use crate::users::{
    repo_types::UserRow,
    sql::{self, Assignment},
};

/// Storage operations available on one borrowed connection.
///
/// Implementations return raw driver errors; interpreting empty results and
/// affected-row counts is left to `users::queries`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send {
    async fn fetch_all(&mut self) -> Result<Vec<UserRow>, sqlx::Error>;
    async fn fetch_by_id(&mut self, id: i64) -> Result<Option<UserRow>, sqlx::Error>;
    async fn count_by_user_name(&mut self, user_name: &str) -> Result<i64, sqlx::Error>;
    async fn insert_returning_id(&mut self, row: &UserRow) -> Result<i64, sqlx::Error>;
    /// Returns the number of affected rows.
    async fn update_by_id(&mut self, id: i64, changes: &[Assignment]) -> Result<u64, sqlx::Error>;
    /// Returns the number of affected rows.
    async fn delete_by_id(&mut self, id: i64) -> Result<u64, sqlx::Error>;
}

/// Hands out a connection for the duration of one operation. Dropping the
/// returned store releases the connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn UserStore>, sqlx::Error>;
}

pub struct PgConnector {
    pool: PgPool,
}

impl PgConnector {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self) -> Result<Box<dyn UserStore>, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgUserStore { conn }))
    }
}

/// `UserStore` over a pooled Postgres connection.
pub struct PgUserStore {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn fetch_all(&mut self) -> Result<Vec<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(sql::SELECT_ALL)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn fetch_by_id(&mut self, id: i64) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn count_by_user_name(&mut self, user_name: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(sql::COUNT_BY_USER_NAME)
            .bind(user_name)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn insert_returning_id(&mut self, row: &UserRow) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(sql::INSERT_RETURNING_ID)
            .bind(&row.user_name)
            .bind(&row.first_name)
            .bind(&row.last_name)
            .bind(&row.email)
            .bind(&row.user_status)
            .bind(row.department.as_option()) // NULL when not valid
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update_by_id(&mut self, id: i64, changes: &[Assignment]) -> Result<u64, sqlx::Error> {
        let mut qb = sql::update_by_id(id, changes);
        let res = qb.build().execute(&mut *self.conn).await?;
        Ok(res.rows_affected())
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<u64, sqlx::Error> {
        let res = sqlx::query(sql::DELETE_BY_ID)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(res.rows_affected())
    }
}
