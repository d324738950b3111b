use std::sync::Arc;

use tracing::error;

use crate::users::{
    dto::User,
    errors::UserError,
    queries,
    repo::{Connector, UserStore},
    validate::validate_user_id,
};

/// Entry point for user operations. Every call borrows one connection and
/// gives it back when the call returns, whatever the outcome.
pub struct UserService {
    connector: Arc<dyn Connector>,
}

impl UserService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }

    async fn connect(&self) -> Result<Box<dyn UserStore>, UserError> {
        self.connector.connect().await.map_err(|e| {
            error!(error = %e, "failed to acquire database connection");
            UserError::Connection(e)
        })
    }

    pub async fn get_by_id(&self, user_id: &str) -> Result<User, UserError> {
        let id = validate_user_id(user_id)?;
        let mut store = self.connect().await?;
        queries::get_user(store.as_mut(), id).await
    }

    /// All users, unpaginated.
    pub async fn get_all(&self) -> Result<Vec<User>, UserError> {
        let mut store = self.connect().await?;
        queries::get_all_users(store.as_mut()).await
    }

    /// Expects a request already checked by `validate_new_user_request`.
    pub async fn create(&self, user: User) -> Result<User, UserError> {
        let mut store = self.connect().await?;
        queries::create_user(store.as_mut(), user).await
    }

    pub async fn update(&self, user: User) -> Result<User, UserError> {
        let mut store = self.connect().await?;
        queries::update_user(store.as_mut(), &user).await
    }

    pub async fn delete_by_id(&self, user_id: &str) -> Result<(), UserError> {
        let id = validate_user_id(user_id)?;
        let mut store = self.connect().await?;
        queries::delete_user(store.as_mut(), id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use crate::users::{
        repo::{MockConnector, MockUserStore, UserStore},
        repo_types::UserRow,
        sql::Assignment,
    };

    /// Store wrapper that counts how many connections are still checked out.
    pub struct Tracked {
        inner: MockUserStore,
        open: Arc<AtomicUsize>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.open.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait::async_trait]
    impl UserStore for Tracked {
        async fn fetch_all(&mut self) -> Result<Vec<UserRow>, sqlx::Error> {
            self.inner.fetch_all().await
        }
        async fn fetch_by_id(&mut self, id: i64) -> Result<Option<UserRow>, sqlx::Error> {
            self.inner.fetch_by_id(id).await
        }
        async fn count_by_user_name(&mut self, user_name: &str) -> Result<i64, sqlx::Error> {
            self.inner.count_by_user_name(user_name).await
        }
        async fn insert_returning_id(&mut self, row: &UserRow) -> Result<i64, sqlx::Error> {
            self.inner.insert_returning_id(row).await
        }
        async fn update_by_id(
            &mut self,
            id: i64,
            changes: &[Assignment],
        ) -> Result<u64, sqlx::Error> {
            self.inner.update_by_id(id, changes).await
        }
        async fn delete_by_id(&mut self, id: i64) -> Result<u64, sqlx::Error> {
            self.inner.delete_by_id(id).await
        }
    }

    /// Connector handing out exactly one store, plus the open-connection gauge.
    pub fn connector_with(store: MockUserStore) -> (MockConnector, Arc<AtomicUsize>) {
        let open = Arc::new(AtomicUsize::new(0));
        let gauge = open.clone();
        let mut connector = MockConnector::new();
        connector.expect_connect().times(1).return_once(move || {
            gauge.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Tracked {
                inner: store,
                open: gauge,
            }) as Box<dyn UserStore>)
        });
        (connector, open)
    }

    /// Connector that must never be asked for a connection.
    pub fn unused_connector() -> MockConnector {
        let mut connector = MockConnector::new();
        connector.expect_connect().never();
        connector
    }
}
