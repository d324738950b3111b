use tracing::{debug, error};

use crate::users::{
    dto::User,
    errors::UserError,
    repo::UserStore,
    sql::{Assignment, Column},
};

pub async fn get_all_users(store: &mut dyn UserStore) -> Result<Vec<User>, UserError> {
    let rows = store.fetch_all().await.map_err(|e| {
        error!(error = %e, "list users query failed");
        e
    })?;
    Ok(rows.into_iter().map(User::from).collect())
}

pub async fn get_user(store: &mut dyn UserStore, id: i64) -> Result<User, UserError> {
    if id == 0 {
        return Err(UserError::MissingUserId);
    }

    match store.fetch_by_id(id).await {
        Ok(Some(row)) => Ok(row.into()),
        Ok(None) => Err(UserError::UserNotFound),
        Err(e) => {
            error!(error = %e, user_id = id, "get user query failed");
            Err(e.into())
        }
    }
}

/// Exists only when exactly one row carries the name.
pub async fn check_user_name_exists(
    store: &mut dyn UserStore,
    user_name: &str,
) -> Result<bool, UserError> {
    if user_name.is_empty() {
        return Err(UserError::MissingUserName);
    }

    let count = store.count_by_user_name(user_name).await.map_err(|e| {
        error!(error = %e, user_name, "count by user_name failed");
        e
    })?;
    Ok(count == 1)
}

pub async fn create_user(store: &mut dyn UserStore, mut user: User) -> Result<User, UserError> {
    if check_user_name_exists(store, &user.user_name).await? {
        return Err(UserError::UserExists);
    }

    let row = user.to_row();
    user.id = store.insert_returning_id(&row).await.map_err(|e| {
        error!(error = %e, user_name = %row.user_name, "insert user failed");
        e
    })?;
    debug!(user_id = user.id, "user inserted");
    Ok(user)
}

/// Columns to write for a partial update. Empty strings and an absent
/// department count as "not provided", so a field cannot be cleared here.
pub fn changed_columns(user: &User) -> Vec<Assignment> {
    let mut changes = Vec::new();
    if !user.user_name.is_empty() {
        changes.push(Assignment::new(Column::UserName, &user.user_name));
    }
    if !user.first_name.is_empty() {
        changes.push(Assignment::new(Column::FirstName, &user.first_name));
    }
    if !user.last_name.is_empty() {
        changes.push(Assignment::new(Column::LastName, &user.last_name));
    }
    if !user.email.is_empty() {
        changes.push(Assignment::new(Column::Email, &user.email));
    }
    if !user.user_status.is_empty() {
        changes.push(Assignment::new(Column::UserStatus, &user.user_status));
    }
    if let Some(department) = &user.department {
        changes.push(Assignment::new(Column::Department, department));
    }
    changes
}

/// Applies the provided fields, then re-reads the row so the caller sees
/// what storage actually holds.
pub async fn update_user(store: &mut dyn UserStore, user: &User) -> Result<User, UserError> {
    if user.id == 0 {
        return Err(UserError::MissingUserId);
    }

    let changes = changed_columns(user);
    if changes.is_empty() {
        return Err(UserError::UpdateMissingValues);
    }

    let affected = store.update_by_id(user.id, &changes).await.map_err(|e| {
        error!(error = %e, user_id = user.id, "update user failed");
        e
    })?;
    if affected == 0 {
        return Err(UserError::UpdateNoRows);
    }

    get_user(store, user.id).await
}

pub async fn delete_user(store: &mut dyn UserStore, id: i64) -> Result<(), UserError> {
    let affected = store.delete_by_id(id).await.map_err(|e| {
        error!(error = %e, user_id = id, "delete user failed");
        e
    })?;
    if affected == 0 {
        return Err(UserError::UserNotFound);
    }
    Ok(())
}
