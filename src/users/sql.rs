use sqlx::{Postgres, QueryBuilder};

pub const TABLE: &str = "users";

/// Every SELECT lists the columns in table order; `UserRow` decodes by name.
pub const SELECT_ALL: &str = "SELECT user_id, user_name, first_name, last_name, email, user_status, department FROM users";

pub const SELECT_BY_ID: &str = "SELECT user_id, user_name, first_name, last_name, email, user_status, department FROM users WHERE user_id = $1";

pub const COUNT_BY_USER_NAME: &str = "SELECT COUNT(*) FROM users WHERE user_name = $1";

pub const INSERT_RETURNING_ID: &str = "INSERT INTO users (user_name, first_name, last_name, email, user_status, department) VALUES ($1, $2, $3, $4, $5, $6) RETURNING user_id";

pub const DELETE_BY_ID: &str = "DELETE FROM users WHERE user_id = $1";

/// Columns a partial update may touch; `user_id` is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    UserName,
    FirstName,
    LastName,
    Email,
    UserStatus,
    Department,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::UserName => "user_name",
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::Email => "email",
            Column::UserStatus => "user_status",
            Column::Department => "department",
        }
    }
}

/// One `column = value` pair of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: Column,
    pub value: String,
}

impl Assignment {
    pub fn new(column: Column, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// `UPDATE users SET c1 = $1, ... WHERE user_id = $n`. Values are bound,
/// column names come from `Column` only.
pub fn update_by_id(id: i64, changes: &[Assignment]) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {TABLE} SET "));
    let mut set = qb.separated(", ");
    for change in changes {
        set.push(change.column.as_str());
        set.push_unseparated(" = ");
        set.push_bind_unseparated(change.value.as_str());
    }
    qb.push(" WHERE user_id = ");
    qb.push_bind(id);
    qb
}
