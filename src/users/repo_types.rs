use sqlx::{postgres::PgRow, FromRow, Row};

use crate::users::dto::User;

/// Nullable text column: `valid == false` means SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullString {
    pub valid: bool,
    pub value: String,
}

impl NullString {
    pub fn as_option(&self) -> Option<&str> {
        self.valid.then_some(self.value.as_str())
    }
}

impl From<Option<String>> for NullString {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self { valid: true, value },
            None => Self::default(),
        }
    }
}

impl From<NullString> for Option<String> {
    fn from(ns: NullString) -> Self {
        ns.valid.then_some(ns.value)
    }
}

/// Row of the `users` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_status: String,
    pub department: NullString,
}

impl<'r> FromRow<'r, PgRow> for UserRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            user_id: row.try_get("user_id")?,
            user_name: row.try_get("user_name")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            user_status: row.try_get("user_status")?,
            department: row.try_get::<Option<String>, _>("department")?.into(),
        })
    }
}

impl User {
    pub fn to_row(&self) -> UserRow {
        UserRow {
            user_id: self.id,
            user_name: self.user_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            user_status: self.user_status.clone(),
            department: self.department.clone().into(),
        }
    }
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.user_id,
            user_name: r.user_name,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            user_status: r.user_status,
            department: r.department.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(department: Option<&str>) -> User {
        User {
            id: 42,
            user_name: "jdoe".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "jdoe@example.com".into(),
            user_status: "A".into(),
            department: department.map(str::to_string),
        }
    }

    #[test]
    fn to_row_copies_present_department_as_valid() {
        let row = sample(Some("Engineering")).to_row();
        assert_eq!(row.user_id, 42);
        assert_eq!(row.user_name, "jdoe");
        assert_eq!(
            row.department,
            NullString {
                valid: true,
                value: "Engineering".into()
            }
        );
    }

    #[test]
    fn to_row_marks_absent_department_null() {
        let row = sample(None).to_row();
        assert!(!row.department.valid);
        assert!(row.department.value.is_empty());
        assert_eq!(row.department.as_option(), None);
    }

    #[test]
    fn invalid_department_is_dropped_even_with_stale_value() {
        let mut row = sample(None).to_row();
        row.department.value = "leftover".into();
        assert_eq!(User::from(row).department, None);
    }

    #[test]
    fn row_mapping_round_trips() {
        for user in [sample(Some("Engineering")), sample(None), sample(Some(""))] {
            assert_eq!(User::from(user.to_row()), user);
        }
    }
}
