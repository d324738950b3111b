use crate::users::{dto::User, errors::UserError};

/// Checks the fields required to create a user, in a fixed order, then
/// normalizes the status code. Department is optional.
pub fn validate_new_user_request(req: &mut User) -> Result<(), UserError> {
    if req.user_name.is_empty() {
        return Err(UserError::MissingUserName);
    }
    if req.first_name.is_empty() {
        return Err(UserError::MissingFirstName);
    }
    if req.last_name.is_empty() {
        return Err(UserError::MissingLastName);
    }
    if req.email.is_empty() {
        return Err(UserError::MissingEmail);
    }

    let status = std::mem::take(&mut req.user_status);
    req.set_user_status(&status);
    Ok(())
}

pub fn validate_user_id(input: &str) -> Result<i64, UserError> {
    input.parse::<i64>().map_err(|_| UserError::InvalidUserId)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> User {
        User {
            user_name: "jdoe".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "jdoe@example.com".into(),
            user_status: "a".into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_request_and_normalizes_status() {
        let mut req = complete();
        validate_new_user_request(&mut req).unwrap();
        assert_eq!(req.user_status, "A");
    }

    #[test]
    fn missing_status_defaults_to_inactive() {
        let mut req = User {
            user_status: String::new(),
            ..complete()
        };
        validate_new_user_request(&mut req).unwrap();
        assert_eq!(req.user_status, "I");
    }

    #[test]
    fn department_is_optional() {
        let mut req = complete();
        assert!(req.department.is_none());
        assert!(validate_new_user_request(&mut req).is_ok());
    }

    #[test]
    fn reports_first_missing_field() {
        let mut req = User::default();
        assert!(matches!(
            validate_new_user_request(&mut req),
            Err(UserError::MissingUserName)
        ));

        let mut req = User {
            first_name: String::new(),
            last_name: String::new(),
            ..complete()
        };
        assert!(matches!(
            validate_new_user_request(&mut req),
            Err(UserError::MissingFirstName)
        ));

        let mut req = User {
            last_name: String::new(),
            email: String::new(),
            ..complete()
        };
        assert!(matches!(
            validate_new_user_request(&mut req),
            Err(UserError::MissingLastName)
        ));

        let mut req = User {
            email: String::new(),
            ..complete()
        };
        assert!(matches!(
            validate_new_user_request(&mut req),
            Err(UserError::MissingEmail)
        ));
    }

    #[test]
    fn failed_validation_leaves_status_untouched() {
        let mut req = User {
            email: String::new(),
            user_status: "zzz".into(),
            ..complete()
        };
        assert!(validate_new_user_request(&mut req).is_err());
        assert_eq!(req.user_status, "zzz");
    }

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(validate_user_id("12345").unwrap(), 12345);
        assert_eq!(validate_user_id("-7").unwrap(), -7);
        assert_eq!(validate_user_id("0").unwrap(), 0);
        assert_eq!(validate_user_id(&i64::MAX.to_string()).unwrap(), i64::MAX);
        assert_eq!(validate_user_id(&i64::MIN.to_string()).unwrap(), i64::MIN);
    }

    #[test]
    fn rejects_malformed_ids() {
        for input in ["", "abc", "12.34", "1e3", " 12", "9223372036854775808", "0x10"] {
            assert!(
                matches!(validate_user_id(input), Err(UserError::InvalidUserId)),
                "input {input:?}"
            );
        }
    }
}
