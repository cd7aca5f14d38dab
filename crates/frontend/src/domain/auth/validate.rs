//! Basic form validation for the auth and profile forms. The backend owns the
//! real rules; these only catch obviously malformed input before a round trip.

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !valid {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length() {
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(" a ").is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("adaexample.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@nodot").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("12345").is_err());
    }
}
