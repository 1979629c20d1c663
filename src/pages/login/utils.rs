/// Lowercased, trimmed email for the login payload. The backend compares
/// addresses case-insensitively; normalizing here keeps retries stable.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_string());
    }
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    Ok(())
}
