pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}
