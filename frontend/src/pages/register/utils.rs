use crate::api::{RegisterRequest, Role};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn new(role: Role) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role,
        }
    }

    /// Checks the fields the server also requires and builds the request.
    /// Admin accounts cannot be self-registered.
    pub fn to_request(&self) -> Result<RegisterRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name".into());
        }
        if self.email.trim().is_empty() {
            return Err("Please enter your email".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Please enter your phone number".into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if self.role == Role::Admin {
            return Err("Invalid account type".into());
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

pub fn parse_role(value: &str) -> Role {
    match value {
        "advocate" => Role::Advocate,
        _ => Role::User,
    }
}
