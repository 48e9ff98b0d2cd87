/// Validation utilities for user input
use shared::RegisterRequest;

use crate::core::error::AppError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Validation` error for the controllers
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate that a field is present (whitespace does not count)
pub fn validate_required(value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a mobile number: exactly 10 digits
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number must be exactly 10 digits");
    }

    ValidationResult::ok()
}

/// Validate a password: required, no strength rules on the client
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    ValidationResult::ok()
}

/// Validate a registration form, reporting the first problem found.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    validate_required(&request.name, "Name").into_result()?;
    validate_email(request.email.trim()).into_result()?;
    validate_password(&request.password).into_result()?;
    validate_phone(request.phone.trim()).into_result()?;
    validate_required(&request.flat_number, "Flat number").into_result()?;
    validate_required(&request.wing, "Wing").into_result()?;
    validate_required(&request.floor, "Floor").into_result()
}

/// Validate login fields before dispatch
pub fn validate_login(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password required".to_string(),
        ));
    }

    Ok(())
}
