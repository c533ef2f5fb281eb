// src/auth/validators.rs

use super::models::{SignInRequest, SignUpRequest};
use crate::common::{ValidationResult, Validator};

pub struct SignUpValidator;

impl Validator<SignUpRequest> for SignUpValidator {
    fn validate(&self, data: &SignUpRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("name", &data.name, "Name is required");
        result.max_len("name", &data.name, 100);

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !looks_like_email(&data.email) {
            result.add_error("email", "Email must be a valid address");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}

pub struct SignInValidator;

impl Validator<SignInRequest> for SignInValidator {
    fn validate(&self, data: &SignInRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require("email", &data.email, "Email is required");
        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }
        result
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
