// src/cooking/validators.rs

use super::models::{StartTimerRequest, MAX_TIMER_SECONDS};
use crate::common::{ValidationResult, Validator};

pub struct StartTimerValidator;

impl Validator<StartTimerRequest> for StartTimerValidator {
    fn validate(&self, data: &StartTimerRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.seconds <= 0 {
            result.add_error("seconds", "Timer duration must be positive");
        } else if data.seconds > MAX_TIMER_SECONDS {
            result.add_error("seconds", "Timer duration must be at most 24 hours");
        }

        result
    }
}
