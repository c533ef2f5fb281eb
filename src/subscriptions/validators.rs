// src/subscriptions/validators.rs

use super::models::{CreatePaymentMethodRequest, SubmitPaymentRequest};
use crate::common::{ValidationResult, Validator};
use crate::i18n::{t, Language};

pub struct SubmitPaymentValidator {
    pub language: Language,
}

impl Validator<SubmitPaymentRequest> for SubmitPaymentValidator {
    fn validate(&self, data: &SubmitPaymentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("paymentMethod", &data.payment_method, "Payment method is required");
        result.require(
            "transactionId",
            &data.transaction_id,
            &t(self.language, "error_txid_required"),
        );
        result.max_len("transactionId", &data.transaction_id, 100);

        if let Some(sender) = &data.sender_number {
            result.max_len("senderNumber", sender, 30);
        }

        result
    }
}

pub struct PaymentMethodValidator;

impl Validator<CreatePaymentMethodRequest> for PaymentMethodValidator {
    fn validate(&self, data: &CreatePaymentMethodRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require("name", &data.name, "Payment method name is required");
        result.max_len("name", &data.name, 100);
        result.require("details", &data.details, "Payment details are required");
        result
    }
}
