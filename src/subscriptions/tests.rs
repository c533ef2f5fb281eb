#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::models::SubscriptionStatus;
    use crate::common::state::testing::*;
    use crate::common::{ApiError, Validator};
    use crate::i18n::Language;
    use crate::services::ai_gateway::testing::FakeAiClient;
    use axum::extract::{Extension, Json};
    use models::{CreatePaymentMethodRequest, SubmitPaymentRequest};
    use validators::{PaymentMethodValidator, SubmitPaymentValidator};

    fn submit(transaction_id: &str) -> SubmitPaymentRequest {
        SubmitPaymentRequest {
            payment_method: "Bkash".to_string(),
            transaction_id: transaction_id.to_string(),
            sender_number: Some("01711111111".to_string()),
        }
    }

    #[test]
    fn test_transaction_id_is_required() {
        let validator = SubmitPaymentValidator {
            language: Language::En,
        };
        let result = validator.validate(&submit("   "));
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].field, "transactionId");
        assert_eq!(result.errors[0].message, "Transaction ID is required.");
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request: SubmitPaymentRequest = serde_json::from_str(
            r#"{"paymentMethod":"Nagad","transactionId":"TX9"}"#,
        )
        .unwrap();
        assert_eq!(request.payment_method, "Nagad");
        assert!(request.sender_number.is_none());
    }

    #[test]
    fn test_payment_method_validator() {
        let result = PaymentMethodValidator.validate(&CreatePaymentMethodRequest {
            name: "Rocket".to_string(),
            details: String::new(),
        });
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "details");
    }

    #[tokio::test]
    async fn test_payment_methods_are_seeded() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let Json(methods) = handlers::list_payment_methods(Extension(state), session)
            .await
            .unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Bkash");
    }

    #[tokio::test]
    async fn test_submit_marks_user_pending() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let (_, Json(resp)) = handlers::submit_for_premium(session.clone(), Json(submit("TX123")))
            .await
            .unwrap();
        assert_eq!(resp.payment.transaction_id, "TX123");
        assert_eq!(resp.user.subscription_status, SubscriptionStatus::Pending);
        assert_eq!(resp.message, "Payment submitted for review.");

        let backend = state.read().await.backend.clone();
        let pending = backend.get_pending_payments().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, resp.payment.id);
        assert_eq!(pending[0].user_email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_empty_transaction_id_never_reaches_backend() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let err = handlers::submit_for_premium(session.clone(), Json(submit("")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));

        let backend = state.read().await.backend.clone();
        assert!(backend.get_pending_payments().await.unwrap().is_empty());
        assert_eq!(
            session.store.user().await.unwrap().subscription_status,
            SubscriptionStatus::None
        );
    }
}
