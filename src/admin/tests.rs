#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::models::SubscriptionStatus;
    use crate::common::state::testing::*;
    use crate::common::ApiError;
    use crate::services::ai_gateway::testing::FakeAiClient;
    use crate::subscriptions::models::{CreatePaymentMethodRequest, SubmitPaymentRequest};
    use axum::extract::{Extension, Json, Path};
    use axum::http::StatusCode;
    use chrono::Utc;
    use models::UpdateSubscriptionRequest;

    fn payment(transaction_id: &str) -> SubmitPaymentRequest {
        SubmitPaymentRequest {
            payment_method: "Bkash".to_string(),
            transaction_id: transaction_id.to_string(),
            sender_number: None,
        }
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let err = handlers::payments::list_pending_payments(session.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let err = handlers::payment_methods::delete_payment_method(
            Extension(state),
            session,
            Path("PM_ANY".to_string()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_approve_activates_subscription() {
        let state = test_state(FakeAiClient::default()).await;
        let user = user_session(&state, "ann@example.com").await;
        let admin = admin_session(&state).await;
        let submitted = user.store.submit_for_premium(payment("TX123")).await.unwrap();

        let Json(pending) = handlers::payments::list_pending_payments(admin.clone())
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].transaction_id, "TX123");

        let Json(resp) =
            handlers::payments::approve_payment(admin.clone(), Path(submitted.id.clone()))
                .await
                .unwrap();
        assert_eq!(resp.message, "Subscription approved!");
        assert!(resp.pending_payments.is_empty());

        let ann = resp
            .users
            .iter()
            .find(|u| u.email == "ann@example.com")
            .unwrap();
        assert_eq!(ann.subscription_status, SubscriptionStatus::Active);

        user.store.refresh_users().await.unwrap();
        let profile = user.store.user().await.unwrap();
        assert!(profile.is_premium());
        let renewal = profile.premium_renewal_date.unwrap();
        let days = (renewal - Utc::now()).num_days();
        assert!((29..=30).contains(&days));
    }

    #[tokio::test]
    async fn test_reject_returns_user_to_none() {
        let state = test_state(FakeAiClient::default()).await;
        let user = user_session(&state, "ann@example.com").await;
        let admin = admin_session(&state).await;
        let submitted = user.store.submit_for_premium(payment("TX9")).await.unwrap();

        let Json(resp) = handlers::payments::reject_payment(admin, Path(submitted.id))
            .await
            .unwrap();
        assert_eq!(resp.message, "Subscription rejected.");
        let ann = resp
            .users
            .iter()
            .find(|u| u.email == "ann@example.com")
            .unwrap();
        assert_eq!(ann.subscription_status, SubscriptionStatus::None);
    }

    #[tokio::test]
    async fn test_unknown_payment_is_not_found() {
        let state = test_state(FakeAiClient::default()).await;
        let admin = admin_session(&state).await;

        let err = handlers::payments::approve_payment(admin, Path("PAY_NOPE".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_admin_can_override_subscription() {
        let state = test_state(FakeAiClient::default()).await;
        let user = user_session(&state, "ann@example.com").await;
        let admin = admin_session(&state).await;
        let user_id = user.store.user().await.unwrap().id;

        let Json(body) = handlers::users::update_user_subscription(
            admin.clone(),
            Path(user_id.clone()),
            Json(UpdateSubscriptionRequest {
                status: SubscriptionStatus::Active,
            }),
        )
        .await
        .unwrap();
        assert_eq!(body["message"], "User subscription updated.");
        assert_eq!(body["user"]["id"], user_id.as_str());

        let Json(me) = crate::auth::handlers::me(user).await.unwrap();
        assert_eq!(me["is_premium"], true);

        let Json(users) = handlers::users::list_users(admin).await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users
            .iter()
            .any(|u| u.id == user_id && u.subscription_status == SubscriptionStatus::Active));
    }

    #[tokio::test]
    async fn test_payment_methods_add_and_delete() {
        let state = test_state(FakeAiClient::default()).await;
        let admin = admin_session(&state).await;

        let (status, Json(methods)) = handlers::payment_methods::add_payment_method(
            Extension(state.clone()),
            admin.clone(),
            Json(CreatePaymentMethodRequest {
                name: "Nagad".to_string(),
                details: "01800000000".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(methods.len(), 2);

        let nagad = methods.iter().find(|m| m.name == "Nagad").unwrap().id.clone();
        let Json(methods) = handlers::payment_methods::delete_payment_method(
            Extension(state.clone()),
            admin.clone(),
            Path(nagad.clone()),
        )
        .await
        .unwrap();
        assert_eq!(methods.len(), 1);

        let Json(methods) = handlers::payment_methods::delete_payment_method(
            Extension(state),
            admin,
            Path(nagad),
        )
        .await
        .unwrap();
        assert_eq!(methods.len(), 1);
    }
}
