#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::state::testing::*;
    use crate::common::{ApiError, Validator};
    use crate::services::ai_gateway::{parse_recipes, testing::{FakeAiClient, TWO_RECIPES}};
    use axum::extract::Json;
    use models::StartTimerRequest;
    use std::time::Duration;
    use validators::StartTimerValidator;

    fn start(seconds: i64) -> StartTimerRequest {
        StartTimerRequest {
            recipe_id: Some("R_1".to_string()),
            recipe_title: Some("Soup".to_string()),
            seconds,
        }
    }

    #[test]
    fn test_timer_validator() {
        assert!(StartTimerValidator.validate(&start(60)).is_valid);
        assert!(!StartTimerValidator.validate(&start(0)).is_valid);
        assert!(!StartTimerValidator.validate(&start(-5)).is_valid);
        assert!(!StartTimerValidator.validate(&start(2 * 24 * 60 * 60)).is_valid);
    }

    #[tokio::test]
    async fn test_non_positive_timer_is_rejected() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;

        let err = handlers::start_timer(session.clone(), Json(start(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert!(!session.store.timer.snapshot().await.is_active);
    }

    #[tokio::test]
    async fn test_start_looks_up_recipe_title() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;
        let recipe = parse_recipes(TWO_RECIPES).unwrap().remove(0);
        session.store.set_generated_recipes(vec![recipe.clone()]).await;

        let Json(resp) = handlers::start_timer(
            session.clone(),
            Json(StartTimerRequest {
                recipe_id: Some(recipe.id.clone()),
                recipe_title: None,
                seconds: 600,
            }),
        )
        .await
        .unwrap();
        assert!(resp.timer.is_active);
        assert_eq!(resp.timer.recipe_title.as_deref(), Some("Tomato Pasta"));

        let Json(resp) = handlers::toggle_pause(session.clone()).await.unwrap();
        assert!(resp.timer.is_paused);

        let Json(resp) = handlers::stop_timer(session).await.unwrap();
        assert!(!resp.timer.is_active);
    }

    #[tokio::test]
    async fn test_poll_reports_finish_once() {
        let state = test_state(FakeAiClient::default()).await;
        let session = user_session(&state, "ann@example.com").await;
        // storage is done; the rest only touches memory
        tokio::time::pause();

        handlers::start_timer(session.clone(), Json(start(2))).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2500)).await;

        let Json(resp) = handlers::get_timer(session.clone()).await.unwrap();
        assert!(!resp.timer.is_active);
        assert_eq!(resp.notice.unwrap().message, "Timer finished!");

        let Json(resp) = handlers::get_timer(session).await.unwrap();
        assert!(resp.notice.is_none());
    }
}
