//! HTTP Routes
//!
//! API Endpoints:
//! - /                                GET     重定向到 /static/index.html
//! - /ping                            GET     健康检查
//! - /activities                      GET     列出所有活动
//! - /activities/{name}/signup        POST    报名（需 auth_token）
//! - /activities/{name}/unregister    DELETE  取消报名（需 auth_token）
//! - /login                           POST    教师登录
//! - /logout                          POST    教师登出
//! - /auth-status                     GET     查询登录状态

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_teacher;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/ping", get(handlers::ping))
        .merge(auth_routes())
        .merge(activity_routes(state))
}

/// Activity 路由
fn activity_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    // 修改名单的路由需要教师身份
    let guarded = Router::new()
        .route("/activities/:activity_name/signup", post(handlers::sign_up))
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::unregister),
        )
        .route_layer(middleware::from_fn_with_state(state, require_teacher));

    Router::new()
        .route("/activities", get(handlers::list_activities))
        .merge(guarded)
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/auth-status", get(handlers::auth_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::TeacherCredential;
    use crate::domain::activity::Activity;
    use crate::infrastructure::http::state::test_support::{test_state, FixedCredentials};
    use crate::infrastructure::memory::{InMemoryActivityStore, InMemorySessionManager};

    fn app(state: Arc<AppState>) -> Router {
        create_routes(state.clone()).with_state(state)
    }

    async fn send(state: &Arc<AppState>, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app(state.clone()).oneshot(request).await.unwrap()
    }

    async fn send_json(state: &Arc<AppState>, uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app(state.clone()).oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(state: &Arc<AppState>) -> String {
        let response = send_json(
            state,
            "/login",
            json!({"username": "mchen", "password": "chess456"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["username"], "mchen");
        body["token"].as_str().unwrap().to_string()
    }

    fn participants(state: &Arc<AppState>, activity: &str) -> Vec<String> {
        state
            .activity_repo
            .find(activity)
            .unwrap()
            .participants()
            .to_vec()
    }

    #[tokio::test]
    async fn test_root_redirects_to_index() {
        let state = test_state();
        let response = send(&state, Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn test_list_activities() {
        let state = test_state();
        let response = send(&state, Method::GET, "/activities").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let chess = &body["Chess Club"];
        assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess["max_participants"], 12);
        assert_eq!(
            chess["participants"],
            json!(["michael@mergington.edu", "daniel@mergington.edu"])
        );
        assert_eq!(body.as_object().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_chess_club_scenario() {
        let state = test_state();
        let token = login(&state).await;

        let response = send(
            &state,
            Method::POST,
            &format!(
                "/activities/Chess%20Club/signup?email=new@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Signed up new@mergington.edu for Chess Club"})
        );
        assert_eq!(participants(&state, "Chess Club").len(), 3);

        let response = send(
            &state,
            Method::DELETE,
            &format!(
                "/activities/Chess%20Club/unregister?email=michael@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Unregistered michael@mergington.edu from Chess Club"})
        );

        let chess = participants(&state, "Chess Club");
        assert_eq!(chess.len(), 2);
        assert!(!chess.contains(&"michael@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn test_unauthorized_mutations_leave_state_unchanged() {
        let state = test_state();
        let before = participants(&state, "Chess Club");

        for uri in [
            "/activities/Chess%20Club/signup?email=x@mergington.edu",
            "/activities/Chess%20Club/signup?email=x@mergington.edu&auth_token=bogus",
        ] {
            let response = send(&state, Method::POST, uri).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = send(
            &state,
            Method::DELETE,
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(json_body(response).await["detail"]
            .as_str()
            .unwrap()
            .starts_with("Unauthorized"));

        assert_eq!(participants(&state, "Chess Club"), before);
    }

    #[tokio::test]
    async fn test_auth_checked_before_activity_lookup() {
        let state = test_state();
        let response = send(
            &state,
            Method::POST,
            "/activities/Knitting/signup?email=x@mergington.edu",
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let token = login(&state).await;
        let response = send(
            &state,
            Method::POST,
            &format!(
                "/activities/Knitting/signup?email=x@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Activity not found"})
        );
    }

    #[tokio::test]
    async fn test_duplicate_and_not_signed_up() {
        let state = test_state();
        let token = login(&state).await;
        let before = participants(&state, "Chess Club");

        let response = send(
            &state,
            Method::POST,
            &format!(
                "/activities/Chess%20Club/signup?email=daniel@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Student is already signed up"})
        );

        let response = send(
            &state,
            Method::DELETE,
            &format!(
                "/activities/Chess%20Club/unregister?email=ghost@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Student is not signed up for this activity"})
        );

        assert_eq!(participants(&state, "Chess Club"), before);
    }

    #[tokio::test]
    async fn test_full_activity_rejected() {
        let full = Activity::with_participants(
            "Tiny Club",
            "Only two seats",
            "Mondays",
            2,
            ["a@mergington.edu", "b@mergington.edu"],
        )
        .unwrap();
        let state = Arc::new(AppState::new(
            Arc::new(InMemoryActivityStore::new(vec![full])),
            Arc::new(InMemorySessionManager::new()),
            Arc::new(FixedCredentials(vec![TeacherCredential::new(
                "mchen", "chess456",
            )])),
        ));
        let token = login(&state).await;

        let response = send(
            &state,
            Method::POST,
            &format!(
                "/activities/Tiny%20Club/signup?email=c@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Activity is at maximum capacity"})
        );
        assert_eq!(participants(&state, "Tiny Club").len(), 2);
    }

    #[tokio::test]
    async fn test_missing_email_rejected() {
        let state = test_state();
        let token = login(&state).await;
        let response = send(
            &state,
            Method::POST,
            &format!("/activities/Chess%20Club/signup?auth_token={}", token),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(participants(&state, "Chess Club").len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_login() {
        let state = test_state();
        let response = send_json(
            &state,
            "/login",
            json!({"username": "mchen", "password": "wrong"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Invalid username or password"})
        );
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let state = test_state();

        let response = send(&state, Method::GET, "/auth-status").await;
        assert_eq!(
            json_body(response).await,
            json!({"authenticated": false, "username": null})
        );

        let token = login(&state).await;
        let response = send(
            &state,
            Method::GET,
            &format!("/auth-status?auth_token={}", token),
        )
        .await;
        assert_eq!(
            json_body(response).await,
            json!({"authenticated": true, "username": "mchen"})
        );

        let logout_uri = format!("/logout?auth_token={}", token);
        let response = send(&state, Method::POST, &logout_uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Logged out successfully"})
        );

        // 登出后 token 失效
        let response = send(&state, Method::POST, &logout_uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Not authenticated"})
        );

        let response = send(
            &state,
            Method::POST,
            &format!(
                "/activities/Chess%20Club/signup?email=x@mergington.edu&auth_token={}",
                token
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_without_token() {
        let state = test_state();
        let response = send(&state, Method::POST, "/logout").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_ping() {
        let state = test_state();
        let response = send(&state, Method::GET, "/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["activities"], 9);
    }
}
