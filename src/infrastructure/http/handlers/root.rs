//! Root Handler

use axum::response::Redirect;

/// 前端入口页
pub const INDEX_PATH: &str = "/static/index.html";

/// `/` 重定向到静态前端
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
