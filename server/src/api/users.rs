//! ユーザーID表示APIハンドラー

use axum::extract::Path;

/// GET /users/:user_id - パスのユーザーIDをそのまま返す
pub async fn get_user(Path(user_id): Path<String>) -> String {
    format!("User ID: {}", user_id)
}
