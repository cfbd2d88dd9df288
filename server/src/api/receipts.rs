//! レシートAPIハンドラー

use crate::api::error::AppError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
};
use receipt_processor_common::{error::ProcessorError, types::Receipt};
use tracing::debug;

/// POST /receipts/process - レシートを保存してIDを返す
///
/// Content-Typeは確認しない。ボディ先頭のJSON値のみを読み、後続のデータは無視する。
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, AppError> {
    let receipt = decode_receipt(&body)?;
    let id = state.id_generator.generate();

    debug!("Storing receipt {}", id);
    let response = format!("Receipt: {}, id: {}\n", receipt, id);
    state.store.put(id, receipt).await;

    Ok(response)
}

/// GET /receipts/:id/points - 保存済みレシートを返す
///
/// 未登録のIDでもエラーにはせず、ゼロ値のレシートを返す。
pub async fn get_receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> String {
    let receipt = state.store.get(&id).await;
    format!("Receipt: {}", receipt)
}

fn decode_receipt(body: &[u8]) -> Result<Receipt, ProcessorError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Receipt>();
    match values.next() {
        Some(Ok(receipt)) => Ok(receipt),
        Some(Err(err)) => Err(ProcessorError::InvalidReceipt(err.to_string())),
        None => Err(ProcessorError::InvalidReceipt("EOF".to_string())),
    }
}
