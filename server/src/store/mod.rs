//! レシートストア
//!
//! 生成されたIDをキーにレシートをメモリ内で保持する。プロセス終了とともに消える。

use receipt_processor_common::types::Receipt;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// レシートストア
#[derive(Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl ReceiptStore {
    /// 新しいストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// レシートを保存（同じIDが既にあれば上書き）
    pub async fn put(&self, id: impl Into<String>, receipt: Receipt) {
        let mut receipts = self.receipts.write().await;
        receipts.insert(id.into(), receipt);
    }

    /// レシートを取得
    ///
    /// 存在しない場合はゼロ値のレシートを返す。
    pub async fn get(&self, id: &str) -> Receipt {
        let receipts = self.receipts.read().await;
        receipts.get(id).cloned().unwrap_or_default()
    }

    /// 保存済みレシート数
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    /// ストアが空かどうか
    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}
