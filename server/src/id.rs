//! レシートID生成

use uuid::Uuid;

/// ストアのキー兼公開用IDを生成する
pub trait IdGenerator: Send + Sync {
    /// 呼び出しごとに新しいIDを返す
    fn generate(&self) -> String;
}

/// ランダムなUUID v4を生成する
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
