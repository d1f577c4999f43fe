//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - Registry からの削除と、残りの全員への `user-disconnected` 通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：セッションの切断と通知
//! - エッジケース：最後のセッションの切断
//! - 異常系：重複した切断通知

use crate::domain::{Delivery, RelayEvent, SessionId, SessionRegistry};

use super::error::DisconnectError;

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase<'a> {
    registry: &'a mut SessionRegistry,
}

impl<'a> DisconnectSessionUseCase<'a> {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(registry: &'a mut SessionRegistry) -> Self {
        Self { registry }
    }

    /// セッション切断を実行
    ///
    /// Registry からの削除が先に行われるため、返される通知が配送される時点で
    /// 切断したセッションはどのスナップショットにも現れません。
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Delivery>)` - 残りの全員宛ての `user-disconnected`
    /// * `Err(DisconnectError)` - 既に削除済み
    pub fn execute(&mut self, session_id: SessionId) -> Result<Vec<Delivery>, DisconnectError> {
        // 1. Registry から削除
        let session = self
            .registry
            .remove(&session_id)
            .map_err(|_| DisconnectError::UnknownSession(session_id.into_string()))?;

        // 2. 残りの全員に通知
        Ok(vec![Delivery::to_all(RelayEvent::UserDisconnected {
            id: session.id,
        })])
    }
}
