//! UseCase: 位置更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateLocationUseCase::execute() メソッド
//! - 送信者のセッション更新と、送信者を含む全員へのブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みセッションの位置更新
//! - 異常系：未登録セッションからの更新（何も変更せず、何も送らない）

use crate::domain::{Coordinates, Delivery, RelayEvent, SessionId, SessionRegistry, Timestamp};

use super::error::UpdateLocationError;

/// 位置更新のユースケース
pub struct UpdateLocationUseCase<'a> {
    registry: &'a mut SessionRegistry,
}

impl<'a> UpdateLocationUseCase<'a> {
    /// 新しい UpdateLocationUseCase を作成
    pub fn new(registry: &'a mut SessionRegistry) -> Self {
        Self { registry }
    }

    /// 位置更新を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信者のセッション ID（Domain Model）
    /// * `coordinates` - 報告された座標（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Delivery>)` - 全員（送信者を含む）宛ての `location-update`
    /// * `Err(UpdateLocationError)` - 送信者が未登録
    pub fn execute(
        &mut self,
        session_id: SessionId,
        coordinates: Coordinates,
    ) -> Result<Vec<Delivery>, UpdateLocationError> {
        // 1. Registry の該当セッションを更新（未登録なら何も作らない）
        let session = self
            .registry
            .update_location(&session_id, coordinates)
            .map_err(|_| UpdateLocationError::UnknownSession(session_id.into_string()))?;

        // 2. ブロードキャスト時刻で location-update を作成
        let event = RelayEvent::LocationUpdate {
            id: session.id,
            coordinates: session.coordinates,
            timestamp: Timestamp::now(),
        };

        Ok(vec![Delivery::to_all(event)])
    }
}
