//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - 接続時のセッション登録と、新規接続へのスナップショット送信
//!
//! ### なぜこのテストが必要か
//! - 新しい接続だけがキャッチアップ用スナップショットを受け取ることを保証
//! - 自分自身もセンチネル座標でスナップショットに含まれることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初のクライアントの接続
//! - 正常系：既存クライアントがいる状態での接続
//! - エッジケース：同じ ID の再接続（古いエントリの上書き）

use crate::domain::{Delivery, RelayEvent, SessionId, SessionRegistry};

/// セッション接続のユースケース
pub struct ConnectSessionUseCase<'a> {
    registry: &'a mut SessionRegistry,
}

impl<'a> ConnectSessionUseCase<'a> {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(registry: &'a mut SessionRegistry) -> Self {
        Self { registry }
    }

    /// セッション接続を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 接続したクライアントの ID（Domain Model）
    ///
    /// # Returns
    ///
    /// 新しい接続だけに宛てた `session-assigned` と `connected-users`
    pub fn execute(&mut self, session_id: SessionId) -> Vec<Delivery> {
        // 1. Registry に登録（センチネル座標）
        let session = self.registry.register(session_id);

        // 2. 自分を含む全セッションのスナップショット
        let sessions = self.registry.snapshot_all();

        vec![
            Delivery::to(
                session.id.clone(),
                RelayEvent::SessionAssigned {
                    id: session.id.clone(),
                },
            ),
            Delivery::to(session.id, RelayEvent::ConnectedUsers { sessions }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Recipients, Timestamp};

    fn sid(id: &str) -> SessionId {
        SessionId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_connect_first_session() {
        // テスト項目: 最初のクライアントは自分だけのスナップショットを受け取る
        // given (前提条件):
        let mut registry = SessionRegistry::new();

        // when (操作):
        let deliveries = ConnectSessionUseCase::new(&mut registry).execute(sid("x"));

        // then (期待する結果):
        assert_eq!(deliveries.len(), 2);
        assert_eq!(
            deliveries[0],
            Delivery::to(sid("x"), RelayEvent::SessionAssigned { id: sid("x") })
        );
        assert_eq!(deliveries[1].recipients, Recipients::Only(sid("x")));
        match &deliveries[1].event {
            RelayEvent::ConnectedUsers { sessions } => {
                assert_eq!(sessions.len(), 1);
                assert_eq!(sessions[0].id, sid("x"));
                assert_eq!(sessions[0].coordinates, Coordinates::SENTINEL);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(registry.contains(&sid("x")));
    }

    #[test]
    fn test_connect_second_session_receives_both() {
        // テスト項目: 2 人目は既存クライアントと自分を含むスナップショットを受け取り、
        //             既存クライアントには何も送られない
        // given (前提条件):
        let mut registry = SessionRegistry::new();
        ConnectSessionUseCase::new(&mut registry).execute(sid("x"));

        // when (操作):
        let deliveries = ConnectSessionUseCase::new(&mut registry).execute(sid("y"));

        // then (期待する結果):
        assert!(
            deliveries
                .iter()
                .all(|d| d.recipients == Recipients::Only(sid("y")))
        );
        match &deliveries[1].event {
            RelayEvent::ConnectedUsers { sessions } => {
                let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
                assert_eq!(ids, vec!["x", "y"]);
                assert!(sessions.iter().all(|s| s.coordinates.is_sentinel()));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_connect_snapshot_reports_known_locations() {
        // テスト項目: 既に位置を報告したクライアントはその座標でスナップショットに含まれる
        // given (前提条件):
        let mut registry = SessionRegistry::new();
        registry.register_at(sid("x"), Timestamp::new(1000));
        registry
            .update_location(&sid("x"), Coordinates::new(10.0, 20.0))
            .unwrap();

        // when (操作):
        let deliveries = ConnectSessionUseCase::new(&mut registry).execute(sid("y"));

        // then (期待する結果):
        let RelayEvent::ConnectedUsers { sessions } = &deliveries[1].event else {
            panic!("expected connected-users");
        };
        assert_eq!(sessions[0].coordinates, Coordinates::new(10.0, 20.0));
        assert_eq!(sessions[0].connected_at, Timestamp::new(1000));
    }

    #[test]
    fn test_connect_duplicate_id_overwrites() {
        // テスト項目: 同じ ID で再接続すると古いエントリが上書きされ、1 件だけ残る
        // given (前提条件):
        let mut registry = SessionRegistry::new();
        ConnectSessionUseCase::new(&mut registry).execute(sid("x"));
        registry
            .update_location(&sid("x"), Coordinates::new(1.0, 1.0))
            .unwrap();

        // when (操作):
        let deliveries = ConnectSessionUseCase::new(&mut registry).execute(sid("x"));

        // then (期待する結果):
        assert_eq!(registry.len(), 1);
        let RelayEvent::ConnectedUsers { sessions } = &deliveries[1].event else {
            panic!("expected connected-users");
        };
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].coordinates, Coordinates::SENTINEL);
    }
}
