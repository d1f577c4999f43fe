//! UseCase 層
//!
//! 接続・位置更新・切断の各遷移を実装するレイヤー。
//! UI 層（relay）から呼び出され、Domain 層の SessionRegistry を操作し、
//! 送信すべきイベント（Delivery）のリストを返します。

pub mod connect_session;
pub mod disconnect_session;
pub mod error;
pub mod update_location;

pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{DisconnectError, UpdateLocationError};
pub use update_location::UpdateLocationUseCase;
