//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use geo_relay_shared::time::now_millis;

use super::error::ValueObjectError;

/// Session identifier value object.
///
/// Opaque identifier assigned by the transport layer when a connection is
/// established. Stable for the lifetime of the connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new SessionId.
    ///
    /// # Arguments
    ///
    /// * `id` - The session identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the SessionId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::SessionIdEmpty);
        }
        Ok(Self(id))
    }

    /// Create a SessionId from a UUID (hyphenated form).
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinates value object.
///
/// No range validation is applied here: whatever the client reported is
/// what gets relayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Placeholder location for a session that has not reported yet.
    pub const SENTINEL: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether these are the "not yet reported" placeholder coordinates.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Capture the current wall-clock time.
    pub fn now() -> Self {
        Self(now_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_new_success() {
        // テスト項目: 有効なセッション ID を作成できる
        // given (前提条件):
        let id = "alice".to_string();

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_session_id_new_empty_fails() {
        // テスト項目: 空のセッション ID は作成できない
        // when (操作):
        let result = SessionId::new(String::new());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::SessionIdEmpty);
    }

    #[test]
    fn test_session_id_from_uuid() {
        // テスト項目: UUID からセッション ID を作成できる
        // given (前提条件):
        let uuid = uuid::Uuid::new_v4();

        // when (操作):
        let id = SessionId::from_uuid(uuid);

        // then (期待する結果):
        assert_eq!(id.as_str(), uuid.to_string());
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn test_coordinates_sentinel() {
        // テスト項目: センチネル座標は (0, 0) でデフォルト値と一致する
        // then (期待する結果):
        assert_eq!(Coordinates::SENTINEL, Coordinates::default());
        assert!(Coordinates::new(0.0, 0.0).is_sentinel());
        assert!(!Coordinates::new(10.0, 20.0).is_sentinel());
    }

    #[test]
    fn test_coordinates_are_not_range_checked() {
        // テスト項目: 範囲外の座標もそのまま保持される
        // when (操作):
        let coords = Coordinates::new(123.0, -999.5);

        // then (期待する結果):
        assert_eq!(coords.latitude, 123.0);
        assert_eq!(coords.longitude, -999.5);
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(ts2.value(), 2000);
    }
}
