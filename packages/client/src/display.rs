//! Human readable rendering of server events.

use geo_relay_server::{domain::Coordinates, infrastructure::dto::websocket::ServerMessage};

/// Render a server frame for the terminal
///
/// `self_id` marks this client's own entries.
pub fn render(msg: &ServerMessage, self_id: Option<&str>) -> String {
    let tag = |id: &str| {
        if Some(id) == self_id {
            format!("{id} (you)")
        } else {
            id.to_string()
        }
    };

    match msg {
        ServerMessage::SessionAssigned(m) => format!("connected as {}", m.id),
        ServerMessage::ConnectedUsers(m) => {
            let mut out = format!("{} device(s) online", m.users.len());
            for user in &m.users {
                let coordinates = Coordinates::new(user.latitude, user.longitude);
                let location = if coordinates.is_sentinel() {
                    "no location yet".to_string()
                } else {
                    coordinates.to_string()
                };
                out.push_str(&format!(
                    "\n  {} {} since {}",
                    tag(&user.id),
                    location,
                    user.connected_at
                ));
            }
            out
        }
        ServerMessage::LocationUpdate(m) => format!(
            "{} is at ({}, {}) [{}]",
            tag(&m.id),
            m.latitude,
            m.longitude,
            m.timestamp
        ),
        ServerMessage::UserDisconnected(m) => format!("{} left", tag(&m.id)),
    }
}
