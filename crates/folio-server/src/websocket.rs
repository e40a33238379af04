//! WebSocket-based live updates.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to connected pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    /// Full page reload
    Reload,

    /// Replace the content of one render container
    UpdateContainer {
        /// Element id of the container
        container: String,
        /// New inner HTML
        html: String,
    },

    /// Connection established
    Connected,
}

/// Hub for broadcasting live messages to all connected pages.
#[derive(Debug, Clone)]
pub struct LiveHub {
    sender: broadcast::Sender<LiveMessage>,
}

impl LiveHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected pages.
    pub fn send(&self, msg: LiveMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to live messages.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side live update script.
///
/// Container updates replace `innerHTML` of the element with the given id;
/// anything the page does not recognise falls back to a reload.
pub fn live_client_script(ws_path: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const protocol = location.protocol === 'https:' ? 'wss://' : 'ws://';
  const ws = new WebSocket(protocol + location.host + '{}');
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  ws.onopen = function() {{
    console.log('[folio] Connected');
    reconnectAttempts = 0;
  }};

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'reload':
        location.reload();
        break;

      case 'update_container':
        const container = document.getElementById(msg.container);
        if (container) {{
          container.innerHTML = msg.html;
        }} else {{
          location.reload();
        }}
        break;

      case 'connected':
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[folio] Disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {{
      reconnectAttempts++;
      setTimeout(function() {{
        location.reload();
      }}, 1000 * reconnectAttempts);
    }}
  }};

  ws.onerror = function(e) {{
    console.error('[folio] WebSocket error:', e);
  }};
}})();
"#,
        ws_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = LiveHub::new();
        let mut rx = hub.subscribe();

        hub.send(LiveMessage::Reload);

        match rx.try_recv() {
            Ok(LiveMessage::Reload) => {}
            _ => panic!("Expected Reload message"),
        }
    }

    #[test]
    fn serializes_container_update() {
        let msg = LiveMessage::UpdateContainer {
            container: "projectsContainer".to_string(),
            html: "<div></div>".to_string(),
        };

        let json = serde_json::to_string(&msg).unwrap();

        assert!(json.contains(r#""type":"update_container""#));
        assert!(json.contains("projectsContainer"));
    }

    #[test]
    fn script_targets_given_path() {
        let script = live_client_script("/__live");
        assert!(script.contains("'/__live'"));
        assert!(script.contains("getElementById(msg.container)"));
    }

    #[test]
    fn counts_subscribers() {
        let hub = LiveHub::new();
        assert_eq!(hub.subscriber_count(), 0);
        let _rx = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);
    }
}
