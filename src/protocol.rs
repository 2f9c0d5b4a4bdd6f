//! Outbound protocol messages and the line writer
//!
//! Every message is one JSON object or array per line, CRLF-terminated.
//! The hello reply is the exception: two literal text lines.

use crate::registry::Device;
use crate::telemetry::SensorReading;
use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Firmware identity reported to `helloMaster`
pub const FIRMWARE_IDENT: &str = "FW_V1.2_SIMULATOR";

/// Everything the master node can say to the host
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Emitted once right after the transport opens
    Ready,
    Hello,
    DeviceList(Vec<Device>),
    Reading(SensorReading),
    /// Simulated one-shot delivery failure during a sweep
    Offline { id: String },
    CollectionFinished,
    NoDevices,
    Deleted { id: String },
    AllDeleted,
    RegisterModeActive,
    RegisterCancelled,
}

impl Response {
    /// Render the message as its wire line(s), without terminators
    pub fn lines(&self) -> Result<Vec<String>> {
        let lines = match self {
            Response::Ready => vec![json!({"status": "system_ready"}).to_string()],
            Response::Hello => vec!["Hi!".to_string(), FIRMWARE_IDENT.to_string()],
            Response::DeviceList(devices) => vec![serde_json::to_string(devices)?],
            Response::Reading(reading) => vec![serde_json::to_string(reading)?],
            Response::Offline { id } => {
                vec![json!({"id": id, "status": "offline"}).to_string()]
            }
            Response::CollectionFinished => {
                vec![json!({"event": "data_collection_finished"}).to_string()]
            }
            Response::NoDevices => vec![json!({"error": "no_devices"}).to_string()],
            Response::Deleted { id } => {
                vec![json!({"event": "deleted", "id": id}).to_string()]
            }
            Response::AllDeleted => vec![json!({"event": "all_nodes_deleted"}).to_string()],
            Response::RegisterModeActive => {
                vec![json!({"status": "register_mode_active"}).to_string()]
            }
            Response::RegisterCancelled => {
                vec![json!({"event": "register_cancelled"}).to_string()]
            }
        };
        Ok(lines)
    }
}

/// Serializes responses onto the transport, one CRLF line at a time
pub struct MessageWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> MessageWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a response and flush it to the transport
    pub async fn send(&mut self, response: &Response) -> Result<()> {
        for line in response.lines()? {
            debug!("sending: {line}");
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_single_line_bodies() {
        let cases = [
            (Response::Ready, r#"{"status":"system_ready"}"#),
            (
                Response::CollectionFinished,
                r#"{"event":"data_collection_finished"}"#,
            ),
            (Response::NoDevices, r#"{"error":"no_devices"}"#),
            (Response::AllDeleted, r#"{"event":"all_nodes_deleted"}"#),
            (
                Response::RegisterModeActive,
                r#"{"status":"register_mode_active"}"#,
            ),
            (
                Response::RegisterCancelled,
                r#"{"event":"register_cancelled"}"#,
            ),
        ];
        for (response, expected) in cases {
            assert_eq!(response.lines().unwrap(), vec![expected]);
        }
    }

    #[test]
    fn test_hello_is_two_lines() {
        let lines = Response::Hello.lines().unwrap();
        assert_eq!(lines, vec!["Hi!", FIRMWARE_IDENT]);
    }

    #[test]
    fn test_deleted_carries_id() {
        let response = Response::Deleted {
            id: "soil00002".into(),
        };
        assert_eq!(
            response.lines().unwrap(),
            vec![r#"{"event":"deleted","id":"soil00002"}"#]
        );
    }

    #[test]
    fn test_offline_notice_shape() {
        let response = Response::Offline {
            id: "atm00001".into(),
        };
        assert_eq!(
            response.lines().unwrap(),
            vec![r#"{"id":"atm00001","status":"offline"}"#]
        );
    }

    #[test]
    fn test_device_list_is_json_array() {
        let registry = Registry::seeded();
        let lines = Response::DeviceList(registry.list().to_vec())
            .lines()
            .unwrap();
        assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
        assert_eq!(parsed[0]["id"], "soil00001");
        assert_eq!(parsed[3]["type"], "atm");
    }

    #[tokio::test]
    async fn test_writer_terminates_with_crlf() {
        let mut buf = Vec::new();
        {
            let mut writer = MessageWriter::new(&mut buf);
            writer.send(&Response::Ready).await.unwrap();
        }
        assert_eq!(buf, b"{\"status\":\"system_ready\"}\r\n");
    }
}
