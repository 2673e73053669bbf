//! Status query against the game server's own protocol (the Server List
//! Ping): a VarInt-framed handshake with next-state 1 followed by an empty
//! status request, answered with a JSON status document. Only the advertised
//! player count and the optional name sample are extracted; the server may
//! send zero, some, or no names regardless of the count.

use serde_json::Value;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::SourceError;

const HANDSHAKE_PACKET_ID: i32 = 0x00;
const STATUS_REQUEST_PACKET_ID: i32 = 0x00;
/// "Determine version for me" per the handshake convention.
const PROTOCOL_VERSION: i32 = -1;
const NEXT_STATE_STATUS: i32 = 1;
const MAX_STATUS_PACKET_LEN: i32 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub online_players: u32,
    pub player_names: Vec<String>,
}

pub struct GameSource {
    host: String,
    port: u16,
    timeout: Duration,
}

impl GameSource {
    pub fn new(host: String, port: u16, timeout: Duration) -> Self {
        Self {
            host,
            port,
            timeout,
        }
    }

    /// Runs the full exchange under one timeout; any failure (refused
    /// connection, timeout, malformed frames or JSON) is a `SourceError`.
    pub async fn sample(&self) -> Result<GameStatus, SourceError> {
        let status = tokio::time::timeout(self.timeout, self.query_status())
            .await
            .map_err(|_| SourceError::Timeout(self.timeout))??;
        map_status(&status)
    }

    async fn query_status(&self) -> Result<Value, SourceError> {
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await?;

        let mut handshake = Vec::new();
        write_varint(&mut handshake, HANDSHAKE_PACKET_ID);
        write_varint(&mut handshake, PROTOCOL_VERSION);
        write_string(&mut handshake, &self.host);
        handshake.extend_from_slice(&self.port.to_be_bytes());
        write_varint(&mut handshake, NEXT_STATE_STATUS);
        write_packet(&mut stream, &handshake).await?;

        let mut request = Vec::new();
        write_varint(&mut request, STATUS_REQUEST_PACKET_ID);
        write_packet(&mut stream, &request).await?;

        let packet = read_packet(&mut stream).await?;
        let mut cursor = packet.as_slice();
        let packet_id = read_varint_slice(&mut cursor)?;
        if packet_id != STATUS_REQUEST_PACKET_ID {
            return Err(SourceError::Parse(format!(
                "unexpected status packet id {packet_id}"
            )));
        }
        let body_len = read_varint_slice(&mut cursor)? as usize;
        if cursor.len() < body_len {
            return Err(SourceError::Parse(
                "truncated status payload".to_string(),
            ));
        }
        serde_json::from_slice(&cursor[..body_len])
            .map_err(|e| SourceError::Parse(format!("invalid status json: {e}")))
    }
}

fn map_status(status: &Value) -> Result<GameStatus, SourceError> {
    let online_players = status
        .pointer("/players/online")
        .and_then(Value::as_u64)
        .ok_or_else(|| SourceError::Parse("status response missing players.online".to_string()))?
        as u32;

    let player_names = status
        .pointer("/players/sample")
        .and_then(Value::as_array)
        .map(|sample| {
            sample
                .iter()
                .filter_map(|entry| entry.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(GameStatus {
        online_players,
        player_names,
    })
}

fn write_varint(buf: &mut Vec<u8>, value: i32) {
    let mut value = value as u32;
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    write_varint(buf, s.len() as i32);
    buf.extend_from_slice(s.as_bytes());
}

async fn write_packet(stream: &mut TcpStream, payload: &[u8]) -> Result<(), SourceError> {
    let mut framed = Vec::with_capacity(payload.len() + 5);
    write_varint(&mut framed, payload.len() as i32);
    framed.extend_from_slice(payload);
    stream.write_all(&framed).await?;
    Ok(())
}

async fn read_packet(stream: &mut TcpStream) -> Result<Vec<u8>, SourceError> {
    let len = read_varint_stream(stream).await?;
    if len <= 0 || len > MAX_STATUS_PACKET_LEN {
        return Err(SourceError::Parse(format!("invalid packet length {len}")));
    }
    let mut buf = vec![0u8; len as usize];
    stream.read_exact(&mut buf).await?;
    Ok(buf)
}

async fn read_varint_stream(stream: &mut TcpStream) -> Result<i32, SourceError> {
    let mut result: u32 = 0;
    for shift in 0..5 {
        let byte = stream.read_u8().await?;
        result |= ((byte & 0x7f) as u32) << (7 * shift);
        if byte & 0x80 == 0 {
            return Ok(result as i32);
        }
    }
    Err(SourceError::Parse("varint longer than 5 bytes".to_string()))
}

fn read_varint_slice(cursor: &mut &[u8]) -> Result<i32, SourceError> {
    let mut result: u32 = 0;
    for shift in 0..5 {
        let (&byte, rest) = cursor.split_first().ok_or_else(|| {
            SourceError::Parse("truncated varint".to_string())
        })?;
        *cursor = rest;
        result |= ((byte & 0x7f) as u32) << (7 * shift);
        if byte & 0x80 == 0 {
            return Ok(result as i32);
        }
    }
    Err(SourceError::Parse("varint longer than 5 bytes".to_string()))
}
