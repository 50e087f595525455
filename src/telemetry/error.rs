use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("frame is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("websocket transport failed: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
}
