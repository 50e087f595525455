// src/types.rs
use crate::telemetry::BufferSnapshot;

/// Where samples come from.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ConnectionMode {
    Simulation,
    Network,
}

/// Transport lifecycle as surfaced to the GUI.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum LinkState {
    Connecting,
    Open,
}

/// Messages from the ingest worker to the GUI.
#[derive(Clone, Debug)]
pub enum MonitorMessage {
    Log(String),
    Status(LinkState),
    /// Fresh buffer state, one per accepted sample.
    Frame(BufferSnapshot),
}
