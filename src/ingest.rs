// src/ingest.rs
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures_util::StreamExt;
use rand::Rng;
use serde_json::json;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::config::StreamConfig;
use crate::telemetry::{SamplePipeline, StreamError};
use crate::types::{ConnectionMode, LinkState, MonitorMessage};

const RECONNECT_DELAY: Duration = Duration::from_secs(2);
const SIM_INTERVAL: Duration = Duration::from_millis(500);

/// Spawns the worker that owns the sample pipeline.
///
/// All appends happen on this thread, one frame at a time, so the buffer
/// never sees concurrent mutation.
pub fn spawn_thread(tx: Sender<MonitorMessage>, config: StreamConfig) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                log::error!("failed to start stream runtime: {err}");
                return;
            }
        };
        let mut pipeline = SamplePipeline::new(config.capacity);
        match config.mode {
            ConnectionMode::Simulation => runtime.block_on(run_simulation(&tx, &mut pipeline)),
            ConnectionMode::Network => {
                runtime.block_on(run_network(&tx, &mut pipeline, &config.url))
            }
        }
    });
}

async fn run_network(tx: &Sender<MonitorMessage>, pipeline: &mut SamplePipeline, url: &str) {
    loop {
        send(tx, MonitorMessage::Status(LinkState::Connecting));
        send(tx, MonitorMessage::Log(format!("connecting to {url}")));
        match stream_once(tx, pipeline, url).await {
            Ok(()) => send(tx, MonitorMessage::Log("stream closed, reconnecting".to_owned())),
            Err(err) => {
                log::warn!("stream to {url} failed: {err}");
                send(tx, MonitorMessage::Log(format!("stream failed: {err}")));
            }
        }
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

/// One connection's worth of frames. Returns when the server closes the
/// stream; transport failures bubble up to the reconnect loop.
async fn stream_once(
    tx: &Sender<MonitorMessage>,
    pipeline: &mut SamplePipeline,
    url: &str,
) -> Result<(), StreamError> {
    let (ws_stream, _) = connect_async(url).await?;
    log::info!("websocket connected to {url}");
    send(tx, MonitorMessage::Status(LinkState::Open));
    send(tx, MonitorMessage::Log("stream open".to_owned()));
    let (_write, mut read) = ws_stream.split();
    while let Some(message) = read.next().await {
        match message? {
            Message::Text(text) => handle_text(tx, pipeline, &text),
            Message::Binary(_) => log::warn!("ignoring binary frame"),
            Message::Close(_) => {
                log::info!("server closed the stream");
                return Ok(());
            }
            // ping/pong and raw frames are the library's business
            _ => {}
        }
    }
    Ok(())
}

/// Synthetic source: wandering BPM around a resting baseline, HRV present on
/// most frames. Frames go through the same decode path as network input.
async fn run_simulation(tx: &Sender<MonitorMessage>, pipeline: &mut SamplePipeline) {
    send(tx, MonitorMessage::Status(LinkState::Open));
    send(tx, MonitorMessage::Log("simulated stream started".to_owned()));
    let mut rng = rand::thread_rng();
    let mut bpm: f64 = 72.0;
    let mut beat: u64 = 0;
    loop {
        bpm = (bpm + rng.gen_range(-1.5..1.5)).clamp(55.0, 120.0);
        beat += 1;
        let time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        // hrv drops out on every fifth frame
        let frame = if beat % 5 == 0 {
            json!({ "time": time, "bpm": bpm.round() })
        } else {
            json!({
                "time": time,
                "bpm": bpm.round(),
                "hrv": rng.gen_range(25.0..75.0_f64).round(),
            })
        };
        handle_text(tx, pipeline, &frame.to_string());
        tokio::time::sleep(SIM_INTERVAL).await;
    }
}

fn handle_text(tx: &Sender<MonitorMessage>, pipeline: &mut SamplePipeline, raw: &str) {
    match pipeline.handle_frame(raw) {
        Ok(Some(snapshot)) => send(tx, MonitorMessage::Frame(snapshot)),
        // incomplete frame, dropped by the validation gate
        Ok(None) => {}
        Err(err) => log::warn!("discarding malformed frame: {err}"),
    }
}

fn send(tx: &Sender<MonitorMessage>, msg: MonitorMessage) {
    // the GUI hanging up means shutdown; nothing left to report to
    tx.send(msg).ok();
}
