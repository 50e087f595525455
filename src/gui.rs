// src/gui.rs
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::StreamConfig;
use crate::ingest;
use crate::telemetry::BufferSnapshot;
use crate::types::{ConnectionMode, LinkState, MonitorMessage};

const LOG_SCROLLBACK: usize = 8;

pub struct PulsemonApp {
    link_state: LinkState,
    mode: ConnectionMode,
    url: String,
    capacity: usize,

    // latest buffer state from the ingest worker
    snapshot: BufferSnapshot,
    frames_seen: u64,

    log_messages: Vec<String>,
    rx: Receiver<MonitorMessage>,
}

impl PulsemonApp {
    pub fn new(config: StreamConfig) -> Self {
        let (tx, rx) = channel();
        let mode = config.mode;
        let url = config.url.clone();
        let capacity = config.capacity;

        // spawn the stream worker
        ingest::spawn_thread(tx, config);

        Self {
            link_state: LinkState::Connecting,
            mode,
            url,
            capacity,
            snapshot: BufferSnapshot::default(),
            frames_seen: 0,
            log_messages: vec!["pulsemon ready".to_owned()],
            rx,
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > LOG_SCROLLBACK {
            self.log_messages.remove(0);
        }
    }
}

impl eframe::App for PulsemonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // drain the worker channel; only the newest snapshot matters
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                MonitorMessage::Log(s) => self.log(&s),
                MonitorMessage::Status(state) => self.link_state = state,
                MonitorMessage::Frame(snapshot) => {
                    self.frames_seen += 1;
                    self.snapshot = snapshot;
                }
            }
        }

        egui::SidePanel::left("status").min_width(230.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("pulsemon");
            ui.label("Live heart telemetry");
            ui.separator();

            let (status_text, status_color) = match self.link_state {
                LinkState::Connecting => ("CONNECTING", Color32::YELLOW),
                LinkState::Open => ("OPEN", Color32::GREEN),
            };
            ui.label(egui::RichText::new(status_text).strong().color(status_color));
            match self.mode {
                ConnectionMode::Simulation => {
                    ui.monospace("simulated source");
                }
                ConnectionMode::Network => {
                    ui.monospace(&self.url);
                }
            }

            ui.add_space(10.0);
            ui.label(format!("points: {}/{}", self.snapshot.bpm.len(), self.capacity));
            ui.label(format!("hrv points: {}", self.snapshot.hrv.len()));
            ui.label(format!("frames: {}", self.frames_seen));

            ui.add_space(10.0);
            ui.separator();
            egui::ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("BPM & HRV Real-time Data");

            let bpm_points: Vec<[f64; 2]> = self
                .snapshot
                .time
                .iter()
                .zip(&self.snapshot.bpm)
                .map(|(&t, &v)| [t, v])
                .collect();
            // hrv pairs with the time labels index-wise; the series carry no
            // positional alignment of their own
            let hrv_points: Vec<[f64; 2]> = self
                .snapshot
                .time
                .iter()
                .zip(&self.snapshot.hrv)
                .map(|(&t, &v)| [t, v])
                .collect();

            Plot::new("heart_plot")
                .view_aspect(2.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    if !bpm_points.is_empty() {
                        plot_ui.line(
                            Line::new(PlotPoints::new(bpm_points))
                                .name("BPM")
                                .color(Color32::from_rgb(72, 211, 224)),
                        );
                    }
                    if !hrv_points.is_empty() {
                        plot_ui.line(
                            Line::new(PlotPoints::new(hrv_points))
                                .name("HRV")
                                .color(Color32::from_rgb(255, 111, 97)),
                        );
                    }
                });
        });

        // the stream pushes at its own pace; poll for new frames regularly
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
