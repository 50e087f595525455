// src/telemetry/mod.rs
pub mod buffer;
pub mod error;
pub mod pipeline;
pub mod sample;

pub use buffer::{BufferSnapshot, SeriesBuffer, DEFAULT_CAPACITY};
pub use error::StreamError;
pub use pipeline::SamplePipeline;
pub use sample::{RawFrame, Sample};
