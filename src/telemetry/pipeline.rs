use crate::telemetry::buffer::{BufferSnapshot, SeriesBuffer};
use crate::telemetry::error::StreamError;
use crate::telemetry::sample::{RawFrame, Sample};

/// Decode → validate → append path for one client.
///
/// Owns the series buffer; callers feed raw text frames and get a fresh
/// snapshot back for every accepted sample. The caller is expected to run
/// frames through this one at a time, so appends are serialized and a
/// snapshot never observes a half-updated buffer.
pub struct SamplePipeline {
    buffer: SeriesBuffer,
}

impl SamplePipeline {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: SeriesBuffer::new(capacity),
        }
    }

    /// Runs one inbound frame through the pipeline.
    ///
    /// `Err` means the frame was not parseable JSON; the stream keeps going
    /// and the caller decides how loudly to log. `Ok(None)` means the frame
    /// parsed but lacked a mandatory field and was dropped. `Ok(Some(_))`
    /// carries the post-append snapshot for the renderer.
    pub fn handle_frame(&mut self, raw: &str) -> Result<Option<BufferSnapshot>, StreamError> {
        let frame: RawFrame = serde_json::from_str(raw)?;
        let Some(sample) = frame.validate() else {
            log::trace!("dropping incomplete frame: {raw}");
            return Ok(None);
        };
        Ok(Some(self.accept(sample)))
    }

    /// Appends an already-validated sample and snapshots the result.
    pub fn accept(&mut self, sample: Sample) -> BufferSnapshot {
        self.buffer.append(&sample);
        self.buffer.snapshot()
    }

    pub fn buffer(&self) -> &SeriesBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_frame_then_valid_frame() {
        let mut pipeline = SamplePipeline::new(600);
        assert!(pipeline.handle_frame("not json at all").is_err());
        let snap = pipeline
            .handle_frame(r#"{"time": 1, "bpm": 60, "hrv": 40}"#)
            .unwrap()
            .expect("valid frame should be accepted");
        assert_eq!(snap.time, vec![1.0]);
        assert_eq!(snap.bpm, vec![60.0]);
        assert_eq!(snap.hrv, vec![40.0]);
    }

    #[test]
    fn incomplete_frame_is_dropped_without_a_snapshot() {
        let mut pipeline = SamplePipeline::new(600);
        assert!(pipeline.handle_frame(r#"{"bpm": 72}"#).unwrap().is_none());
        assert!(pipeline.buffer().is_empty());
        assert_eq!(pipeline.buffer().hrv_len(), 0);
    }

    #[test]
    fn stream_of_frames_slides_the_window() {
        let mut pipeline = SamplePipeline::new(3);
        let mut last = None;
        for (t, b) in [(1, 60), (2, 62), (3, 64), (4, 66)] {
            let raw = format!(r#"{{"time": {t}, "bpm": {b}}}"#);
            last = pipeline.handle_frame(&raw).unwrap();
        }
        let snap = last.expect("every frame was valid");
        assert_eq!(snap.time, vec![2.0, 3.0, 4.0]);
        assert_eq!(snap.bpm, vec![62.0, 64.0, 66.0]);
        assert!(snap.hrv.is_empty());
    }

    #[test]
    fn hrv_tracks_its_own_window() {
        let mut pipeline = SamplePipeline::new(2);
        pipeline
            .handle_frame(r#"{"time": 1, "bpm": 60, "hrv": 30}"#)
            .unwrap();
        pipeline.handle_frame(r#"{"time": 2, "bpm": 61}"#).unwrap();
        pipeline.handle_frame(r#"{"time": 3, "bpm": 62}"#).unwrap();
        let snap = pipeline
            .handle_frame(r#"{"time": 4, "bpm": 63, "hrv": 35}"#)
            .unwrap()
            .unwrap();
        // time/bpm slid past the frame that carried hrv 30, which survives
        assert_eq!(snap.time, vec![3.0, 4.0]);
        assert_eq!(snap.hrv, vec![30.0, 35.0]);
    }
}
