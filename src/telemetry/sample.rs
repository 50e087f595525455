use serde::Deserialize;

/// One inbound telemetry frame before validation.
///
/// Every field is optional at this stage; senders may attach extra fields
/// (battery level, device id, ...) and they are ignored.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct RawFrame {
    pub time: Option<f64>,
    pub bpm: Option<f64>,
    pub hrv: Option<f64>,
}

impl RawFrame {
    /// Data-quality gate: a frame counts as a sample only when it carries
    /// both a timestamp and a BPM reading. HRV rides along when present.
    pub fn validate(self) -> Option<Sample> {
        match (self.time, self.bpm) {
            (Some(time), Some(bpm)) => Some(Sample {
                time,
                bpm,
                hrv: self.hrv,
            }),
            _ => None,
        }
    }
}

/// One accepted telemetry observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub bpm: f64,
    pub hrv: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_without_time_is_rejected() {
        let frame: RawFrame = serde_json::from_str(r#"{"bpm": 72}"#).unwrap();
        assert!(frame.validate().is_none());
    }

    #[test]
    fn frame_without_bpm_is_rejected() {
        let frame: RawFrame = serde_json::from_str(r#"{"time": 9, "hrv": 44}"#).unwrap();
        assert!(frame.validate().is_none());
    }

    #[test]
    fn frame_without_hrv_is_accepted() {
        let frame: RawFrame = serde_json::from_str(r#"{"time": 1000, "bpm": 72}"#).unwrap();
        let sample = frame.validate().expect("time + bpm is a complete sample");
        assert_eq!(sample.time, 1000.0);
        assert_eq!(sample.bpm, 72.0);
        assert!(sample.hrv.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r#"{"time": 5, "bpm": 80, "hrv": 55, "battery": 97}"#;
        let frame: RawFrame = serde_json::from_str(raw).unwrap();
        let sample = frame.validate().unwrap();
        assert_eq!(sample.hrv, Some(55.0));
    }
}
