use std::collections::VecDeque;

use crate::telemetry::sample::Sample;

/// Default number of chart points retained per series.
pub const DEFAULT_CAPACITY: usize = 600;

/// Owned copy of the three series, oldest first.
#[derive(Clone, Debug, Default)]
pub struct BufferSnapshot {
    pub time: Vec<f64>,
    pub bpm: Vec<f64>,
    pub hrv: Vec<f64>,
}

/// Rolling history for the three heart metrics.
///
/// `time` and `bpm` always grow and shrink together; `hrv` is optional per
/// sample and bounded on its own, so its length may lag behind. Eviction is
/// oldest-first, at most one element per series per append.
pub struct SeriesBuffer {
    time: VecDeque<f64>,
    bpm: VecDeque<f64>,
    hrv: VecDeque<f64>,
    capacity: usize,
}

impl SeriesBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            time: VecDeque::with_capacity(capacity),
            bpm: VecDeque::with_capacity(capacity),
            hrv: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the paired `time`/`bpm` series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn hrv_len(&self) -> usize {
        self.hrv.len()
    }

    pub fn append(&mut self, sample: &Sample) {
        self.time.push_back(sample.time);
        self.bpm.push_back(sample.bpm);
        if self.time.len() > self.capacity {
            // paired eviction keeps time and bpm aligned
            self.time.pop_front();
            self.bpm.pop_front();
        }
        if let Some(hrv) = sample.hrv {
            self.hrv.push_back(hrv);
            if self.hrv.len() > self.capacity {
                self.hrv.pop_front();
            }
        }
    }

    /// State as of the most recent completed append.
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            time: self.time.iter().copied().collect(),
            bpm: self.bpm.iter().copied().collect(),
            hrv: self.hrv.iter().copied().collect(),
        }
    }
}
