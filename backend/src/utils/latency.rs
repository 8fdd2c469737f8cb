use rand::Rng;
use std::sync::Mutex;
use std::time::Duration;

/// Weight of the newest sample in the moving average.
const SMOOTHING: f64 = 0.2;
const JITTER: f64 = 0.15;

struct Average {
    value: Duration,
    sampled: bool,
}

/// Moving average of how long genuine forwards take. The honeypot path sleeps
/// for about this long so both answers arrive on the same schedule.
pub struct ForwardLatency {
    average: Mutex<Average>,
}

impl ForwardLatency {
    /// `floor` stands in until the first real forward has been timed.
    pub fn new(floor: Duration) -> Self {
        Self {
            average: Mutex::new(Average { value: floor, sampled: false }),
        }
    }

    pub fn record(&self, elapsed: Duration) {
        let mut average = match self.average.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        average.value = if average.sampled {
            average.value.mul_f64(1.0 - SMOOTHING) + elapsed.mul_f64(SMOOTHING)
        } else {
            elapsed
        };
        average.sampled = true;
    }

    pub fn average(&self) -> Duration {
        match self.average.lock() {
            Ok(guard) => guard.value,
            Err(poisoned) => poisoned.into_inner().value,
        }
    }

    /// The average scaled by a random factor in `1 ± JITTER`.
    pub fn decoy_delay(&self) -> Duration {
        let factor = rand::thread_rng().gen_range((1.0 - JITTER)..=(1.0 + JITTER));
        self.average().mul_f64(factor)
    }
}
