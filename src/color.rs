/// Per-frame increments of the red, green and blue channels.
pub const DELTAS: [f32; 3] = [0.0020, 0.0015, 0.0050];

/// Three independent channel accumulators.
///
/// A channel that climbs past 1.0 drops straight back to 0.0; the overshoot is
/// discarded, so each channel traces a sawtooth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOscillator {
    channels: [f32; 3],
    deltas: [f32; 3],
}

impl ColorOscillator {
    pub fn new(deltas: [f32; 3]) -> Self {
        Self {
            channels: [0.0; 3],
            deltas,
        }
    }

    pub fn advance(&mut self) {
        self.channels
            .iter_mut()
            .zip(self.deltas)
            .for_each(|(c, d)| {
                *c += d;
                if *c > 1.0 {
                    *c = 0.0;
                }
            });
    }

    pub fn channels(&self) -> [f32; 3] {
        self.channels
    }

    /// Channels with an opaque alpha.
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.channels;
        [r, g, b, 1.0]
    }
}

impl Default for ColorOscillator {
    fn default() -> Self {
        Self::new(DELTAS)
    }
}
