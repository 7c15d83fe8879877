//! Per-frame animation state of the labs.
//!
//! Everything here is plain arithmetic on a handful of numbers, so it can be
//! driven and checked without a window.

use std::num::NonZeroU32;

use glam::{vec3, Mat4, Vec3};

use crate::color::ColorOscillator;

/// Counter value at which the model shrinks and the counter rewinds.
pub const SHRINK_AT: u32 = 200;
/// Counter value at which the model grows and the color mode advances.
pub const GROW_AT: u32 = 100;
pub const SHRINK_FACTOR: f32 = 0.9;
pub const GROW_FACTOR: f32 = 1.5;
/// Rotation applied every frame, around +Y.
pub const SPIN_DEGREES: f32 = 0.5;
pub const COLOR_MODES: u8 = 3;

/// Frame counter used to gate periodic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter {
    value: u32,
    modulus: Option<NonZeroU32>,
}

impl FrameCounter {
    pub fn unbounded() -> Self {
        Self {
            value: 0,
            modulus: None,
        }
    }

    pub fn wrapping(modulus: NonZeroU32) -> Self {
        Self {
            value: 0,
            modulus: Some(modulus),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn rewind(&mut self) {
        self.value = 0;
    }

    pub fn advance(&mut self) {
        self.value = match self.modulus {
            Some(m) => (self.value + 1) % m.get(),
            None => self.value.wrapping_add(1),
        };
    }
}

/// What one frame hands to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub mvp: Mat4,
    pub color: [f32; 4],
}

/// Frame loop driver of the polyhedron lab.
#[derive(Debug, Clone)]
pub struct Animation {
    counter: FrameCounter,
    color: ColorOscillator,
    // Advanced on every grow checkpoint but never read by the color formula.
    color_mode: u8,
    model: Mat4,
    view: Mat4,
    projection: Mat4,
}

impl Animation {
    pub fn new(view: Mat4, projection: Mat4, color: ColorOscillator) -> Self {
        Self {
            counter: FrameCounter::unbounded(),
            color,
            color_mode: 0,
            model: Mat4::IDENTITY,
            view,
            projection,
        }
    }

    /// Advances the state by one frame and returns the values to draw with.
    pub fn tick(&mut self) -> FrameParams {
        if self.counter.value() == SHRINK_AT {
            self.counter.rewind();
            self.model *= Mat4::from_scale(Vec3::splat(SHRINK_FACTOR));
            log::debug!("shrink checkpoint");
        }
        if self.counter.value() == GROW_AT {
            self.color_mode = (self.color_mode + 1) % COLOR_MODES;
            self.model *= Mat4::from_scale(Vec3::splat(GROW_FACTOR));
            log::debug!("grow checkpoint, color mode {}", self.color_mode);
        }

        self.color.advance();
        self.model *= Mat4::from_rotation_y(SPIN_DEGREES.to_radians());

        let params = self.params();
        self.counter.advance();
        params
    }

    /// Draw values for the current state, without advancing it.
    pub fn params(&self) -> FrameParams {
        FrameParams {
            mvp: self.projection * self.view * self.model,
            color: self.color.rgba(),
        }
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    pub fn counter(&self) -> u32 {
        self.counter.value()
    }

    pub fn color(&self) -> [f32; 3] {
        self.color.channels()
    }
}

pub const TOGGLE_EVERY: u32 = 1000;
pub const TOGGLE_WRAP: NonZeroU32 = match NonZeroU32::new(100) {
    Some(n) => n,
    None => unreachable!(),
};
pub const BRIGHT: [f32; 4] = [0.1, 0.5, 0.5, 1.0];
pub const DARK: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// Background toggle of the hello lab.
///
/// The toggle flips whenever the counter is a multiple of `TOGGLE_EVERY`, but
/// the counter wraps at `TOGGLE_WRAP`, so in practice it flips every
/// `TOGGLE_WRAP` frames.
#[derive(Debug, Clone)]
pub struct Blinker {
    counter: FrameCounter,
    on: bool,
}

impl Blinker {
    /// Returns the clear color for this frame.
    pub fn tick(&mut self) -> [f32; 4] {
        if self.counter.value() % TOGGLE_EVERY == 0 {
            self.on = !self.on;
        }
        self.counter.advance();
        if self.on {
            BRIGHT
        } else {
            DARK
        }
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self {
            counter: FrameCounter::wrapping(TOGGLE_WRAP),
            on: true,
        }
    }
}

/// Uniform scale carried by a matrix built from rotations about Y and
/// uniform scales.
pub fn uniform_scale(m: Mat4) -> f32 {
    vec3(m.x_axis.x, m.x_axis.y, m.x_axis.z).length()
}
