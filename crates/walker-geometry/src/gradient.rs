//! Color gradients
//!
//! A [`Gradient`] is an ordered set of color stops keyed by their position
//! in `[0, 1]`. Every stop of one gradient has the same channel count.

use crate::color::Color;
use crate::error::GradientError;

/// One color at one position of a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    /// Sorted by position, positions unique
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Builds a gradient from unordered stops. Later duplicates replace
    /// earlier ones.
    pub fn from_stops(
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Result<Self, GradientError> {
        let mut gradient = Self::default();
        for (position, color) in stops {
            gradient.insert(position, color)?;
        }
        if gradient.is_empty() {
            return Err(GradientError::Empty);
        }
        Ok(gradient)
    }

    fn two_stop(first: Color, last: Color) -> Self {
        Self {
            stops: vec![
                ColorStop { position: 0.0, color: first },
                ColorStop { position: 1.0, color: last },
            ],
        }
    }

    pub fn white_to_black() -> Self {
        Self::two_stop(Color::WHITE, Color::BLACK)
    }

    pub fn black_to_red() -> Self {
        Self::two_stop(Color::BLACK, Color::RED)
    }

    /// Dark-to-warm ramp through one Catppuccin flavor: crust, mauve, peach.
    pub fn catppuccin(flavor: &catppuccin::Flavor) -> Self {
        let colors = &flavor.colors;
        Self {
            stops: vec![
                ColorStop { position: 0.0, color: colors.crust.rgb.into() },
                ColorStop { position: 0.5, color: colors.mauve.rgb.into() },
                ColorStop { position: 1.0, color: colors.peach.rgb.into() },
            ],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Channel count shared by every stop, `None` if empty
    pub fn channels(&self) -> Option<usize> {
        self.stops.first().map(|s| s.color.channels())
    }

    /// Adds a stop, replacing any stop at the same position.
    ///
    /// Returns the replaced color.
    pub fn insert(&mut self, position: f32, color: Color) -> Result<Option<Color>, GradientError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(GradientError::StopOutOfRange(position));
        }
        if let Some(expected) = self.channels() {
            if color.channels() != expected {
                return Err(GradientError::ChannelMismatch {
                    expected,
                    found: color.channels(),
                });
            }
        }

        let index = self.stops.partition_point(|s| s.position < position);
        if let Some(stop) = self.stops.get_mut(index).filter(|s| s.position == position) {
            return Ok(Some(std::mem::replace(&mut stop.color, color)));
        }
        self.stops.insert(index, ColorStop { position, color });
        Ok(None)
    }

    /// Removes the stop at exactly `position`.
    pub fn remove(&mut self, position: f32) -> Option<Color> {
        let index = self.stops.iter().position(|s| s.position == position)?;
        Some(self.stops.remove(index).color)
    }

    /// Gradient of only the first and last stops
    pub fn endpoints(&self) -> Gradient {
        let stops = match (self.stops.first(), self.stops.last()) {
            (Some(&first), Some(&last)) if self.stops.len() > 1 => vec![first, last],
            (Some(&first), _) => vec![first],
            _ => Vec::new(),
        };
        Gradient { stops }
    }

    /// Last stop at or before `position`
    pub fn previous_stop(&self, position: f32) -> Option<ColorStop> {
        let index = self.stops.partition_point(|s| s.position <= position);
        index.checked_sub(1).map(|i| self.stops[i])
    }

    /// First stop strictly after `position`
    pub fn next_stop(&self, position: f32) -> Option<ColorStop> {
        let index = self.stops.partition_point(|s| s.position <= position);
        self.stops.get(index).copied()
    }

    /// Closest stop to `position`. Ties go to the previous stop.
    pub fn nearest_stop(&self, position: f32) -> Option<ColorStop> {
        match (self.previous_stop(position), self.next_stop(position)) {
            (Some(prev), Some(next)) => {
                if (prev.position - position).abs() <= (next.position - position).abs() {
                    Some(prev)
                } else {
                    Some(next)
                }
            }
            (prev, next) => prev.or(next),
        }
    }

    /// Interpolated color at `position`, clamped to the end stops.
    pub fn color_at(&self, position: f32) -> Option<Color> {
        let mut channels = [0u8; 4];
        let arity = self.channels()?;
        self.write_color(position as f64, &mut channels[..arity]);
        Color::from_channels(&channels[..arity])
    }

    /// `steps` colors evenly spread over the gradient.
    ///
    /// Stops are mapped from `[0, 1]` onto `[0, steps - 1]`, so the first
    /// and last samples are exactly the first and last stop colors.
    /// Channels are interpolated independently and rounded.
    pub fn sample(&self, steps: usize) -> Result<ColorBuffer, GradientError> {
        let channels = self.channels().ok_or(GradientError::Empty)?;
        let mut data = vec![0u8; steps * channels];
        let last = steps.saturating_sub(1).max(1) as f64;

        for (i, color) in data.chunks_exact_mut(channels).enumerate() {
            self.write_color(i as f64 / last, color);
        }

        Ok(ColorBuffer { channels, data })
    }

    fn write_color(&self, u: f64, out: &mut [u8]) {
        let index = self.stops.partition_point(|s| s.position as f64 <= u);

        let (from, to, t) = if index == 0 {
            (self.stops[0], self.stops[0], 0.0)
        } else if index == self.stops.len() {
            let last = self.stops[index - 1];
            (last, last, 0.0)
        } else {
            let (a, b) = (self.stops[index - 1], self.stops[index]);
            let t = (u - a.position as f64) / (b.position as f64 - a.position as f64);
            (a, b, t)
        };

        let (from, to) = (from.color.as_slice(), to.color.as_slice());
        for (c, out) in out.iter_mut().enumerate() {
            let v = from[c] as f64 + (to[c] as f64 - from[c] as f64) * t;
            *out = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Flat per-vertex color data, `channels` bytes per vertex
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorBuffer {
    channels: usize,
    data: Vec<u8>,
}

impl ColorBuffer {
    /// `count` copies of `color`
    pub fn solid(color: Color, count: usize) -> Self {
        Self {
            channels: color.channels(),
            data: color.as_slice().repeat(count),
        }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.data.len() / self.channels
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<&[u8]> {
        let start = vertex.checked_mul(self.channels)?;
        self.data.get(start..start + self.channels)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_ramp() -> Gradient {
        Gradient::from_stops([
            (1.0, Color::rgb(0, 0, 255)),
            (0.0, Color::rgb(255, 0, 0)),
            (0.5, Color::rgb(0, 255, 0)),
        ])
        .unwrap()
    }

    #[test]
    fn stops_are_sorted() {
        let positions: Vec<f32> = rgb_ramp().stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn insert_replaces_same_position() {
        let mut g = rgb_ramp();
        let old = g.insert(0.5, Color::rgb(1, 1, 1)).unwrap();
        assert_eq!(old, Some(Color::rgb(0, 255, 0)));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn insert_rejects_bad_stops() {
        let mut g = rgb_ramp();
        assert_eq!(
            g.insert(0.2, Color::rgba(0, 0, 0, 0)),
            Err(GradientError::ChannelMismatch { expected: 3, found: 4 })
        );
        assert_eq!(
            g.insert(1.5, Color::rgb(0, 0, 0)),
            Err(GradientError::StopOutOfRange(1.5))
        );
        assert!(g.insert(f32::NAN, Color::rgb(0, 0, 0)).is_err());
        assert_eq!(g, rgb_ramp());
    }

    #[test]
    fn empty_gradient_is_rejected() {
        let none: [(f32, Color); 0] = [];
        assert_eq!(Gradient::from_stops(none), Err(GradientError::Empty));
        assert_eq!(Gradient::default().sample(4), Err(GradientError::Empty));
        assert_eq!(Gradient::default().channels(), None);
    }

    #[test]
    fn remove_and_endpoints() {
        let mut g = rgb_ramp();
        assert_eq!(g.endpoints().len(), 2);
        assert_eq!(g.remove(0.5), Some(Color::rgb(0, 255, 0)));
        assert_eq!(g.remove(0.5), None);
        assert_eq!(g.endpoints(), g);
    }

    #[test]
    fn neighbouring_stops() {
        let g = rgb_ramp();
        assert_eq!(g.previous_stop(0.4).map(|s| s.position), Some(0.0));
        assert_eq!(g.next_stop(0.4).map(|s| s.position), Some(0.5));
        assert_eq!(g.previous_stop(0.5).map(|s| s.position), Some(0.5));
        assert_eq!(g.next_stop(1.0), None);
        assert_eq!(g.nearest_stop(0.3).map(|s| s.position), Some(0.5));
        assert_eq!(g.nearest_stop(0.25).map(|s| s.position), Some(0.0));
        assert_eq!(Gradient::default().nearest_stop(0.5), None);
    }

    #[test]
    fn sample_hits_both_endpoints() {
        let g = Gradient::white_to_black();
        for steps in [2, 3, 10, 97] {
            let colors = g.sample(steps).unwrap();
            assert_eq!(colors.len(), steps);
            assert_eq!(colors.get(0), Some(&[255, 255, 255, 255][..]));
            assert_eq!(colors.get(steps - 1), Some(&[0, 0, 0, 255][..]));
        }
    }

    #[test]
    fn sample_interpolates_each_channel() {
        let colors = rgb_ramp().sample(5).unwrap();
        assert_eq!(colors.channels(), 3);
        assert_eq!(colors.get(1), Some(&[128, 128, 0][..]));
        assert_eq!(colors.get(2), Some(&[0, 255, 0][..]));
        assert_eq!(colors.get(3), Some(&[0, 128, 128][..]));
    }

    #[test]
    fn single_step_and_single_stop() {
        assert_eq!(
            Gradient::black_to_red().sample(1).unwrap().as_bytes(),
            &[0, 0, 0, 255]
        );
        let flat = Gradient::from_stops([(0.3, Color::rgb(7, 8, 9))]).unwrap();
        assert_eq!(flat.sample(3).unwrap().as_bytes(), &[7, 8, 9, 7, 8, 9, 7, 8, 9]);
        assert_eq!(flat.color_at(0.9), Some(Color::rgb(7, 8, 9)));
    }

    #[test]
    fn catppuccin_preset_spans_flavor() {
        let g = Gradient::catppuccin(&catppuccin::PALETTE.mocha);
        assert_eq!(g.channels(), Some(4));
        assert_eq!(g.color_at(0.0), Some(Color::rgba(17, 17, 27, 255)));
    }

    #[test]
    fn solid_buffer_repeats_color() {
        let buffer = ColorBuffer::solid(Color::rgba(1, 2, 3, 4), 3);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
        assert_eq!(buffer.get(3), None);
    }
}
