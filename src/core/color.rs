use crate::error::LightingError;
use serde::Deserialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Upper bound of every channel in a finished color.
pub const MAX_CHANNEL: f32 = 255.0;

/// An RGB triple on the 0..=255 scale.
///
/// Also used for per-channel reflectance constants (ka, kd, ks), which live
/// on a 0..=1 scale by convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Same value in all three channels.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Channel-wise product, e.g. light color times reflectance.
    pub fn component_mul(&self, other: &Color) -> Color {
        Color::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Caps each channel at [`MAX_CHANNEL`]. There is no lower clamp.
    pub fn clamped(&self) -> Color {
        Color::new(
            self.red.min(MAX_CHANNEL),
            self.green.min(MAX_CHANNEL),
            self.blue.min(MAX_CHANNEL),
        )
    }

    /// Rejects colors with a negative, NaN or infinite channel.
    ///
    /// `label` names the offending input in the error ("light color", "kd", ...).
    pub fn validate_non_negative(&self, label: &'static str) -> Result<Color, LightingError> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LightingError::InvalidReflectance {
                    label,
                    channel,
                    value,
                });
            }
        }
        Ok(*self)
    }

    /// Converts to 8-bit channels, truncating the fractional part.
    ///
    /// Channels are clamped to 0..=255 first so out-of-range values cannot wrap.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamped();
        [
            c.red.max(0.0) as u8,
            c.green.max(0.0) as u8,
            c.blue.max(0.0) as u8,
        ]
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scalar: f32) -> Color {
        Color::new(self.red * scalar, self.green * scalar, self.blue * scalar)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_channel_wise() {
        let a = Color::new(10.0, 20.0, 30.0);
        let b = Color::new(1.0, 2.0, 3.0);
        assert_eq!(a + b, Color::new(11.0, 22.0, 33.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_sum_of_many_colors() {
        let colors = vec![
            Color::gray(1.0),
            Color::new(0.0, 5.0, 0.0),
            Color::new(0.0, 0.0, 7.0),
        ];
        let total: Color = colors.into_iter().sum();
        assert_eq!(total, Color::new(1.0, 6.0, 8.0));

        let empty: Color = std::iter::empty().sum();
        assert_eq!(empty, Color::BLACK);
    }

    #[test]
    fn test_component_mul_and_scale() {
        let light = Color::new(0.0, 255.0, 100.0);
        let k = Color::new(0.5, 0.5, 0.1);
        assert_eq!(light.component_mul(&k), Color::new(0.0, 127.5, 10.0));
        assert_eq!(light * 0.5, Color::new(0.0, 127.5, 50.0));
    }

    #[test]
    fn test_clamped_caps_upper_bound_only() {
        let c = Color::new(300.0, 255.0, 12.5).clamped();
        assert_eq!(c, Color::new(255.0, 255.0, 12.5));

        // No lower clamp.
        let negative = Color::new(-1.0, 0.0, 0.0).clamped();
        assert_eq!(negative.red, -1.0);
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(Color::new(0.0, 0.5, 255.0).validate_non_negative("kd").is_ok());

        let err = Color::new(0.1, -0.2, 0.3)
            .validate_non_negative("ks")
            .unwrap_err();
        assert_eq!(
            err,
            LightingError::InvalidReflectance {
                label: "ks",
                channel: "green",
                value: -0.2
            }
        );

        assert!(
            Color::new(0.0, 0.0, f32::NAN)
                .validate_non_negative("light color")
                .is_err()
        );
        assert!(
            Color::new(f32::INFINITY, 0.0, 0.0)
                .validate_non_negative("kd")
                .is_err()
        );
    }

    #[test]
    fn test_to_rgb8_truncates() {
        assert_eq!(Color::new(5.9, 254.99, 400.0).to_rgb8(), [5, 254, 255]);
    }

    #[test]
    fn test_deserialize_from_array() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: Color,
        }
        let w: Wrapper = toml::from_str("color = [0.0, 255.0, 128.5]").unwrap();
        assert_eq!(w.color, Color::new(0.0, 255.0, 128.5));
    }
}
