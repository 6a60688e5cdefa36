//! Colour-deficiency simulation
//!
//! Each pixel's `(R, G, B)` vector is multiplied by a 3x3 matrix chosen
//! for the simulated deficiency. Every output channel is truncated toward
//! zero and clamped to 255. Alpha is carried over untouched.

use crate::ColorError;
use log::debug;
use std::fmt;
use std::str::FromStr;
use steglens_core::RgbRaster;

/// Colour channel whose receptors are simulated as deficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deficiency {
    /// Protanopia-like (red-weak)
    Red,
    /// Deuteranopia-like (green-weak)
    Green,
    /// Tritanopia-like (blue-weak)
    Blue,
    /// Identity transform
    None,
}

impl Deficiency {
    /// All variants, in declaration order.
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Red,
        Deficiency::Green,
        Deficiency::Blue,
        Deficiency::None,
    ];

    /// Row-major 3x3 transform applied to `(R, G, B)` column vectors.
    pub fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Deficiency::Red => [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]],
            Deficiency::Green => [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.142, 0.858]],
            Deficiency::Blue => [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]],
            Deficiency::None => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Red => "red",
            Deficiency::Green => "green",
            Deficiency::Blue => "blue",
            Deficiency::None => "none",
        }
    }

    /// Transform one RGB triple.
    #[inline]
    pub fn apply(self, (r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
        let m = self.matrix();
        let p = [f64::from(r), f64::from(g), f64::from(b)];
        let row = |i: usize| {
            let v = m[i][0] * p[0] + m[i][1] * p[1] + m[i][2] * p[2];
            v.trunc().clamp(0.0, 255.0) as u8
        };
        (row(0), row(1), row(2))
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deficiency::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownDeficiency(s.to_string()))
    }
}

/// Simulate how `rgb` looks under the given deficiency.
pub fn simulate_deficiency(rgb: &RgbRaster, deficiency: Deficiency) -> RgbRaster {
    debug!(
        "simulate_deficiency: {}x{} {}",
        rgb.width(),
        rgb.height(),
        deficiency
    );
    rgb.map_pixels(|p| deficiency.apply(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use steglens_core::color;

    #[test]
    fn test_apply_truncates() {
        assert_eq!(Deficiency::Red.apply((100, 0, 0)), (56, 55, 0));
        assert_eq!(Deficiency::Red.apply((0, 100, 0)), (43, 44, 24));
        assert_eq!(Deficiency::Green.apply((100, 0, 0)), (62, 70, 0));
        assert_eq!(Deficiency::Green.apply((0, 100, 0)), (37, 30, 14));
        assert_eq!(Deficiency::Blue.apply((0, 0, 100)), (0, 56, 52));
        assert_eq!(Deficiency::Blue.apply((200, 100, 50)), (195, 71, 73));
    }

    #[test]
    fn test_none_is_identity() {
        for p in [(0, 0, 0), (255, 255, 255), (1, 2, 3), (200, 100, 50)] {
            assert_eq!(Deficiency::None.apply(p), p);
        }
    }

    #[test]
    fn test_white_may_lose_a_level() {
        // 0.567*255 + 0.433*255 lands just below 255 and truncates
        assert_eq!(Deficiency::Red.apply((255, 255, 255)), (254, 255, 255));
        assert_eq!(Deficiency::Green.apply((255, 255, 255)), (255, 255, 255));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("red".parse::<Deficiency>().unwrap(), Deficiency::Red);
        assert_eq!("GREEN".parse::<Deficiency>().unwrap(), Deficiency::Green);
        assert_eq!("none".parse::<Deficiency>().unwrap(), Deficiency::None);
        assert!("purple".parse::<Deficiency>().is_err());
        for d in Deficiency::ALL {
            assert_eq!(d.to_string().parse::<Deficiency>().unwrap(), d);
        }
    }

    #[test]
    fn test_simulate_keeps_alpha() {
        let rgb = RgbRaster::from_data(
            2,
            1,
            vec![color::compose_rgba(100, 0, 0, 7), color::compose_rgb(10, 20, 30)],
        )
        .unwrap();
        let out = simulate_deficiency(&rgb, Deficiency::Red);
        assert_eq!(out.get_pixel(0, 0), Some(color::compose_rgba(56, 55, 0, 7)));
        assert_eq!(out.get_rgb(1, 0), Some((14, 14, 27)));
    }
}
