//! Normalized color types and RGB ↔ HSV conversion.
//!
//! `Rgb` components always come from 8-bit channel values divided by 255.0,
//! so they stay in `[0, 1]`. Hue is carried in degrees and wrapped into
//! `[0, 360)`.

/// Colors closer together than this in every channel are treated as
/// achromatic (gray), where hue has no defined value.
pub const ACHROMATIC_EPSILON: f32 = 1e-5;

/// Normalized RGB color, each component in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// HSV color: hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from 8-bit channels.
    #[inline]
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    /// Parses a `RRGGBB` hex string.
    ///
    /// The whole string is read as one hexadecimal integer and split into
    /// three 8-bit channels. Malformed input decodes to zero (black) — the
    /// palette is trusted input and no validation is performed.
    pub fn from_hex(hex: &str) -> Self {
        let value = u32::from_str_radix(hex, 16).unwrap_or(0);
        Self::from_bytes(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Truncates each component back to its 8-bit channel value.
    #[inline]
    pub fn to_bytes(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
        )
    }

    /// Converts to HSV.
    ///
    /// Near-equal channels (within [`ACHROMATIC_EPSILON`]) short-circuit to
    /// saturation 0 / hue 0, which also avoids the divide-by-zero on delta.
    /// The `value <= 0` branch below is unreachable after that guard (a black
    /// color has delta 0) but is kept so the conversion never divides by a
    /// zero max; it reports hue as NaN.
    pub fn to_hsv(self) -> Hsv {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;

        if delta < ACHROMATIC_EPSILON {
            return Hsv { hue: 0.0, saturation: 0.0, value: max };
        }

        if max <= 0.0 {
            return Hsv { hue: f32::NAN, saturation: 0.0, value: max };
        }
        let saturation = delta / max;

        // Sector selection: ties favor red, then green, then blue.
        let mut hue = if self.red >= max {
            (self.green - self.blue) / delta
        } else if self.green >= max {
            2.0 + (self.blue - self.red) / delta
        } else {
            4.0 + (self.red - self.green) / delta
        };

        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsv { hue, saturation, value: max }
    }
}

impl Hsv {
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self { hue, saturation, value }
    }

    /// Converts to RGB via the standard 6-sector hexagon mapping.
    ///
    /// Zero saturation yields the achromatic `(value, value, value)`. A hue
    /// of exactly 360 wraps to 0 before sector selection.
    pub fn to_rgb(self) -> Rgb {
        if self.saturation <= 0.0 {
            return Rgb::new(self.value, self.value, self.value);
        }

        let mut h = self.hue;
        if h >= 360.0 {
            h = 0.0;
        }
        h /= 60.0;

        let sector = h as i64;
        let ff = h - sector as f32;
        let p = self.value * (1.0 - self.saturation);
        let q = self.value * (1.0 - self.saturation * ff);
        let t = self.value * (1.0 - self.saturation * (1.0 - ff));

        let (red, green, blue) = match sector {
            0 => (self.value, t, p),
            1 => (q, self.value, p),
            2 => (p, self.value, t),
            3 => (p, q, self.value),
            4 => (t, p, self.value),
            _ => (self.value, p, q),
        };

        Rgb { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!((a - b).abs() <= tol, "expected {b}, got {a} (tol {tol})");
    }

    // ── hex parsing ───────────────────────────────────────────────────────

    #[test]
    fn hex_decodes_channels() {
        assert_eq!(Rgb::from_hex("FF6B6B").to_bytes(), (255, 107, 107));
        assert_eq!(Rgb::from_hex("1A1A2E").to_bytes(), (26, 26, 46));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("4ecca3").to_bytes(), (78, 204, 163));
        assert_eq!(Rgb::from_hex("4ECCA3").to_bytes(), (78, 204, 163));
    }

    #[test]
    fn malformed_hex_decodes_to_black() {
        assert_eq!(Rgb::from_hex("not a color").to_bytes(), (0, 0, 0));
        assert_eq!(Rgb::from_hex("").to_bytes(), (0, 0, 0));
    }

    // ── rgb → hsv ─────────────────────────────────────────────────────────

    #[test]
    fn gray_has_zero_saturation_and_hue() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let hsv = Rgb::new(v, v, v).to_hsv();
            assert_eq!(hsv.saturation, 0.0);
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.value, v);
        }
    }

    #[test]
    fn primary_hues() {
        assert_close(Rgb::new(1.0, 0.0, 0.0).to_hsv().hue, 0.0, 1e-4);
        assert_close(Rgb::new(0.0, 1.0, 0.0).to_hsv().hue, 120.0, 1e-4);
        assert_close(Rgb::new(0.0, 0.0, 1.0).to_hsv().hue, 240.0, 1e-4);
    }

    #[test]
    fn negative_sector_wraps_up() {
        // Magenta-ish: red max, blue > green ⇒ raw hue negative before wrap.
        let hsv = Rgb::new(1.0, 0.0, 0.5).to_hsv();
        assert_close(hsv.hue, 330.0, 1e-3);
    }

    // ── hsv → rgb ─────────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_achromatic() {
        let rgb = Hsv::new(123.0, 0.0, 0.7).to_rgb();
        assert_eq!(rgb, Rgb::new(0.7, 0.7, 0.7));
    }

    #[test]
    fn hue_360_wraps_to_red() {
        let rgb = Hsv::new(360.0, 1.0, 1.0).to_rgb();
        assert_close(rgb.red, 1.0, 1e-4);
        assert_close(rgb.green, 0.0, 1e-4);
        assert_close(rgb.blue, 0.0, 1e-4);
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn round_trip_preserves_hsv_within_tolerance() {
        for hue in (0..360).step_by(15) {
            for (sat, val) in [(1.0, 1.0), (0.5, 0.8), (0.25, 0.4)] {
                let hsv = Hsv::new(hue as f32, sat, val);
                let back = hsv.to_rgb().to_hsv();
                assert_close(back.hue, hsv.hue, 1e-3);
                assert_close(back.saturation, hsv.saturation, 1e-3);
                assert_close(back.value, hsv.value, 1e-3);
            }
        }
    }
}
