//! Oklab colour space and the perceptual luminance used by luminance
//! selectors.
//!
//! See <https://bottosson.github.io/posts/oklab/>. Channels are fed to the
//! transform as stored, without a linearisation step, so luminance
//! thresholds in skins are expressed against that scale.

use crate::Rgba;

/// Below this chroma the hue is treated as undefined.
pub const HUE_EPSILON: f32 = 0.0001;

/// A colour in Oklab: lightness plus the two opponent axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OklabColor {
    pub lightness: f32,
    /// Green (negative) to red (positive) axis.
    pub green_red: f32,
    /// Blue (negative) to yellow (positive) axis.
    pub blue_yellow: f32,
    pub alpha: f32,
}

impl OklabColor {
    /// Build a colour from Oklch components.
    pub fn from_lch(lightness: f32, chroma: f32, hue: f32, alpha: f32) -> Self {
        let mut out = Self {
            lightness,
            green_red: 0.0,
            blue_yellow: 0.0,
            alpha,
        };
        out.set_hue_chroma(hue, chroma);
        out
    }

    /// Oklch chroma.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.green_red.hypot(self.blue_yellow)
    }

    /// Oklch hue in radians, or zero when the chroma is too small for the
    /// hue to be meaningful.
    #[inline]
    pub fn hue(self) -> f32 {
        if self.chroma() < HUE_EPSILON {
            return 0.0;
        }
        self.blue_yellow.atan2(self.green_red)
    }

    /// Set hue and chroma together; they are mutually dependent.
    #[inline]
    pub fn set_hue_chroma(&mut self, hue: f32, chroma: f32) {
        self.green_red = chroma * hue.cos();
        self.blue_yellow = chroma * hue.sin();
    }
}

/// RGB to cone response (LMS).
const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
];

/// Cube-rooted LMS to Oklab.
const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9],
    [0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0],
];

/// Oklab to cube-rooted LMS.
const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

/// LMS back to RGB.
const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
];

fn transform(matrix: &[[f64; 3]; 3], input: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0].mul_add(input[0], row[1].mul_add(input[1], row[2] * input[2])))
}

impl From<Rgba> for OklabColor {
    fn from(color: Rgba) -> Self {
        let rgb = [color.red, color.green, color.blue].map(f64::from);
        let lms = transform(&RGB_TO_LMS, rgb).map(f64::cbrt);
        let [lightness, green_red, blue_yellow] = transform(&LMS_TO_LAB, lms);
        Self {
            lightness: lightness as f32,
            green_red: green_red as f32,
            blue_yellow: blue_yellow as f32,
            alpha: color.alpha,
        }
    }
}

impl From<OklabColor> for Rgba {
    fn from(color: OklabColor) -> Self {
        let lab = [color.lightness, color.green_red, color.blue_yellow].map(f64::from);
        let lms = transform(&LAB_TO_LMS, lab).map(|root| root * root * root);
        let [red, green, blue] = transform(&LMS_TO_RGB, lms);
        Self::new(red as f32, green as f32, blue as f32, color.alpha)
    }
}

/// Perceptual luminance of a colour: its Oklab lightness clamped to `[0, 1]`.
/// Alpha is ignored.
#[inline]
pub fn luminance(color: Rgba) -> f32 {
    OklabColor::from(color).lightness.clamp(0.0, 1.0)
}
