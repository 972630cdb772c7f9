use serde::Deserialize;

use crate::error::LaserFlowError;

/// Linear RGB triple with every channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#RRGGBB`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, LaserFlowError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LaserFlowError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| LaserFlowError::InvalidColor(hex.to_string()))
        };
        Ok(Self::from_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb {
    type Error = LaserFlowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_navy() {
        let c = Rgb::from_hex("#000a3d").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 0.039).abs() < 1e-3);
        assert!((c.b - 0.239).abs() < 1e-3);
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb::from_hex("#FF8000").unwrap());
    }

    #[test]
    fn rejects_short_and_non_hex() {
        assert!(Rgb::from_hex("#abc").is_err());
        assert!(Rgb::from_hex("#zz0000").is_err());
        assert!(Rgb::from_hex("").is_err());
        // multi-byte chars must not panic on slicing
        assert!(Rgb::from_hex("#ééé").is_err());
    }
}
