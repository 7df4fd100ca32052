//! Decode errors and the EXIF orientation tag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an upload could not be turned into a raster.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not a JPEG or PNG, or no bytes at all.
    #[error("not a recognised JPEG or PNG image")]
    InvalidFormat,

    /// Recognised, but the data stops or breaks part way through.
    #[error("image data is damaged: {0}")]
    CorruptedFile(String),
}

/// How the camera stored the picture relative to upright, as recorded in
/// the EXIF orientation tag. Discriminants are the tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Upright = 1,
    Mirrored = 2,
    UpsideDown = 3,
    MirroredUpsideDown = 4,
    /// Mirrored, then turned a quarter anticlockwise.
    MirroredQuarterLeft = 5,
    /// Turned a quarter clockwise. Typical for phone portraits.
    QuarterRight = 6,
    /// Mirrored, then turned a quarter clockwise.
    MirroredQuarterRight = 7,
    QuarterLeft = 8,
}

impl Orientation {
    /// Parse a raw tag value. Values outside 1-8 are not orientations.
    pub fn from_exif(value: u32) -> Option<Self> {
        Some(match value {
            1 => Self::Upright,
            2 => Self::Mirrored,
            3 => Self::UpsideDown,
            4 => Self::MirroredUpsideDown,
            5 => Self::MirroredQuarterLeft,
            6 => Self::QuarterRight,
            7 => Self::MirroredQuarterRight,
            8 => Self::QuarterLeft,
            _ => return None,
        })
    }

    /// Whether correcting this orientation exchanges width and height.
    pub fn is_quarter_turn(self) -> bool {
        (self as u8) >= 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exif() {
        assert_eq!(Orientation::from_exif(1), Some(Orientation::Upright));
        assert_eq!(Orientation::from_exif(6), Some(Orientation::QuarterRight));
        assert_eq!(Orientation::from_exif(8), Some(Orientation::QuarterLeft));
        assert_eq!(Orientation::from_exif(0), None);
        assert_eq!(Orientation::from_exif(9), None);
    }

    #[test]
    fn test_quarter_turns() {
        let turned: Vec<u32> = (1..=8)
            .filter_map(Orientation::from_exif)
            .filter(|o| o.is_quarter_turn())
            .map(|o| o as u32)
            .collect();
        assert_eq!(turned, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated scan".to_string());
        assert_eq!(err.to_string(), "image data is damaged: truncated scan");
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "not a recognised JPEG or PNG image"
        );
    }
}
