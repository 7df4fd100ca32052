//! Export naming and encoding of the print outputs.
//!
//! Downloads are named after the uploaded file: `portrait.heic.jpg` becomes
//! `portrait.heic-passport.jpg` and `portrait.heic-a4-sheet.jpg`.

use crate::encode::{encode_raster_jpeg, EncodeError};
use crate::pipeline::PrintSet;

/// Stem used when the upload has no usable name.
pub const FALLBACK_STEM: &str = "photo";

/// Which of the two outputs is being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Passport,
    Sheet,
}

impl ExportKind {
    pub fn suffix(self) -> &'static str {
        match self {
            ExportKind::Passport => "-passport.jpg",
            ExportKind::Sheet => "-a4-sheet.jpg",
        }
    }
}

/// An encoded file ready for the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Strip the final extension from an uploaded file name.
///
/// A trailing dot or a name that is only an extension leaves nothing
/// useful, in which case [`FALLBACK_STEM`] is returned.
pub fn image_stem(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => &file_name[..idx],
        _ => file_name,
    };
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Download name for an output derived from the uploaded file name.
pub fn export_file_name(source_name: &str, kind: ExportKind) -> String {
    format!("{}{}", image_stem(source_name), kind.suffix())
}

/// Encode both outputs of a [`PrintSet`] as named JPEG files.
///
/// Returns `[passport, sheet]`. Rendering has already happened, so only
/// encoding can fail here.
pub fn export_print_set(
    set: &PrintSet,
    source_name: &str,
    quality: u8,
) -> Result<[ExportedFile; 2], EncodeError> {
    let passport = ExportedFile {
        file_name: export_file_name(source_name, ExportKind::Passport),
        mime_type: "image/jpeg",
        bytes: encode_raster_jpeg(&set.passport, quality)?,
    };
    let sheet = ExportedFile {
        file_name: export_file_name(source_name, ExportKind::Sheet),
        mime_type: "image/jpeg",
        bytes: encode_raster_jpeg(&set.sheet, quality)?,
    };
    Ok([passport, sheet])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrintConfig;
    use crate::pipeline::render_print_set;
    use crate::raster::RasterBuffer;
    use crate::transform::{CropRegion, RotationAngle};

    #[test]
    fn test_image_stem() {
        assert_eq!(image_stem("holiday.jpg"), "holiday");
        assert_eq!(image_stem("scan.final.png"), "scan.final");
        assert_eq!(image_stem("no_extension"), "no_extension");
        assert_eq!(image_stem("trailing."), "trailing.");
        assert_eq!(image_stem(".jpg"), FALLBACK_STEM);
        assert_eq!(image_stem(""), FALLBACK_STEM);
    }

    #[test]
    fn test_export_file_names() {
        assert_eq!(
            export_file_name("me.jpeg", ExportKind::Passport),
            "me-passport.jpg"
        );
        assert_eq!(export_file_name("me.jpeg", ExportKind::Sheet), "me-a4-sheet.jpg");
        assert_eq!(export_file_name("", ExportKind::Sheet), "photo-a4-sheet.jpg");
    }

    #[test]
    fn test_export_print_set() {
        let source = RasterBuffer::filled(700, 900, [190, 150, 130]);
        let crop = CropRegion::new(0.0, 0.0, 700.0, 900.0);
        let set =
            render_print_set(&source, &crop, RotationAngle::ZERO, &PrintConfig::default()).unwrap();

        let [passport, sheet] = export_print_set(&set, "IMG_2044.JPG", 90).unwrap();
        assert_eq!(passport.file_name, "IMG_2044-passport.jpg");
        assert_eq!(sheet.file_name, "IMG_2044-a4-sheet.jpg");
        assert_eq!(passport.mime_type, "image/jpeg");
        assert_eq!(&passport.bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(&sheet.bytes[..2], &[0xFF, 0xD8]);

        let decoded = crate::decode::decode_image(&passport.bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (413, 531));
    }

    #[test]
    fn test_export_malformed_set_reports_encode_error() {
        let mut set = render_print_set(
            &RasterBuffer::filled(700, 900, [190, 150, 130]),
            &CropRegion::new(0.0, 0.0, 700.0, 900.0),
            RotationAngle::ZERO,
            &PrintConfig::default(),
        )
        .unwrap();
        set.passport.pixels.truncate(10);

        let result = export_print_set(&set, "me.png", 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }
}
