//! QR encoder backed by the `qrcode` crate.

use crate::domain::errors::QrError;
use crate::ports::outbound::QrEncoder;
use qrcode::render::svg;
use qrcode::types::QrError as EncodeError;
use qrcode::{EcLevel, QrCode};

/// Default rendered size in pixels.
pub const DEFAULT_QR_SIZE: u32 = 200;

const DARK: &str = "#333333";
const LIGHT: &str = "#ffffff";

/// Renders high error-correction QR symbols as SVG.
#[derive(Clone, Debug)]
pub struct SvgQrEncoder {
    min_dimension: u32,
}

impl SvgQrEncoder {
    pub fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_QR_SIZE)
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode_svg(&self, data: &str) -> Result<String, QrError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H).map_err(
            |e| match e {
                EncodeError::DataTooLong => QrError::DataTooLong(data.len()),
                other => QrError::Encoder(other.to_string()),
            },
        )?;

        Ok(code
            .render::<svg::Color>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .dark_color(svg::Color(DARK))
            .light_color(svg::Color(LIGHT))
            .quiet_zone(true)
            .build())
    }
}
