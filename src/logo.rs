//! Logo embedding as data URIs.
//!
//! The generated page must render without any live backend, so the logo
//! file is inlined into the document as a base64 data URI instead of being
//! referenced by path.

use anyhow::{Context, Result};
use base64::Engine;
use std::fs;
use std::path::Path;

/// Supported logo image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Svg,
    Webp,
}

impl ImageFormat {
    /// Returns MIME type for the data URI.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// Detects the image format of logo file contents.
///
/// Checks magic bytes first, then falls back to the file extension for
/// formats whose header is ambiguous or truncated.
///
/// # Arguments
///
/// * `bytes`: File contents
/// * `path`: File path used for the extension fallback
pub fn detect_format(bytes: &[u8], path: &Path) -> Option<ImageFormat> {
    detect_by_magic(bytes).or_else(|| detect_by_extension(path))
}

fn detect_by_magic(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }

    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }

    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }

    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }

    // SVG is text: accept an <svg> root, optionally behind an XML declaration
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(512)]);
    let head = head.trim_start();
    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        return Some(ImageFormat::Svg);
    }

    None
}

fn detect_by_extension(path: &Path) -> Option<ImageFormat> {
    let extension = path.extension()?.to_str()?.to_lowercase();

    match extension.as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "gif" => Some(ImageFormat::Gif),
        "svg" => Some(ImageFormat::Svg),
        "webp" => Some(ImageFormat::Webp),
        _ => None,
    }
}

/// Reads a logo image file and returns it as a data URI.
///
/// # Arguments
///
/// * `path`: Path to the logo image file
///
/// # Returns
///
/// A `data:<mime>;base64,<payload>` URI string
///
/// # Errors
///
/// Returns error if the file cannot be read or its format is not recognized
pub fn embed_logo(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read logo file: {}", path.display()))?;

    let format = detect_format(&bytes, path)
        .with_context(|| format!("Unrecognized logo image format: {}", path.display()))?;

    let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", format.mime_type(), payload))
}
