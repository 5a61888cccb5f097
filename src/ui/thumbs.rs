use eframe::egui;
use image::imageops::FilterType;
use image::ImageReader;

// Oversized sources are capped so a stray full-resolution photo does not
// blow up texture memory.
const THUMB_MAX_DIM: u32 = 640;

const PLACEHOLDER_SIZE: [usize; 2] = [160, 120];

/// Decodes and downscales one image for the grid. An unreadable source
/// becomes a flat placeholder tile instead of aborting the session.
pub fn load_thumbnail(path: &str, scale: f32) -> egui::ColorImage {
    match decode_scaled(path, scale) {
        Ok(thumb) => thumb,
        Err(error) => {
            eprintln!("using placeholder tile for {path}: {error}");
            placeholder_tile()
        }
    }
}

fn decode_scaled(path: &str, scale: f32) -> Result<egui::ColorImage, String> {
    let image = ImageReader::open(path)
        .map_err(|error| format!("failed to open image {path:?}: {error}"))?
        .with_guessed_format()
        .map_err(|error| format!("failed to detect image format {path:?}: {error}"))?
        .decode()
        .map_err(|error| format!("failed to decode image {path:?}: {error}"))?;

    let width = ((image.width() as f32 * scale).round().max(1.0)) as u32;
    let height = ((image.height() as f32 * scale).round().max(1.0)) as u32;
    let (width, height) = cap_dimensions(width, height);
    let scaled = image.resize_exact(width, height, FilterType::Triangle);

    let rgba = scaled.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn cap_dimensions(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= THUMB_MAX_DIM {
        return (width, height);
    }
    let ratio = THUMB_MAX_DIM as f32 / longest as f32;
    (
        ((width as f32 * ratio).round().max(1.0)) as u32,
        ((height as f32 * ratio).round().max(1.0)) as u32,
    )
}

fn placeholder_tile() -> egui::ColorImage {
    egui::ColorImage::new(PLACEHOLDER_SIZE, egui::Color32::from_gray(48))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn thumbnail_is_scaled_to_half_size() {
        let dir = TempDir::new().expect("tempdir should be created");
        let src = dir.path().join("x.jpg");
        let img = ImageBuffer::from_fn(640, 360, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(&src).expect("jpeg should be written");

        let thumb = load_thumbnail(&src.to_string_lossy(), 0.5);

        assert_eq!(thumb.size, [320, 180]);
    }

    #[test]
    fn oversized_sources_are_capped() {
        let (width, height) = cap_dimensions(4000, 3000);
        assert_eq!(width, 640);
        assert_eq!(height, 480);

        assert_eq!(cap_dimensions(320, 180), (320, 180));
    }

    #[test]
    fn unreadable_image_falls_back_to_the_placeholder() {
        let dir = TempDir::new().expect("tempdir should be created");
        let src = dir.path().join("broken.jpg");
        std::fs::write(&src, b"not an image").expect("file should be written");

        let thumb = load_thumbnail(&src.to_string_lossy(), 0.5);

        assert_eq!(thumb.size, PLACEHOLDER_SIZE);
    }
}
