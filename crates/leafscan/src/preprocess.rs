use image::imageops::FilterType;
use image::RgbImage;

use leafscan_core::TileSpec;

/// One normalized tile ready for classification.
///
/// RGB interleaved, row-major, values in `[0, 1]` (pixel / 255). This is the
/// "batch of one" handed to the injected classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct TileTensor {
    pub width: u32,
    pub height: u32,
    /// len = width * height * 3
    pub data: Vec<f32>,
}

impl TileTensor {
    /// Normalized RGB value at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Crop one tile out of the image, resize it to the classifier's fixed input
/// resolution, and normalize to `[0, 1]`.
///
/// The tile box must lie inside the image; tiles produced by
/// `leafscan_core::partition` over the same dimensions always do.
pub fn prepare_tile(img: &RgbImage, tile: &TileSpec, input_size: u32) -> TileTensor {
    let crop = image::imageops::crop_imm(
        img,
        tile.left,
        tile.top,
        tile.right - tile.left,
        tile.bottom - tile.top,
    )
    .to_image();

    let resized = if crop.dimensions() == (input_size, input_size) {
        crop
    } else {
        image::imageops::resize(&crop, input_size, input_size, FilterType::Triangle)
    };

    let mut data = Vec::with_capacity((input_size * input_size * 3) as usize);
    for pixel in resized.pixels() {
        data.push(f32::from(pixel[0]) / 255.0);
        data.push(f32::from(pixel[1]) / 255.0);
        data.push(f32::from(pixel[2]) / 255.0);
    }

    TileTensor {
        width: input_size,
        height: input_size,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Rgb;

    fn tile(left: u32, top: u32, size: u32) -> TileSpec {
        TileSpec {
            row: top / size,
            col: left / size,
            left,
            top,
            right: left + size,
            bottom: top + size,
        }
    }

    #[test]
    fn normalizes_to_unit_range() {
        let img = RgbImage::from_pixel(8, 8, Rgb([255, 0, 51]));
        let tensor = prepare_tile(&img, &tile(0, 0, 8), 8);
        assert_eq!(tensor.data.len(), 8 * 8 * 3);
        let [r, g, b] = tensor.pixel(3, 3);
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 0.0);
        assert_relative_eq!(b, 0.2);
    }

    #[test]
    fn crops_the_requested_box() {
        // Left half black, right half white; the right tile must be all white.
        let mut img = RgbImage::new(16, 8);
        for y in 0..8 {
            for x in 8..16 {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let tensor = prepare_tile(&img, &tile(8, 0, 8), 8);
        assert!(tensor.data.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn resizes_to_input_resolution() {
        let img = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));
        let tensor = prepare_tile(&img, &tile(0, 0, 32), 8);
        assert_eq!((tensor.width, tensor.height), (8, 8));
        assert_eq!(tensor.data.len(), 8 * 8 * 3);
    }
}
