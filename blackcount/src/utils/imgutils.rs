use image::{DynamicImage, GenericImageView, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

pub const WHITE: u8 = u8::MAX;
pub const BLACK: u8 = u8::MIN;

/// Reduces the image to a single 8-bit intensity channel. Images that already are 8-bit
/// gray are returned untouched.
pub fn normalize_gray(img: DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray,
        DynamicImage::ImageLumaA8(gray) => {
            GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
                Luma([gray.get_pixel(x, y)[0]])
            })
        }
        DynamicImage::ImageLuma16(gray) => clip_gray16(&gray),
        DynamicImage::ImageLumaA16(gray) => {
            GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
                Luma([clip_u16(gray.get_pixel(x, y)[0])])
            })
        }
        color => itu_r_601(&color.to_rgb8()),
    }
}

/// 16-bit intensities are saturated at white, not rescaled, so 5000 becomes 255.
pub fn clip_gray16<I>(img: &I) -> GrayImage
where
    I: GenericImageView<Pixel = Luma<u16>>,
{
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([clip_u16(img.get_pixel(x, y)[0])])
    })
}

pub fn clip_u16(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Converts to gray with the ITU-R 601-2 luma transform. Alpha, if the source had any,
/// is already gone at this point.
pub fn itu_r_601<I>(img: &I) -> GrayImage
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([luma(img.get_pixel(x, y))])
    })
}

/// L = R * 299/1000 + G * 587/1000 + B * 114/1000, in 16.16 fixed point and rounded
/// to the nearest integer.
pub fn luma(Rgb([red, green, blue]): Rgb<u8>) -> u8 {
    let fixed =
        u32::from(red) * 19595 + u32::from(green) * 38470 + u32::from(blue) * 7471 + 0x8000;
    // the weights sum to 1 << 16, so this never exceeds u8::MAX
    (fixed >> 16) as u8
}

/// Number of pixels strictly darker than `threshold`
pub fn count_below<I>(img: &I, threshold: f64) -> u64
where
    I: GenericImageView<Pixel = Luma<u8>>,
{
    img.pixels()
        .filter(|(_, _, luma)| f64::from(luma[0]) < threshold)
        .count() as u64
}

pub fn pixel_count<T>(img: &T) -> u64
where
    T: GenericImageView,
{
    u64::from(img.width()) * u64::from(img.height())
}

pub fn is_img_empty<T>(img: &T) -> bool
where
    T: GenericImageView,
{
    img.width() == 0 || img.height() == 0
}

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    let mut buf = ImageBuffer::new(width, height);
    buf.enumerate_pixels_mut()
        .for_each(|(_, _, pixel)| *pixel = image::Rgb([red, green, blue]));
    buf
}

pub fn construct_gray(raw: &[&[u8]]) -> GrayImage {
    assert!(raw.windows(2).all(|w| w[0].len() == w[1].len()));
    let height = raw.len() as u32;
    let width = raw.iter().next().map(|row| row.len()).unwrap_or(0) as u32;
    GrayImage::from_fn(width, height, |x, y| {
        image::Luma([raw[y as usize][x as usize]])
    })
}

#[cfg(test)]
mod test {
    use image::{LumaA, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn luma_extremes() {
        assert_eq!(BLACK, luma(Rgb([0, 0, 0])));
        assert_eq!(WHITE, luma(Rgb([255, 255, 255])));
    }

    #[test]
    fn luma_primaries() {
        assert_eq!(76, luma(Rgb([255, 0, 0])));
        assert_eq!(150, luma(Rgb([0, 255, 0])));
        assert_eq!(29, luma(Rgb([0, 0, 255])));
    }

    #[test]
    fn luma_is_identity_on_grays() {
        for v in 0..=u8::MAX {
            assert_eq!(v, luma(Rgb([v, v, v])));
        }
    }

    #[test]
    fn gray_passes_through() {
        let gray = construct_gray(&[&[1, 2, 3], &[4, 5, 6]]);
        let normalized = normalize_gray(DynamicImage::ImageLuma8(gray.clone()));
        assert_eq!(gray, normalized);
    }

    #[test]
    fn gray_alpha_drops_alpha() {
        let img = ImageBuffer::from_pixel(2, 2, LumaA([42u8, 0]));
        let normalized = normalize_gray(DynamicImage::ImageLumaA8(img));
        assert!(normalized.pixels().all(|p| p[0] == 42));
    }

    #[test]
    fn gray16_saturates() {
        assert_eq!(0, clip_u16(0));
        assert_eq!(255, clip_u16(255));
        assert_eq!(255, clip_u16(256));
        assert_eq!(255, clip_u16(u16::MAX));

        let img: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_raw(3, 1, vec![5000, 100, 20]).unwrap();
        let normalized = normalize_gray(DynamicImage::ImageLuma16(img));
        assert_eq!(construct_gray(&[&[255, 100, 20]]), normalized);
    }

    #[test]
    fn gray16_alpha_saturates() {
        let img: ImageBuffer<LumaA<u16>, Vec<u16>> =
            ImageBuffer::from_raw(2, 1, vec![300, 0, 7, u16::MAX]).unwrap();
        let normalized = normalize_gray(DynamicImage::ImageLumaA16(img));
        assert_eq!(construct_gray(&[&[255, 7]]), normalized);
    }

    #[test]
    fn rgba_ignores_alpha() {
        let img = RgbaImage::from_pixel(3, 1, Rgba([255, 0, 0, 0]));
        let normalized = normalize_gray(DynamicImage::ImageRgba8(img));
        assert_eq!((3, 1), normalized.dimensions());
        assert!(normalized.pixels().all(|p| p[0] == 76));
    }

    #[test]
    fn rgb_to_gray() {
        let white = normalize_gray(DynamicImage::ImageRgb8(filled(4, 3, 255, 255, 255)));
        assert_eq!(12, pixel_count(&white));
        assert!(white.pixels().all(|p| p[0] == WHITE));
    }

    #[test]
    fn strictly_below() {
        let img = construct_gray(&[&[0, 29, 30], &[31, 255, 30]]);
        assert_eq!(2, count_below(&img, 30.0));
        assert_eq!(4, count_below(&img, 30.5));
        assert_eq!(0, count_below(&img, 0.0));
        assert_eq!(5, count_below(&img, 255.0));
        assert_eq!(6, count_below(&img, 256.0));
    }

    #[test]
    fn empty() {
        let img = construct_gray(&[]);
        assert!(is_img_empty(&img));
        assert_eq!(0, pixel_count(&img));
        assert_eq!(0, count_below(&img, 30.0));
    }
}
