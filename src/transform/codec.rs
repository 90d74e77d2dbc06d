//! # 图像编解码
//!
//! 封装 `image` crate 的解码、编码、灰度转换与落盘。
//!
//! ## 依赖关系
//! - 被 `batch/loader.rs`（解码）和 `transform/mod.rs`（编码）调用
//! - 使用 `image` crate

use crate::error::{ImbatchError, Result};

use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// 解码结果
#[derive(Debug)]
pub struct Decoded {
    pub image: DynamicImage,
    /// 按文件内容探测到的容器格式
    pub format: Option<ImageFormat>,
}

/// 从文件解码图像
pub fn decode(path: &Path) -> Result<Decoded> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| ImbatchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

    let format = reader.format();
    let image = reader.decode().map_err(|e| ImbatchError::DecodeError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Decoded { image, format })
}

/// 按目标容器编码为字节
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let prepared = prepare_for(image, format);
    let mut buffer = Cursor::new(Vec::new());

    prepared
        .write_to(&mut buffer, format)
        .map_err(|e| ImbatchError::EncodeError {
            format: format!("{:?}", format),
            source: e,
        })?;

    Ok(buffer.into_inner())
}

/// 单通道亮度转换，丢弃 alpha；高位深输入输出 16 位
pub fn grayscale(image: &DynamicImage) -> DynamicImage {
    if is_wide(image.color()) {
        DynamicImage::ImageLuma16(image.to_luma16())
    } else {
        DynamicImage::ImageLuma8(image.to_luma8())
    }
}

/// 写入编码后的字节
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| ImbatchError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 将像素布局调整为目标容器的编码器可接受的布局
///
/// - JPEG: L8 / Rgb8
/// - GIF, QOI: Rgb8 / Rgba8
/// - BMP, ICO, TGA, WebP: 8 位 L / La / Rgb / Rgba
/// - PNM: 无 alpha，8 或 16 位
/// - PNG: 浮点降为 16 位
/// - Farbfeld: Rgba16；OpenEXR: Rgb32F / Rgba32F；HDR: Rgb32F
fn prepare_for(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();
    let gray = !color.has_color();
    let alpha = color.has_alpha();
    let wide = is_wide(color);

    let target = match format {
        ImageFormat::Jpeg if gray => ColorType::L8,
        ImageFormat::Jpeg => ColorType::Rgb8,
        ImageFormat::Gif | ImageFormat::Qoi if alpha => ColorType::Rgba8,
        ImageFormat::Gif | ImageFormat::Qoi => ColorType::Rgb8,
        ImageFormat::Bmp | ImageFormat::Ico | ImageFormat::Tga | ImageFormat::WebP => {
            layout(gray, alpha, false)
        }
        ImageFormat::Pnm => layout(gray, false, wide),
        ImageFormat::Png if matches!(color, ColorType::Rgb32F | ColorType::Rgba32F) => {
            layout(gray, alpha, true)
        }
        ImageFormat::Farbfeld => ColorType::Rgba16,
        ImageFormat::OpenExr if alpha => ColorType::Rgba32F,
        ImageFormat::OpenExr | ImageFormat::Hdr => ColorType::Rgb32F,
        _ => color,
    };

    if target == color {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(convert(image, target))
    }
}

/// 通道位深超过 8 位
fn is_wide(color: ColorType) -> bool {
    color.bytes_per_pixel() / color.channel_count() > 1
}

/// 按灰度 / alpha / 16 位选择整数布局
fn layout(gray: bool, alpha: bool, sixteen: bool) -> ColorType {
    match (gray, alpha, sixteen) {
        (true, false, false) => ColorType::L8,
        (true, true, false) => ColorType::La8,
        (false, false, false) => ColorType::Rgb8,
        (false, true, false) => ColorType::Rgba8,
        (true, false, true) => ColorType::L16,
        (true, true, true) => ColorType::La16,
        (false, false, true) => ColorType::Rgb16,
        (false, true, true) => ColorType::Rgba16,
    }
}

fn convert(image: &DynamicImage, target: ColorType) -> DynamicImage {
    match target {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgb, RgbImage, Rgb32FImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_decode_roundtrip_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(3, 2, Rgb([255, 0, 0])).save(&path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.format, Some(ImageFormat::Png));
        assert_eq!((decoded.image.width(), decoded.image.height()), (3, 2));
    }

    #[test]
    fn test_decode_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(
            decode(&path),
            Err(ImbatchError::DecodeError { .. })
        ));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            decode(&dir.path().join("missing.png")),
            Err(ImbatchError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_prepare_for_jpeg() {
        let gray_alpha =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([90, 10])));
        assert!(matches!(
            prepare_for(&gray_alpha, ImageFormat::Jpeg).as_ref(),
            DynamicImage::ImageLuma8(_)
        ));
        assert!(matches!(
            prepare_for(&gray_alpha, ImageFormat::Png).as_ref(),
            DynamicImage::ImageLumaA8(_)
        ));
    }

    #[test]
    fn test_grayscale_is_single_channel() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([200, 40, 10, 90])));
        assert_eq!(grayscale(&rgba).color(), ColorType::L8);

        let gray_alpha =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([90, 10])));
        assert_eq!(grayscale(&gray_alpha).color(), ColorType::L8);

        let wide = DynamicImage::ImageRgba16(image::ImageBuffer::from_pixel(
            2,
            2,
            Rgba([60000u16, 100, 100, 65535]),
        ));
        assert_eq!(grayscale(&wide).color(), ColorType::L16);
    }

    #[test]
    fn test_prepare_for_gif_expands_gray() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([77])));
        assert_eq!(
            prepare_for(&gray, ImageFormat::Gif).color(),
            ColorType::Rgb8
        );

        let gray_alpha =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([77, 5])));
        assert_eq!(
            prepare_for(&gray_alpha, ImageFormat::Gif).color(),
            ColorType::Rgba8
        );
    }

    #[test]
    fn test_prepare_for_eight_bit_containers() {
        let wide = DynamicImage::ImageRgb16(image::ImageBuffer::from_pixel(
            2,
            2,
            Rgb([1000u16, 2000, 3000]),
        ));
        for format in [ImageFormat::Bmp, ImageFormat::Tga, ImageFormat::Ico] {
            assert_eq!(prepare_for(&wide, format).color(), ColorType::Rgb8);
        }
        assert_eq!(prepare_for(&wide, ImageFormat::Png).color(), ColorType::Rgb16);

        let float = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(2, 2, Rgb([0.5, 0.2, 0.1])));
        assert_eq!(prepare_for(&float, ImageFormat::Png).color(), ColorType::Rgb16);
    }

    #[test]
    fn test_encode_gray_to_gif() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([128])));
        let bytes = encode(&gray, ImageFormat::Gif).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Gif);

        let wide = DynamicImage::ImageLuma16(image::ImageBuffer::from_pixel(4, 4, Luma([40000u16])));
        let bytes = encode(&wide, ImageFormat::Bmp).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.png");
        assert!(matches!(
            write(&path, b"bytes"),
            Err(ImbatchError::FileWriteError { .. })
        ));
    }
}
