use {
    super::{encode_jpeg, encode_png},
    crate::{basis::Color, canvas::Canvas, variants::VARIANTS},
    anyhow::Result,
    std::io::Cursor,
};

fn decode_png(data: &[u8]) -> Result<(png::OutputInfo, Vec<u8>)> {
    let decoder = png::Decoder::new(Cursor::new(data));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    Ok((info, buf))
}

#[test]
fn png_round_trips_with_alpha() -> Result<()> {
    let canvas = (VARIANTS[0].render)();
    let (info, pixels) = decode_png(&encode_png(&canvas)?)?;

    assert_eq!(info.width, 512);
    assert_eq!(info.height, 512);
    assert_eq!(info.color_type, png::ColorType::Rgba);

    // 中心のピクセルは必ず不透明
    let center = (256 * 512 + 256) * 4;
    assert_eq!(pixels[center + 3], 255);
    // 角は透明なまま
    assert_eq!(pixels[3], 0);
    Ok(())
}

#[test]
fn opaque_canvases_encode_as_rgb_png() -> Result<()> {
    let mut canvas = Canvas::opaque(32, Color::rgb(255, 182, 193));
    canvas.fill_ellipse(16.0, 16.0, 4.0, 4.0, Color::rgb(255, 255, 255));
    let (info, pixels) = decode_png(&encode_png(&canvas)?)?;

    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(pixels.len(), 32 * 32 * 3);
    Ok(())
}

#[test]
fn jpeg_has_no_alpha_channel() -> Result<()> {
    let canvas = (VARIANTS[0].render)();
    let jpeg = encode_jpeg(&canvas)?;
    let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg)?;

    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    Ok(())
}

#[test]
fn transparent_regions_become_white_in_jpeg() -> Result<()> {
    // 何も描いていない透明なキャンバスは真っ白な JPEG になる
    let canvas = Canvas::transparent(64);
    let jpeg = encode_jpeg(&canvas)?;
    let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg)?.to_rgb8();

    for pixel in decoded.pixels() {
        assert!(pixel.0.iter().all(|&ch| 250 <= ch), "pixel {:?}", pixel);
    }
    Ok(())
}
