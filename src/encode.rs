use {
    crate::canvas::Canvas,
    anyhow::{Context as _, Result},
    image::codecs::jpeg::JpegEncoder,
    png::{BitDepth, ColorType, Compression, Encoder},
    std::{fs, path::Path},
};

#[cfg(test)]
mod tests;

/// JPEG の品質. 常にこの値で書き出す.
const JPEG_QUALITY: u8 = 95;

/// `canvas` を `dir/name.png` と `dir/name.jpg` の両形式で保存する.
///
/// 2 形式ともメモリ上のエンコードが済んでから書き込むので, エンコードの失敗で
/// PNG だけがディスクに残ることはない.
pub(crate) fn save_pair(canvas: &Canvas, dir: &Path, name: &str) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let png = encode_png(canvas).context("failed to encode PNG")?;
    let jpeg = encode_jpeg(canvas).context("failed to encode JPEG")?;

    let png_path = dir.join(format!("{}.png", name));
    fs::write(&png_path, png).with_context(|| format!("failed to write {}", png_path.display()))?;
    let jpeg_path = dir.join(format!("{}.jpg", name));
    fs::write(&jpeg_path, jpeg)
        .with_context(|| format!("failed to write {}", jpeg_path.display()))?;
    Ok(())
}

/// PNG にエンコードする. アルファを持つキャンバスは RGBA, 持たないものは RGB になる.
fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let data: Vec<u8> = if canvas.has_alpha() {
        canvas
            .pixels()
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    } else {
        canvas
            .pixels()
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect()
    };

    let mut buf = vec![];
    let mut encoder = Encoder::new(&mut buf, canvas.side(), canvas.side());
    encoder.set_color(if canvas.has_alpha() {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    });
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Fast);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(buf)
}

/// JPEG にエンコードする. アルファは純白の背景へ合成され, 常に RGB になる.
fn encode_jpeg(canvas: &Canvas) -> Result<Vec<u8>> {
    let data: Vec<u8> = canvas
        .pixels()
        .iter()
        .map(|p| p.over_white())
        .flat_map(|p| [p.r, p.g, p.b])
        .collect();

    let mut buf = vec![];
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder.encode(&data, canvas.side(), canvas.side(), image::ColorType::Rgb8)?;
    Ok(buf)
}
