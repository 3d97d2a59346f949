use enough::Unstoppable;
use zenbmp::*;

/// Build a 24-bit BMP by hand from bottom-up rows of BGR bytes.
fn truecolor_bmp(width: u32, height: u32, rows_bottom_up: &[Vec<u8>]) -> Vec<u8> {
    let row_size = row_size(24, width);
    let mut raster = Vec::new();
    for row in rows_bottom_up {
        raster.extend_from_slice(row);
        raster.resize(raster.len() + row_size - row.len(), 0);
    }
    let mut out = FileHeader::for_raster(raster.len() as u32).to_bytes().to_vec();
    out.extend_from_slice(&InfoHeader::for_24bit(width, height).to_bytes());
    out.extend_from_slice(&raster);
    out
}

#[test]
fn bmp_roundtrip_24bit_is_byte_identical() {
    // width 4: 12 bytes per row, no padding
    let rows: Vec<Vec<u8>> = (0..3u8)
        .map(|r| (0..12u8).map(|i| r * 40 + i).collect())
        .collect();
    let input = truecolor_bmp(4, 3, &rows);

    let decoded = decode(input.as_slice(), Unstoppable).unwrap();
    assert_eq!(decoded.width(), 4);
    assert_eq!(decoded.height(), 3);
    assert!(decoded.palette.is_none());

    let encoded = EncodeRequest::new().encode(&decoded.buffer, Unstoppable).unwrap();
    assert_eq!(encoded, input);
}

#[test]
fn bmp_roundtrip_with_padding_zeroes_padding() {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let mut input = truecolor_bmp(1, 2, &rows);
    // dirty the padding bytes, decode must ignore them
    input[54 + 3] = 0xAB;
    input[54 + 7] = 0xCD;

    let decoded = decode(input.as_slice(), Unstoppable).unwrap();
    let encoded = EncodeRequest::new().encode(&decoded.buffer, Unstoppable).unwrap();
    assert_eq!(&encoded[54..], &[1, 2, 3, 0, 4, 5, 6, 0]);
}

#[test]
fn top_row_is_last_on_disk() {
    let rows = vec![vec![0, 0, 255], vec![255, 0, 0]];
    let input = truecolor_bmp(1, 2, &rows);
    let decoded = decode(input.as_slice(), Unstoppable).unwrap();
    // bottom row on disk is red, top row on disk is blue
    assert_eq!(*decoded.buffer.at(0, 0), Color::from_rgb(0, 0, 255));
    assert_eq!(*decoded.buffer.at(0, 1), Color::from_rgb(255, 0, 0));
}

#[test]
fn indexed_decode_matches_palette_lookup() {
    let width = 5u32;
    let height = 3u32;
    let palette: Vec<Color> = (0..16u8).map(|i| Color::new(i, i * 2, 255 - i)).collect();
    let indices: Vec<Vec<u8>> = (0..height as u8)
        .map(|y| (0..width as u8).map(|x| (x * 3 + y) % 16).collect())
        .collect();

    let row_size = row_size(8, width);
    let mut info = InfoHeader::for_24bit(width, height);
    info.bpp = 8;
    info.colors_used = 16;
    let raster_len = row_size * height as usize;
    let file = FileHeader {
        raster_offset: 54 + 16 * 4,
        ..FileHeader::for_raster((16 * 4 + raster_len) as u32)
    };
    let mut data = file.to_bytes().to_vec();
    data.extend_from_slice(&info.to_bytes());
    Palette::new(palette.clone()).write_to(&mut data).unwrap();
    for row in &indices {
        data.extend_from_slice(row);
        data.resize(data.len() + row_size - row.len(), 0);
    }

    let decoded = decode(data.as_slice(), Unstoppable).unwrap();
    assert_eq!(decoded.palette.as_ref().map(Palette::len), Some(16));
    for (disk_y, row) in indices.iter().enumerate() {
        let y = height - disk_y as u32 - 1;
        for (x, &index) in row.iter().enumerate() {
            assert_eq!(*decoded.buffer.at(x as u32, y), palette[index as usize]);
        }
    }
}

#[test]
fn indexed_source_is_promoted_to_24bit_on_encode() {
    let mut info = InfoHeader::for_24bit(2, 1);
    info.bpp = 8;
    info.colors_used = 2;
    let mut data = FileHeader {
        raster_offset: 54 + 8,
        ..FileHeader::for_raster(12)
    }
    .to_bytes()
    .to_vec();
    data.extend_from_slice(&info.to_bytes());
    data.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    data.extend_from_slice(&[1, 0, 0, 0]);

    let decoded = decode(data.as_slice(), Unstoppable).unwrap();
    let encoded = EncodeRequest::new()
        .with_file_header(&decoded.file_header)
        .with_info_header(&decoded.info_header)
        .encode(&decoded.buffer, Unstoppable)
        .unwrap();

    let again = decode(encoded.as_slice(), Unstoppable).unwrap();
    assert_eq!(again.source_bpp(), 24);
    assert!(again.palette.is_none());
    assert_eq!(again.buffer, decoded.buffer);
    assert_eq!(again.buffer.pixels(), &[Color::WHITE, Color::BLACK]);
}

#[test]
fn raster_offset_gap_is_skipped() {
    let rows = vec![vec![7, 8, 9]];
    let plain = truecolor_bmp(1, 1, &rows);
    let mut data = plain[..54].to_vec();
    data[10..14].copy_from_slice(&60u32.to_le_bytes());
    data.extend_from_slice(&[0xFF; 6]);
    data.extend_from_slice(&plain[54..]);

    let decoded = decode(data.as_slice(), Unstoppable).unwrap();
    assert_eq!(*decoded.buffer.at(0, 0), Color::new(7, 8, 9));
}

#[test]
fn signature_mismatch_is_rejected() {
    let mut data = truecolor_bmp(1, 1, &[vec![0, 0, 0]]);
    data[1] = b'A';
    assert!(matches!(
        decode(data.as_slice(), Unstoppable),
        Err(BmpError::InvalidSignature([b'B', b'A']))
    ));
}

#[test]
fn sixteen_bit_is_rejected() {
    let mut data = truecolor_bmp(1, 1, &[vec![0, 0, 0]]);
    data[28..30].copy_from_slice(&16u16.to_le_bytes());
    assert!(matches!(
        decode(data.as_slice(), Unstoppable),
        Err(BmpError::UnsupportedBitDepth(16))
    ));
}

#[test]
fn truncated_raster_is_an_error() {
    let data = truecolor_bmp(4, 4, &vec![vec![1; 12]; 4]);
    assert!(matches!(
        decode(&data[..data.len() - 1], Unstoppable),
        Err(BmpError::TruncatedInput)
    ));
}

#[test]
fn limits_reject_large() {
    let data = truecolor_bmp(2, 2, &vec![vec![0; 6]; 2]);
    let limits = Limits {
        max_pixels: Some(3),
        ..Default::default()
    };
    let result = DecodeRequest::new(data.as_slice())
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BmpError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn huge_declared_size_with_limits_fails_before_allocating() {
    let mut data = truecolor_bmp(1, 1, &[vec![0, 0, 0]]);
    data[18..22].copy_from_slice(&0x4000_0000u32.to_le_bytes());
    data[22..26].copy_from_slice(&0x4000_0000u32.to_le_bytes());
    let limits = Limits {
        max_memory_bytes: Some(1 << 30),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(data.as_slice())
            .with_limits(&limits)
            .decode(Unstoppable),
        Err(BmpError::LimitExceeded(_))
    ));
}

#[test]
fn header_only_stream_declaring_huge_image_is_truncated() {
    let mut data = truecolor_bmp(1, 1, &[vec![0, 0, 0]]);
    data.truncate(54);
    data[18..22].copy_from_slice(&30_000u32.to_le_bytes());
    data[22..26].copy_from_slice(&30_000u32.to_le_bytes());
    assert!(matches!(
        decode(data.as_slice(), Unstoppable),
        Err(BmpError::TruncatedInput)
    ));
}
