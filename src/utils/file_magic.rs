/// 验证文件内容的魔术字节是否与声明的 MIME 类型匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `media_type` - 已规范化的 MIME 类型（如 "image/png"）
///
/// # Returns
/// * `true` - 魔术字节匹配或该类型不需要验证
/// * `false` - 魔术字节不匹配
pub fn matches_declared_type(data: &[u8], media_type: &str) -> bool {
    // 文本格式 - 不检查魔术字节，空文本文件也放行
    if media_type.starts_with("text/") {
        return true;
    }

    if data.is_empty() {
        return false;
    }

    match media_type {
        // 图片格式
        "image/png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        "image/jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        "image/gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        "image/webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        "image/bmp" => data.starts_with(b"BM"),
        "image/heic" | "image/heif" => is_iso_base_media(data),

        // 视频格式
        "video/mp4" | "video/quicktime" | "video/3gpp" => is_iso_base_media(data),
        "video/webm" => data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]),

        // 文档格式
        "application/pdf" => data.starts_with(b"%PDF"),
        "application/msword" | "application/vnd.ms-excel" | "application/vnd.ms-powerpoint" => {
            // MS Office 旧格式 (OLE Compound Document)
            data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        }
        t if t.starts_with("application/vnd.openxmlformats-officedocument.") => {
            // MS Office 新格式 (ZIP-based OOXML)
            data.starts_with(&[0x50, 0x4B, 0x03, 0x04])
        }

        // 未知格式 - 默认拒绝
        _ => false,
    }
}

/// ISO BMFF 容器（mp4/mov/heic）在偏移 4 处有 "ftyp" 标识
fn is_iso_base_media(data: &[u8]) -> bool {
    data.len() >= 8 && &data[4..8] == b"ftyp"
}
