use once_cell::sync::Lazy;
use regex::Regex;

// RFC 6838 的 type/subtype 记号，忽略参数部分
static MEDIA_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9!#$&^_.+-]{0,126}/[a-z0-9][a-z0-9!#$&^_.+-]{0,126}$")
        .expect("Invalid media type regex")
});

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 200;

/// 校验作业标题，返回去除首尾空白后的标题
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    // 标题长度校验：3 <= x <= 200（按字符计）
    let len = trimmed.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err("Title length must be between 3 and 200 characters");
    }
    Ok(trimmed.to_string())
}

/// 规范化 MIME 类型：转小写、去掉参数，语法不合法时返回 None
pub fn normalize_media_type(raw: &str) -> Option<String> {
    let essence = raw.split(';').next().unwrap_or_default().trim();
    let lowered = essence.to_ascii_lowercase();
    if MEDIA_TYPE_RE.is_match(&lowered) {
        Some(lowered)
    } else {
        None
    }
}

/// 判断已规范化的 MIME 类型是否在允许列表中
///
/// 允许列表中的条目可以是精确类型（`application/pdf`）或通配类型（`image/*`）。
pub fn media_type_allowed(media_type: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|pattern| {
        let pattern = pattern.trim().to_ascii_lowercase();
        match pattern.strip_suffix("/*") {
            Some(top_level) => media_type
                .split_once('/')
                .is_some_and(|(top, _)| top == top_level),
            None => pattern == media_type,
        }
    })
}

/// 去除可选文本字段的首尾空白，空串视为未填写
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
