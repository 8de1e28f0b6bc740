use serde::Deserialize;
use ts_rs::TS;

/// 待上传文件（尚未交给传输协作方）
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub original_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// 添加链接请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct LinkRequest {
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
}
