use crate::errors::Result;

/// 文件传输协作方
///
/// 只有通过元数据校验的文件才会交给它；返回的引用写入附件集合。
#[async_trait::async_trait]
pub trait FileTransport: Send + Sync {
    async fn upload(&self, original_name: &str, media_type: &str, bytes: Vec<u8>)
    -> Result<String>;
}
