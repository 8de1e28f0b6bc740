//! 内存文件传输实现

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{CourseworkError, Result};
use crate::storage::FileTransport;

#[derive(Debug, Clone)]
struct StoredBlob {
    original_name: String,
    media_type: String,
    bytes: Vec<u8>,
}

pub struct MemoryFileTransport {
    blobs: DashMap<String, StoredBlob>,
    available: AtomicBool,
}

impl Default for MemoryFileTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileTransport {
    pub fn new() -> Self {
        Self {
            blobs: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// 模拟传输故障
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    /// 已接收的文件数量
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// 按引用读取文件内容
    pub fn get(&self, payload_ref: &str) -> Option<Vec<u8>> {
        self.blobs.get(payload_ref).map(|b| b.bytes.clone())
    }

    /// 按引用读取文件名和类型
    pub fn metadata(&self, payload_ref: &str) -> Option<(String, String)> {
        self.blobs
            .get(payload_ref)
            .map(|b| (b.original_name.clone(), b.media_type.clone()))
    }
}

#[async_trait]
impl FileTransport for MemoryFileTransport {
    async fn upload(
        &self,
        original_name: &str,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(CourseworkError::transport("文件传输服务不可用"));
        }

        let payload_ref = format!("{}-{}", chrono::Utc::now().timestamp(), Uuid::new_v4());
        debug!(
            "Received {} bytes for {} as {}",
            bytes.len(),
            original_name,
            payload_ref
        );
        self.blobs.insert(
            payload_ref.clone(),
            StoredBlob {
                original_name: original_name.to_string(),
                media_type: media_type.to_string(),
                bytes,
            },
        );
        Ok(payload_ref)
    }
}
