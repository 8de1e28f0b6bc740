//! 附件集合
//!
//! 作业与提交共用的附件容器。文件和链接放在同一个有序集合里，
//! 所有校验都在修改之前完成，失败时集合保持不变。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::policy::AttachmentPolicy;
use crate::errors::{CourseworkError, Result};
use crate::utils::{media_type_allowed, non_blank, normalize_media_type};

/// 文件附件（内容由传输协作方保存，这里只记录引用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct FileAttachment {
    // 传输协作方返回的内容引用
    pub payload_ref: String,
    // 原始文件名
    pub original_name: String,
    // 声明的 MIME 类型（已规范化）
    pub media_type: String,
    // 文件大小（字节）
    pub size: u64,
}

/// 外部链接附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct LinkAttachment {
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub enum AttachmentItem {
    File(FileAttachment),
    Link(LinkAttachment),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct AttachmentSet {
    #[serde(default)]
    items: Vec<AttachmentItem>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[AttachmentItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileAttachment> {
        self.items.iter().filter_map(|item| match item {
            AttachmentItem::File(file) => Some(file),
            AttachmentItem::Link(_) => None,
        })
    }

    pub fn links(&self) -> impl Iterator<Item = &LinkAttachment> {
        self.items.iter().filter_map(|item| match item {
            AttachmentItem::Link(link) => Some(link),
            AttachmentItem::File(_) => None,
        })
    }

    /// 检查是否还能再添加一个附件
    fn ensure_capacity(&self, policy: &AttachmentPolicy) -> Result<()> {
        match policy.max_items {
            Some(max) if self.items.len() >= max => Err(CourseworkError::max_items_exceeded(
                format!("附件数量已达上限 ({max})"),
            )),
            _ => Ok(()),
        }
    }

    /// 在上传之前校验文件元数据，不修改集合
    ///
    /// 返回规范化后的 MIME 类型。
    pub fn check_file(
        &self,
        policy: &AttachmentPolicy,
        original_name: &str,
        media_type: &str,
        size: u64,
    ) -> Result<String> {
        self.ensure_capacity(policy)?;

        let normalized = normalize_media_type(media_type)
            .filter(|t| media_type_allowed(t, &policy.allowed_types))
            .ok_or_else(|| {
                CourseworkError::unsupported_type(format!(
                    "不支持的文件类型: {original_name} ({media_type})"
                ))
            })?;

        if size > policy.max_file_size as u64 {
            return Err(CourseworkError::file_too_large(format!(
                "文件 {original_name} 超过大小限制 ({size} > {} 字节)",
                policy.max_file_size
            )));
        }

        Ok(normalized)
    }

    /// 添加文件附件
    pub fn add_file(&mut self, policy: &AttachmentPolicy, file: FileAttachment) -> Result<()> {
        let media_type =
            self.check_file(policy, &file.original_name, &file.media_type, file.size)?;
        self.items.push(AttachmentItem::File(FileAttachment {
            media_type,
            ..file
        }));
        Ok(())
    }

    /// 添加链接附件，只校验 URL 非空
    pub fn add_link(
        &mut self,
        policy: &AttachmentPolicy,
        url: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CourseworkError::empty_url("链接地址不能为空"));
        }
        self.ensure_capacity(policy)?;

        self.items.push(AttachmentItem::Link(LinkAttachment {
            url: url.to_string(),
            name: non_blank(name),
            description: non_blank(description),
        }));
        Ok(())
    }

    /// 按位置移除附件，越界时不做任何修改
    pub fn remove(&mut self, index: usize) -> Option<AttachmentItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            tracing::debug!(
                "Ignoring attachment removal at {} (set holds {})",
                index,
                self.items.len()
            );
            None
        }
    }

    /// 整体校验从外部收到的附件集合
    pub fn validate(&self, policy: &AttachmentPolicy) -> Result<()> {
        if let Some(max) = policy.max_items
            && self.items.len() > max
        {
            return Err(CourseworkError::max_items_exceeded(format!(
                "附件数量超过上限 ({} > {max})",
                self.items.len()
            )));
        }

        for item in &self.items {
            match item {
                AttachmentItem::File(file) => {
                    let accepted = normalize_media_type(&file.media_type)
                        .is_some_and(|t| media_type_allowed(&t, &policy.allowed_types));
                    if !accepted {
                        return Err(CourseworkError::unsupported_type(format!(
                            "不支持的文件类型: {} ({})",
                            file.original_name, file.media_type
                        )));
                    }
                    if file.size > policy.max_file_size as u64 {
                        return Err(CourseworkError::file_too_large(format!(
                            "文件 {} 超过大小限制",
                            file.original_name
                        )));
                    }
                }
                AttachmentItem::Link(link) => {
                    if link.url.trim().is_empty() {
                        return Err(CourseworkError::empty_url("链接地址不能为空"));
                    }
                }
            }
        }

        Ok(())
    }

    /// 编辑作业时保留原有链接（按 URL 去重），原链接排在新附件之前
    pub fn carry_links_from(&mut self, previous: &AttachmentSet) {
        let carried: Vec<AttachmentItem> = previous
            .links()
            .filter(|old| !self.links().any(|new| new.url == old.url))
            .cloned()
            .map(AttachmentItem::Link)
            .collect();

        if !carried.is_empty() {
            let incoming = std::mem::replace(&mut self.items, carried);
            self.items.extend(incoming);
        }
    }
}
