pub mod stage;

use crate::errors::Result;
use crate::models::attachments::entities::AttachmentSet;
use crate::models::attachments::policy::AttachmentContext;
use crate::models::attachments::requests::{FileUpload, LinkRequest};
use crate::services::ServiceContext;

pub struct AttachmentService {
    context: ServiceContext,
}

impl AttachmentService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub(crate) fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// 校验并上传文件，成功后追加到附件集合
    pub async fn stage_file(
        &self,
        context: AttachmentContext,
        set: &mut AttachmentSet,
        upload: FileUpload,
    ) -> Result<()> {
        stage::stage_file(self, context, set, upload).await
    }

    /// 追加链接附件
    pub fn add_link(
        &self,
        context: AttachmentContext,
        set: &mut AttachmentSet,
        req: LinkRequest,
    ) -> Result<()> {
        stage::add_link(self, context, set, req)
    }
}
