pub mod create;
pub mod detail;
pub mod status;

use crate::errors::Result;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::SubmissionView;
use crate::services::ServiceContext;

pub use status::{resolve, resolve_assignment_state};

pub struct SubmissionService {
    context: ServiceContext,
}

impl SubmissionService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub(crate) fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// 创建提交（草稿或正式提交）
    pub async fn create_submission(
        &self,
        submitter_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<SubmissionView> {
        create::create_submission(self, submitter_id, req).await
    }

    /// 将草稿正式提交
    pub async fn send_draft(&self, submitter_id: i64, submission_id: i64) -> Result<SubmissionView> {
        create::send_draft(self, submitter_id, submission_id).await
    }

    /// 获取提交详情
    pub async fn get_submission(&self, submission_id: i64) -> Result<SubmissionView> {
        detail::get_submission(self, submission_id).await
    }

    /// 列出作业下的提交
    pub async fn list_submissions(&self, assignment_id: i64) -> Result<Vec<SubmissionView>> {
        detail::list_submissions(self, assignment_id).await
    }
}
