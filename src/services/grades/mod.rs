pub mod grade;
pub mod validate;

use crate::errors::Result;
use crate::models::grades::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::SubmissionView;
use crate::services::ServiceContext;

pub use validate::{apply_grade, grade_band, parse_score, validate_score};

pub struct GradeService {
    context: ServiceContext,
}

impl GradeService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub(crate) fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// 为已提交的作业评分（重新评分会覆盖原成绩）
    pub async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<SubmissionView> {
        grade::grade_submission(self, submission_id, grader_id, req).await
    }
}
