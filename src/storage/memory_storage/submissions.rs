//! 提交存储操作

use tracing::debug;

use super::MemoryStorage;
use crate::errors::{CourseworkError, Result};
use crate::models::submissions::entities::Submission;

impl MemoryStorage {
    /// 保存新提交，ID 为 0 时自动分配
    pub(crate) fn create_submission_impl(&self, mut submission: Submission) -> Result<Submission> {
        self.ensure_storage_available()?;

        if submission.id == 0 {
            submission.id = self.next_id();
        }
        self.submissions.insert(submission.id, submission.clone());
        debug!(
            "Stored submission {} for assignment {}",
            submission.id, submission.assignment_id
        );

        Ok(submission)
    }

    /// 整体覆盖提交，后写覆盖先写
    pub(crate) fn update_submission_impl(&self, submission: Submission) -> Result<Submission> {
        self.ensure_storage_available()?;

        match self.submissions.get_mut(&submission.id) {
            Some(mut entry) => {
                *entry = submission.clone();
                Ok(submission)
            }
            None => Err(CourseworkError::not_found(format!(
                "提交不存在: {}",
                submission.id
            ))),
        }
    }

    pub(crate) fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.ensure_storage_available()?;
        Ok(self.submissions.get(&submission_id).map(|s| s.value().clone()))
    }

    pub(crate) fn list_assignment_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        self.ensure_storage_available()?;

        let mut items: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .map(|s| s.value().clone())
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }
}
