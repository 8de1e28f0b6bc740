pub mod assignments;
pub mod attachments;
pub mod calendar;
pub mod grades;
pub mod submissions;

pub use assignments::AssignmentService;
pub use attachments::AttachmentService;
pub use calendar::CalendarService;
pub use grades::GradeService;
pub use submissions::SubmissionService;

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::config::AppConfig;
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::attachments::policy::{AttachmentContext, AttachmentPolicy};
use crate::models::submissions::entities::Submission;
use crate::runtime::Clock;
use crate::storage::{FileTransport, RosterProvider, Storage};

/// 服务共享的协作方句柄
///
/// 服务本身不持有可变状态，克隆开销只是几个 `Arc`。
#[derive(Clone)]
pub struct ServiceContext {
    pub storage: Arc<dyn Storage>,
    pub roster: Arc<dyn RosterProvider>,
    pub transport: Arc<dyn FileTransport>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<AppConfig>,
}

impl ServiceContext {
    pub fn new(
        storage: Arc<dyn Storage>,
        roster: Arc<dyn RosterProvider>,
        transport: Arc<dyn FileTransport>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            storage,
            roster,
            transport,
            clock,
            config: Arc::new(config),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn attachment_policy(&self, context: AttachmentContext) -> AttachmentPolicy {
        AttachmentPolicy::for_context(&self.config, context)
    }

    /// 日历时区，配置加载时已校验，这里兜底为 UTC
    pub fn calendar_offset(&self) -> FixedOffset {
        self.config
            .calendar_offset()
            .unwrap_or_else(|| Utc.fix())
    }

    pub(crate) async fn load_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        self.storage
            .get_assignment_by_id(assignment_id)
            .await?
            .ok_or_else(|| CourseworkError::not_found(format!("作业不存在: {assignment_id}")))
    }

    pub(crate) async fn load_submission(&self, submission_id: i64) -> Result<Submission> {
        self.storage
            .get_submission_by_id(submission_id)
            .await?
            .ok_or_else(|| CourseworkError::not_found(format!("提交不存在: {submission_id}")))
    }
}
