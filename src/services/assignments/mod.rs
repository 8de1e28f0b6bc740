pub mod create;
pub mod detail;
pub mod stats;
pub mod targeting;
pub mod update;

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::models::assignments::responses::{AssignmentDetail, AssignmentStatsResponse};
use crate::services::ServiceContext;

pub use targeting::{dropped_participants, learner_ids, resolve_obligors, validate_targeting};

pub struct AssignmentService {
    context: ServiceContext,
}

impl AssignmentService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub(crate) fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// 创建作业
    pub async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, created_by, req).await
    }

    /// 更新作业
    pub async fn update_assignment(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::update_assignment(self, assignment_id, req).await
    }

    /// 获取作业详情
    pub async fn get_assignment(&self, assignment_id: i64) -> Result<AssignmentDetail> {
        detail::get_assignment(self, assignment_id).await
    }

    /// 获取作业当前状态
    pub async fn assignment_state(&self, assignment_id: i64) -> Result<AssignmentState> {
        detail::assignment_state(self, assignment_id).await
    }

    /// 解析需要完成作业的成员
    pub async fn resolve_obligors(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<BTreeSet<i64>> {
        detail::resolve_obligors(self, course_id, assignment_id).await
    }

    /// 获取作业统计
    pub async fn assignment_stats(&self, assignment_id: i64) -> Result<AssignmentStatsResponse> {
        stats::assignment_stats(self, assignment_id).await
    }
}
