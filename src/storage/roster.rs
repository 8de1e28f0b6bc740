use crate::errors::Result;
use crate::models::participants::entities::Participant;

/// 课程名册协作方
///
/// 每次调用都应返回当前名册；指派解析依赖这一点。
#[async_trait::async_trait]
pub trait RosterProvider: Send + Sync {
    async fn roster(&self, course_id: i64) -> Result<Vec<Participant>>;
}
