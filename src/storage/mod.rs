//! 外部协作方接口
//!
//! 持久化、名册和文件传输都由宿主应用提供，这里只定义契约。
//! 协作方返回的错误原样向调用方传播，不做重试。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    assignments::entities::Assignment, calendar::entities::CalendarEvent,
    submissions::entities::Submission,
};

pub mod memory_storage;
pub mod roster;
pub mod transport;

pub use memory_storage::{MemoryFileTransport, MemoryStorage};
pub use roster::RosterProvider;
pub use transport::FileTransport;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 保存新作业，返回带 ID 的作业
    async fn create_assignment(&self, assignment: Assignment) -> Result<Assignment>;
    // 整体更新作业
    async fn update_assignment(&self, assignment: Assignment) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出课程下的作业（按 ID 升序）
    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<Assignment>>;

    /// 提交管理方法
    // 保存新提交
    async fn create_submission(&self, submission: Submission) -> Result<Submission>;
    // 整体更新提交（评分写入也走这里，后写覆盖先写）
    async fn update_submission(&self, submission: Submission) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 列出作业下的所有提交（按 ID 升序）
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;

    /// 日历事件方法
    async fn create_event(&self, event: CalendarEvent) -> Result<CalendarEvent>;
    // 列出课程下的事件（按 ID 升序）
    async fn list_course_events(&self, course_id: i64) -> Result<Vec<CalendarEvent>>;
}

pub fn create_memory_storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}
