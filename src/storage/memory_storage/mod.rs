//! 内存存储实现
//!
//! 基于 DashMap 的参考实现，同时充当名册协作方，供测试和嵌入方直接使用。

mod assignments;
mod events;
mod rosters;
mod submissions;
mod transport;

pub use transport::MemoryFileTransport;

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::{CourseworkError, Result};
use crate::models::{
    assignments::entities::Assignment, calendar::entities::CalendarEvent,
    participants::entities::Participant, submissions::entities::Submission,
};
use crate::storage::{RosterProvider, Storage};

/// 内存存储实现
pub struct MemoryStorage {
    pub(crate) assignments: DashMap<i64, Assignment>,
    pub(crate) submissions: DashMap<i64, Submission>,
    pub(crate) events: DashMap<i64, CalendarEvent>,
    pub(crate) rosters: DashMap<i64, Vec<Participant>>,
    next_id: AtomicI64,
    storage_available: AtomicBool,
    roster_available: AtomicBool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            assignments: DashMap::new(),
            submissions: DashMap::new(),
            events: DashMap::new(),
            rosters: DashMap::new(),
            next_id: AtomicI64::new(1),
            storage_available: AtomicBool::new(true),
            roster_available: AtomicBool::new(true),
        }
    }

    pub(crate) fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// 模拟持久化故障
    pub fn set_storage_available(&self, available: bool) {
        self.storage_available.store(available, Ordering::Relaxed);
    }

    /// 模拟名册服务故障
    pub fn set_roster_available(&self, available: bool) {
        self.roster_available.store(available, Ordering::Relaxed);
    }

    pub(crate) fn ensure_storage_available(&self) -> Result<()> {
        if self.storage_available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(CourseworkError::persistence("存储服务不可用"))
        }
    }

    pub(crate) fn ensure_roster_available(&self) -> Result<()> {
        if self.roster_available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(CourseworkError::roster_unavailable("名册服务不可用"))
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // 作业模块
    async fn create_assignment(&self, assignment: Assignment) -> Result<Assignment> {
        self.create_assignment_impl(assignment)
    }

    async fn update_assignment(&self, assignment: Assignment) -> Result<Assignment> {
        self.update_assignment_impl(assignment)
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id)
    }

    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_course_assignments_impl(course_id)
    }

    // 提交模块
    async fn create_submission(&self, submission: Submission) -> Result<Submission> {
        self.create_submission_impl(submission)
    }

    async fn update_submission(&self, submission: Submission) -> Result<Submission> {
        self.update_submission_impl(submission)
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id)
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id)
    }

    // 日历模块
    async fn create_event(&self, event: CalendarEvent) -> Result<CalendarEvent> {
        self.create_event_impl(event)
    }

    async fn list_course_events(&self, course_id: i64) -> Result<Vec<CalendarEvent>> {
        self.list_course_events_impl(course_id)
    }
}

#[async_trait]
impl RosterProvider for MemoryStorage {
    async fn roster(&self, course_id: i64) -> Result<Vec<Participant>> {
        self.roster_impl(course_id)
    }
}
