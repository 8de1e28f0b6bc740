//! 作业存储操作

use tracing::debug;

use super::MemoryStorage;
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::Assignment;

impl MemoryStorage {
    /// 保存新作业，ID 为 0 时自动分配
    pub(crate) fn create_assignment_impl(&self, mut assignment: Assignment) -> Result<Assignment> {
        self.ensure_storage_available()?;

        if assignment.id == 0 {
            assignment.id = self.next_id();
        }
        self.assignments.insert(assignment.id, assignment.clone());
        debug!("Stored assignment {}", assignment.id);

        Ok(assignment)
    }

    pub(crate) fn update_assignment_impl(&self, assignment: Assignment) -> Result<Assignment> {
        self.ensure_storage_available()?;

        match self.assignments.get_mut(&assignment.id) {
            Some(mut entry) => {
                *entry = assignment.clone();
                Ok(assignment)
            }
            None => Err(CourseworkError::not_found(format!(
                "作业不存在: {}",
                assignment.id
            ))),
        }
    }

    pub(crate) fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.ensure_storage_available()?;
        Ok(self.assignments.get(&assignment_id).map(|a| a.value().clone()))
    }

    pub(crate) fn list_course_assignments_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.ensure_storage_available()?;

        let mut items: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .map(|a| a.value().clone())
            .collect();
        items.sort_by_key(|a| a.id);
        Ok(items)
    }
}
