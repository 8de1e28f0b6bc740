//! 课程名册操作

use tracing::debug;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::participants::entities::Participant;

impl MemoryStorage {
    /// 加入课程，同一用户重复加入时覆盖原记录
    pub fn enroll(&self, course_id: i64, participant: Participant) {
        let mut roster = self.rosters.entry(course_id).or_default();
        roster.retain(|p| p.user_id != participant.user_id);
        debug!("User {} joined course {}", participant.user_id, course_id);
        roster.push(participant);
    }

    /// 移出课程，返回是否确实移除了成员
    pub fn withdraw(&self, course_id: i64, user_id: i64) -> bool {
        match self.rosters.get_mut(&course_id) {
            Some(mut roster) => {
                let before = roster.len();
                roster.retain(|p| p.user_id != user_id);
                before != roster.len()
            }
            None => false,
        }
    }

    pub(crate) fn roster_impl(&self, course_id: i64) -> Result<Vec<Participant>> {
        self.ensure_roster_available()?;
        Ok(self
            .rosters
            .get(&course_id)
            .map(|r| r.value().clone())
            .unwrap_or_default())
    }
}
