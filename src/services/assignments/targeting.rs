//! 作业指派解析
//!
//! `All` 不保存成员列表，每次按当前名册解析；`Selected` 与当前名册取交集，
//! 已离开课程的成员自然不再计入。

use std::collections::BTreeSet;

use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::{Targeting, TargetingMode};
use crate::models::participants::entities::Participant;

/// 由表单输入构造指派对象
///
/// `All` 忽略传入的成员 ID；`Selected` 至少需要一个成员。
pub fn validate_targeting(mode: TargetingMode, selected_ids: &[i64]) -> Result<Targeting> {
    match mode {
        TargetingMode::All => Ok(Targeting::All),
        TargetingMode::Selected => {
            let participant_ids: BTreeSet<i64> = selected_ids.iter().copied().collect();
            if participant_ids.is_empty() {
                return Err(CourseworkError::empty_selection(
                    "指定成员模式下至少需要选择一名成员",
                ));
            }
            Ok(Targeting::Selected { participant_ids })
        }
    }
}

/// 解析需要完成作业的成员
pub fn resolve_obligors(targeting: &Targeting, roster: &BTreeSet<i64>) -> BTreeSet<i64> {
    match targeting {
        Targeting::All => roster.clone(),
        Targeting::Selected { participant_ids } => {
            participant_ids.intersection(roster).copied().collect()
        }
    }
}

/// 已被指定但不在当前名册中的成员
pub fn dropped_participants(targeting: &Targeting, roster: &BTreeSet<i64>) -> BTreeSet<i64> {
    match targeting {
        Targeting::All => BTreeSet::new(),
        Targeting::Selected { participant_ids } => {
            participant_ids.difference(roster).copied().collect()
        }
    }
}

/// 名册中需要完成作业的成员（不含教师）
pub fn learner_ids(participants: &[Participant]) -> BTreeSet<i64> {
    participants
        .iter()
        .filter(|p| p.role.is_learner())
        .map(|p| p.user_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::participants::entities::ParticipantRole;

    fn roster(ids: &[i64]) -> BTreeSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_all_follows_current_roster() {
        let targeting = validate_targeting(TargetingMode::All, &[99]).unwrap();
        assert_eq!(targeting, Targeting::All);

        assert_eq!(
            resolve_obligors(&targeting, &roster(&[1, 2, 3])),
            roster(&[1, 2, 3])
        );
        // 新成员加入后自动成为义务人
        assert_eq!(
            resolve_obligors(&targeting, &roster(&[1, 2, 3, 4])),
            roster(&[1, 2, 3, 4])
        );
    }

    #[test]
    fn test_selected_intersects_roster() {
        let targeting = validate_targeting(TargetingMode::Selected, &[2, 4, 4]).unwrap();
        assert_eq!(
            resolve_obligors(&targeting, &roster(&[1, 2, 3])),
            roster(&[2])
        );
        assert_eq!(
            dropped_participants(&targeting, &roster(&[1, 2, 3])),
            roster(&[4])
        );
        assert!(dropped_participants(&Targeting::All, &roster(&[1])).is_empty());
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = validate_targeting(TargetingMode::Selected, &[]).unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(err.is_validation());
    }

    #[test]
    fn test_learner_ids_excludes_teachers() {
        let participants = vec![
            Participant {
                user_id: 1,
                display_name: "Teacher".to_string(),
                role: ParticipantRole::Teacher,
            },
            Participant {
                user_id: 2,
                display_name: "Student".to_string(),
                role: ParticipantRole::Student,
            },
            Participant {
                user_id: 3,
                display_name: "Parent".to_string(),
                role: ParticipantRole::Parent,
            },
        ];
        assert_eq!(learner_ids(&participants), roster(&[2, 3]));
    }
}
