use std::collections::BTreeSet;

use tracing::warn;

use super::AssignmentService;
use super::targeting::{dropped_participants, learner_ids, resolve_obligors as resolve};
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::assignments::responses::AssignmentDetail;
use crate::models::participants::entities::Participant;
use crate::services::submissions::status::resolve_assignment_state;

pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<AssignmentDetail> {
    let ctx = service.context();
    let assignment = ctx.load_assignment(assignment_id).await?;
    let state = resolve_assignment_state(&assignment, ctx.now());

    Ok(AssignmentDetail { assignment, state })
}

pub async fn assignment_state(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<AssignmentState> {
    let ctx = service.context();
    let assignment = ctx.load_assignment(assignment_id).await?;
    Ok(resolve_assignment_state(&assignment, ctx.now()))
}

/// 名册和作业并发获取
pub async fn resolve_obligors(
    service: &AssignmentService,
    course_id: i64,
    assignment_id: i64,
) -> Result<BTreeSet<i64>> {
    let ctx = service.context();
    let (assignment, participants) = futures_util::try_join!(
        ctx.load_assignment(assignment_id),
        ctx.roster.roster(course_id)
    )?;

    if assignment.course_id != course_id {
        return Err(CourseworkError::not_found(format!(
            "课程 {course_id} 下不存在作业 {assignment_id}"
        )));
    }

    Ok(obligors_from_roster(&assignment, &participants))
}

/// 按当前名册解析义务人，并记录已离开课程的指定成员
pub(crate) fn obligors_from_roster(
    assignment: &Assignment,
    participants: &[Participant],
) -> BTreeSet<i64> {
    let roster = learner_ids(participants);

    let dropped = dropped_participants(&assignment.targeting, &roster);
    if !dropped.is_empty() {
        warn!(
            "Assignment {} targets participants no longer in course {}: {:?}",
            assignment.id, assignment.course_id, dropped
        );
    }

    resolve(&assignment.targeting, &roster)
}
