use tracing::{info, warn};

use super::SubmissionService;
use super::detail::view_of;
use super::status::resolve_assignment_state;
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::attachments::policy::AttachmentContext;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::SubmissionView;
use crate::services::ServiceContext;
use crate::services::assignments::detail::obligors_from_roster;
use crate::utils::non_blank;

/// 检查作业是否接受该成员的提交
async fn ensure_accepts(
    ctx: &ServiceContext,
    assignment: &Assignment,
    submitter_id: i64,
) -> Result<()> {
    match resolve_assignment_state(assignment, ctx.now()) {
        AssignmentState::Draft => {
            return Err(CourseworkError::assignment_not_published(format!(
                "作业 {} 尚未发布",
                assignment.id
            )));
        }
        AssignmentState::Closed => {
            return Err(CourseworkError::assignment_closed(format!(
                "作业 {} 已关闭",
                assignment.id
            )));
        }
        AssignmentState::Open | AssignmentState::Overdue => {}
    }

    let participants = ctx.roster.roster(assignment.course_id).await?;
    if !obligors_from_roster(assignment, &participants).contains(&submitter_id) {
        warn!(
            "User {} is not assigned to assignment {}",
            submitter_id, assignment.id
        );
        return Err(CourseworkError::not_an_obligor(format!(
            "用户 {submitter_id} 不需要完成该作业"
        )));
    }

    Ok(())
}

pub async fn create_submission(
    service: &SubmissionService,
    submitter_id: i64,
    req: CreateSubmissionRequest,
) -> Result<SubmissionView> {
    let ctx = service.context();
    let assignment = ctx.load_assignment(req.assignment_id).await?;

    ensure_accepts(ctx, &assignment, submitter_id).await?;
    req.attachments
        .validate(&ctx.attachment_policy(AttachmentContext::Submission))?;

    let created_at = if req.draft { None } else { Some(ctx.now()) };
    let submission = Submission {
        id: 0,
        assignment_id: assignment.id,
        submitter_id,
        created_at,
        text_response: non_blank(req.text_response),
        attachments: req.attachments,
        grade: None,
    };

    let saved = ctx.storage.create_submission(submission).await?;
    let view = view_of(saved, &assignment, ctx.config.grading.passing_score);
    info!(
        "User {} created submission {} for assignment {} ({:?})",
        submitter_id, view.submission.id, assignment.id, view.status
    );

    Ok(view)
}

pub async fn send_draft(
    service: &SubmissionService,
    submitter_id: i64,
    submission_id: i64,
) -> Result<SubmissionView> {
    let ctx = service.context();
    let submission = ctx.load_submission(submission_id).await?;

    if submission.submitter_id != submitter_id {
        return Err(CourseworkError::not_found(format!(
            "提交不存在: {submission_id}"
        )));
    }

    let assignment = ctx.load_assignment(submission.assignment_id).await?;
    let passing_score = ctx.config.grading.passing_score;

    // 已提交的记录保持原提交时间
    if submission.is_sent() {
        return Ok(view_of(submission, &assignment, passing_score));
    }

    ensure_accepts(ctx, &assignment, submitter_id).await?;

    let saved = ctx
        .storage
        .update_submission(Submission {
            created_at: Some(ctx.now()),
            ..submission
        })
        .await?;
    let view = view_of(saved, &assignment, passing_score);
    info!(
        "User {} sent draft {} ({:?})",
        submitter_id, submission_id, view.status
    );

    Ok(view)
}
