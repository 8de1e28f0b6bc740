use super::SubmissionService;
use super::status::resolve;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::SubmissionView;
use crate::services::grades::validate::grade_band;

/// 组装带推导状态的提交视图
pub(crate) fn view_of(
    submission: Submission,
    assignment: &Assignment,
    passing_score: f64,
) -> SubmissionView {
    let status = resolve(&submission, assignment);
    let band = submission
        .grade
        .as_ref()
        .map(|g| grade_band(g.score, passing_score));

    SubmissionView {
        submission,
        status,
        band,
    }
}

pub async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
) -> Result<SubmissionView> {
    let ctx = service.context();
    let submission = ctx.load_submission(submission_id).await?;
    let assignment = ctx.load_assignment(submission.assignment_id).await?;

    Ok(view_of(
        submission,
        &assignment,
        ctx.config.grading.passing_score,
    ))
}

pub async fn list_submissions(
    service: &SubmissionService,
    assignment_id: i64,
) -> Result<Vec<SubmissionView>> {
    let ctx = service.context();
    let (assignment, submissions) = futures_util::try_join!(
        ctx.load_assignment(assignment_id),
        ctx.storage.list_assignment_submissions(assignment_id)
    )?;

    let passing_score = ctx.config.grading.passing_score;
    Ok(submissions
        .into_iter()
        .map(|s| view_of(s, &assignment, passing_score))
        .collect())
}
