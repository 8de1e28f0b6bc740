use tracing::info;

use super::GradeService;
use super::validate::{apply_grade, parse_score};
use crate::errors::{CourseworkError, Result};
use crate::models::grades::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::SubmissionView;
use crate::services::submissions::detail::view_of;

pub async fn grade_submission(
    service: &GradeService,
    submission_id: i64,
    grader_id: i64,
    req: GradeSubmissionRequest,
) -> Result<SubmissionView> {
    let ctx = service.context();
    let submission = ctx.load_submission(submission_id).await?;

    if !submission.is_sent() {
        return Err(CourseworkError::not_submitted(format!(
            "提交 {submission_id} 仍是草稿，无法评分"
        )));
    }

    let score = req.score.as_ref().map(parse_score).transpose()?;
    let graded = apply_grade(&submission, score, req.comment, grader_id, ctx.now())?;

    let assignment = ctx.load_assignment(submission.assignment_id).await?;
    let saved = ctx.storage.update_submission(graded).await?;

    // 重新评分不保留历史，只在日志中留下被替换的分数
    match (&submission.grade, &saved.grade) {
        (Some(previous), Some(current)) => info!(
            "Submission {} regraded by user {}: {} -> {}",
            submission_id, grader_id, previous.score, current.score
        ),
        (None, Some(current)) => info!(
            "Submission {} graded by user {}: {}",
            submission_id, grader_id, current.score
        ),
        _ => {}
    }

    Ok(view_of(saved, &assignment, ctx.config.grading.passing_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::GradeBand;
    use crate::models::submissions::entities::SubmissionStatus;
    use crate::models::submissions::requests::CreateSubmissionRequest;
    use crate::services::assignments::create::tests::request;
    use crate::services::submissions::status::tests::at;
    use crate::services::testing::{Harness, TEACHER_ID};
    use crate::services::{AssignmentService, SubmissionService};
    use serde_json::json;

    async fn setup(draft: bool) -> (Harness, GradeService, i64) {
        let harness = Harness::new(at("2025-03-01T08:00:00Z"));
        harness.enroll_student(20, "Ana");
        let hw = AssignmentService::new(harness.context.clone())
            .create_assignment(TEACHER_ID, request("Fractions", "2025-03-10T23:59:00Z"))
            .await
            .unwrap();
        let view = SubmissionService::new(harness.context.clone())
            .create_submission(
                20,
                CreateSubmissionRequest {
                    assignment_id: hw.id,
                    text_response: Some("3/4".to_string()),
                    attachments: Default::default(),
                    draft,
                },
            )
            .await
            .unwrap();
        let service = GradeService::new(harness.context.clone());
        (harness, service, view.submission.id)
    }

    fn score(value: serde_json::Value) -> GradeSubmissionRequest {
        GradeSubmissionRequest {
            score: Some(value),
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_grade_and_regrade() {
        let (harness, service, submission_id) = setup(false).await;

        let view = service
            .grade_submission(submission_id, TEACHER_ID, score(json!("65")))
            .await
            .unwrap();
        assert_eq!(view.status, SubmissionStatus::Graded);
        assert_eq!(view.band, Some(GradeBand::NeedsImprovement));

        harness.clock.set(at("2025-03-12T08:00:00Z"));
        let view = service
            .grade_submission(submission_id, TEACHER_ID, score(json!(88)))
            .await
            .unwrap();
        let grade = view.submission.grade.unwrap();
        assert_eq!(grade.score, 88.0);
        assert_eq!(grade.graded_at, at("2025-03-12T08:00:00Z"));
        assert_eq!(view.band, Some(GradeBand::Approved));
    }

    #[tokio::test]
    async fn test_invalid_scores_do_not_persist() {
        let (harness, service, submission_id) = setup(false).await;

        for (value, code) in [(json!(-1), "E002"), (json!(101), "E002"), (json!("abc"), "E003")] {
            let err = service
                .grade_submission(submission_id, TEACHER_ID, score(value))
                .await
                .unwrap_err();
            assert_eq!(err.code(), code);
        }
        let err = service
            .grade_submission(submission_id, TEACHER_ID, GradeSubmissionRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E003");

        let stored = harness
            .storage
            .get_submission_by_id_impl(submission_id)
            .unwrap()
            .unwrap();
        assert!(stored.grade.is_none());
    }

    #[tokio::test]
    async fn test_draft_cannot_be_graded() {
        let (_harness, service, submission_id) = setup(true).await;
        let err = service
            .grade_submission(submission_id, TEACHER_ID, score(json!(90)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E013");
    }
}
