use tracing::info;

use super::AssignmentService;
use super::targeting::validate_targeting;
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::attachments::policy::AttachmentContext;
use crate::utils::validate_title;

pub async fn create_assignment(
    service: &AssignmentService,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let ctx = service.context();

    // 所有校验在持久化之前完成
    let title = validate_title(&req.title).map_err(CourseworkError::invalid_title)?;
    let targeting = validate_targeting(req.targeting_mode, &req.selected_participant_ids)?;
    req.attachments
        .validate(&ctx.attachment_policy(AttachmentContext::Assignment))?;

    let status = if req.publish {
        AssignmentStatus::Published
    } else {
        AssignmentStatus::Draft
    };

    let now = ctx.now();
    let assignment = Assignment {
        id: 0,
        course_id: req.course_id,
        module_id: req.module_id,
        title,
        description: req.description,
        criteria: req.criteria,
        delivery_type: req.delivery_type,
        deadline: req.deadline,
        targeting,
        attachments: req.attachments,
        status,
        closed_at: None,
        created_by,
        created_at: now,
        updated_at: now,
    };

    let created = ctx.storage.create_assignment(assignment).await?;
    info!(
        "Assignment {} created in course {} by user {} ({:?}, {:?})",
        created.id,
        created.course_id,
        created_by,
        created.status,
        created.targeting.mode()
    );

    Ok(created)
}
