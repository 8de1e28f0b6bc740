use tracing::{debug, info};

use super::AssignmentService;
use super::targeting::validate_targeting;
use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentStatus, Targeting};
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::attachments::policy::AttachmentContext;
use crate::utils::validate_title;

pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Assignment> {
    let ctx = service.context();
    let existing = ctx.load_assignment(assignment_id).await?;
    let now = ctx.now();

    let mut updated = existing.clone();

    if let Some(title) = req.title {
        updated.title = validate_title(&title).map_err(CourseworkError::invalid_title)?;
    }
    if let Some(description) = req.description {
        updated.description = description;
    }
    if let Some(criteria) = req.criteria {
        updated.criteria = criteria;
    }
    if let Some(delivery_type) = req.delivery_type {
        updated.delivery_type = delivery_type;
    }
    if let Some(deadline) = req.deadline {
        updated.deadline = deadline;
    }

    // 只改成员列表时沿用原来的指派方式
    if req.targeting_mode.is_some() || req.selected_participant_ids.is_some() {
        let mode = req.targeting_mode.unwrap_or_else(|| existing.targeting.mode());
        let ids = req.selected_participant_ids.unwrap_or_else(|| match &existing.targeting {
            Targeting::All => Vec::new(),
            Targeting::Selected { participant_ids } => participant_ids.iter().copied().collect(),
        });
        updated.targeting = validate_targeting(mode, &ids)?;
    }

    // 附件整体替换
    if let Some(mut attachments) = req.attachments {
        if req.keep_existing_links {
            attachments.carry_links_from(&existing.attachments);
        }
        attachments.validate(&ctx.attachment_policy(AttachmentContext::Assignment))?;
        updated.attachments = attachments;
    }

    if let Some(publish) = req.publish {
        updated.status = if publish {
            AssignmentStatus::Published
        } else {
            AssignmentStatus::Draft
        };
    }

    match req.close {
        Some(true) if updated.closed_at.is_none() => updated.closed_at = Some(now),
        Some(false) => updated.closed_at = None,
        _ => {}
    }

    if updated == existing {
        debug!("Assignment {} update carried no changes", assignment_id);
        return Ok(existing);
    }

    updated.updated_at = now;
    let saved = ctx.storage.update_assignment(updated).await?;

    if saved.is_closed() != existing.is_closed() {
        info!(
            "Assignment {} {}",
            assignment_id,
            if saved.is_closed() { "closed" } else { "reopened" }
        );
    }
    if saved.status != existing.status {
        info!("Assignment {} status changed to {:?}", assignment_id, saved.status);
    }
    info!("Assignment {} updated", assignment_id);

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::TargetingMode;
    use crate::models::attachments::entities::AttachmentSet;
    use crate::models::attachments::policy::AttachmentPolicy;
    use crate::services::assignments::create::tests::request;
    use crate::services::submissions::status::tests::at;
    use crate::services::testing::{Harness, TEACHER_ID};
    use chrono::Duration;

    fn link_set(urls: &[&str]) -> AttachmentSet {
        let policy = AttachmentPolicy {
            max_items: None,
            max_file_size: 1024,
            allowed_types: vec![],
            verify_content: false,
        };
        let mut set = AttachmentSet::new();
        for url in urls {
            set.add_link(&policy, url, None, None).unwrap();
        }
        set
    }

    async fn setup() -> (Harness, AssignmentService, Assignment) {
        let harness = Harness::new(at("2025-03-01T08:00:00Z"));
        let service = AssignmentService::new(harness.context.clone());
        let mut req = request("Fractions", "2025-03-10T23:59:00Z");
        req.attachments = link_set(&["https://a.example", "https://b.example"]);
        let created = service.create_assignment(TEACHER_ID, req).await.unwrap();
        (harness, service, created)
    }

    #[tokio::test]
    async fn test_partial_update_and_close() {
        let (harness, service, created) = setup().await;
        harness.clock.advance(Duration::hours(1));

        let updated = service
            .update_assignment(
                created.id,
                UpdateAssignmentRequest {
                    title: Some("Fractions II".to_string()),
                    close: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Fractions II");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.closed_at, Some(at("2025-03-01T09:00:00Z")));
        assert_eq!(updated.updated_at, at("2025-03-01T09:00:00Z"));

        let reopened = service
            .update_assignment(
                created.id,
                UpdateAssignmentRequest {
                    close: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!reopened.is_closed());
    }

    #[tokio::test]
    async fn test_replace_attachments_keeping_links() {
        let (_harness, service, created) = setup().await;

        let updated = service
            .update_assignment(
                created.id,
                UpdateAssignmentRequest {
                    attachments: Some(link_set(&["https://b.example", "https://c.example"])),
                    keep_existing_links: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let urls: Vec<&str> = updated.attachments.links().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );

        let replaced = service
            .update_assignment(
                created.id,
                UpdateAssignmentRequest {
                    attachments: Some(AttachmentSet::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(replaced.attachments.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_assignment_untouched() {
        let (harness, service, created) = setup().await;

        let err = service
            .update_assignment(
                created.id,
                UpdateAssignmentRequest {
                    title: Some("New title".to_string()),
                    targeting_mode: Some(TargetingMode::Selected),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");

        let stored = harness
            .storage
            .get_assignment_by_id_impl(created.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_update_missing_assignment() {
        let (_harness, service, _) = setup().await;
        let err = service
            .update_assignment(999, UpdateAssignmentRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E104");
    }
}
