use tracing::{debug, info, warn};

use super::AttachmentService;
use crate::errors::{CourseworkError, Result};
use crate::models::attachments::entities::{AttachmentSet, FileAttachment};
use crate::models::attachments::policy::AttachmentContext;
use crate::models::attachments::requests::{FileUpload, LinkRequest};
use crate::utils::matches_declared_type;

pub async fn stage_file(
    service: &AttachmentService,
    context: AttachmentContext,
    set: &mut AttachmentSet,
    upload: FileUpload,
) -> Result<()> {
    let ctx = service.context();
    let policy = ctx.attachment_policy(context);
    let size = upload.size();

    // 元数据校验必须在传输之前完成
    let media_type = set.check_file(&policy, &upload.original_name, &upload.media_type, size)?;

    // 校验文件头，防止伪造 MIME 类型
    if policy.verify_content && !matches_declared_type(&upload.bytes, &media_type) {
        warn!(
            "Rejected {} upload {}: content does not match {}",
            context, upload.original_name, media_type
        );
        return Err(CourseworkError::unsupported_type(format!(
            "文件内容与声明类型不匹配: {}",
            upload.original_name
        )));
    }

    let payload_ref = ctx
        .transport
        .upload(&upload.original_name, &media_type, upload.bytes)
        .await?;
    debug!("Transport accepted {} as {}", upload.original_name, payload_ref);

    set.add_file(
        &policy,
        FileAttachment {
            payload_ref,
            original_name: upload.original_name,
            media_type,
            size,
        },
    )?;

    info!(
        "Staged {} attachment ({} bytes), set now holds {}",
        context,
        size,
        set.count()
    );
    Ok(())
}

pub fn add_link(
    service: &AttachmentService,
    context: AttachmentContext,
    set: &mut AttachmentSet,
    req: LinkRequest,
) -> Result<()> {
    let policy = service.context().attachment_policy(context);
    set.add_link(&policy, &req.url, req.name, req.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submissions::status::tests::at;
    use crate::services::testing::Harness;

    fn pdf_upload(name: &str) -> FileUpload {
        FileUpload {
            original_name: name.to_string(),
            media_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.7\n%fake body".to_vec(),
        }
    }

    fn service() -> (Harness, AttachmentService) {
        let harness = Harness::new(at("2025-03-01T08:00:00Z"));
        let service = AttachmentService::new(harness.context.clone());
        (harness, service)
    }

    #[tokio::test]
    async fn test_stage_file_uploads_and_appends() {
        let (harness, service) = service();
        let mut set = AttachmentSet::new();

        service
            .stage_file(AttachmentContext::Submission, &mut set, pdf_upload("essay.pdf"))
            .await
            .unwrap();

        assert_eq!(set.count(), 1);
        let file = set.files().next().unwrap();
        assert_eq!(harness.transport.len(), 1);
        assert!(harness.transport.get(&file.payload_ref).is_some());
        assert_eq!(
            harness.transport.metadata(&file.payload_ref),
            Some(("essay.pdf".to_string(), "application/pdf".to_string()))
        );
    }

    #[tokio::test]
    async fn test_sixth_submission_file_never_reaches_transport() {
        let (harness, service) = service();
        let mut set = AttachmentSet::new();

        for i in 0..5 {
            service
                .stage_file(
                    AttachmentContext::Submission,
                    &mut set,
                    pdf_upload(&format!("part-{i}.pdf")),
                )
                .await
                .unwrap();
        }

        let err = service
            .stage_file(AttachmentContext::Submission, &mut set, pdf_upload("extra.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");
        assert_eq!(set.count(), 5);
        assert_eq!(harness.transport.len(), 5);
    }

    #[tokio::test]
    async fn test_oversized_file_rejected_before_upload() {
        let (harness, service) = service();
        let mut set = AttachmentSet::new();

        let mut bytes = b"%PDF-1.7\n".to_vec();
        bytes.resize(5 * 1024 * 1024 + 1, b' ');
        let upload = FileUpload {
            original_name: "scan.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            bytes,
        };

        let err = service
            .stage_file(AttachmentContext::Forum, &mut set, upload)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(set.is_empty());
        assert!(harness.transport.is_empty());
    }

    #[tokio::test]
    async fn test_spoofed_content_rejected() {
        let (harness, service) = service();
        let mut set = AttachmentSet::new();

        let upload = FileUpload {
            original_name: "photo.png".to_string(),
            media_type: "image/png".to_string(),
            bytes: b"MZ\x90\x00 definitely not a png".to_vec(),
        };

        let err = service
            .stage_file(AttachmentContext::Assignment, &mut set, upload)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(harness.transport.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_set_unchanged() {
        let (harness, service) = service();
        let mut set = AttachmentSet::new();
        harness.transport.set_available(false);

        let err = service
            .stage_file(AttachmentContext::Submission, &mut set, pdf_upload("essay.pdf"))
            .await
            .unwrap_err();
        assert!(err.is_collaborator());
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_link_rejects_blank_url() {
        let (_harness, service) = service();
        let mut set = AttachmentSet::new();

        let err = service
            .add_link(
                AttachmentContext::Assignment,
                &mut set,
                LinkRequest {
                    url: "   ".to_string(),
                    name: None,
                    description: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.code(), "E004");

        service
            .add_link(
                AttachmentContext::Assignment,
                &mut set,
                LinkRequest {
                    url: "https://example.org/rubric".to_string(),
                    name: Some("Rubric".to_string()),
                    description: None,
                },
            )
            .unwrap();
        assert_eq!(set.links().count(), 1);
    }
}
