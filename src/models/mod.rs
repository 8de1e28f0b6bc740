pub mod assignments;
pub mod attachments;
pub mod calendar;
pub mod grades;
pub mod participants;
pub mod submissions;

pub use assignments::entities::{
    Assignment, AssignmentState, AssignmentStatus, DeliveryType, Targeting, TargetingMode,
};
pub use attachments::entities::{AttachmentItem, AttachmentSet, FileAttachment, LinkAttachment};
pub use attachments::policy::{AttachmentContext, AttachmentPolicy};
pub use calendar::entities::{
    CalendarEntry, CalendarEvent, DayCell, EntryKind, KindFilter, MonthKey,
};
pub use grades::entities::{Grade, GradeBand};
pub use participants::entities::{Participant, ParticipantRole};
pub use submissions::entities::{Submission, SubmissionStatus};
