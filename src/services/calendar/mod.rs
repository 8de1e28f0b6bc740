pub mod aggregate;
pub mod digest;
pub mod grid;
pub mod stats;

use crate::errors::Result;
use crate::models::calendar::entities::{KindFilter, MonthKey};
use crate::models::calendar::responses::MonthDigest;
use crate::services::ServiceContext;

pub use aggregate::{derive_entries, filter_by_kind, group_by_day};
pub use grid::build_month_grid;
pub use stats::compute_statistics;

pub struct CalendarService {
    context: ServiceContext,
}

impl CalendarService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub(crate) fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// 获取课程某月的日历视图
    pub async fn month_digest(
        &self,
        course_id: i64,
        month: MonthKey,
        filter: KindFilter,
    ) -> Result<MonthDigest> {
        digest::month_digest(self, course_id, month, filter).await
    }

    /// 获取课程当月的日历视图
    pub async fn current_month_digest(
        &self,
        course_id: i64,
        filter: KindFilter,
    ) -> Result<MonthDigest> {
        digest::current_month_digest(self, course_id, filter).await
    }
}
