//! 日历事件存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::calendar::entities::CalendarEvent;

impl MemoryStorage {
    pub(crate) fn create_event_impl(&self, mut event: CalendarEvent) -> Result<CalendarEvent> {
        self.ensure_storage_available()?;

        if event.id == 0 {
            event.id = self.next_id();
        }
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    pub(crate) fn list_course_events_impl(&self, course_id: i64) -> Result<Vec<CalendarEvent>> {
        self.ensure_storage_available()?;

        let mut items: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| e.course_id == course_id)
            .map(|e| e.value().clone())
            .collect();
        items.sort_by_key(|e| e.id);
        Ok(items)
    }
}
