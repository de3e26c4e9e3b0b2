// Well-known wire command types — must match schedule-list client expectations.

pub const SCHEDULE_LIST_FETCH: &str = "schedule_list/fetch";
pub const SCHEDULE_LIST_UPDATE: &str = "schedule_list/update";

// Broadcast events
pub const EVENT_SCHEDULE_LIST_UPDATED: &str = "schedule_list_updated";
pub const EVENT_TICK: &str = "tick";

// Error codes carried in error responses
pub const ERR_ITEM_NOT_FOUND: &str = "item_not_found";
pub const ERR_INVALID_FORMAT: &str = "invalid_format";
