use serde::{Deserialize, Serialize};

/// One condition/value pair inside a rule-group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePair {
    pub cval: String,
    pub nval: String,
}

/// Per-schedule document: an ordered list of rule-groups plus the entity
/// ids the schedule drives.
///
/// The store and the transport treat the contents as opaque — rule pairs
/// are carried and persisted verbatim, never interpreted or executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub schedule: Vec<Vec<RulePair>>,
    pub entities: Vec<String>,
}
