use near_sdk::AccountId;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value};

/// One NEP-297 log line. Every emitted event carries a single data entry.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event<'a> {
    pub(crate) standard: &'static str,
    pub(crate) version: &'static str,
    pub(crate) event: &'static str,
    pub(crate) data: [EventData<'a>; 1],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData<'a> {
    pub(crate) operation: &'static str,
    pub(crate) author: &'a AccountId,
    #[serde(flatten)]
    pub(crate) fields: &'a Map<String, Value>,
}
