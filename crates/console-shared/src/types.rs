//! Common types

use uuid::Uuid;

pub type EntityId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}
