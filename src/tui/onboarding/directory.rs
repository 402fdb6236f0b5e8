//! Hardcoded instance directory: one representative instance per size.

use super::types::{InstanceRecord, InstanceSize};

static SMALL_INSTANCE: InstanceRecord = InstanceRecord {
    name: "tiny.zone",
    owner: "@minifox",
    count: 23,
};

static LARGE_INSTANCE: InstanceRecord = InstanceRecord {
    name: "glowy.space",
    owner: "@glowyote",
    count: 1234,
};

/// Instances known per language, shown on the size step
pub const INSTANCES_PER_LANGUAGE: u32 = 34;

/// Accounts across those instances
pub const ACCOUNTS_PER_LANGUAGE: u32 = 43567;

/// The instance recommended for a size category
pub fn lookup(size: InstanceSize) -> &'static InstanceRecord {
    match size {
        InstanceSize::Small => &SMALL_INSTANCE,
        InstanceSize::Large => &LARGE_INSTANCE,
    }
}
