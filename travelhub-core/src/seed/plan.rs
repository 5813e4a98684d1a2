// src/seed/plan.rs

//! Ordered insertion plan for the development fixtures.
//!
//! Later rows reference identifiers produced by earlier inserts, so the
//! plan is declared as a flat list in which every step's dependencies must
//! appear before it. The declaration is validated independently of any
//! database.

use crate::Error;

pub const STEP_USERS: &str = "users";
pub const STEP_OAUTH_ACCOUNTS: &str = "oauth_accounts";
pub const STEP_CHAT_SESSIONS: &str = "chat_sessions";
pub const STEP_CHAT_MESSAGES: &str = "chat_messages";
pub const STEP_SEARCH_CACHES: &str = "search_caches";
pub const STEP_BOOKINGS: &str = "bookings";
pub const STEP_TRAVEL_DETAILS: &str = "travel_details";
pub const STEP_BOOKING_ITEMS: &str = "booking_items";
pub const STEP_ANALYTICS_EVENTS: &str = "analytics_events";

pub struct SeedStep {
    pub name: &'static str,
    pub depends_on: &'static [&'static str],
}

/// Insertion order. Search caches and travel detail records have no foreign
/// keys; everything else hangs off users, chat sessions, or bookings.
pub const SEED_PLAN: &[SeedStep] = &[
    SeedStep { name: STEP_USERS, depends_on: &[] },
    SeedStep { name: STEP_OAUTH_ACCOUNTS, depends_on: &[STEP_USERS] },
    SeedStep { name: STEP_CHAT_SESSIONS, depends_on: &[STEP_USERS] },
    SeedStep { name: STEP_CHAT_MESSAGES, depends_on: &[STEP_CHAT_SESSIONS] },
    SeedStep { name: STEP_SEARCH_CACHES, depends_on: &[] },
    SeedStep { name: STEP_BOOKINGS, depends_on: &[STEP_USERS, STEP_CHAT_SESSIONS] },
    SeedStep { name: STEP_TRAVEL_DETAILS, depends_on: &[] },
    SeedStep { name: STEP_BOOKING_ITEMS, depends_on: &[STEP_BOOKINGS, STEP_TRAVEL_DETAILS] },
    SeedStep { name: STEP_ANALYTICS_EVENTS, depends_on: &[STEP_USERS] },
];

/// Check that step names are unique and that every dependency is declared
/// earlier in the list.
pub fn validate(plan: &[SeedStep]) -> Result<(), Error> {
    let mut seen: Vec<&str> = Vec::with_capacity(plan.len());
    for step in plan {
        if seen.contains(&step.name) {
            return Err(Error::Seed(format!("duplicate seed step '{}'", step.name)));
        }
        for dep in step.depends_on {
            if !seen.contains(dep) {
                return Err(Error::Seed(format!(
                    "seed step '{}' depends on '{}', which is not declared before it",
                    step.name, dep
                )));
            }
        }
        seen.push(step.name);
    }
    Ok(())
}

/// The validated execution order of the built-in plan.
pub fn execution_order() -> Result<Vec<&'static str>, Error> {
    validate(SEED_PLAN)?;
    Ok(SEED_PLAN.iter().map(|s| s.name).collect())
}
