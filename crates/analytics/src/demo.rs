//! Sample traffic for local demos.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::store::SearchEventStore;
use crate::types::SearchEvent;

const DEMO_QUERIES: [&str; 10] = [
    "login form",
    "user profile",
    "dashboard",
    "search form",
    "contact form",
    "data table",
    "navigation menu",
    "checkout form",
    "settings page",
    "admin panel",
];

const RANDOM_EVENTS: usize = 100;
const RANDOM_SPREAD_DAYS: i64 = 7;

fn event(query: &str, components: &[&str], timestamp: DateTime<Utc>) -> SearchEvent {
    SearchEvent {
        id: Uuid::new_v4().to_string(),
        query: query.to_string(),
        components: components.iter().map(|c| c.to_string()).collect(),
        timestamp,
        user_agent: None,
    }
}

/// Append three fixed recent events followed by 100 random ones spread over
/// the past week. Returns the number of events appended.
pub fn seed_demo<R: Rng>(
    store: &dyn SearchEventStore,
    now: DateTime<Utc>,
    rng: &mut R,
) -> usize {
    let fixed = [
        event(
            "login form",
            &["EmailInput", "PasswordInput", "Checkbox", "SubmitButton"],
            now - Duration::days(1),
        ),
        event(
            "user profile",
            &["Avatar", "Input", "EmailInput", "Button"],
            now - Duration::hours(1),
        ),
        event(
            "dashboard",
            &["ContentCard", "Banner", "Table", "Progress"],
            now - Duration::minutes(30),
        ),
    ];
    let mut appended = 0;
    for e in fixed {
        store.append(e);
        appended += 1;
    }

    let spread_ms = Duration::days(RANDOM_SPREAD_DAYS).num_milliseconds();
    for _ in 0..RANDOM_EVENTS {
        let query = DEMO_QUERIES.choose(rng).copied().unwrap_or("dashboard");
        let age = Duration::milliseconds(rng.gen_range(0..spread_ms));
        store.append(event(query, &["Input", "Button"], now - age));
        appended += 1;
    }

    tracing::info!(events = appended, "Seeded demo search analytics");
    appended
}
