//! Fixture records used to seed a [`Manager`](crate::Manager) for
//! demonstrations and tests.

use crate::domain::{Category, NewRecord};

/// Title, description, author, category, priority, effort.
const SAMPLES: [(&str, &str, &str, Category, u8, u32); 5] = [
    (
        "User Authentication",
        "Implement secure login system",
        "Dev Team",
        Category::Feature,
        1,
        8,
    ),
    (
        "Dark Mode Theme",
        "Add dark theme option",
        "UX Team",
        Category::Enhancement,
        2,
        5,
    ),
    (
        "Payment Gateway",
        "Integrate payment processing",
        "Product Team",
        Category::Feature,
        1,
        13,
    ),
    (
        "Bug Fix: Login Error",
        "Fix login validation bug",
        "QA Team",
        Category::BugFix,
        1,
        3,
    ),
    (
        "Mobile App Redesign",
        "Complete mobile UI overhaul",
        "Design Team",
        Category::NewProduct,
        2,
        21,
    ),
];

/// The fixture records, in seeding order.
#[must_use]
pub fn sample_records() -> impl Iterator<Item = NewRecord> {
    SAMPLES
        .into_iter()
        .map(|(title, description, author, category, priority, effort)| {
            NewRecord::new(title, description, author, category)
                .with_priority(priority)
                .with_effort(effort)
        })
}
