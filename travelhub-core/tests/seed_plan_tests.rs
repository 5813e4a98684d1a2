// File: travelhub-core/tests/seed_plan_tests.rs

use travelhub_core::Error;
use travelhub_core::seed::plan::{self, SeedStep};

#[test]
fn execution_order_covers_all_steps() {
    let order = plan::execution_order().expect("built-in plan should be valid");
    assert_eq!(order.len(), plan::SEED_PLAN.len());
    assert_eq!(order.first(), Some(&plan::STEP_USERS));
    assert_eq!(order.last(), Some(&plan::STEP_ANALYTICS_EVENTS));
}

#[test]
fn every_dependency_runs_before_its_dependent() {
    let order = plan::execution_order().expect("built-in plan should be valid");
    for step in plan::SEED_PLAN {
        let pos = order.iter().position(|n| *n == step.name).expect("step in order");
        for dep in step.depends_on {
            let dep_pos = order.iter().position(|n| n == dep).expect("dependency in order");
            assert!(
                dep_pos < pos,
                "step '{}' runs before its dependency '{}'",
                step.name,
                dep
            );
        }
    }
}

#[test]
fn duplicate_step_names_are_rejected() {
    let bad = [
        SeedStep { name: "users", depends_on: &[] },
        SeedStep { name: "users", depends_on: &[] },
    ];
    assert!(matches!(plan::validate(&bad), Err(Error::Seed(_))));
}

#[test]
fn forward_dependencies_are_rejected() {
    let bad = [
        SeedStep { name: "bookings", depends_on: &["users"] },
        SeedStep { name: "users", depends_on: &[] },
    ];
    assert!(matches!(plan::validate(&bad), Err(Error::Seed(_))));
}

#[test]
fn unknown_dependencies_are_rejected() {
    let bad = [SeedStep { name: "bookings", depends_on: &["payments"] }];
    assert!(matches!(plan::validate(&bad), Err(Error::Seed(_))));
}
