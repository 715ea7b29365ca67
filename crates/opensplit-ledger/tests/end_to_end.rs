//! End-to-end tests across the ledger and the engine.
//!
//! These exercise the full flow a caller sees: build a roster, record a
//! mix of equal and custom expenses, settle, and verify the resulting
//! balances, debts, and transaction plan — including how the book behaves
//! across renames and removals.

use std::collections::HashMap;

use opensplit_engine::{conservation, settlement_digest};
use opensplit_ledger::{Ledger, SplitSpec};
use opensplit_types::Participant;
use opensplit_types::money::EPSILON;

fn p(name: &str) -> Participant {
    Participant::from(name)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build the running example trip: four friends, three expenses.
fn weekend_trip() -> Ledger {
    let mut ledger = Ledger::new();
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        ledger.add_participant(name).unwrap();
    }

    // Alice fronts the hotel, split evenly across everyone.
    ledger
        .record_expense(
            &p("Alice"),
            200.0,
            "hotel",
            SplitSpec::Equal {
                among: vec![p("Alice"), p("Bob"), p("Carol"), p("Dave")],
            },
        )
        .unwrap();

    // Bob fronts dinner for himself and Carol.
    ledger
        .record_expense(
            &p("Bob"),
            60.0,
            "dinner",
            SplitSpec::Equal {
                among: vec![p("Bob"), p("Carol")],
            },
        )
        .unwrap();

    // Carol pays the museum tickets with uneven shares.
    let mut shares = HashMap::new();
    shares.insert(p("Alice"), 18.0);
    shares.insert(p("Dave"), 12.0);
    ledger
        .record_expense(&p("Carol"), 30.0, "museum", SplitSpec::Custom { shares })
        .unwrap();

    ledger
}

#[test]
fn full_trip_settles_correctly() {
    init_tracing();
    let ledger = weekend_trip();
    assert!((ledger.total_spent() - 290.0).abs() < 1e-9);

    let result = ledger.settle();

    // Hotel: everyone owes Alice 50. Dinner: Carol owes Bob 30.
    // Museum: Alice 18 and Dave 12 owe Carol.
    assert!((result.balance_of(&p("Alice")) - 132.0).abs() <= EPSILON);
    assert!((result.balance_of(&p("Bob")) - (-20.0)).abs() <= EPSILON);
    assert!((result.balance_of(&p("Carol")) - (-50.0)).abs() <= EPSILON);
    assert!((result.balance_of(&p("Dave")) - (-62.0)).abs() <= EPSILON);

    conservation::verify(&result).expect("trip settlement must satisfy every invariant");

    // Everyone ends up paying Alice; nobody needs more than one payment.
    assert_eq!(result.transactions.len(), 3);
    for tx in &result.transactions {
        assert_eq!(tx.to, p("Alice"));
    }
}

#[test]
fn original_debts_keep_pairwise_history() {
    let ledger = weekend_trip();
    let result = ledger.settle();

    // Carol owes Bob from dinner even though Bob nets negative overall —
    // the debt view and the plan view are independent.
    assert!(
        result
            .original_debts
            .iter()
            .any(|d| d.from == p("Carol") && d.to == p("Bob") && (d.amount - 30.0).abs() < 1e-9)
    );
    // Alice's museum share nets against Carol's hotel share.
    assert!(
        result
            .original_debts
            .iter()
            .any(|d| d.from == p("Carol") && d.to == p("Alice") && (d.amount - 32.0).abs() < 1e-9)
    );
}

#[test]
fn settling_twice_is_stable() {
    let ledger = weekend_trip();
    let first = ledger.settle();
    let second = ledger.settle();
    assert_eq!(first, second);
    assert_eq!(settlement_digest(&first), settlement_digest(&second));
}

#[test]
fn rename_preserves_settlement_shape() {
    let mut ledger = weekend_trip();
    let before = ledger.settle();

    ledger.rename_participant(&p("Dave"), "David").unwrap();
    let after = ledger.settle();

    assert_eq!(after.balance_of(&p("Dave")), 0.0);
    assert!((after.balance_of(&p("David")) - before.balance_of(&p("Dave"))).abs() < 1e-9);
    assert_eq!(after.transactions.len(), before.transactions.len());
    conservation::verify(&after).expect("rename must not break settlement");
}

#[test]
fn removal_drops_history_and_rebalances() {
    let mut ledger = weekend_trip();

    // Carol is in all three expenses.
    let dropped = ledger.remove_participant(&p("Carol")).unwrap();
    assert_eq!(dropped, 3);
    assert!(ledger.expenses().is_empty());

    let result = ledger.settle();
    assert_eq!(result.balances.len(), 3);
    for name in ["Alice", "Bob", "Dave"] {
        assert_eq!(result.balance_of(&p(name)), 0.0);
    }
    assert!(result.is_settled());
}

#[test]
fn book_survives_rejected_operations() {
    let mut ledger = weekend_trip();
    let before = ledger.settle();

    // Each of these must fail without touching the book.
    assert!(ledger.add_participant("Alice").is_err());
    assert!(
        ledger
            .record_expense(
                &p("Alice"),
                -3.0,
                "bogus",
                SplitSpec::Equal {
                    among: vec![p("Bob")],
                },
            )
            .is_err()
    );
    let mut shares = HashMap::new();
    shares.insert(p("Bob"), 1.0);
    assert!(
        ledger
            .record_expense(&p("Alice"), 99.0, "bogus", SplitSpec::Custom { shares })
            .is_err()
    );

    let after = ledger.settle();
    assert_eq!(settlement_digest(&before), settlement_digest(&after));
}

#[test]
fn summary_agrees_with_settlement() {
    let ledger = weekend_trip();
    let result = ledger.settle();
    for summary in ledger.summary() {
        let balance = result.balance_of(&summary.participant);
        assert!(
            (summary.net - balance).abs() <= EPSILON,
            "{}: net {} vs balance {}",
            summary.participant,
            summary.net,
            balance
        );
    }
}
