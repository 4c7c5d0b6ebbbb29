//! Reception desk tests: ticket intake, suggestions, and installment plans.

use aquadesk_core::{
    geo::GeoPoint,
    reception::{
        open_ticket, record_installment_payment, TicketInput, TicketKind, TicketPriority,
        TicketStatus,
    },
    seed, DeskError,
};

fn walk_in(name: &str, phone: &str) -> TicketInput {
    TicketInput {
        customer_name: name.into(),
        phone: phone.into(),
        address: "Al Malqa, street 3".into(),
        kind: TicketKind::Maintenance,
        priority: TicketPriority::Normal,
        description: "annual filter service".into(),
        location: None,
    }
}

/// A ticket with customer coordinates carries a nearest-technician
/// suggestion snapshot, distance rounded to one decimal.
#[test]
fn ticket_with_location_gets_a_suggestion() {
    let mut store = seed::sample_store();
    let roster = seed::sample_roster();

    let mut input = walk_in("Abu Fahad", "0544455667");
    input.location = Some(GeoPoint::new(24.774265, 46.738586));
    let ticket = open_ticket(&mut store, input, &roster).unwrap();

    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.suggested_technician_id.as_deref(), Some("T-01"));
    assert_eq!(ticket.distance_km, Some(1.8));
    assert_eq!(store.tickets()[0].id, ticket.id);
}

/// No coordinates, no suggestion; the ticket is still saved.
#[test]
fn ticket_without_location_has_no_suggestion() {
    let mut store = seed::sample_store();
    let roster = seed::sample_roster();

    let ticket = open_ticket(&mut store, walk_in("Umm Saad", "0577788899"), &roster).unwrap();
    assert!(ticket.suggested_technician_id.is_none());
    assert!(ticket.distance_km.is_none());
}

/// An empty roster degrades to no suggestion rather than refusing the
/// ticket: reception always records the visit request.
#[test]
fn empty_roster_degrades_to_no_suggestion() {
    let mut store = seed::sample_store();

    let mut input = walk_in("Abu Fahad", "0544455667");
    input.location = Some(GeoPoint::new(24.76, 46.70));
    let ticket = open_ticket(&mut store, input, &[]).unwrap();

    assert!(ticket.suggested_technician_id.is_none());
    assert_eq!(store.tickets().len(), 1);
}

/// Blank required fields are caught at the boundary; nothing is stored.
#[test]
fn blank_fields_fail_validation() {
    let mut store = seed::sample_store();
    let roster = seed::sample_roster();

    let err = open_ticket(&mut store, walk_in("  ", "0544455667"), &roster).unwrap_err();
    assert!(matches!(err, DeskError::Validation { ref field, .. } if field == "customer_name"));

    let err = open_ticket(&mut store, walk_in("Abu Fahad", ""), &roster).unwrap_err();
    assert!(matches!(err, DeskError::Validation { ref field, .. } if field == "phone"));

    assert!(store.tickets().is_empty());
}

/// Payments count up month by month and stop at the plan length.
#[test]
fn installment_payments_cap_at_plan_length() {
    let mut store = seed::sample_store();

    // INS-1001 starts at 4/12 paid.
    assert_eq!(record_installment_payment(&mut store, "INS-1001").unwrap(), 5);
    for expected in 6..=12 {
        assert_eq!(
            record_installment_payment(&mut store, "INS-1001").unwrap(),
            expected
        );
    }

    let plan = store.get_installment("INS-1001").unwrap();
    assert!(plan.is_settled());
    assert_eq!(plan.remaining_months(), 0);

    let err = record_installment_payment(&mut store, "INS-1001").unwrap_err();
    assert!(matches!(err, DeskError::InvalidTransition { .. }));
}

/// Unknown plan ids surface a typed error.
#[test]
fn unknown_installment_id_is_an_error() {
    let mut store = seed::sample_store();
    let err = record_installment_payment(&mut store, "INS-9999").unwrap_err();
    assert!(matches!(err, DeskError::InstallmentNotFound { .. }));
}

/// Ticket intake and payments both land in the operations log, newest first.
#[test]
fn reception_actions_reach_the_ops_log() {
    let mut store = seed::sample_store();
    let roster = seed::sample_roster();

    open_ticket(&mut store, walk_in("Abu Fahad", "0544455667"), &roster).unwrap();
    record_installment_payment(&mut store, "INS-1002").unwrap();

    let log = store.ops_log();
    assert_eq!(log[0].event_type, "installment_paid");
    assert_eq!(log[1].event_type, "ticket_opened");
    assert!(log.iter().all(|e| e.department == "reception"));
}
