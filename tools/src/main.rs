//! desk-runner: headless walkthrough of a working day at the AquaDesk
//! back office, against the bundled sample dataset.
//!
//! Usage:
//!   desk-runner
//!   desk-runner --config desk.json

use anyhow::Result;
use aquadesk_core::{
    cctv, config::DeskConfig, hr, reception, seed, telesales, warehouse,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => DeskConfig::load(&w[1])?,
        None => {
            log::info!("no --config given, using built-in defaults");
            DeskConfig::default()
        }
    };

    println!("AquaDesk — desk-runner");
    println!("  shift: {} - {}", config.scheduled_start, config.scheduled_end);
    println!();

    let mut store = seed::sample_store();
    let roster = seed::sample_roster();

    // Telesales: forward the first inbox lead with a technician suggestion.
    let handoff = telesales::forward_lead_to_reception(&mut store, "TM-1001", &roster)?;
    println!("=== TELESALES ===");
    println!("  inbox left:   {}", store.lead_count());
    println!(
        "  forwarded:    {} -> {} ({} km)",
        handoff.lead_id, handoff.suggested_technician_name, handoff.distance_km
    );
    println!("  snapshot:     {}", serde_json::to_string(&handoff)?);

    // Reception: open a walk-in complaint ticket.
    let ticket = reception::open_ticket(
        &mut store,
        reception::TicketInput {
            customer_name: "Abu Fahad".into(),
            phone: "0544455667".into(),
            address: "Al Malqa, street 3".into(),
            kind: reception::TicketKind::Complaint,
            priority: reception::TicketPriority::High,
            description: "filter taste changed after last visit".into(),
            location: Some(aquadesk_core::geo::GeoPoint::new(24.76, 46.70)),
        },
        &roster,
    )?;
    let paid = reception::record_installment_payment(&mut store, "INS-1001")?;
    println!("=== RECEPTION ===");
    println!(
        "  ticket:       {} ({})",
        ticket.id,
        ticket
            .suggested_technician_name
            .as_deref()
            .unwrap_or("no suggestion")
    );
    println!("  INS-1001 now: {paid}/12 months paid");
    println!("  installs:     {} scheduled", store.installations().len());
    for log in store.fuel_logs() {
        println!(
            "  fuel:         {} {:.1} L/100km",
            log.technician_name,
            log.consumption_per_100km()
        );
    }

    // Warehouse: dispatch van stock and raise a reorder for low items.
    warehouse::deliver_to_technician(&mut store, "T-02", "100077", 5)?;
    let purchase = warehouse::create_purchase_request_from_low_stock(&mut store, &config)?;
    let status = warehouse::advance_purchase(&mut store, &purchase.id)?;
    println!("=== WAREHOUSE ===");
    println!("  low stock:    {} item(s)", store.low_stock().len());
    println!(
        "  'RO' search:  {} item(s)",
        store.search_stock("RO").len()
    );
    println!(
        "  purchase:     {} ({} line(s), now {})",
        purchase.id,
        purchase.lines.len(),
        status.as_str()
    );

    // HR: morning attendance against the configured shift start.
    let rows = hr::analyze_attendance(store.biometric_pulls(), &config)?;
    println!("=== HR ===");
    for row in &rows {
        println!(
            "  {:<16} in {:<6} late {:>3} min  {:?}",
            row.employee_name,
            row.first_in.as_deref().unwrap_or("-"),
            row.lateness_minutes,
            row.status
        );
    }

    // CCTV wall check.
    println!("=== CCTV ===");
    println!(
        "  online:       {}/{}",
        cctv::online_count(&store),
        store.cameras().len()
    );

    println!();
    println!("=== OPERATIONS LOG (newest first) ===");
    for entry in store.ops_log() {
        println!("  [{}] {}", entry.department, entry.event_type);
    }

    Ok(())
}
