//! Sample dataset for the demo runner and the integration tests.
//!
//! Coordinates are Riyadh-area points matching the fixed geo scale factors.

use crate::{
    cctv::{Camera, CameraStatus},
    dispatch::{Availability, Technician},
    geo::GeoPoint,
    hr::{Applicant, ApplicantStatus, BiometricPull, Employee, LeaveRequest, LeaveStatus},
    reception::{FuelLog, Installment, InstallationJob},
    store::DeskStore,
    telesales::Lead,
    warehouse::{StockItem, TechStock},
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

/// The inspection-technician roster with field coordinates.
pub fn sample_roster() -> Vec<Technician> {
    vec![
        Technician {
            id: "T-01".into(),
            name: "Eng. Ahmed".into(),
            availability: Availability::Available,
            location: GeoPoint::new(24.773, 46.72),
        },
        Technician {
            id: "T-02".into(),
            name: "Eng. Khalid".into(),
            availability: Availability::Available,
            location: GeoPoint::new(24.71, 46.68),
        },
        Technician {
            id: "T-03".into(),
            name: "Eng. Rawan".into(),
            availability: Availability::Busy,
            location: GeoPoint::new(24.80, 46.66),
        },
        Technician {
            id: "T-04".into(),
            name: "Eng. Salim".into(),
            availability: Availability::Offline,
            location: GeoPoint::new(24.69, 46.64),
        },
    ]
}

/// A store pre-loaded with the demo dataset across every department.
pub fn sample_store() -> DeskStore {
    let mut store = DeskStore::new();

    // Telesales inbox.
    store.add_lead(Lead {
        id: "TM-1001".into(),
        name: "Ahmed Abdullah".into(),
        phone: "0501234567".into(),
        address: "Al Rawdah district, street 12".into(),
        requested_time: "13:00".into(),
        location: GeoPoint::new(24.774265, 46.738586),
        note: Some("RO filter losing flow".into()),
    });
    store.add_lead(Lead {
        id: "TM-1002".into(),
        name: "Sarah Alshammari".into(),
        phone: "0559876543".into(),
        address: "Al Olaya, near the hospital".into(),
        requested_time: "16:30".into(),
        location: GeoPoint::new(24.699, 46.685),
        note: Some("wants inspection plus solar heater offers".into()),
    });
    store.add_lead(Lead {
        id: "TM-1003".into(),
        name: "Mazen Turki".into(),
        phone: "0532221188".into(),
        address: "Al Yasmin, junction 15".into(),
        requested_time: "11:15".into(),
        location: GeoPoint::new(24.832, 46.646),
        note: Some("routine maintenance".into()),
    });

    // Warehouse main stock.
    store.insert_stock_item(StockItem {
        sku: "FL-10-RO".into(),
        name: "10\" RO filter".into(),
        category: "filters".into(),
        barcode: "100001".into(),
        bin: "A1".into(),
        unit_price: 45.0,
        min_qty: 10,
        qty: 22,
    });
    store.insert_stock_item(StockItem {
        sku: "TK-RO-4G".into(),
        name: "RO tank 4G".into(),
        category: "tanks".into(),
        barcode: "100045".into(),
        bin: "B3".into(),
        unit_price: 160.0,
        min_qty: 5,
        qty: 6,
    });
    store.insert_stock_item(StockItem {
        sku: "PM-CARB".into(),
        name: "carbon cartridge".into(),
        category: "consumables".into(),
        barcode: "100077".into(),
        bin: "C2".into(),
        unit_price: 18.0,
        min_qty: 30,
        qty: 28,
    });
    store.insert_stock_item(StockItem {
        sku: "PMP-RO".into(),
        name: "RO pump".into(),
        category: "pumps".into(),
        barcode: "100099".into(),
        bin: "D1".into(),
        unit_price: 280.0,
        min_qty: 3,
        qty: 4,
    });

    // Van stock on hand.
    store.insert_tech_stock(TechStock {
        technician_id: "T-01".into(),
        items: [("FL-10-RO".to_string(), 3), ("TK-RO-4G".to_string(), 1), ("PM-CARB".to_string(), 6)]
            .into_iter()
            .collect(),
    });
    store.insert_tech_stock(TechStock {
        technician_id: "T-02".into(),
        items: [
            ("FL-10-RO".to_string(), 2),
            ("TK-RO-4G".to_string(), 2),
            ("PM-CARB".to_string(), 4),
            ("PMP-RO".to_string(), 1),
        ]
        .into_iter()
        .collect(),
    });
    store.insert_tech_stock(TechStock {
        technician_id: "T-03".into(),
        items: [("FL-10-RO".to_string(), 4), ("PM-CARB".to_string(), 8)]
            .into_iter()
            .collect(),
    });

    // Reception: installments, installations, fuel.
    store.insert_installment(Installment {
        id: "INS-1001".into(),
        customer: "Khalid Alshammari".into(),
        product: "RO filter, 6 stages".into(),
        start: date(2025, 6, 15),
        end: date(2026, 6, 15),
        monthly_amount: 180.0,
        paid_months: 4,
        total_months: 12,
    });
    store.insert_installment(Installment {
        id: "INS-1002".into(),
        customer: "Noura Aldossari".into(),
        product: "solar heater 200L".into(),
        start: date(2025, 8, 1),
        end: date(2026, 8, 1),
        monthly_amount: 320.0,
        paid_months: 2,
        total_months: 12,
    });
    store.insert_installment(Installment {
        id: "INS-1003".into(),
        customer: "Abu Yazid".into(),
        product: "industrial jumbo unit".into(),
        start: date(2025, 4, 10),
        end: date(2026, 4, 10),
        monthly_amount: 550.0,
        paid_months: 6,
        total_months: 12,
    });
    store.insert_installation(InstallationJob {
        id: "JOB-3001".into(),
        date: date(2025, 10, 20),
        customer: "Umm Mohammed".into(),
        address: "Al Narjis, street 12".into(),
        device: "solar heater 200L".into(),
        technician_name: "Eng. Salim".into(),
    });
    store.insert_installation(InstallationJob {
        id: "JOB-3002".into(),
        date: date(2025, 10, 22),
        customer: "Abu Walid".into(),
        address: "Al Rawabi, opposite Al Salam mosque".into(),
        device: "RO filter, 5 stages".into(),
        technician_name: "Eng. Khalid".into(),
    });
    store.insert_fuel_log(FuelLog {
        technician_name: "Eng. Khalid".into(),
        date: date(2025, 10, 29),
        liters: 9.8,
        distance_km: 74.0,
        routes: vec![
            "HQ -> Al Rawdah".into(),
            "Al Rawdah -> Al Narjis".into(),
            "Al Narjis -> HQ".into(),
        ],
    });
    store.insert_fuel_log(FuelLog {
        technician_name: "Eng. Salim".into(),
        date: date(2025, 10, 29),
        liters: 12.4,
        distance_km: 96.0,
        routes: vec![
            "HQ -> Al Olaya".into(),
            "Al Olaya -> Al Yasmin".into(),
            "Al Yasmin -> HQ".into(),
        ],
    });

    // HR.
    store.insert_applicant(Applicant {
        id: "A-201".into(),
        name: "Fahad Alrashid".into(),
        role: "maintenance technician".into(),
        phone: "0501122334".into(),
        status: ApplicantStatus::New,
        interview: None,
    });
    store.insert_applicant(Applicant {
        id: "A-202".into(),
        name: "Layan Almutairi".into(),
        role: "inspection engineer".into(),
        phone: "0556677889".into(),
        status: ApplicantStatus::Review,
        interview: Some("tomorrow 16:00".into()),
    });
    store.insert_applicant(Applicant {
        id: "A-203".into(),
        name: "Salem Alamri".into(),
        role: "reception clerk".into(),
        phone: "0539988776".into(),
        status: ApplicantStatus::New,
        interview: None,
    });
    store.insert_employee(Employee {
        id: "E-901".into(),
        name: "Ahmed Alsalem".into(),
        role: "technician".into(),
        area: "Al Naseem".into(),
        active: true,
    });
    store.insert_employee(Employee {
        id: "E-902".into(),
        name: "Noura Alharbi".into(),
        role: "inspection engineer".into(),
        area: "Al Olaya".into(),
        active: false,
    });
    store.insert_employee(Employee {
        id: "E-903".into(),
        name: "Haifa Alsubaie".into(),
        role: "reception".into(),
        area: "HQ".into(),
        active: true,
    });
    store.insert_biometric_pull(BiometricPull {
        id: "BM-1001".into(),
        employee_name: "Ahmed Alsalem".into(),
        date: date(2025, 10, 29),
        clock_in: Some("08:03".into()),
        clock_out: None,
        device: "reader-gate1".into(),
    });
    store.insert_biometric_pull(BiometricPull {
        id: "BM-1002".into(),
        employee_name: "Haifa Alsubaie".into(),
        date: date(2025, 10, 29),
        clock_in: Some("08:58".into()),
        clock_out: None,
        device: "reader-gate1".into(),
    });
    store.insert_biometric_pull(BiometricPull {
        id: "BM-1003".into(),
        employee_name: "Noura Alharbi".into(),
        date: date(2025, 10, 29),
        clock_in: None,
        clock_out: None,
        device: "on-leave".into(),
    });
    store.insert_leave_request(LeaveRequest {
        id: "LV-8001".into(),
        employee_name: "Haifa Alsubaie".into(),
        leave_type: "annual".into(),
        from: date(2025, 11, 10),
        to: date(2025, 11, 14),
        status: LeaveStatus::PendingHr,
    });
    store.insert_leave_request(LeaveRequest {
        id: "LV-8002".into(),
        employee_name: "Eng. Khalid".into(),
        leave_type: "emergency".into(),
        from: date(2025, 11, 2),
        to: date(2025, 11, 3),
        status: LeaveStatus::PendingHr,
    });

    // CCTV wall.
    let cameras = [
        ("C-01", "main entrance", "reception", CameraStatus::Online),
        ("C-02", "warehouse corridor", "warehouse", CameraStatus::Online),
        ("C-03", "rear exits", "yard", CameraStatus::Offline),
        ("C-04", "maintenance workshop", "workshop", CameraStatus::Online),
        ("C-05", "car park", "outside", CameraStatus::Online),
    ];
    for (id, name, area, status) in cameras {
        store.insert_camera(Camera {
            id: id.into(),
            name: name.into(),
            area: area.into(),
            status,
        });
    }

    store
}
