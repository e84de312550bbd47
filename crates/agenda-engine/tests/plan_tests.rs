//! Tests for day-plan assembly: ordering, dedup, lunch marker, day-off.

use agenda_engine::{
    build_day_plan, Appointment, AppointmentStatus, Directive, Schedule, TimeOfDay,
};

fn appt(id: i64, start: &str, end: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        status,
        client: None,
        services: Vec::new(),
        notes: None,
    }
}

fn confirmed(id: i64, start: &str, end: &str) -> Appointment {
    appt(id, start, end, AppointmentStatus::Confirmed)
}

fn schedule(start: &str, end: &str) -> Schedule {
    Schedule {
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        ..Schedule::default()
    }
}

fn at(hours: u16, minutes: u16) -> TimeOfDay {
    TimeOfDay::from_minutes(hours * 60 + minutes)
}

fn booked_ids(plan: &agenda_engine::RenderPlan) -> Vec<i64> {
    plan.entries
        .iter()
        .filter_map(|entry| match entry {
            Directive::Booked { appointment, .. } => Some(appointment.id),
            _ => None,
        })
        .collect()
}

#[test]
fn one_hour_day_with_a_short_appointment() {
    // 08:00–09:00 window, one confirmed 23-minute appointment. The grid
    // yields 08:00..=09:00; the odd end leaves a 7-minute fit-in at 08:23.
    let sched = schedule("08:00", "09:00");
    let appointments = vec![confirmed(1, "08:00:00", "08:23:00")];

    let plan = build_day_plan(&sched, &appointments);

    assert!(!plan.day_off);
    assert_eq!(plan.entries.len(), 6);
    assert!(matches!(
        &plan.entries[0],
        Directive::Booked { time, appointment } if *time == at(8, 0) && appointment.id == 1
    ));
    assert_eq!(plan.entries[1], Directive::Available { time: at(8, 15) });
    assert_eq!(
        plan.entries[2],
        Directive::FitInAvailable {
            start: at(8, 23),
            end: at(8, 30),
            duration_minutes: 7,
        }
    );
    assert_eq!(plan.entries[3], Directive::Available { time: at(8, 30) });
    assert_eq!(plan.entries[4], Directive::Available { time: at(8, 45) });
    assert_eq!(plan.entries[5], Directive::Available { time: at(9, 0) });
}

#[test]
fn day_off_short_circuits_everything() {
    let sched = Schedule {
        is_day_off: true,
        ..schedule("08:00", "18:00")
    };
    let appointments = vec![confirmed(1, "09:00:00", "10:00:00")];

    let plan = build_day_plan(&sched, &appointments);

    assert!(plan.day_off);
    assert!(plan.entries.is_empty());
}

#[test]
fn no_appointments_means_every_slot_is_available() {
    let plan = build_day_plan(&schedule("09:00", "10:00"), &[]);

    assert_eq!(plan.entries.len(), 5);
    assert!(plan
        .entries
        .iter()
        .all(|entry| matches!(entry, Directive::Available { .. })));
}

#[test]
fn spanning_appointment_renders_exactly_once() {
    // 08:20–09:10 covers several grid instants and leaves a fit-in at 09:10;
    // only the injected 08:20 start entry may carry the booked card.
    let sched = schedule("08:00", "10:00");
    let appointments = vec![confirmed(7, "08:20:00", "09:10:00")];

    let plan = build_day_plan(&sched, &appointments);

    assert_eq!(booked_ids(&plan), vec![7]);
    assert!(plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::Booked { time, .. } if *time == at(8, 20))));
    // The covered grid instants stay offered.
    assert!(plan.entries.contains(&Directive::Available { time: at(8, 30) }));
    assert!(plan.entries.contains(&Directive::Available { time: at(9, 0) }));
    // The appointment's own odd end is offered as a fit-in.
    assert!(plan.entries.contains(&Directive::FitInAvailable {
        start: at(9, 10),
        end: at(9, 15),
        duration_minutes: 5,
    }));
}

#[test]
fn lunch_marker_appears_once_at_the_transition() {
    let sched = Schedule {
        lunch_start_time: Some("12:00".to_string()),
        lunch_end_time: Some("13:00".to_string()),
        ..schedule("08:00", "18:00")
    };

    let plan = build_day_plan(&sched, &[]);

    let markers: Vec<usize> = plan
        .entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| matches!(e, Directive::LunchBreak { .. }).then_some(i))
        .collect();
    assert_eq!(markers.len(), 1);

    let idx = markers[0];
    assert_eq!(
        plan.entries[idx],
        Directive::LunchBreak {
            start: at(12, 0),
            end: at(13, 0),
        }
    );
    // Sits between the last morning slot and the first afternoon slot.
    assert_eq!(plan.entries[idx - 1], Directive::Available { time: at(11, 45) });
    assert_eq!(plan.entries[idx + 1], Directive::Available { time: at(13, 0) });
}

#[test]
fn no_lunch_marker_without_a_valid_lunch() {
    let sched = Schedule {
        lunch_start_time: Some("12:00".to_string()),
        lunch_end_time: Some("12:00".to_string()),
        ..schedule("08:00", "18:00")
    };

    let plan = build_day_plan(&sched, &[]);
    assert!(!plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::LunchBreak { .. })));
}

#[test]
fn irregular_start_is_never_dropped() {
    // 10:07 matches no grid instant and no fit-in; an entry is injected so
    // the appointment still appears in the plan.
    let sched = schedule("08:00", "11:00");
    let appointments = vec![appt(3, "10:07:00", "10:30:00", AppointmentStatus::Pending)];

    let plan = build_day_plan(&sched, &appointments);

    assert!(plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::Booked { time, appointment } if *time == at(10, 7) && appointment.id == 3)));
    assert_eq!(booked_ids(&plan), vec![3]);
}

#[test]
fn free_block_occupies_grid_slots_without_creating_fit_ins() {
    // A manually created break at an odd start: not injected as a start
    // entry, but the first grid instant inside it renders the block.
    let sched = schedule("12:00", "13:00");
    let appointments = vec![appt(9, "12:07:00", "12:30:00", AppointmentStatus::Free)];

    let plan = build_day_plan(&sched, &appointments);

    assert!(plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::Booked { time, appointment } if *time == at(12, 15) && appointment.id == 9)));
    assert_eq!(booked_ids(&plan), vec![9]);
    assert!(!plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::FitInAvailable { .. })));
    // Instants before and after the block stay available.
    assert!(plan.entries.contains(&Directive::Available { time: at(12, 0) }));
    assert!(plan.entries.contains(&Directive::Available { time: at(12, 30) }));
}

#[test]
fn free_block_starting_on_the_grid_renders_at_its_start() {
    let sched = schedule("12:00", "13:00");
    let appointments = vec![appt(9, "12:00:00", "12:30:00", AppointmentStatus::Free)];

    let plan = build_day_plan(&sched, &appointments);

    assert!(plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::Booked { time, appointment } if *time == at(12, 0) && appointment.id == 9)));
    assert_eq!(booked_ids(&plan), vec![9]);
}

#[test]
fn unknown_status_occupies_like_any_other_appointment() {
    let json = r#"[{
        "id": 4,
        "start_time": "09:00:00",
        "end_time": "09:30:00",
        "status": "no_show",
        "client": {"id": 12, "name": "Ana"},
        "services": [{"service_id": 2, "service_name": "Corte", "quantity": 1, "price": 50.0}],
        "notes": "walk-in"
    }]"#;
    let appointments: Vec<Appointment> = serde_json::from_str(json).unwrap();
    assert_eq!(appointments[0].status, AppointmentStatus::Unknown);

    let plan = build_day_plan(&schedule("09:00", "10:00"), &appointments);
    assert_eq!(booked_ids(&plan), vec![4]);
}

#[test]
fn duplicate_ids_render_once_and_drop_the_second_entry() {
    // Inherited ambiguity: the rendered-id set treats the second occurrence
    // as already rendered, so its slot entry disappears from the plan.
    let sched = schedule("08:00", "10:00");
    let appointments = vec![
        confirmed(7, "08:00:00", "08:30:00"),
        confirmed(7, "09:00:00", "09:30:00"),
    ];

    let plan = build_day_plan(&sched, &appointments);

    assert_eq!(booked_ids(&plan), vec![7]);
    assert!(!plan
        .entries
        .iter()
        .any(|e| matches!(e, Directive::Available { time } if *time == at(9, 0))));
}

#[test]
fn appointment_missing_times_degrades_to_a_plain_grid() {
    let mut broken = confirmed(1, "08:00:00", "08:30:00");
    broken.start_time = None;
    broken.end_time = None;

    let plan = build_day_plan(&schedule("08:00", "09:00"), &[broken]);

    assert!(booked_ids(&plan).is_empty());
    assert_eq!(plan.entries.len(), 5);
}

#[test]
fn identical_inputs_produce_identical_plans() {
    let sched = Schedule {
        lunch_start_time: Some("12:00".to_string()),
        lunch_end_time: Some("13:00".to_string()),
        ..schedule("08:00", "18:00")
    };
    let appointments = vec![
        confirmed(1, "08:00:00", "08:23:00"),
        appt(2, "14:00:00", "14:40:00", AppointmentStatus::Free),
        confirmed(3, "15:07:00", "15:30:00"),
    ];

    let first = build_day_plan(&sched, &appointments);
    let second = build_day_plan(&sched, &appointments);
    assert_eq!(first, second);
}

#[test]
fn plan_serializes_with_tagged_directives() {
    let plan = build_day_plan(
        &schedule("08:00", "08:30"),
        &[confirmed(1, "08:00:00", "08:30:00")],
    );

    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains("\"day_off\":false"));
    assert!(json.contains("\"kind\":\"booked\""));
    assert!(json.contains("\"kind\":\"available\""));
    assert!(json.contains("\"time\":\"08:00\""));
}
