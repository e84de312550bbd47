//! Benchmark for full day-plan assembly on a densely booked day.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use agenda_engine::{build_day_plan, Appointment, AppointmentStatus, Schedule};

fn dense_day() -> (Schedule, Vec<Appointment>) {
    let schedule = Schedule {
        start_time: Some("08:00".to_string()),
        end_time: Some("20:00".to_string()),
        lunch_start_time: Some("12:00".to_string()),
        lunch_end_time: Some("13:00".to_string()),
        is_day_off: false,
    };

    // Back-to-back 23-minute services every half hour: plenty of odd ends
    // for the fit-in detector to chew on.
    let appointments = (0..24)
        .map(|i| {
            let start = 8 * 60 + i * 30;
            let end = start + 23;
            Appointment {
                id: i64::from(i),
                start_time: Some(format!("{:02}:{:02}:00", start / 60, start % 60)),
                end_time: Some(format!("{:02}:{:02}:00", end / 60, end % 60)),
                status: AppointmentStatus::Confirmed,
                client: None,
                services: Vec::new(),
                notes: None,
            }
        })
        .collect();

    (schedule, appointments)
}

fn bench_day_plan(c: &mut Criterion) {
    let (schedule, appointments) = dense_day();

    c.bench_function("build_day_plan/dense_day", |b| {
        b.iter(|| build_day_plan(black_box(&schedule), black_box(&appointments)))
    });
}

criterion_group!(benches, bench_day_plan);
criterion_main!(benches);
