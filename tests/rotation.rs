#![forbid(unsafe_code)]
use chrono::{NaiveDate, Weekday};
use rota::scheduler::{DayPlan, SlotGrid};
use rota::{
    generate_roster, validate_records, Constraint, Employee, EmployeeRecord, ErrorKind,
    GeneratorConfig, RosterError, RosterStrategy, Scheduler, ShiftSlot,
};

fn trio() -> Vec<Employee> {
    vec![
        Employee::new("A", "Development"),
        Employee::new("B", "Operations"),
        Employee::new("C", "DBA"),
    ]
}

fn names(people: &[Employee]) -> Vec<&str> {
    people.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn first_two_days_follow_rotation() {
    let roster = generate_roster(&trio(), "").unwrap();
    assert_eq!(roster.days.len(), 7);

    let day1 = &roster.days[0];
    assert_eq!(day1.label, "Day 1");
    assert!(day1.shifts.morning.is_empty());
    assert_eq!(names(&day1.shifts.afternoon), ["A"]);
    assert_eq!(names(&day1.shifts.evening), ["B"]);
    assert_eq!(names(&day1.shifts.night), ["C"]);
    assert!(day1.shifts.off.is_empty());

    let day2 = &roster.days[1];
    assert_eq!(day2.label, "Day 2");
    assert!(day2.shifts.morning.is_empty());
    assert!(day2.shifts.afternoon.is_empty());
    assert_eq!(names(&day2.shifts.evening), ["A"]);
    assert_eq!(names(&day2.shifts.night), ["B"]);
    assert_eq!(names(&day2.shifts.off), ["C"]);
}

#[test]
fn every_employee_once_per_day() {
    let staff: Vec<Employee> = (0..12)
        .map(|i| Employee::new(format!("emp{i}"), "Support"))
        .collect();
    let roster = generate_roster(&staff, "").unwrap();

    for day in &roster.days {
        assert_eq!(day.shifts.headcount(), staff.len());
        for e in &staff {
            let hits = day
                .shifts
                .iter()
                .filter(|(_, people)| people.iter().any(|p| p.name == e.name))
                .count();
            assert_eq!(hits, 1, "{} on {}", e.name, day.label);
        }
    }
}

#[test]
fn each_employee_cycles_through_all_slots() {
    let roster = generate_roster(&trio(), "").unwrap();
    let slots: Vec<ShiftSlot> = roster
        .shifts_for("B")
        .into_iter()
        .take(5)
        .map(|(_, s)| s)
        .collect();
    for slot in ShiftSlot::ALL {
        assert!(slots.contains(&slot), "missing {slot}");
    }
}

#[test]
fn regeneration_is_deterministic() {
    let a = generate_roster(&trio(), "").unwrap();
    let b = generate_roster(&trio(), "").unwrap();
    assert_eq!(a, b);
}

#[test]
fn within_slot_order_follows_input_order() {
    // positions 0 et 5 tombent toujours dans le même créneau
    let staff: Vec<Employee> = ["p0", "p1", "p2", "p3", "p4", "p5"]
        .into_iter()
        .map(|n| Employee::new(n, "Ops"))
        .collect();
    let roster = generate_roster(&staff, "").unwrap();
    assert_eq!(names(&roster.days[0].shifts.afternoon), ["p0", "p5"]);
}

#[test]
fn empty_input_yields_empty_days() {
    let roster = generate_roster(&[], "").unwrap();
    assert_eq!(roster.days.len(), 7);
    assert!(roster.is_empty());
    let labels: Vec<&str> = roster.labels().collect();
    assert_eq!(labels.first(), Some(&"Day 1"));
    assert_eq!(labels.last(), Some(&"Day 7"));
}

#[test]
fn duplicate_names_are_scheduled_independently() {
    let staff = vec![Employee::new("Sam", "Ops"), Employee::new("Sam", "DBA")];
    let roster = generate_roster(&staff, "").unwrap();
    let day1 = &roster.days[0];
    assert_eq!(names(&day1.shifts.afternoon), ["Sam"]);
    assert_eq!(names(&day1.shifts.evening), ["Sam"]);
}

#[test]
fn invalid_horizon_is_a_configuration_error() {
    let cfg = GeneratorConfig {
        horizon_days: -3,
        ..GeneratorConfig::default()
    };
    let err = Scheduler::new(cfg).generate(&trio(), "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.kind().as_str(), "configuration");

    let cfg = GeneratorConfig {
        cycle: Vec::new(),
        ..GeneratorConfig::default()
    };
    let err = Scheduler::new(cfg).generate(&trio(), "").unwrap_err();
    assert!(matches!(err, RosterError::Configuration(_)));
}

#[test]
fn custom_cycle_and_horizon() {
    let cfg = GeneratorConfig {
        horizon_days: 3,
        cycle: vec![ShiftSlot::Morning, ShiftSlot::Off],
        ..GeneratorConfig::default()
    };
    let roster = Scheduler::new(cfg).generate(&trio(), "").unwrap();
    assert_eq!(roster.days.len(), 3);
    // jour 1 : (1+0)%2=1 → Off, (1+1)%2=0 → Morning, (1+2)%2=1 → Off
    assert_eq!(names(&roster.days[0].shifts.off), ["A", "C"]);
    assert_eq!(names(&roster.days[0].shifts.morning), ["B"]);
}

#[test]
fn start_date_labels_days_by_date() {
    let start = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap(); // vendredi
    let roster = Scheduler::new(GeneratorConfig::starting_on(start))
        .generate(&trio(), "")
        .unwrap();
    assert_eq!(roster.days[0].label, "2025-10-24");
    assert_eq!(roster.days[0].weekday, Weekday::Fri);
    assert_eq!(roster.days[6].label, "2025-10-30");
    assert_eq!(roster.days[6].date, NaiveDate::from_ymd_opt(2025, 10, 30));
}

#[test]
fn records_missing_fields_are_reported_individually() {
    let records = vec![
        EmployeeRecord {
            name: Some("A".into()),
            role: Some("Dev".into()),
            ..Default::default()
        },
        EmployeeRecord {
            name: Some("B".into()),
            role: Some("   ".into()),
            ..Default::default()
        },
        EmployeeRecord::default(),
    ];
    let err = validate_records(&records).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let RosterError::Validation(list) = &err else {
        panic!("unexpected error: {err}");
    };
    let fields: Vec<(usize, &str)> = list.iter().map(|r| (r.index, r.field)).collect();
    assert_eq!(fields, [(1, "role"), (2, "name"), (2, "role")]);
    assert!(err.to_string().contains("record #1 is missing `role`"));
}

#[test]
fn scheduler_is_shareable_across_threads() {
    let scheduler = std::sync::Arc::new(Scheduler::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = scheduler.clone();
            std::thread::spawn(move || s.generate(&trio(), "").unwrap())
        })
        .collect();
    let first = generate_roster(&trio(), "").unwrap();
    for h in handles {
        assert_eq!(h.join().unwrap(), first);
    }
}

#[test]
fn slot_index_mapping() {
    let expected = ["Morning", "Afternoon", "Evening", "Night", "Off"];
    for (idx, name) in expected.iter().enumerate() {
        let slot = ShiftSlot::from_index(idx).unwrap();
        assert_eq!(slot.as_str(), *name);
        assert_eq!(name.parse::<ShiftSlot>().unwrap(), slot);
    }
    assert_eq!(ShiftSlot::from_index(5), None);
    assert_eq!(rota::scheduler::rotation_slot(&ShiftSlot::ALL, 1, 3), ShiftSlot::Off);
}

struct EveryoneOff;

impl RosterStrategy for EveryoneOff {
    fn name(&self) -> &'static str {
        "everyone-off"
    }

    fn plan(
        &self,
        employees: &[Employee],
        _constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> Result<SlotGrid, RosterError> {
        let days = (1..=config.horizon_days as usize)
            .map(|day| {
                let (date, weekday) = config.day_anchor(day);
                DayPlan {
                    day,
                    date,
                    weekday,
                    slots: vec![ShiftSlot::Off; employees.len()],
                }
            })
            .collect();
        Ok(SlotGrid { days })
    }
}

#[test]
fn strategy_is_pluggable() {
    let scheduler = Scheduler::default().with_strategy(EveryoneOff);
    let roster = scheduler.generate(&trio(), "").unwrap();
    assert_eq!(roster.days.len(), 7);
    assert!(roster.days.iter().all(|d| d.shifts.off.len() == 3));
    assert_eq!(roster.days[0].label, "Day 1");
}

struct OneSlotPerDay;

impl RosterStrategy for OneSlotPerDay {
    fn name(&self) -> &'static str {
        "one-slot"
    }

    fn plan(
        &self,
        _employees: &[Employee],
        _constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> Result<SlotGrid, RosterError> {
        let days = (1..=config.horizon_days as usize)
            .map(|day| {
                let (date, weekday) = config.day_anchor(day);
                DayPlan {
                    day,
                    date,
                    weekday,
                    slots: vec![ShiftSlot::Morning],
                }
            })
            .collect();
        Ok(SlotGrid { days })
    }
}

struct ShortHorizon;

impl RosterStrategy for ShortHorizon {
    fn name(&self) -> &'static str {
        "short"
    }

    fn plan(
        &self,
        employees: &[Employee],
        _constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> Result<SlotGrid, RosterError> {
        let (date, weekday) = config.day_anchor(1);
        Ok(SlotGrid {
            days: vec![DayPlan {
                day: 1,
                date,
                weekday,
                slots: vec![ShiftSlot::Off; employees.len()],
            }],
        })
    }
}

#[test]
fn malformed_strategy_grid_is_rejected() {
    let err = Scheduler::default()
        .with_strategy(OneSlotPerDay)
        .generate(&trio(), "")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("one-slot"), "{err}");

    let err = Scheduler::default()
        .with_strategy(ShortHorizon)
        .generate(&trio(), "")
        .unwrap_err();
    assert!(matches!(err, RosterError::Configuration(_)));
}

#[test]
fn day_zero_anchors_like_day_one() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.day_anchor(0), cfg.day_anchor(1));
    assert_eq!(cfg.day_anchor(0), (None, Weekday::Mon));

    let dated = GeneratorConfig::starting_on(NaiveDate::from_ymd_opt(2025, 10, 24).unwrap());
    assert_eq!(dated.day_anchor(0), dated.day_anchor(1));
}
