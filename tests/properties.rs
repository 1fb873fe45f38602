//! Property tests for the classification core.

use proptest::prelude::*;
use rust_decimal::Decimal;

use activity_engine::classification::{
    classify, legacy_verdict, parse_hours, resolve_target_hours, validate_report, worst_status,
};
use activity_engine::config::{DEFAULT_REPORT_MIN_CHARS, EngineConfig, RatesConfig};
use activity_engine::models::{
    ActiveTab, ActivityRecord, HourTarget, NumericField, ReportStatus, UnifiedStatus,
};

fn numeric_field() -> impl Strategy<Value = Option<NumericField>> {
    prop_oneof![
        Just(None),
        (-5.0f64..30.0).prop_map(|n| Some(NumericField::Number(n))),
        "[0-9]{0,2}([.,][0-9]{0,2})?".prop_map(|s| Some(NumericField::Text(s))),
        ".{0,8}".prop_map(|s| Some(NumericField::Text(s))),
    ]
}

fn activity_record() -> impl Strategy<Value = ActivityRecord> {
    (
        "[A-Za-z ]{1,12}",
        numeric_field(),
        numeric_field(),
        numeric_field(),
        numeric_field(),
        proptest::option::of(".{0,60}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop_oneof![
            Just("Project".to_string()),
            Just("Active".to_string()),
            ".{0,12}"
        ]),
    )
        .prop_map(
            |(name, crm, discord, rate, leave_rate, report, is_project, status)| {
                let mut record = ActivityRecord::new(name);
                record.crm_time = crm;
                record.discord_time = discord;
                record.rate = rate;
                record.leave_rate = leave_rate;
                record.report = report;
                record.is_project = is_project;
                record.employee_status = status;
                record
            },
        )
}

fn tab() -> impl Strategy<Value = ActiveTab> {
    prop_oneof![Just(ActiveTab::Company), Just(ActiveTab::Project)]
}

fn unified_status() -> impl Strategy<Value = UnifiedStatus> {
    proptest::sample::select(UnifiedStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn classification_is_closed_over_known_statuses(record in activity_record(), tab in tab()) {
        let status = classify(&record, tab, &EngineConfig::default());
        prop_assert!(UnifiedStatus::ALL.contains(&status));
        prop_assert_ne!(status, UnifiedStatus::Project);
    }

    #[test]
    fn classification_is_idempotent(record in activity_record(), tab in tab()) {
        let config = EngineConfig::default();
        prop_assert_eq!(classify(&record, tab, &config), classify(&record, tab, &config));
        prop_assert_eq!(legacy_verdict(&record, &config), legacy_verdict(&record, &config));
    }

    #[test]
    fn full_leave_always_wins(mut record in activity_record(), tab in tab(), rate in 1.0f64..5.0) {
        record.leave_rate = Some(NumericField::Number(rate));
        prop_assert_eq!(classify(&record, tab, &EngineConfig::default()), UnifiedStatus::Leave);
    }

    #[test]
    fn parse_hours_never_panics(field in numeric_field()) {
        let _ = parse_hours(field.as_ref());
    }

    #[test]
    fn report_validity_follows_trimmed_length(body in "[a-z]{1,80}", pad in " {0,5}") {
        let text = format!("{pad}{body}{pad}");
        let status = validate_report(Some(&text), DEFAULT_REPORT_MIN_CHARS);
        prop_assert_eq!(status.is_valid(), body.len() >= DEFAULT_REPORT_MIN_CHARS);
        if !status.is_valid() {
            prop_assert_eq!(status, ReportStatus::TooShort { length: body.len() });
        }
    }

    #[test]
    fn higher_rates_never_lower_the_target(a in 0u32..200, b in 0u32..200) {
        let rates = RatesConfig::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let target = |r: u32| {
            resolve_target_hours("Anna", Some(Decimal::new(i64::from(r), 2)), &rates)
                .0
                .hours()
                .unwrap_or(Decimal::ZERO)
        };
        prop_assert!(target(low) <= target(high));
    }

    #[test]
    fn worst_status_is_one_of_the_inputs(statuses in proptest::collection::vec(unified_status(), 1..10)) {
        let worst = worst_status(statuses.iter().copied());
        prop_assert!(worst.is_some_and(|w| statuses.contains(&w)));
    }

    #[test]
    fn leave_in_input_is_always_worst(mut statuses in proptest::collection::vec(unified_status(), 0..10)) {
        statuses.push(UnifiedStatus::Leave);
        prop_assert_eq!(worst_status(statuses), Some(UnifiedStatus::Leave));
    }
}

#[test]
fn rate_boundaries() {
    let rates = RatesConfig::default();
    let target = |r: i64| resolve_target_hours("Anna", Some(Decimal::new(r, 2)), &rates).0;

    assert_eq!(target(100), HourTarget::Required(Decimal::from(8)));
    assert_eq!(target(99), HourTarget::Required(Decimal::from(6)));
    assert_eq!(target(49), HourTarget::NoRequirement);
}
