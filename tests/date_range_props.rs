use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use hrms_lite::utils::date_range::{DateRange, PresetKey, compute_presets, resolve_preset};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. roughly 2199
    (0u64..109_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

const NAMED: [PresetKey; 6] = [
    PresetKey::Today,
    PresetKey::ThisWeek,
    PresetKey::ThisMonth,
    PresetKey::LastMonth,
    PresetKey::ThisYear,
    PresetKey::LastYear,
];

proptest! {
    #[test]
    fn single_day_range_is_today(today in any_date()) {
        let presets = compute_presets(today);
        prop_assert_eq!(resolve_preset(&DateRange::day(today), &presets), PresetKey::Today);
    }

    #[test]
    fn week_starts_on_monday_and_ends_today(today in any_date()) {
        let week = compute_presets(today).range(PresetKey::ThisWeek);
        let from = week.from.unwrap();
        prop_assert_eq!(from.weekday(), Weekday::Mon);
        prop_assert_eq!(week.to, Some(today));
        prop_assert!((today - from).num_days() <= 6);
    }

    #[test]
    fn last_month_is_one_full_previous_month(today in any_date()) {
        let range = compute_presets(today).range(PresetKey::LastMonth);
        let (from, to) = (range.from.unwrap(), range.to.unwrap());

        prop_assert_eq!(from.day(), 1);
        prop_assert_eq!((from.year(), from.month()), (to.year(), to.month()));
        prop_assert_eq!(to.succ_opt().unwrap().day(), 1);
        prop_assert!(to < today.with_day(1).unwrap());
        prop_assert_eq!(to.succ_opt().unwrap(), today.with_day(1).unwrap());
    }

    #[test]
    fn unbounded_range_is_all(today in any_date()) {
        prop_assert_eq!(resolve_preset(&DateRange::ALL, &compute_presets(today)), PresetKey::All);
    }

    #[test]
    fn named_presets_round_trip_up_to_tie_break(today in any_date()) {
        let presets = compute_presets(today);
        for key in NAMED {
            let range = presets.range(key);
            let resolved = resolve_preset(&range, &presets);
            // The resolved key is the earliest one with these exact bounds.
            let earliest = NAMED
                .iter()
                .copied()
                .find(|k| presets.range(*k) == range)
                .unwrap();
            prop_assert_eq!(resolved, earliest);
            prop_assert_eq!(presets.range(resolved), range);
        }
    }

    #[test]
    fn bounds_are_ordered(today in any_date()) {
        let presets = compute_presets(today);
        for key in NAMED {
            let range = presets.range(key);
            prop_assert!(range.from.unwrap() <= range.to.unwrap());
            prop_assert!(range.to.unwrap() <= today);
        }
    }
}

#[test]
fn round_trip_is_exact_when_presets_do_not_coincide() {
    // Wednesday 15 May 2024: every named preset has distinct bounds.
    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let presets = compute_presets(today);
    for key in NAMED {
        assert_eq!(resolve_preset(&presets.range(key), &presets), key);
    }
}

#[test]
fn unmatched_bounded_range_is_custom() {
    let presets = compute_presets(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    let range = DateRange::between(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    );
    assert_eq!(resolve_preset(&range, &presets), PresetKey::Custom);
}
