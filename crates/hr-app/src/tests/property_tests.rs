use crate::screens::employees::{self, EmployeeFilter};
use crate::{AttendanceCalendar, CalendarMonth, Route};

use hr_core::{AttendanceStatus, seed};

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =========================================================================
// Property-Based Tests - Attendance
// =========================================================================

proptest! {
    #[test]
    fn given_any_month_and_seed_when_generated_then_no_status_on_or_after_today(
        year in 2000i32..2100,
        month in 1u32..=12,
        today_offset in 0i64..120,
        seed in any::<u64>(),
    ) {
        let month = CalendarMonth { year, month };
        let first = month.first_day().unwrap();
        let today = first + chrono::Duration::days(today_offset - 30);

        let calendar = AttendanceCalendar::generate(month, today, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(calendar.days.len(), month.days().len());
        for day in &calendar.days {
            if day.is_weekend() || day.date >= today {
                prop_assert!(day.status.is_none());
            } else {
                prop_assert!(day.status.is_some());
            }
            if day.status == Some(AttendanceStatus::Absent) {
                prop_assert!(day.check_in.is_none());
            }
        }
    }

    #[test]
    fn given_any_month_when_next_then_previous_then_same_month(
        year in 1900i32..2200,
        month in 1u32..=12,
    ) {
        let month = CalendarMonth { year, month };

        prop_assert_eq!(month.next().previous(), month);
        prop_assert_eq!(month.to_string().parse::<CalendarMonth>().unwrap(), month);
    }

    #[test]
    fn given_any_date_when_month_of_then_date_in_month_days(
        days in 0i64..80_000,
    ) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);

        prop_assert!(CalendarMonth::of(date).days().contains(&date));
    }
}

// =========================================================================
// Property-Based Tests - Directory and routes
// =========================================================================

proptest! {
    #[test]
    fn given_any_query_when_search_then_result_is_subset_in_order(
        query in "[a-zA-Z0-9@. ]{0,8}",
    ) {
        let identities = seed::identities();
        let filter = EmployeeFilter { query, department: None };

        let found = employees::search(&identities, &filter);

        let positions: Vec<usize> = found
            .iter()
            .map(|f| identities.iter().position(|i| i.id == f.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn given_arbitrary_path_when_parsed_then_only_known_paths_resolve(
        path in "/[a-z-]{0,16}",
    ) {
        match path.parse::<Route>() {
            Ok(route) => prop_assert_eq!(route.path(), path.as_str()),
            Err(err) => prop_assert_eq!(err.error_code(), "UNKNOWN_ROUTE"),
        }
    }
}
