//! Month calendar for the dashboard. Selecting today's cell starts the
//! step-1 flow; every other cell is a no-op here.

use chrono::{Datelike, Local, NaiveDate};
use leptos::{ev, html::*, prelude::*};

use crate::session::{BrowserNavigator, Navigator as _};

pub const STEP1_PATH: &str = "/main/step1";

pub fn days_in_month(year: i32, month: u32) -> u32 {
	let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
	NaiveDate::from_ymd_opt(next_year, next_month, 1)
		.and_then(|d| d.pred_opt())
		.map(|d| d.day())
		.unwrap_or(0)
}

/// Cells of the month view: leading blanks up to the first weekday
/// (Sunday-started), then the day numbers.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
	let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
		return vec![];
	};
	let mut cells: Vec<Option<u32>> = vec![None; first.weekday().num_days_from_sunday() as usize];
	cells.extend((1..=days_in_month(year, month)).map(Some));
	cells
}

/// Where a day-cell selection navigates: the step-1 path when the selection
/// is today (year, month and day all match), nowhere otherwise.
pub fn step1_target(selected: NaiveDate, today: NaiveDate) -> Option<&'static str> {
	(selected == today).then_some(STEP1_PATH)
}

#[island]
pub fn Calendar() -> impl IntoView {
	// "Today" per the local clock, captured once per mount.
	let today = Local::now().date_naive();
	let year = RwSignal::new(today.year());
	let month = RwSignal::new(today.month());

	let shift_month = move |delta: i32| {
		let (mut y, mut m) = (year.get(), month.get() as i32 + delta);
		if m < 1 {
			y -= 1;
			m = 12;
		} else if m > 12 {
			y += 1;
			m = 1;
		}
		year.set(y);
		month.set(m as u32);
	};

	let on_day_click = move |day: u32| {
		if let Some(selected) = NaiveDate::from_ymd_opt(year.get(), month.get(), day) {
			if let Some(path) = step1_target(selected, today) {
				BrowserNavigator.navigate(path);
			}
		}
	};

	static WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

	div().class("bg-white rounded-xl shadow-lg p-4 w-full").child((
		div().class("flex justify-between items-center mb-4").child((
			button()
				.attr("type", "button")
				.class("px-2 py-1 rounded hover:bg-gray-100")
				.on(ev::click, move |_| shift_month(-1))
				.child("<"),
			span()
				.class("text-lg font-semibold")
				.child(move || format!("{}.{:02}", year.get(), month.get())),
			button()
				.attr("type", "button")
				.class("px-2 py-1 rounded hover:bg-gray-100")
				.on(ev::click, move |_| shift_month(1))
				.child(">"),
		)),
		div()
			.class("grid grid-cols-7 gap-1 text-center text-sm text-gray-500 mb-1")
			.child(WEEKDAYS.iter().map(|d| span().child(*d)).collect::<Vec<_>>()),
		div().class("grid grid-cols-7 gap-1 text-center").child(move || {
			month_grid(year.get(), month.get())
				.into_iter()
				.map(|cell| match cell {
					None => div().into_any(),
					Some(day) => {
						let is_today = NaiveDate::from_ymd_opt(year.get(), month.get(), day) == Some(today);
						button()
							.attr("type", "button")
							.class(if is_today {
								"py-2 rounded-full bg-[#7BA4D9] text-white font-semibold cursor-pointer"
							} else {
								"py-2 rounded hover:bg-gray-100 cursor-pointer"
							})
							.on(ev::click, move |_| on_day_click(day))
							.child(day.to_string())
							.into_any()
					}
				})
				.collect::<Vec<_>>()
		}),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn d(year: i32, month: u32, day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(year, month, day).unwrap()
	}

	#[test]
	fn day_counts_handle_leap_years() {
		assert_eq!(days_in_month(2024, 2), 29);
		assert_eq!(days_in_month(2023, 2), 28);
		assert_eq!(days_in_month(2024, 12), 31);
		assert_eq!(days_in_month(2024, 6), 30);
	}

	#[test]
	fn grid_starts_at_the_first_weekday() {
		// June 2024 starts on a Saturday.
		let grid = month_grid(2024, 6);
		assert_eq!(&grid[..6], &[None; 6]);
		assert_eq!(grid[6], Some(1));
		assert_eq!(grid.len(), 6 + 30);
	}

	#[test]
	fn selecting_today_navigates_to_step1() {
		assert_eq!(step1_target(d(2024, 6, 15), d(2024, 6, 15)), Some(STEP1_PATH));
	}

	#[test]
	fn selecting_any_other_date_is_a_noop() {
		let today = d(2024, 6, 15);
		assert_eq!(step1_target(d(2024, 6, 14), today), None);
		assert_eq!(step1_target(d(2024, 5, 15), today), None);
		assert_eq!(step1_target(d(2023, 6, 15), today), None);
	}
}
