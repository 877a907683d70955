use chrono::{Datelike, Local};
use leptos::{html::*, prelude::*};

/// Sticker/streak panel for the current week. One slot per day; days up to
/// and including today show as open, the rest as locked.
#[component]
pub fn StickerStatus() -> impl IntoView {
	static WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

	let today_idx = Local::now().date_naive().weekday().num_days_from_sunday() as usize;

	div().class("bg-white rounded-xl shadow-lg p-4 w-full h-full flex flex-col").child((
		h3().class("text-lg font-semibold text-center mb-2").child("This week's stickers"),
		div().class("flex justify-between gap-2 flex-grow items-center").child(
			WEEKDAYS
				.iter()
				.enumerate()
				.map(|(i, day)| {
					div().class("flex flex-col items-center gap-1").child((
						div()
							.class(if i <= today_idx {
								"w-8 h-8 rounded-full border-2 border-[#7BA4D9] flex items-center justify-center"
							} else {
								"w-8 h-8 rounded-full border-2 border-gray-200 bg-gray-50"
							})
							.child(if i <= today_idx { Some(span().class("text-[#7BA4D9] text-xs").child("★")) } else { None }),
						span().class("text-xs text-gray-500").child(*day),
					))
				})
				.collect::<Vec<_>>(),
		),
		p().class("text-center text-sm text-gray-500 mt-2").child("Finish today's session to earn a sticker."),
	))
}
