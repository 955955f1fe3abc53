#![warn(clippy::pedantic)]

pub mod error;
pub mod render;
pub mod schedule;
pub mod source;
pub mod time_table;

pub use error::{Error, Result};
pub use render::{render_horizontal, render_vertical};
pub use schedule::{get_event_schedule, Event, EventSchedule};
pub use source::{HttpSource, ScheduleSource, SCHEDULE_URL};

/// Load the schedule and render it with one row per hour.
///
/// # Errors
///
/// Returns any error from loading or parsing the page.
pub fn create_html<S>(source: &S) -> Result<String>
where
	S: ScheduleSource + ?Sized,
{
	let schedules = get_event_schedule(source)?;

	Ok(render_vertical(&schedules))
}

/// Load the schedule and render it with one row per event.
///
/// # Errors
///
/// Returns any error from loading or parsing the page.
pub fn create_horizon_html<S>(source: &S) -> Result<String>
where
	S: ScheduleSource + ?Sized,
{
	let schedules = get_event_schedule(source)?;

	Ok(render_horizontal(&schedules))
}
