use log::{debug, warn};
use select::{
	document::Document,
	node::Node,
	predicate::{Attr, Class, Name, Predicate},
};

use crate::{
	error::{Error, Result},
	source::ScheduleSource,
	time_table::TimeTable,
};

pub const CONTAINER_ID: &str = "schedule";
pub const BANNER_CLASS: &str = "label-main";
pub const DATE_CLASS: &str = "label-wood";
pub const EVENT_CLASS: &str = "bg-paper text-center";
pub const TODAY_EVENT_CLASS: &str = "bg-paper text-center now";
pub const INNER_CLASS: &str = "inner";
pub const TIME_RANGE_CLASS: &str = "bg-text-time margin-m font-red relative";

/// All events held on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSchedule {
	/// e.g. `"2016/10/13 (木)"`
	date: String,
	events: Vec<Event>,
}

impl EventSchedule {
	#[must_use]
	pub fn new(date: impl Into<String>) -> Self {
		Self {
			date: date.into(),
			events: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_events(mut self, events: Vec<Event>) -> Self {
		self.events = events;
		self
	}

	#[must_use]
	pub fn date(&self) -> &str {
		&self.date
	}

	#[must_use]
	pub fn events(&self) -> &[Event] {
		&self.events
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	/// Usually protocol-relative, e.g. `"//dl.mh-xr.jp/web/image/banner/…png"`
	image_url: String,
	open_time_ranges: Vec<String>,
	time_table: TimeTable,
	today: bool,
}

impl Event {
	#[must_use]
	pub fn new(image_url: impl Into<String>, open_time_ranges: Vec<String>) -> Self {
		let time_table = TimeTable::from_ranges(&open_time_ranges);

		Self {
			image_url: image_url.into(),
			open_time_ranges,
			time_table,
			today: false,
		}
	}

	#[must_use]
	pub fn today(mut self, today: bool) -> Self {
		self.today = today;
		self
	}

	#[must_use]
	pub fn image_url(&self) -> &str {
		&self.image_url
	}

	#[must_use]
	pub fn open_time_ranges(&self) -> &[String] {
		&self.open_time_ranges
	}

	#[must_use]
	pub fn time_table(&self) -> &TimeTable {
		&self.time_table
	}

	/// Whether the page listed this event under today's date.
	#[must_use]
	pub fn is_today(&self) -> bool {
		self.today
	}
}

/// What a direct child of `#schedule` is, judged by its exact `class` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
	Banner,
	DateMarker,
	Event,
	TodayEvent,
	Unknown(String),
}

impl From<&str> for BlockKind {
	fn from(class: &str) -> Self {
		match class {
			BANNER_CLASS => Self::Banner,
			DATE_CLASS => Self::DateMarker,
			EVENT_CLASS => Self::Event,
			TODAY_EVENT_CLASS => Self::TodayEvent,
			other => Self::Unknown(other.to_owned()),
		}
	}
}

/// Load the page from `source` and group its events by date.
///
/// # Errors
///
/// Fails on the first block that does not have the expected structure, or when
/// the page itself cannot be loaded.
pub fn get_event_schedule<S>(source: &S) -> Result<Vec<EventSchedule>>
where
	S: ScheduleSource + ?Sized,
{
	let document = source.load()?;

	parse_document(&document)
}

/// Group the blocks under `#schedule` into one [`EventSchedule`] per date.
///
/// Date markers and event blocks are siblings: every event belongs to the
/// closest date marker before it.
///
/// # Errors
///
/// Returns the first structural error found. Nothing parsed before it is kept.
pub fn parse_document(document: &Document) -> Result<Vec<EventSchedule>> {
	let container = document
		.find(Attr("id", CONTAINER_ID))
		.next()
		.ok_or(Error::ContainerNotFound)?;

	let mut schedules = Vec::new();
	let mut current: Option<EventSchedule> = None;

	for (index, block) in container.children().filter(|n| n.name().is_some()).enumerate() {
		let kind = BlockKind::from(block.attr("class").unwrap_or_default());

		debug!("block {index}: {kind:?}");

		match kind {
			BlockKind::Banner => {}
			BlockKind::DateMarker => {
				let next = EventSchedule::new(block.text().trim());

				schedules.extend(current.replace(next));
			}
			BlockKind::Event => push_event(&mut current, parse_event(block)?),
			BlockKind::TodayEvent => push_event(&mut current, parse_event(block)?.today(true)),
			BlockKind::Unknown(class) => return Err(Error::UnexpectedClass(class)),
		}
	}

	schedules.extend(current);

	Ok(schedules)
}

fn push_event(current: &mut Option<EventSchedule>, event: Event) {
	match current {
		Some(schedule) => schedule.events.push(event),
		None => warn!("dropping event {} listed before any date", event.image_url()),
	}
}

fn parse_event(block: Node) -> Result<Event> {
	let inner = block
		.children()
		.find(|n| Class(INNER_CLASS).matches(n))
		.ok_or(Error::MissingInner)?;

	let image_url = inner
		.find(Name("img"))
		.next()
		.and_then(|img| img.attr("src"))
		.ok_or(Error::MissingImage)?;

	let open_time_ranges = inner
		.find(Name("div").and(Attr("class", TIME_RANGE_CLASS)))
		.map(|n| n.text().trim().to_owned())
		.collect::<Vec<_>>();

	if open_time_ranges.is_empty() {
		return Err(Error::MissingTimeRange);
	}

	Ok(Event::new(image_url, open_time_ranges))
}
