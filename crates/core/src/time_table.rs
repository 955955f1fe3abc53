use std::ops::Index;

pub const HOURS: usize = 24;

const RANGE_SEPARATOR: char = '〜';

/// Which hours of the day an event is open, derived from its `"HH:MM 〜 HH:MM"`
/// ranges. Minutes are not taken into account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeTable([bool; HOURS]);

impl TimeTable {
	/// Build the table from raw ranges. Every range marks the hours in
	/// `start..end`, so a range ending at or before its start marks nothing.
	#[must_use]
	pub fn from_ranges<I, S>(ranges: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut table = [false; HOURS];

		for range in ranges {
			let (start, end) = parse_range(range.as_ref());

			for slot in table.iter_mut().take(end).skip(start) {
				*slot = true;
			}
		}

		Self(table)
	}

	#[must_use]
	pub fn is_open(&self, hour: usize) -> bool {
		self.0.get(hour).copied().unwrap_or(false)
	}

	pub fn open_hours(&self) -> impl Iterator<Item = usize> + '_ {
		self.0
			.iter()
			.enumerate()
			.filter_map(|(hour, &open)| open.then_some(hour))
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		self.0.iter().copied()
	}
}

impl Index<usize> for TimeTable {
	type Output = bool;

	fn index(&self, hour: usize) -> &bool {
		&self.0[hour]
	}
}

// missing pieces read as hour 0
fn parse_range(s: &str) -> (usize, usize) {
	let mut parts = s.splitn(2, RANGE_SEPARATOR);
	let start = parts.next().map_or(0, parse_hour);
	let end = parts.next().map_or(0, parse_hour);

	(start, end.min(HOURS))
}

fn parse_hour(time: &str) -> usize {
	time.trim()
		.split(':')
		.next()
		.and_then(|hour| hour.parse().ok())
		.unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::{TimeTable, HOURS};

	fn open(table: &TimeTable) -> Vec<usize> {
		table.open_hours().collect()
	}

	#[test]
	fn test_disjoint_ranges() {
		let table = TimeTable::from_ranges(["10:00 〜 12:00", "15:00 〜 24:00"]);
		let mut expected = vec![10, 11];
		expected.extend(15..24);

		assert_eq!(open(&table), expected);
	}

	#[test]
	fn test_overlapping_ranges_accumulate() {
		let table = TimeTable::from_ranges(["09:00 〜 11:00", "10:00 〜 13:00"]);

		assert_eq!(open(&table), vec![9, 10, 11, 12]);
	}

	#[test]
	fn test_later_range_never_clears() {
		let table = TimeTable::from_ranges(["00:00 〜 24:00", "20:00 〜 18:00"]);

		assert_eq!(open(&table).len(), HOURS);
	}

	#[test]
	fn test_reversed_range_is_empty() {
		let table = TimeTable::from_ranges(["20:00 〜 18:00"]);

		assert_eq!(table, TimeTable::default());
	}

	#[test]
	fn test_minutes_are_ignored() {
		let table = TimeTable::from_ranges(["07:30 〜 08:59"]);

		assert_eq!(open(&table), vec![7]);
		assert!(!table.is_open(8));
	}

	#[test]
	fn test_malformed_hours_read_as_zero() {
		// "ab" becomes 0, so the range covers 0..3
		assert_eq!(open(&TimeTable::from_ranges(["ab:00 〜 03:00"])), vec![0, 1, 2]);
		// end becomes 0, nothing is open
		assert_eq!(TimeTable::from_ranges(["05:00 〜 xx:00"]), TimeTable::default());
		assert_eq!(TimeTable::from_ranges(["05:00"]), TimeTable::default());
	}

	#[test]
	fn test_end_is_clamped() {
		let table = TimeTable::from_ranges(["22:00 〜 26:00"]);

		assert_eq!(open(&table), vec![22, 23]);
		assert!(!table.is_open(24));
	}

	#[test]
	fn test_bit_set_iff_some_range_covers_it() {
		let ranges = ["01:00 〜 03:00", "02:15 〜 05:45", "18:00 〜 19:00", "23:00 〜 12:00"];
		let covered = [(1, 3), (2, 5), (18, 19)];
		let table = TimeTable::from_ranges(ranges);

		for hour in 0..HOURS {
			let expected = covered.iter().any(|&(start, end)| start <= hour && hour < end);
			assert_eq!(table[hour], expected, "hour {hour}");
		}
	}
}
