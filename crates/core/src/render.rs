use std::fmt;

use crate::{
	schedule::{Event, EventSchedule},
	time_table::HOURS,
};

const INDENT: &str = "    ";
const IMAGE_WIDTH: u32 = 100;

/// One table per date with a row per hour. Each row lists only the events open
/// during that hour, so a column does not stay with one event.
pub struct Vertical<'a>(pub &'a [EventSchedule]);

/// One table per date with a column per hour and a row per event.
pub struct Horizontal<'a>(pub &'a [EventSchedule]);

#[must_use]
pub fn render_vertical(schedules: &[EventSchedule]) -> String {
	Vertical(schedules).to_string()
}

#[must_use]
pub fn render_horizontal(schedules: &[EventSchedule]) -> String {
	Horizontal(schedules).to_string()
}

impl fmt::Display for Vertical<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for schedule in self.0 {
			write!(f, "<h1>{}</h1>", Escaped(schedule.date()))?;
			f.write_str("<table>")?;

			for hour in 0..HOURS {
				write!(f, "<tr><td>{hour}</td>")?;

				for event in schedule.events().iter().filter(|e| e.time_table().is_open(hour)) {
					write!(f, "<td>{}</td>", Image(event))?;
				}

				f.write_str("</tr>")?;
			}

			f.write_str("</table>")?;
		}

		Ok(())
	}
}

impl fmt::Display for Horizontal<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for schedule in self.0 {
			writeln!(f, "<table>")?;

			writeln!(f, "{INDENT}<tr>")?;
			for hour in 0..HOURS {
				writeln!(f, "{INDENT}{INDENT}<td>{hour}</td>")?;
			}
			writeln!(f, "{INDENT}</tr>")?;

			for event in schedule.events() {
				writeln!(f, "{INDENT}<tr>")?;

				for open in event.time_table().iter() {
					writeln!(f, "{INDENT}{INDENT}<td>")?;
					if open {
						writeln!(f, "{INDENT}{INDENT}{INDENT}{}", Image(event))?;
					}
					writeln!(f, "{INDENT}{INDENT}</td>")?;
				}

				writeln!(f, "{INDENT}</tr>")?;
			}

			writeln!(f, "</table>")?;
		}

		Ok(())
	}
}

struct Image<'a>(&'a Event);

impl fmt::Display for Image<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			r#"<img src="{}" width="{IMAGE_WIDTH}">"#,
			Escaped(&image_src(self.0.image_url()))
		)
	}
}

/// Banner URLs on the page are protocol-relative (`//dl.mh-xr.jp/…`), so
/// those only get `http:` instead of the page's literal `http://` prefix, which
/// would yield `http:////dl.mh-xr.jp/…`. Bare host paths still get `http://`.
fn image_src(url: &str) -> String {
	if url.starts_with("//") {
		format!("http:{url}")
	} else if url.contains("://") {
		url.to_owned()
	} else {
		format!("http://{url}")
	}
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for c in self.0.chars() {
			match c {
				'&' => f.write_str("&amp;")?,
				'<' => f.write_str("&lt;")?,
				'>' => f.write_str("&gt;")?,
				'"' => f.write_str("&quot;")?,
				'\'' => f.write_str("&#39;")?,
				c => fmt::Write::write_char(f, c)?,
			}
		}

		Ok(())
	}
}
