use log::debug;
use select::document::Document;

use crate::error::{Error, Result};

pub const SCHEDULE_URL: &str = "http://web.mh-xr.jp/schedule/index";

/// Somewhere a schedule page can be loaded from.
pub trait ScheduleSource {
	/// Load the page as a queryable document.
	///
	/// # Errors
	///
	/// Returns [`Error::DocumentNotFound`] when the page cannot be loaded.
	fn load(&self) -> Result<Document>;
}

/// The live page, fetched with a blocking GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
	url: String,
}

impl HttpSource {
	#[must_use]
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}

	#[must_use]
	pub fn url(&self) -> &str {
		&self.url
	}

	fn not_found(&self, source: impl std::error::Error + Send + Sync + 'static) -> Error {
		Error::DocumentNotFound {
			url: self.url.clone(),
			source: Box::new(source),
		}
	}
}

impl Default for HttpSource {
	fn default() -> Self {
		Self::new(SCHEDULE_URL)
	}
}

impl ScheduleSource for HttpSource {
	fn load(&self) -> Result<Document> {
		debug!("fetching {}", self.url);

		let response = reqwest::blocking::get(self.url.as_str())
			.and_then(reqwest::blocking::Response::error_for_status)
			.map_err(|e| self.not_found(e))?;

		Document::from_read(response).map_err(|e| self.not_found(e))
	}
}

/// An already downloaded page.
impl ScheduleSource for str {
	fn load(&self) -> Result<Document> {
		Ok(Document::from(self))
	}
}
