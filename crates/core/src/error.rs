use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("{url} is not found")]
	DocumentNotFound {
		url: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	#[error("#schedule not found")]
	ContainerNotFound,
	#[error("appeared class unexpected: {0:?}")]
	UnexpectedClass(String),
	#[error("no event block inner")]
	MissingInner,
	#[error("no event image")]
	MissingImage,
	#[error("holding hours not found")]
	MissingTimeRange,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
