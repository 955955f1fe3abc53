#![warn(clippy::pedantic)]

use std::{io::Write, path::Path};

use anyhow::Context;
use clap::Parser;
use log::debug;
use mhxr_schedule_core::HttpSource;

const OUTPUT_PATH: &str = "./pages/schedule.html";

/// Render the MHXR event schedule into ./pages/schedule.html
#[derive(Parser)]
#[command(version, about)]
struct Args {}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	Args::parse();

	let html = mhxr_schedule_core::create_html(&HttpSource::default())?;

	write_page(Path::new(OUTPUT_PATH), &html)?;

	println!("Generate schedule.html success.");

	Ok(())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
	if let Some(dir) = path.parent() {
		fs_err::create_dir_all(dir)?;
	}

	let mut file = fs_err::File::create(path)?;
	file.write_all(html.as_bytes())
		.with_context(|| format!("failed to write {}", path.display()))?;

	debug!("wrote {} bytes to {}", html.len(), path.display());

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::write_page;

	#[test]
	fn test_write_page_creates_and_truncates() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pages").join("schedule.html");

		write_page(&path, "<h1>a long first page</h1>").unwrap();
		write_page(&path, "<h1>b</h1>").unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>b</h1>");
	}
}
