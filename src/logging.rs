//! Log capture for the in-app log pane.
//!
//! Records go through the `log` facade into `tui-logger`, whose own worker
//! thread hands them to the widget.

use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use log::LevelFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the logger once and set the level shown by default.
///
/// Calling this again only adjusts the level.
pub fn initialize(level: LevelFilter) -> Result<()> {
	if INSTALLED.get().is_none() {
		tui_logger::init_logger(LevelFilter::Trace)
			.map_err(|err| anyhow!("failed to install logger: {err:?}"))?;
		let _ = INSTALLED.set(());
	}
	tui_logger::set_default_level(level);
	Ok(())
}
