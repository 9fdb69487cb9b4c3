use cinerec::StalePolicy;
use clap::ValueEnum;
use log::LevelFilter;

/// How responses to superseded requests are handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StalePolicyArg {
	Discard,
	Apply,
}

impl StalePolicyArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		StalePolicy::from(self).as_str()
	}
}

impl From<StalePolicyArg> for StalePolicy {
	fn from(arg: StalePolicyArg) -> Self {
		match arg {
			StalePolicyArg::Discard => StalePolicy::Discard,
			StalePolicyArg::Apply => StalePolicy::Apply,
		}
	}
}

/// Minimum level shown in the log pane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevelArg> for LevelFilter {
	fn from(arg: LogLevelArg) -> Self {
		match arg {
			LogLevelArg::Off => LevelFilter::Off,
			LogLevelArg::Error => LevelFilter::Error,
			LogLevelArg::Warn => LevelFilter::Warn,
			LogLevelArg::Info => LevelFilter::Info,
			LogLevelArg::Debug => LevelFilter::Debug,
			LogLevelArg::Trace => LevelFilter::Trace,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
