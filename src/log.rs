//! Log subscriber selection.
//!
//! A [`Handler`] names one of the supported [`tracing-subscriber`] output
//! flavors and round-trips through its text name, so it can sit directly in
//! a configuration value.
//!
//! [`tracing-subscriber`]: https://crates.io/crates/tracing-subscriber

use std::{io::IsTerminal, str::FromStr};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// A supported log subscriber flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
	/// Plain text output, no colors.
	Text,
	/// Standard JSON output.
	Json,
	/// ANSI-colorized text output.
	Color,
	/// [`Handler::Color`] when stderr is an interactive terminal,
	/// [`Handler::Text`] otherwise.
	Auto,
}

/// Error parsing an unrecognized handler name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0:?}: unknown handler name")]
pub struct UnknownHandlerName(pub String);

impl std::fmt::Display for Handler {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Handler::Text => write!(f, "text"),
			Handler::Json => write!(f, "json"),
			Handler::Color => write!(f, "color"),
			Handler::Auto => write!(f, "auto"),
		}
	}
}

impl FromStr for Handler {
	type Err = UnknownHandlerName;

	fn from_str(s: &str) -> Result<Self, UnknownHandlerName> {
		match s {
			"text" => Ok(Handler::Text),
			"json" => Ok(Handler::Json),
			"color" => Ok(Handler::Color),
			"auto" => Ok(Handler::Auto),
			_ => Err(UnknownHandlerName(s.to_owned())),
		}
	}
}

impl Handler {
	/// Resolve `Auto` against the environment: colorized output only when
	/// stderr is an interactive terminal. Never returns `Auto`.
	pub fn resolve(self) -> Handler {
		match self {
			Handler::Auto if std::io::stderr().is_terminal() => Handler::Color,
			Handler::Auto => Handler::Text,
			handler => handler,
		}
	}

	/// Install the global subscriber for this handler, logging to stderr
	/// at `max_level` and below.
	pub fn try_init(self, max_level: LevelFilter) -> Result<(), TryInitError> {
		let builder = tracing_subscriber::fmt()
			.with_max_level(max_level)
			.with_writer(std::io::stderr);

		match self.resolve() {
			Handler::Json => builder.json().finish().try_init(),
			Handler::Color => builder.with_ansi(true).finish().try_init(),
			_ => builder.with_ansi(false).finish().try_init(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_round_trip() {
		for handler in [Handler::Text, Handler::Json, Handler::Color, Handler::Auto] {
			assert_eq!(handler.to_string().parse(), Ok(handler));
		}
	}

	#[test]
	fn names_match_configuration_values() {
		assert_eq!(Handler::Text.to_string(), "text");
		assert_eq!(Handler::Json.to_string(), "json");
		assert_eq!(Handler::Color.to_string(), "color");
		assert_eq!(Handler::Auto.to_string(), "auto");
	}

	#[test]
	fn unknown_name_is_an_error() {
		assert_eq!(
			"tint".parse::<Handler>(),
			Err(UnknownHandlerName("tint".to_owned()))
		);
		assert_eq!(
			"TEXT".parse::<Handler>(),
			Err(UnknownHandlerName("TEXT".to_owned()))
		);
	}

	#[test]
	fn resolve_is_identity_for_concrete_handlers() {
		assert_eq!(Handler::Text.resolve(), Handler::Text);
		assert_eq!(Handler::Json.resolve(), Handler::Json);
		assert_eq!(Handler::Color.resolve(), Handler::Color);
	}

	#[test]
	fn resolve_never_yields_auto() {
		assert_ne!(Handler::Auto.resolve(), Handler::Auto);
	}

	#[test]
	fn try_init_installs_a_global_subscriber_once() {
		assert!(Handler::Text.try_init(LevelFilter::INFO).is_ok());

		// The global default is process-wide; a second install must be
		// rejected.
		assert!(Handler::Json.try_init(LevelFilter::INFO).is_err());
	}
}
