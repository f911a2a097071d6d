//! Errors raised while attaching effects to the host page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an effect could not attach to the page it was asked to decorate.
///
/// None of these are fatal: the page installer logs them and moves on to the
/// next effect, so partial markup only disables the affected feature.
#[derive(Debug, Error)]
pub enum HostError {
	#[error("no browser window available")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("no element matches `{0}`")]
	MissingElement(String),
	#[error("element `{0}` is not a {1}")]
	WrongElementType(String, &'static str),
	#[error("canvas has no 2d rendering context")]
	NoContext,
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for HostError {
	fn from(value: JsValue) -> Self {
		Self::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{:?}", value)),
		)
	}
}

pub type HostResult<T> = Result<T, HostError>;
