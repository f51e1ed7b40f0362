use std::fmt;

/// A type alias for `std::result::Result` that uses [`GeometryError`] as the error type.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors reported by geometry construction, sequence mutation and writing.
///
/// Misuse of donated components (the "ownership violation" category) has no
/// variant here: the factory takes ownership by value, so reusing a donated
/// ring or geometry does not compile.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
	/// A structural invariant was violated while building a geometry,
	/// e.g. an unclosed ring or a polygon with holes but no shell.
	InvalidGeometry(String),
	/// A visitor was handed a variant it does not handle.
	UnsupportedGeometry(&'static str),
	/// An index outside of a coordinate sequence was addressed.
	OutOfBounds { index: usize, len: usize },
	/// A coordinate was pushed onto a fixed-size sequence.
	FixedSize,
	/// A precision model was configured with an unusable scale.
	InvalidPrecisionModel(String),
}

impl GeometryError {
	pub(crate) fn invalid(msg: impl Into<String>) -> Self {
		Self::InvalidGeometry(msg.into())
	}
}

impl fmt::Display for GeometryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeometryError::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
			GeometryError::UnsupportedGeometry(kind) => write!(f, "unsupported geometry type: {kind}"),
			GeometryError::OutOfBounds { index, len } => {
				write!(f, "index {index} is out of bounds for a sequence of length {len}")
			}
			GeometryError::FixedSize => write!(f, "cannot grow a fixed-size coordinate sequence"),
			GeometryError::InvalidPrecisionModel(msg) => write!(f, "invalid precision model: {msg}"),
		}
	}
}

impl std::error::Error for GeometryError {}
