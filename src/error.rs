use thiserror::Error;

/// The master error type.
#[derive(Debug, Error)]
pub enum LabError {
	#[error("IO Error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Unknown demo: \"{0}\". Use --list to see the available demos.")]
	UnknownDemo(String),
	#[error("Out of range error.")]
	OutOfRange,
	#[error("Value {0} cannot be represented in the target numeric type.")]
	NumericCast(i64),
}

impl LabError {

	pub fn range_check<T, R>(value: T, range: R) -> Result<(),LabError>
	where
	T: PartialOrd + Sized,
	R: std::ops::RangeBounds<T> {
		if range.contains(&value) {
			Ok(())
		} else {
			Err(LabError::OutOfRange)
		}
	}
}

pub type LabResult<T> = Result<T,LabError>;
