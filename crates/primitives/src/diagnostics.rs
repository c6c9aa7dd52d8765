use crate::SourceLocation;

/// Write-only destination for errors found while resolving descriptors.
///
/// Sinks are owned by the caller and injected into resolution. Reporting an
/// error never fails.
pub trait ErrorSink {
	/// Records an error attributed to `location`.
	fn on_error(&mut self, location: SourceLocation, message: String);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
	fn on_error(&mut self, location: SourceLocation, message: String) {
		(**self).on_error(location, message);
	}
}

/// A single reported error.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
	pub location: SourceLocation,
	pub message: String,
}

/// An [`ErrorSink`] that keeps every report in order.
#[derive(Debug, Clone, Default)]
pub struct ErrorBag {
	errors: Vec<Diagnostic>,
}

impl ErrorBag {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reported errors, oldest first.
	pub fn errors(&self) -> &[Diagnostic] {
		&self.errors
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn into_errors(self) -> Vec<Diagnostic> {
		self.errors
	}
}

impl ErrorSink for ErrorBag {
	fn on_error(&mut self, location: SourceLocation, message: String) {
		self.errors.push(Diagnostic { location, message });
	}
}
