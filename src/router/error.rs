//! Error types for client-side routing.

/// Error type for router operations.
///
/// An unmatched route is not an error: the outlet renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// The environment could not deliver fragment-change events.
	#[error("Fragment-change event source unavailable: {0}")]
	EventSourceUnavailable(String),
	/// Writing the fragment failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// A view that needs the router was created before the router was installed.
	#[error("Router not installed: call Router::install before creating router views")]
	NotInstalled,
	/// No component is registered under this tag.
	#[error("Unknown component: {0}")]
	UnknownComponent(String),
	/// Attaching rendered output to the page failed.
	#[error("Mount failed: {0}")]
	MountFailed(String),
}
