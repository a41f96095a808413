//! Pagination descriptors and the table's mutually exclusive view states

use serde::{Deserialize, Serialize};

/// Pagination descriptor supplied by the caller
///
/// Pagination is externally driven: the API slices pages server-side and
/// the table only displays the descriptor. Filtering and sorting operate
/// on the full page of data the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
	/// 1-based page currently displayed
	pub current_page: u32,
	/// Rows per page
	pub per_page: u32,
	/// Total rows across all pages
	pub total: u64,
	/// Total page count
	pub total_pages: u32,
}

impl PageInfo {
	/// Whether a previous page exists
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Whether a next page exists
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}
}

/// What the table renders in place of (or around) its rows
///
/// The three non-ready states are mutually exclusive and resolved in a
/// fixed priority order: a failure suppresses everything else, loading
/// suppresses the empty state, and empty only shows once the view is
/// neither failed nor loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
	/// Render only the error (plus a retry control when available)
	Failed(String),
	/// Render a loading indicator in place of rows
	Loading,
	/// Render an explicit "no data" row
	Empty,
	/// Render the visible rows
	Ready,
}

impl ViewState {
	/// Resolves the view state in priority order: failed > loading >
	/// empty > ready
	///
	/// # Examples
	///
	/// ```
	/// use rentkit_tables::ViewState;
	///
	/// // An error wins even while loading
	/// assert_eq!(
	///     ViewState::resolve(Some("boom"), true, 0),
	///     ViewState::Failed("boom".to_string()),
	/// );
	/// assert_eq!(ViewState::resolve(None, true, 0), ViewState::Loading);
	/// assert_eq!(ViewState::resolve(None, false, 0), ViewState::Empty);
	/// assert_eq!(ViewState::resolve(None, false, 3), ViewState::Ready);
	/// ```
	pub fn resolve(error: Option<&str>, loading: bool, visible_rows: usize) -> Self {
		if let Some(message) = error {
			return ViewState::Failed(message.to_string());
		}
		if loading {
			return ViewState::Loading;
		}
		if visible_rows == 0 {
			return ViewState::Empty;
		}
		ViewState::Ready
	}
}
