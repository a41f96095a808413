//! Row selection state
//!
//! Selection is an explicit set of record ids (the stringified `id`
//! field), independent of row order. The select-all control toggles
//! between "nothing" and "every currently visible row"; bulk actions
//! clear the selection after dispatch.

use std::collections::HashSet;

/// Id-based selection for one table
#[derive(Debug, Clone, Default)]
pub struct Selection {
	ids: HashSet<String>,
}

impl Selection {
	/// Creates an empty selection
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the given record id is selected
	pub fn is_selected(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	/// Toggles a single record id
	pub fn toggle(&mut self, id: impl Into<String>) {
		let id = id.into();
		if !self.ids.remove(&id) {
			self.ids.insert(id);
		}
	}

	/// Select-all toggle against the currently visible rows
	///
	/// When every visible row is already selected the selection empties;
	/// otherwise it becomes exactly the visible rows. An empty view is a
	/// no-op.
	///
	/// # Examples
	///
	/// ```
	/// use rentkit_tables::Selection;
	///
	/// let visible = vec!["1".to_string(), "2".to_string()];
	/// let mut selection = Selection::new();
	///
	/// selection.toggle_all(&visible);
	/// assert_eq!(selection.len(), 2);
	///
	/// selection.toggle_all(&visible);
	/// assert!(selection.is_empty());
	/// ```
	pub fn toggle_all(&mut self, visible_ids: &[String]) {
		if visible_ids.is_empty() {
			return;
		}
		let visible: HashSet<String> = visible_ids.iter().cloned().collect();
		if self.ids == visible {
			self.ids.clear();
		} else {
			self.ids = visible;
		}
	}

	/// Empties the selection (called after every bulk action dispatch)
	pub fn clear(&mut self) {
		self.ids.clear();
	}

	/// Number of selected ids
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Whether nothing is selected
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// The selected ids, in arbitrary order
	pub fn ids(&self) -> Vec<String> {
		self.ids.iter().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn visible(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_toggle_single_id() {
		let mut selection = Selection::new();
		selection.toggle("7");
		assert!(selection.is_selected("7"));
		selection.toggle("7");
		assert!(!selection.is_selected("7"));
	}

	#[test]
	fn test_toggle_all_on_empty_view_is_noop() {
		let mut selection = Selection::new();
		selection.toggle("1");
		selection.toggle_all(&[]);
		assert_eq!(selection.len(), 1);
	}

	#[test]
	fn test_toggle_all_from_partial_selects_all() {
		let mut selection = Selection::new();
		selection.toggle("1");
		selection.toggle_all(&visible(&["1", "2", "3"]));
		assert_eq!(selection.len(), 3);
	}

	#[test]
	fn test_toggle_all_twice_yields_empty() {
		let mut selection = Selection::new();
		let ids = visible(&["1", "2"]);
		selection.toggle_all(&ids);
		selection.toggle_all(&ids);
		assert!(selection.is_empty());
	}
}
