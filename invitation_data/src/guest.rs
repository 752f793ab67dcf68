use url::form_urlencoded;

/// Who the page greets when we weren't given a name
pub const DEFAULT_HONORIFIC: &str = "Tamu Undangan";

/// The query parameter that carries the guest's name, with underscores standing in for spaces
pub const GUEST_PARAM: &str = "to";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guest {
	display_name: String,
}

impl Guest {
	/// Reads the guest's name out of a query string (with or without the leading `?`). Anything
	/// missing or empty just falls back to [`DEFAULT_HONORIFIC`].
	#[must_use]
	pub fn from_query(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);

		// like URLSearchParams.get, the first one wins
		let display_name = form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == GUEST_PARAM)
			.map(|(_, value)| value)
			.filter(|value| !value.is_empty())
			.map_or_else(|| DEFAULT_HONORIFIC.to_string(), |value| value.replace('_', " "));

		Self { display_name }
	}

	/// The name to show on the cover, e.g. "Budi Santoso" or "Tamu Undangan"
	#[must_use]
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// What the RSVP form's name field should start out with. We don't want to pre-fill the
	/// honorific as if it were somebody's name.
	#[must_use]
	pub fn rsvp_name(&self) -> &str {
		if self.display_name == DEFAULT_HONORIFIC {
			""
		} else {
			&self.display_name
		}
	}
}

impl Default for Guest {
	fn default() -> Self {
		Self { display_name: DEFAULT_HONORIFIC.to_string() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn underscores_become_spaces() {
		let guest = Guest::from_query("?to=Budi_Santoso");
		assert_eq!(guest.display_name(), "Budi Santoso");
		assert_eq!(guest.rsvp_name(), "Budi Santoso");
	}

	#[test]
	fn missing_name_uses_honorific() {
		for query in ["", "?", "?from=someone", "?to="] {
			let guest = Guest::from_query(query);
			assert_eq!(guest.display_name(), DEFAULT_HONORIFIC, "query {query:?}");
			assert_eq!(guest.rsvp_name(), "", "query {query:?}");
		}

		assert_eq!(Guest::default(), Guest::from_query(""));
	}

	#[test]
	fn spelled_out_honorific_is_not_a_name() {
		let guest = Guest::from_query("to=Tamu_Undangan");
		assert_eq!(guest.display_name(), "Tamu Undangan");
		assert_eq!(guest.rsvp_name(), "");
	}

	#[test]
	fn percent_encoding_is_decoded() {
		assert_eq!(Guest::from_query("?to=Siti%20N.%27Aini").display_name(), "Siti N.'Aini");
		assert_eq!(Guest::from_query("?to=Zo%C3%AB+Ann").display_name(), "Zoë Ann");
	}

	#[test]
	fn first_parameter_wins() {
		let guest = Guest::from_query("?utm=wa&to=Dewi__Lestari&to=Other");
		assert_eq!(guest.display_name(), "Dewi  Lestari");
	}
}
