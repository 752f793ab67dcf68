use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::{config::EventConfig, guest::GUEST_PARAM};

/// Everything `encodeURIComponent` would escape
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

const WHATSAPP_SEND: &str = "https://wa.me/?text=";

/// Used in the message when the invitee field is left blank
pub const GENERIC_INVITEE: &str = "Bapak/Ibu/Saudara/i";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
	#[error("Couldn't parse the page's own url: {0}")]
	PageUrl(#[from] url::ParseError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareRequest {
	pub invitee_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
	pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
	pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
	pub link: ShareLink,
	pub message: ShareMessage,
}

impl ShareRequest {
	#[must_use]
	pub fn new(invitee_name: impl Into<String>) -> Self {
		Self { invitee_name: invitee_name.into() }
	}

	/// The name as it goes into the url: trimmed, with each run of whitespace turned into a
	/// single underscore. Empty if there's nothing but whitespace.
	#[must_use]
	pub fn slug(&self) -> String {
		self.invitee_name
			.split_whitespace()
			.collect::<Vec<_>>()
			.join("_")
	}

	/// The name as it's written in the message
	#[must_use]
	pub fn display_name(&self) -> &str {
		match self.invitee_name.trim() {
			"" => GENERIC_INVITEE,
			name => name,
		}
	}

	/// `page_url` with its query and fragment dropped and the invitee's name attached as the only
	/// parameter
	pub fn link(&self, page_url: &str) -> Result<ShareLink, ShareError> {
		let mut url = Url::parse(page_url)?;
		url.set_query(None);
		url.set_fragment(None);

		let slug = self.slug();
		if !slug.is_empty() {
			url.query_pairs_mut().append_pair(GUEST_PARAM, &slug);
		}

		Ok(ShareLink { url: url.into() })
	}

	pub fn build(&self, page_url: &str, config: &EventConfig) -> Result<Share, ShareError> {
		let link = self.link(page_url)?;
		let message = ShareMessage::compose(self.display_name(), &link, config);
		Ok(Share { link, message })
	}
}

impl ShareMessage {
	#[must_use]
	pub fn compose(name: &str, link: &ShareLink, config: &EventConfig) -> Self {
		let url = &link.url;
		let groom = &config.groom.nickname;
		let bride = &config.bride.nickname;

		// Keep this word-for-word. It's a formal invitation and people notice when it changes
		let text = format!("Assalamu'alaikum Warahmatullahi Wabarakatuh.

Tanpa mengurangi rasa hormat, perkenankan kami mengundang Bapak/Ibu/Saudara/i {name} untuk merayakan hari bahagia kami.

Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila Bapak/Ibu/Saudara/i berkenan hadir untuk memberikan doa restu.

Informasi lengkap mengenai acara dapat dilihat melalui tautan undangan digital di bawah ini:
{url}

Atas perhatian dan kehadirannya, kami ucapkan banyak terima kasih.
Wassalamu'alaikum Warahmatullahi Wabarakatuh.

Kami yang berbahagia,
{groom} & {bride}");

		Self { text }
	}

	/// A wa.me link that opens WhatsApp with this message ready to send
	#[must_use]
	pub fn whatsapp_link(&self) -> String {
		format!("{WHATSAPP_SEND}{}", utf8_percent_encode(&self.text, URI_COMPONENT))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use percent_encoding::percent_decode_str;
	use pretty_assertions::assert_eq;

	fn config() -> &'static EventConfig {
		EventConfig::embedded().unwrap()
	}

	#[test]
	fn name_goes_in_the_query() {
		let link = ShareRequest::new("Budi Santoso").link("https://x.test/").unwrap();
		assert_eq!(link.url, "https://x.test/?to=Budi_Santoso");
	}

	#[test]
	fn empty_name_leaves_url_alone() {
		assert_eq!(ShareRequest::new("").link("https://x.test/").unwrap().url, "https://x.test/");
		assert_eq!(ShareRequest::new(" \t ").link("https://x.test/").unwrap().url, "https://x.test/");
	}

	#[test]
	fn whitespace_runs_collapse() {
		let request = ShareRequest::new("  Dewi \t  Ayu   Lestari ");
		assert_eq!(request.slug(), "Dewi_Ayu_Lestari");
		assert_eq!(request.display_name(), "Dewi \t  Ayu   Lestari");
	}

	#[test]
	fn existing_query_and_fragment_are_dropped() {
		let link = ShareRequest::new("Ani")
			.link("https://undangan.test/bagas-lutvi?to=Someone_Else&x=1#rsvp")
			.unwrap();
		assert_eq!(link.url, "https://undangan.test/bagas-lutvi?to=Ani");
	}

	#[test]
	fn unsafe_characters_are_escaped() {
		let link = ShareRequest::new("Ani & Co").link("https://x.test/").unwrap();
		assert_eq!(link.url, "https://x.test/?to=Ani_%26_Co");
	}

	#[test]
	fn bad_page_url_is_an_error() {
		assert!(matches!(ShareRequest::new("Ani").link("not a url"), Err(ShareError::PageUrl(_))));
	}

	#[test]
	fn message_has_every_substitution() {
		let share = ShareRequest::new(" Budi Santoso ").build("https://x.test/", config()).unwrap();
		let text = &share.message.text;

		assert!(text.starts_with("Assalamu'alaikum Warahmatullahi Wabarakatuh.\n\n"));
		assert!(text.contains("mengundang Bapak/Ibu/Saudara/i Budi Santoso untuk merayakan"));
		assert!(text.contains("di bawah ini:\nhttps://x.test/?to=Budi_Santoso\n\nAtas perhatian"));
		assert!(text.ends_with("Kami yang berbahagia,\nBagas & Lutvi"));
	}

	#[test]
	fn blank_invitee_gets_generic_name() {
		let share = ShareRequest::default().build("https://x.test/", config()).unwrap();
		assert_eq!(share.link.url, "https://x.test/");
		assert!(share.message.text.contains("mengundang Bapak/Ibu/Saudara/i Bapak/Ibu/Saudara/i untuk"));
	}

	#[test]
	fn whatsapp_link_round_trips() {
		let share = ShareRequest::new("Ani").build("https://x.test/", config()).unwrap();
		let link = share.message.whatsapp_link();

		let encoded = link.strip_prefix(WHATSAPP_SEND).unwrap();
		assert!(!encoded.contains([' ', '\n', '&', '/', ':', '?', '=']));
		assert!(encoded.starts_with("Assalamu'alaikum%20Warahmatullahi"));
		assert_eq!(percent_decode_str(encoded).decode_utf8().unwrap(), share.message.text);
	}
}
