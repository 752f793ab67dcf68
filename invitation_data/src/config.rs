use std::sync::OnceLock;

use chrono::{Datelike, NaiveDateTime};
use serde::Deserialize;

static WEDDING_JSON: &str = include_str!("../wedding.json");

const MONTHS: [&str; 12] = [
	"JANUARI", "FEBRUARI", "MARET", "APRIL", "MEI", "JUNI",
	"JULI", "AGUSTUS", "SEPTEMBER", "OKTOBER", "NOVEMBER", "DESEMBER"
];

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("Couldn't parse the wedding details: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("The wedding details are missing a value for `{0}`")]
	Empty(&'static str),
}

/// Everything the page shows about the wedding itself. This is loaded once and never changes
/// afterwards.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventConfig {
	pub groom: Honoree,
	pub bride: Honoree,
	pub event: Schedule,
	pub payment: Payment,
	pub quote: Quote,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Honoree {
	pub nickname: String,
	pub full_name: String,
	pub father: String,
	pub mother: String,
	pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
	// this is local time for whoever's looking at the page, same as the printed invitations
	pub date: NaiveDateTime,
	pub akad: Venue,
	pub resepsi: Venue,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
	pub day_date: String,
	pub time: String,
	pub location: String,
	pub address: String,
	pub map_link: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Payment {
	pub accounts: Vec<PaymentAccount>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
	pub bank_name: String,
	pub number: String,
	pub account_name: String,
	pub link: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Quote {
	pub text: String,
	pub source: String,
}

impl EventConfig {
	/// The details compiled into the page from `wedding.json`. Parsing only happens the first time
	/// this is called.
	pub fn embedded() -> Result<&'static Self, &'static ConfigError> {
		static CONFIG: OnceLock<Result<EventConfig, ConfigError>> = OnceLock::new();

		CONFIG.get_or_init(|| Self::from_json(WEDDING_JSON))
			.as_ref()
	}

	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.groom.nickname.trim().is_empty() {
			return Err(ConfigError::Empty("groom.nickname"));
		}

		if self.bride.nickname.trim().is_empty() {
			return Err(ConfigError::Empty("bride.nickname"));
		}

		if self.payment.accounts.iter().any(|acct| acct.number.trim().is_empty()) {
			return Err(ConfigError::Empty("payment.accounts.number"));
		}

		Ok(())
	}

	/// "Bagas & Lutvi"
	#[must_use]
	pub fn couple(&self) -> String {
		format!("{} & {}", self.groom.nickname, self.bride.nickname)
	}
}

impl Schedule {
	/// The big date under the names on the hero section, e.g. `31 JANUARI 2026`
	#[must_use]
	pub fn headline_date(&self) -> String {
		let month = MONTHS[self.date.month0() as usize];
		format!("{} {month} {}", self.date.day(), self.date.year())
	}

	#[must_use]
	pub fn venues(&self) -> [(&'static str, &Venue); 2] {
		[("Akad Nikah", &self.akad), ("Resepsi", &self.resepsi)]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use pretty_assertions::assert_eq;

	#[test]
	fn embedded_config_loads() {
		let config = EventConfig::embedded().expect("wedding.json should always be valid");

		assert_eq!(config.couple(), "Bagas & Lutvi");
		assert_eq!(
			config.event.date,
			NaiveDate::from_ymd_opt(2026, 1, 31).unwrap().and_hms_opt(8, 0, 0).unwrap()
		);
		assert_eq!(config.payment.accounts.len(), 2);
		assert_eq!(config.payment.accounts[1].account_name, "Lutvi Amalia");
		assert_eq!(config.event.akad.map_link, "https://maps.app.goo.gl/B7BjSzbXwyX2Jjoo7?g_st=ac");
		assert_eq!(config.quote.source, "QS. Ar-Rum: 21");
	}

	#[test]
	fn headline_date_is_indonesian() {
		let config = EventConfig::embedded().unwrap();
		assert_eq!(config.event.headline_date(), "31 JANUARI 2026");

		let mut schedule = config.event.clone();
		schedule.date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap().and_hms_opt(0, 0, 0).unwrap();
		assert_eq!(schedule.headline_date(), "7 AGUSTUS 2025");
	}

	#[test]
	fn venues_keep_their_order() {
		let config = EventConfig::embedded().unwrap();
		let titles = config.event.venues().map(|(title, _)| title);
		assert_eq!(titles, ["Akad Nikah", "Resepsi"]);
	}

	#[test]
	fn bad_json_is_a_parse_error() {
		assert!(matches!(EventConfig::from_json("{ \"groom\": 3 }"), Err(ConfigError::Parse(_))));
	}

	#[test]
	fn empty_nickname_is_rejected() {
		let json = WEDDING_JSON.replacen("\"nickname\": \"Lutvi\"", "\"nickname\": \"  \"", 1);
		assert!(matches!(EventConfig::from_json(&json), Err(ConfigError::Empty("bride.nickname"))));
	}

	#[test]
	fn empty_account_number_is_rejected() {
		let json = WEDDING_JSON.replacen("\"number\": \"085701224117\"", "\"number\": \"\"", 1);
		assert!(matches!(
			EventConfig::from_json(&json),
			Err(ConfigError::Empty("payment.accounts.number"))
		));
	}
}
