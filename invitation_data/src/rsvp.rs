#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attendance {
	#[default]
	Unset,
	Accepted,
	Maybe,
	Declined,
}

impl Attendance {
	/// The options a guest can pick between, in the order they're shown
	pub const CHOICES: [Self; 3] = [Self::Accepted, Self::Maybe, Self::Declined];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Unset => "Belum Dipilih",
			Self::Accepted => "Hadir",
			Self::Maybe => "Ragu",
			Self::Declined => "Tidak Hadir",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RsvpPhase {
	#[default]
	Editing,
	// nothing leaves the page when we get here. it's just a thank-you screen
	Submitted,
}

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
	#[error("no attendance option has been chosen")]
	NoAttendance,
	#[error("the guest name is empty")]
	EmptyName,
	#[error("the message is empty")]
	EmptyMessage,
}

#[derive(Debug)]
pub enum RsvpAction {
	GuestName(String),
	Attendance(Attendance),
	Message(String),
	Submit,
	EditAgain,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpDraft {
	pub guest_name: String,
	pub attendance: Attendance,
	pub message: String,
	phase: RsvpPhase,
}

impl RsvpDraft {
	/// A fresh draft with the guest's name already filled in (or left empty if we don't know it)
	#[must_use]
	pub fn seeded(guest_name: impl Into<String>) -> Self {
		Self { guest_name: guest_name.into(), ..Self::default() }
	}

	#[must_use]
	pub fn phase(&self) -> RsvpPhase {
		self.phase
	}

	#[must_use]
	pub fn is_submitted(&self) -> bool {
		self.phase == RsvpPhase::Submitted
	}

	/// Checks whether [`Self::submit`] would go through, without doing anything. Whitespace counts
	/// as content here, same as the browser's `required` check on the inputs.
	pub fn check(&self) -> Result<(), SubmitBlocked> {
		if self.attendance == Attendance::Unset {
			Err(SubmitBlocked::NoAttendance)
		} else if self.guest_name.is_empty() {
			Err(SubmitBlocked::EmptyName)
		} else if self.message.is_empty() {
			Err(SubmitBlocked::EmptyMessage)
		} else {
			Ok(())
		}
	}

	/// Moves to [`RsvpPhase::Submitted`] if every field is filled in. If not, the draft is left
	/// exactly as it was.
	pub fn submit(&mut self) -> Result<(), SubmitBlocked> {
		self.check()?;
		self.phase = RsvpPhase::Submitted;
		Ok(())
	}

	/// Goes back to editing, keeping everything that was typed in before
	pub fn edit_again(&mut self) {
		self.phase = RsvpPhase::Editing;
	}

	pub fn apply(&mut self, action: RsvpAction) -> Result<(), SubmitBlocked> {
		match action {
			RsvpAction::GuestName(name) => self.guest_name = name,
			RsvpAction::Attendance(attendance) => self.attendance = attendance,
			RsvpAction::Message(message) => self.message = message,
			RsvpAction::Submit => return self.submit(),
			RsvpAction::EditAgain => self.edit_again(),
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn filled(attendance: Attendance) -> RsvpDraft {
		let mut draft = RsvpDraft::seeded("Ani");
		draft.apply(RsvpAction::Attendance(attendance)).unwrap();
		draft.apply(RsvpAction::Message("Selamat!".into())).unwrap();
		draft
	}

	#[test]
	fn starts_out_editing() {
		let draft = RsvpDraft::seeded("Budi Santoso");
		assert_eq!(draft.guest_name, "Budi Santoso");
		assert_eq!(draft.attendance, Attendance::Unset);
		assert_eq!(draft.message, "");
		assert_eq!(draft.phase(), RsvpPhase::Editing);
	}

	#[test]
	fn unset_attendance_blocks_submission() {
		let mut draft = filled(Attendance::Unset);
		let before = draft.clone();

		assert_eq!(draft.apply(RsvpAction::Submit), Err(SubmitBlocked::NoAttendance));
		assert_eq!(draft, before);
		assert!(!draft.is_submitted());
	}

	#[test]
	fn empty_fields_block_submission() {
		let mut draft = filled(Attendance::Maybe);
		draft.apply(RsvpAction::GuestName(String::new())).unwrap();
		assert_eq!(draft.submit(), Err(SubmitBlocked::EmptyName));
		assert_eq!(draft.phase(), RsvpPhase::Editing);

		let mut draft = filled(Attendance::Declined);
		draft.apply(RsvpAction::Message(String::new())).unwrap();
		assert_eq!(draft.submit(), Err(SubmitBlocked::EmptyMessage));
		assert_eq!(draft.phase(), RsvpPhase::Editing);
	}

	#[test]
	fn complete_draft_submits() {
		let mut draft = filled(Attendance::Accepted);
		assert_eq!(draft.check(), Ok(()));
		assert_eq!(draft.apply(RsvpAction::Submit), Ok(()));
		assert_eq!(draft.phase(), RsvpPhase::Submitted);
	}

	#[test]
	fn editing_again_keeps_fields() {
		let mut draft = filled(Attendance::Accepted);
		draft.submit().unwrap();
		draft.apply(RsvpAction::EditAgain).unwrap();

		assert_eq!(draft.phase(), RsvpPhase::Editing);
		assert_eq!(draft.guest_name, "Ani");
		assert_eq!(draft.message, "Selamat!");
		assert_eq!(draft.attendance, Attendance::Accepted);

		// and it can go right back through
		assert_eq!(draft.submit(), Ok(()));
	}

	#[test]
	fn choices_are_in_display_order() {
		let labels = Attendance::CHOICES.map(Attendance::label);
		assert_eq!(labels, ["Hadir", "Ragu", "Tidak Hadir"]);
	}
}
