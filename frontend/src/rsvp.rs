use std::rc::Rc;

use gloo_console::log;
use invitation_data::{Attendance, RsvpAction, RsvpDraft};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct RsvpForm(RsvpDraft);

impl Reducible for RsvpForm {
	type Action = RsvpAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut draft = self.0.clone();

		match draft.apply(action) {
			Ok(()) => Self(draft).into(),
			// the button is disabled when this would happen, but enter-to-submit can still get here
			Err(blocked) => {
				log!(format!("Not submitting rsvp yet: {blocked}"));
				self
			}
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct RsvpProps {
	/// What the name field starts out with
	pub guest_name: AttrValue,
}

#[function_component(RsvpSection)]
pub fn rsvp_section(props: &RsvpProps) -> Html {
	let form = use_reducer_eq(|| RsvpForm(RsvpDraft::seeded(props.guest_name.to_string())));
	let draft = &form.0;

	if draft.is_submitted() {
		let edit_form = form.clone();
		let edit_again = Callback::from(move |_| edit_form.dispatch(RsvpAction::EditAgain));

		return html! {
			<div class="card reveal" id="rsvp-thanks">
				<div id="rsvp-check">{ "✓" }</div>
				<h3 class="serif">{ format!("Terima Kasih, {}!", draft.guest_name) }</h3>
				<p>{ "Konfirmasi serta doa restu Anda telah kami terima dengan penuh rasa syukur." }</p>
				<button class="eyebrow" id="edit-again" onclick={ edit_again }>{ "Ubah Konfirmasi" }</button>
			</div>
		};
	}

	let name_form = form.clone();
	let name_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				name_form.dispatch(RsvpAction::GuestName(input.value()));
			}
	);

	let message_form = form.clone();
	let message_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
				message_form.dispatch(RsvpAction::Message(input.value()));
			}
	);

	let submit_form = form.clone();
	let on_submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();
		submit_form.dispatch(RsvpAction::Submit);
	});

	let choices = Attendance::CHOICES.into_iter().map(|choice| {
		let choice_form = form.clone();
		let onclick = Callback::from(move |_| choice_form.dispatch(RsvpAction::Attendance(choice)));
		let class = classes!("choice", (draft.attendance == choice).then_some("chosen"));

		html! {
			<button type="button" { class } { onclick }>{ choice.label() }</button>
		}
	}).collect::<Html>();

	html! {
		<>
			<style>
			{
				"
				#rsvp-form {
					display: flex;
					flex-direction: column;
					gap: 28px;
					text-align: left;
				}
				#rsvp-form label, #rsvp-form p {
					display: block;
					margin: 0 0 8px 4px;
				}
				#rsvp-form input, #rsvp-form textarea {
					width: 100%;
					padding: 16px;
					border: 1px solid rgba(184, 134, 11, 0.1);
					border-radius: 1rem;
					background-color: rgba(255, 255, 255, 0.6);
					color: var(--text);
					font-size: 16px;
					outline: none;
				}
				#rsvp-form textarea {
					font-style: italic;
					resize: vertical;
				}
				#choices {
					display: grid;
					grid-template-columns: repeat(3, 1fr);
					gap: 12px;
				}
				.choice {
					padding: 16px 4px;
					border: 1px solid rgba(184, 134, 11, 0.1);
					border-radius: 1rem;
					background-color: rgba(255, 255, 255, 0.5);
					font-size: 10px;
					font-weight: 600;
					letter-spacing: 0.15em;
					text-transform: uppercase;
					cursor: pointer;
				}
				.choice.chosen {
					border-color: var(--accent);
					background-color: rgba(184, 134, 11, 0.1);
				}
				#rsvp-check {
					font-size: 48px;
					color: var(--accent);
				}
				#edit-again {
					background: none;
					border: none;
					cursor: pointer;
				}
				"
			}
			</style>
			<div class="card reveal">
				<form id="rsvp-form" onsubmit={ on_submit }>
					<div>
						<label for="guest-name" class="serif">{ "Nama Lengkap" }</label>
						<input
							type="text"
							id="guest-name"
							placeholder="Ketik nama Anda..."
							value={ draft.guest_name.clone() }
							oninput={ name_input }
							required=true
						/>
					</div>
					<div>
						<p class="serif">{ "Konfirmasi Kehadiran" }</p>
						<div id="choices">{ choices }</div>
					</div>
					<div>
						<label for="guest-message" class="serif">{ "Doa Restu" }</label>
						<textarea
							id="guest-message"
							placeholder="Tulis doa restu Anda..."
							rows="4"
							value={ draft.message.clone() }
							oninput={ message_input }
							required=true
						/>
					</div>
					<button type="submit" class="pill" disabled={ draft.check().is_err() }>
						{ "Kirim Konfirmasi" }
					</button>
				</form>
			</div>
		</>
	}
}
