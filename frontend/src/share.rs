use gloo_console::log;
use invitation_data::{EventConfig, ShareRequest};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Builds the personalised message for `request` and hands it to WhatsApp in a new tab. We don't
/// get to know whether that actually went anywhere.
fn send_whatsapp(request: &ShareRequest, config: &EventConfig) {
	let Some(window) = web_sys::window() else {
		log!("No window to share from");
		return;
	};

	let page_url = match window.location().href() {
		Ok(href) => href,
		Err(e) => {
			log!(format!("Couldn't read the current url: {e:?}"));
			return;
		}
	};

	let share = match request.build(&page_url, config) {
		Ok(share) => share,
		Err(e) => {
			log!(format!("Couldn't build the share link: {e}"));
			return;
		}
	};

	if let Err(e) = window.open_with_url_and_target(&share.message.whatsapp_link(), "_blank") {
		log!(format!("Couldn't open WhatsApp: {e:?}"));
	}
}

#[derive(Properties, PartialEq)]
pub struct ShareProps {
	pub config: &'static EventConfig,
}

#[function_component(ShareSection)]
pub fn share_section(props: &ShareProps) -> Html {
	let request = use_state(ShareRequest::default);

	let input_request = request.clone();
	let name_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				input_request.set(ShareRequest::new(input.value()));
			}
	);

	let config = props.config;
	let click_request = request.clone();
	let share_click = Callback::from(move |_| send_whatsapp(&click_request, config));

	html! {
		<>
			<style>
			{
				"
				#share-card {
					display: flex;
					flex-direction: column;
					gap: 24px;
					max-width: 28rem;
				}
				#share-card input {
					width: 100%;
					padding: 16px;
					border: 1px solid rgba(184, 134, 11, 0.1);
					border-radius: 1rem;
					background-color: rgba(255, 255, 255, 0.6);
					font-family: \"Cormorant Garamond\", serif;
					font-style: italic;
					font-size: 16px;
					outline: none;
				}
				#whatsapp {
					background-color: #25d366;
				}
				#share-ready {
					margin: 0;
					padding: 8px;
					border-radius: 0.75rem;
					background-color: rgba(184, 134, 11, 0.05);
					color: var(--accent);
					font-size: 9px;
					font-weight: 600;
					letter-spacing: 0.2em;
					text-transform: uppercase;
				}
				"
			}
			</style>
			<div class="card reveal" id="share-card">
				<div>
					<h3 class="serif">{ "Bagikan Undangan" }</h3>
					<p class="serif">
						{ "Gunakan kolom di bawah ini untuk mengirimkan undangan resmi secara personal via WhatsApp." }
					</p>
				</div>
				<input
					type="text"
					placeholder="Ketik Nama Tamu..."
					value={ request.invitee_name.clone() }
					oninput={ name_input }
				/>
				<button class="pill" id="whatsapp" onclick={ share_click }>{ "Kirim Undangan WhatsApp" }</button>
				{
					if request.invitee_name.is_empty() {
						html! {}
					} else {
						html! {
							<p id="share-ready">
								{ format!("Undangan atas nama \"{}\" siap dikirim", request.invitee_name) }
							</p>
						}
					}
				}
			</div>
		</>
	}
}
