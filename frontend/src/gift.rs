use gloo_console::log;
use invitation_data::PaymentAccount;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

// `navigator.clipboard` is still behind web_sys_unstable_apis on some web-sys versions, so we just
// go through js directly
async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
	let navigator = web_sys::window()
		.ok_or_else(|| JsValue::from_str("there's no window"))?
		.navigator();

	let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
	let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
		.dyn_into::<Function>()?;
	let promise = write_text.call1(&clipboard, &JsValue::from_str(text))?
		.dyn_into::<Promise>()?;

	JsFuture::from(promise).await.map(|_| ())
}

#[derive(Properties, PartialEq)]
pub struct GiftProps {
	pub accounts: &'static [PaymentAccount],
}

#[function_component(GiftSection)]
pub fn gift_section(props: &GiftProps) -> Html {
	let accounts = props.accounts.iter().map(|account| {
		let number = account.number.clone();
		let copy_click = Callback::from(move |_| {
			let number = number.clone();
			wasm_bindgen_futures::spawn_local(async move {
				if let Err(e) = copy_to_clipboard(&number).await {
					log!(format!("Couldn't copy {number} to the clipboard: {e:?}"));
				}
			});
		});

		html! {
			<div class="card account">
				<div class="eyebrow">{ format!("Transfer {}", account.bank_name) }</div>
				<h3 class="account-number">{ &account.number }</h3>
				<p class="serif">{ format!("a.n {}", account.account_name) }</p>
				<div class="account-actions">
					<button class="pill outline" onclick={ copy_click }>
						{ format!("Salin Nomor {}", account.bank_name) }
					</button>
					<a class="pill" href={ account.link.clone() } target="_blank" rel="noopener noreferrer">
						{ format!("Kirim via {}", account.bank_name) }
					</a>
				</div>
			</div>
		}
	}).collect::<Html>();

	html! {
		<>
			<style>
			{
				"
				#accounts {
					display: flex;
					flex-direction: column;
					gap: 32px;
				}
				.account {
					max-width: 28rem;
				}
				.account-number {
					margin: 8px 0;
					font-family: \"Cormorant Garamond\", serif;
					font-size: 2rem;
					color: var(--secondary);
					font-variant-numeric: tabular-nums;
				}
				.account-actions {
					display: flex;
					flex-direction: column;
					gap: 12px;
					margin-top: 32px;
				}
				"
			}
			</style>
			<h2 class="serif">{ "Tanda Kasih" }</h2>
			<p>
				{ "Kado paling utama adalah doa restu Anda. Namun jika ingin memberikan tanda kasih, dapat melalui:" }
			</p>
			<div id="accounts" class="reveal">{ accounts }</div>
		</>
	}
}
