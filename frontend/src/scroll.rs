use gloo_console::log;
use invitation_data::shows_scroll_up;
use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;

pub fn scroll_to_top() {
	if let Some(window) = web_sys::window() {
		// the smoothing comes from `scroll-behavior` in the shared css
		window.scroll_to_with_x_and_y(0.0, 0.0);
	}
}

/// Whether the guest has scrolled far enough down to want a way back up. The listener is removed
/// again when the component goes away.
#[hook]
fn use_scrolled_down() -> bool {
	let scrolled = use_state_eq(|| false);

	{
		let scrolled = scrolled.clone();
		use_effect_with((), move |_| {
			let listener = web_sys::window().map(|window| {
				let callback = Closure::<dyn Fn()>::new(move ||
					if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
						scrolled.set(shows_scroll_up(y));
					}
				);

				if let Err(e) = window.add_event_listener_with_callback(
					"scroll",
					callback.as_ref().unchecked_ref()
				) {
					log!(format!("Couldn't listen for scrolling: {e:?}"));
				}

				(window, callback)
			});

			move || if let Some((window, callback)) = listener {
				_ = window.remove_event_listener_with_callback(
					"scroll",
					callback.as_ref().unchecked_ref()
				);
			}
		});
	}

	*scrolled
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
	let visible = use_scrolled_down();
	let onclick = Callback::from(|_| scroll_to_top());

	html! {
		<>
			<style>
			{
				"
				#scroll-top {
					position: fixed;
					bottom: 32px;
					right: 32px;
					z-index: 50;
					width: 56px;
					height: 56px;
					padding: 0;
					font-size: 20px;
					transition: opacity 0.3s linear;
				}
				#scroll-top.hidden {
					opacity: 0;
					pointer-events: none;
				}
				"
			}
			</style>
			<button id="scroll-top" class={ classes!("pill", (!visible).then_some("hidden")) } { onclick }>
				{ "⌃" }
			</button>
		</>
	}
}
