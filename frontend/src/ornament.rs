use yew::prelude::*;

const FLOWER_PATH: &str = "M50 0C52.76 18.39 68.39 33.14 86.78 35.89C68.39 38.64 52.76 53.39 50 71.78C47.24 53.39 31.61 38.64 13.22 35.89C31.61 33.14 47.24 18.39 50 0ZM50 78.22C51.38 87.41 59.2 94.62 68.39 96C59.2 97.38 51.38 104.59 50 113.78C48.62 104.59 40.8 97.38 31.61 96C40.8 94.62 48.62 87.41 50 78.22Z";

const PETAL_COUNT: u32 = 12;

#[derive(Properties, PartialEq)]
pub struct FlowerProps {
	#[prop_or(48)]
	pub size: u32,
}

#[function_component(Flower)]
pub fn flower(props: &FlowerProps) -> Html {
	let size = props.size.to_string();
	html! {
		<svg viewBox="0 0 100 100" width={ size.clone() } height={ size } fill="currentColor">
			<path d={ FLOWER_PATH } />
		</svg>
	}
}

#[function_component(Divider)]
pub fn divider() -> Html {
	html! { <div class="divider" /> }
}

/// Flowers drifting down behind the cover. These are plain css animations, so they stop as soon
/// as the cover is gone.
#[function_component(Petals)]
pub fn petals() -> Html {
	(0..PETAL_COUNT).map(|i| {
		// spread them out so they don't all fall in a line
		let style = format!(
			"left: {}%; animation-duration: {}s; animation-delay: {}s;",
			(i * 37) % 100,
			15 + (i * 7) % 10,
			(i * 5) % 15
		);

		html! {
			<div class="petal" { style }>
				<Flower size={ 32 } />
			</div>
		}
	})
	.collect::<Html>()
}
