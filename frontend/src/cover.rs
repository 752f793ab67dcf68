use yew::prelude::*;
use crate::ornament::{Flower, Petals};

#[derive(Properties, PartialEq)]
pub struct CoverProps {
	pub couple: AttrValue,
	pub guest: AttrValue,
	pub on_open: Callback<()>,
}

#[function_component(Cover)]
pub fn cover(props: &CoverProps) -> Html {
	let on_open = props.on_open.reform(|_: MouseEvent| ());

	html! {
		<>
			<style>
			{
				"
				#cover {
					position: fixed;
					inset: 0;
					z-index: 100;
					display: flex;
					flex-direction: column;
					align-items: center;
					justify-content: center;
					padding: 32px;
					background-color: var(--primary);
					text-align: center;
					overflow: hidden;
				}
				#cover-content {
					z-index: 10;
					max-width: 32rem;
					width: 100%;
				}
				#cover-content > svg {
					color: var(--accent);
					opacity: 0.2;
					animation: spin 40s linear infinite;
				}
				#cover h1 {
					font-size: 4rem;
					margin: 24px 0;
				}
				#special-for {
					padding: 32px 0;
					margin: 0 auto 48px auto;
					max-width: 20rem;
					border-top: 1px solid rgba(184, 134, 11, 0.1);
					border-bottom: 1px solid rgba(184, 134, 11, 0.1);
				}
				#special-for h3 {
					font-size: 2rem;
					margin: 16px 0 0 0;
				}
				@keyframes spin {
					to { transform: rotate(360deg); }
				}
				"
			}
			</style>
			<div id="cover">
				<Petals />
				<div id="cover-content" class="reveal">
					<Flower size={ 72 } />
					<div class="eyebrow">{ "Wedding Celebration" }</div>
					<h1 class="script">{ &props.couple }</h1>
					<div id="special-for">
						<div class="eyebrow">{ "Spesial Untuk:" }</div>
						<h3 class="serif">{ &props.guest }</h3>
					</div>
					<button class="pill" onclick={ on_open }>{ "♥ Buka Undangan" }</button>
				</div>
			</div>
		</>
	}
}
