use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Interval;
use invitation_data::{compute_remaining, Remaining, TICK_MS};
use yew::prelude::*;

fn remaining_until(target: NaiveDateTime) -> Remaining {
	compute_remaining(target, Local::now().naive_local())
}

/// Recomputes the time left until `target` every second. The timer goes away when the component
/// using this is unmounted, or once the countdown hits zero.
#[hook]
fn use_remaining(target: NaiveDateTime) -> Remaining {
	let remaining = use_state_eq(|| remaining_until(target));
	let elapsed = remaining.is_elapsed();

	{
		let remaining = remaining.clone();
		// since `elapsed` is a dependency, flipping it runs the destructor below and drops the
		// interval from outside of its own callback
		use_effect_with((target, elapsed), move |&(target, elapsed)| {
			let interval = (!elapsed).then(|| Interval::new(TICK_MS, move ||
				remaining.set(remaining_until(target))
			));

			move || drop(interval)
		});
	}

	*remaining
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	pub target: NaiveDateTime,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
	let countdown = use_remaining(props.target).countdown();

	html! {
		<>
			<style>
			{
				"
				#countdown {
					display: flex;
					justify-content: center;
					gap: 12px;
					max-width: 28rem;
					margin: 0 auto;
					padding: 24px 0;
				}
				#countdown > .card {
					flex: 1;
					padding: 16px 8px;
					border-radius: 1rem;
				}
				#countdown .value {
					font-family: \"Cormorant Garamond\", serif;
					font-size: 2rem;
					font-weight: 600;
					color: var(--secondary);
					font-variant-numeric: tabular-nums;
				}
				"
			}
			</style>
			<div id="countdown">
			{
				countdown.units().into_iter().map(|(label, value)| html! {
					<div class="card reveal">
						<div class="value">{ value }</div>
						<div class="eyebrow">{ label }</div>
					</div>
				}).collect::<Html>()
			}
			</div>
		</>
	}
}
