use gloo_console::log;
use invitation_data::{EventConfig, Guest, Honoree, Venue};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
	countdown::CountdownTimer,
	cover::Cover,
	gift::GiftSection,
	ornament::{Divider, Flower},
	rsvp::RsvpSection,
	scroll::{scroll_to_top, ScrollTopButton},
	share::ShareSection,
	style::SharedStyle,
};

#[function_component(InvitationPage)]
pub fn invitation_page() -> Html {
	// The guest's name only gets read once, when the page is first loaded
	let location = use_location();
	let guest = use_state(|| location.map_or_else(Guest::default, |loc| Guest::from_query(loc.query_str())));
	let opened = use_state(|| false);

	let config = match EventConfig::embedded() {
		Ok(config) => config,
		Err(e) => {
			log!(format!("Couldn't load the wedding details: {e}"));
			return html! {
				<>
					<SharedStyle />
					<section><p>{ "Maaf, undangan ini tidak dapat dimuat." }</p></section>
				</>
			};
		}
	};

	let open_opened = opened.clone();
	let on_open = Callback::from(move |()| {
		open_opened.set(true);
		scroll_to_top();
	});

	html! {
		<>
			<SharedStyle />
			if *opened {
				<InvitationBody { config } guest_name={ guest.rsvp_name().to_string() } />
			} else {
				<Cover
					couple={ config.couple() }
					guest={ guest.display_name().to_string() }
					{ on_open }
				/>
			}
		</>
	}
}

#[derive(Properties, PartialEq)]
struct BodyProps {
	config: &'static EventConfig,
	guest_name: AttrValue,
}

#[function_component(InvitationBody)]
fn invitation_body(props: &BodyProps) -> Html {
	let config = props.config;

	html! {
		<>
			<style>
			{
				"
				#hero {
					min-height: 100vh;
					display: flex;
					flex-direction: column;
					justify-content: center;
				}
				#hero h1 {
					font-size: 5.5rem;
					margin: 0;
				}
				#hero .amp {
					font-size: 2rem;
					color: var(--accent);
					margin: 16px 0;
				}
				#headline-date {
					font-family: \"Cormorant Garamond\", serif;
					font-size: 1.5rem;
					letter-spacing: 0.4em;
					color: var(--secondary);
				}
				#quote {
					max-width: 42rem;
					margin: 0 auto;
					font-size: 1.5rem;
					line-height: 1.6;
				}
				.honoree h3 {
					font-size: 3.5rem;
					margin: 0 0 32px 0;
				}
				.honoree .parents {
					font-family: \"Cormorant Garamond\", serif;
					font-size: 1.25rem;
					font-style: italic;
				}
				#venues {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
					gap: 40px;
					margin-top: 64px;
				}
				.venue .place {
					padding-top: 24px;
					border-top: 1px solid rgba(184, 134, 11, 0.15);
				}
				.venue .address {
					font-size: 10px;
					letter-spacing: 0.1em;
					text-transform: uppercase;
					opacity: 0.6;
				}
				footer {
					padding: 128px 24px;
					background-color: var(--light);
					text-align: center;
					border-top: 1px solid rgba(184, 134, 11, 0.1);
				}
				footer h2 {
					font-size: 4.5rem;
					color: var(--accent);
				}
				footer svg {
					color: var(--accent);
					opacity: 0.2;
				}
				"
			}
			</style>
			<ScrollTopButton />

			<section id="hero">
				<div class="eyebrow">{ "Wedding" }</div>
				<div class="reveal">
					<h1 class="script">{ &config.groom.nickname }</h1>
					<div class="serif amp">{ "&" }</div>
					<h1 class="script">{ &config.bride.nickname }</h1>
				</div>
				<Divider />
				<p id="headline-date">{ config.event.headline_date() }</p>
			</section>

			<section class="light">
				<div id="quote" class="serif reveal">
					<p>{ format!("\"{}\"", config.quote.text) }</p>
					<Divider />
					<p class="eyebrow">{ format!("— {}", config.quote.source) }</p>
				</div>
			</section>

			<section>
				<div class="reveal">
					<p class="eyebrow">{ "Assalamualaikum Warahmatullahi Wabarakatuh" }</p>
					<p class="serif">
						{ "Dengan memohon ridho Allah SWT, kami mengundang Anda untuk merayakan pernikahan suci kami:" }
					</p>
				</div>
				<HonoreeCard honoree={ config.groom.clone() } relation="Putra Dari" />
				<Divider />
				<HonoreeCard honoree={ config.bride.clone() } relation="Putri Dari" />
			</section>

			<section class="light">
				<h2 class="serif">{ "Momen Bahagia" }</h2>
				<CountdownTimer target={ config.event.date } />
				<div id="venues">
				{
					config.event.venues().into_iter().map(|(title, venue)| html! {
						<VenueCard { title } venue={ venue.clone() } />
					}).collect::<Html>()
				}
				</div>
			</section>

			<section>
				<GiftSection accounts={ config.payment.accounts.as_slice() } />
			</section>

			<section class="light">
				<h2 class="serif">{ "Buku Tamu" }</h2>
				<RsvpSection guest_name={ props.guest_name.clone() } />
			</section>

			<section>
				<h2 class="serif">{ "Bagikan Kabar Bahagia" }</h2>
				<ShareSection { config } />
			</section>

			<footer>
				<h2 class="script">{ config.couple() }</h2>
				<Divider />
				<p class="serif">
					{ "Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila Bapak/Ibu/Saudara/i berkenan hadir untuk memberikan doa restu kepada kami." }
				</p>
				<Flower />
				<p class="eyebrow">{ "Wassalamualaikum Warahmatullahi Wabarakatuh" }</p>
			</footer>
		</>
	}
}

#[derive(Properties, PartialEq)]
struct HonoreeProps {
	honoree: Honoree,
	relation: AttrValue,
}

#[function_component(HonoreeCard)]
fn honoree_card(props: &HonoreeProps) -> Html {
	let honoree = &props.honoree;

	html! {
		<div class="honoree reveal">
			<h3 class="script">{ &honoree.full_name }</h3>
			<p class="eyebrow">{ &props.relation }</p>
			<div class="parents">
				<p>{ &honoree.father }</p>
				<p class="eyebrow">{ "dan" }</p>
				<p>{ &honoree.mother }</p>
			</div>
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct VenueProps {
	title: AttrValue,
	venue: Venue,
}

#[function_component(VenueCard)]
fn venue_card(props: &VenueProps) -> Html {
	let venue = &props.venue;

	html! {
		<div class="card venue reveal">
			<h3 class="serif">{ &props.title }</h3>
			<p>{ &venue.day_date }</p>
			<p>{ &venue.time }</p>
			<div class="place">
				<p class="serif">{ &venue.location }</p>
				<p class="address">{ &venue.address }</p>
			</div>
			<a class="pill" href={ venue.map_link.clone() } target="_blank" rel="noopener noreferrer">
				{ "Peta Lokasi" }
			</a>
		</div>
	}
}
