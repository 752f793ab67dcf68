use yew_router::prelude::*;
use yew::prelude::*;
use invitation::InvitationPage;

mod invitation;
mod cover;
mod countdown;
mod gift;
mod rsvp;
mod share;
mod scroll;
mod ornament;
mod style;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	// the whole thing is one page, so wherever it's hosted, that's where it lives
	#[not_found]
	#[at("/")]
	Invitation,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Invitation => html! { <InvitationPage /> },
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
