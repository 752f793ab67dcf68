mod config;
mod countdown;
mod guest;
mod rsvp;
mod share;

pub use config::{ConfigError, EventConfig, Honoree, Payment, PaymentAccount, Quote, Schedule, Venue};
pub use countdown::{Countdown, Remaining, TICK_MS, compute_remaining};
pub use guest::{DEFAULT_HONORIFIC, GUEST_PARAM, Guest};
pub use rsvp::{Attendance, RsvpAction, RsvpDraft, RsvpPhase, SubmitBlocked};
pub use share::{GENERIC_INVITEE, Share, ShareError, ShareLink, ShareMessage, ShareRequest};

/// How far down (in px) the guest has to scroll before the 'back to top' button shows up
pub const SCROLL_UP_THRESHOLD: f64 = 800.0;

#[must_use]
pub fn shows_scroll_up(scroll_y: f64) -> bool {
	scroll_y > SCROLL_UP_THRESHOLD
}

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Great+Vibes&family=Cormorant+Garamond:ital,wght@0,400;0,600;1,400&family=Montserrat:wght@300;600&display=swap');
:root {
	scroll-behavior: smooth;
	-webkit-tap-highlight-color: transparent;
}
* {
	--primary: #f9f6ee;
	--light: #fdfbf6;
	--secondary: #5c4a32;
	--accent: #b8860b;
	--text: #3d3428;
	--line: #dcd7ca;
	box-sizing: border-box;
}
body {
	margin: 0;
	background-color: var(--primary);
	color: var(--text);
	font-family: Montserrat, sans-serif;
	-webkit-font-smoothing: antialiased;
	-moz-osx-font-smoothing: grayscale;
	text-rendering: optimizeLegibility;
	overflow-x: hidden;
}
.script {
	font-family: "Great Vibes", cursive;
	color: var(--secondary);
	font-weight: normal;
	line-height: 1;
}
.serif {
	font-family: "Cormorant Garamond", serif;
	font-style: italic;
	color: var(--secondary);
}
.eyebrow {
	font-size: 10px;
	font-weight: 600;
	letter-spacing: 0.4em;
	text-transform: uppercase;
	opacity: 0.5;
}
.card {
	background-color: rgba(255, 255, 255, 0.4);
	border: 1px solid rgba(184, 134, 11, 0.1);
	border-radius: 3rem;
	box-shadow: 0 20px 40px rgba(92, 74, 50, 0.1);
	backdrop-filter: blur(8px);
	padding: 40px;
	max-width: 36rem;
	margin: 0 auto;
}
.pill {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	gap: 12px;
	padding: 16px 40px;
	border: none;
	border-radius: 999px;
	background-color: var(--secondary);
	color: white;
	font-size: 10px;
	font-weight: 600;
	letter-spacing: 0.3em;
	text-transform: uppercase;
	text-decoration: none;
	cursor: pointer;
	transition: 0.2s linear;
}
.pill:hover {
	background-color: var(--accent);
}
.pill:disabled {
	opacity: 0.3;
	cursor: not-allowed;
}
.pill.outline {
	background-color: rgba(255, 255, 255, 0.7);
	border: 1px solid rgba(184, 134, 11, 0.2);
	color: var(--secondary);
}
section {
	position: relative;
	padding: 64px 24px;
	text-align: center;
	overflow: hidden;
}
section.light {
	background-color: var(--light);
}
.divider {
	width: 12rem;
	height: 1px;
	margin: 32px auto;
	background: linear-gradient(to right, transparent, rgba(184, 134, 11, 0.3), transparent);
	animation: grow 1.5s ease-out both;
}
.reveal {
	animation: reveal 0.8s cubic-bezier(0.16, 1, 0.3, 1) both;
}
.petal {
	position: absolute;
	top: -50px;
	color: var(--accent);
	opacity: 0.1;
	pointer-events: none;
	animation: fall linear infinite;
}
@keyframes reveal {
	from { opacity: 0; transform: translateY(30px); }
	to { opacity: 1; transform: none; }
}
@keyframes grow {
	from { width: 0; }
}
@keyframes fall {
	from { top: -50px; transform: rotate(0deg) translateX(0); }
	50% { transform: rotate(180deg) translateX(50px); }
	to { top: 110%; transform: rotate(360deg) translateX(-50px); }
}
::-webkit-scrollbar { width: 6px; }
::-webkit-scrollbar-track { background: #f9f6ee; }
::-webkit-scrollbar-thumb { background: #dcd7ca; border-radius: 10px; }
::-webkit-scrollbar-thumb:hover { background: #b8860b; }
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scroll_up_needs_to_pass_threshold() {
		assert!(!shows_scroll_up(0.0));
		assert!(!shows_scroll_up(800.0));
		assert!(shows_scroll_up(800.5));
		assert!(shows_scroll_up(5000.0));
	}
}
