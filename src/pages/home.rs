use leptos::prelude::*;

use crate::components::PageEffects;
use crate::config::PageConfig;

const CONCEPTS: &[(&str, &str)] = &[
	(
		"Peer Routing",
		"Every node relays for its neighbours, so traffic finds a path even when links drop.",
	),
	(
		"Local First",
		"Data settles where it is used and syncs outward when the network allows.",
	),
	(
		"Open Protocol",
		"A small, documented wire format that anyone can implement and audit.",
	),
];

const STATS: &[(&str, &str)] = &[
	("1500000", "Active nodes"),
	("2500000000", "Messages relayed"),
	("48000", "Operators"),
	("500", "Cities"),
];

/// Landing page. Once the markup is mounted every page effect is attached
/// to it; they are torn down with the page.
#[component]
pub fn Home() -> impl IntoView {
	let effects = StoredValue::new_local(None::<PageEffects>);
	Effect::new(move |_| {
		effects.set_value(Some(PageEffects::install(&PageConfig::default())));
	});

	view! {
		<nav class="navbar">
			<a class="logo" href="#home">"Signal Mesh"</a>
			<button class="mobile-menu-toggle" aria-label="Toggle navigation">
				<span></span>
				<span></span>
				<span></span>
			</button>
			<ul class="nav-links">
				<li><a class="nav-link" href="#concepts">"Concepts"</a></li>
				<li><a class="nav-link" href="#stats">"Network"</a></li>
				<li><a class="nav-link" href="#explore">"Explore"</a></li>
			</ul>
		</nav>

		<section class="hero" id="home">
			<canvas id="networkCanvas" class="network-canvas" />
			<div class="hero-content">
				<h1>"A network that routes itself"</h1>
				<p class="subtitle">"Resilient peer-to-peer messaging with no central point of failure."</p>
				<a class="cta" href="#explore">"See it move"</a>
			</div>
		</section>

		<section class="concepts" id="concepts">
			<h2>"How it works"</h2>
			<div class="concept-grid">
				{CONCEPTS
					.iter()
					.map(|&(title, body)| {
						view! {
							<div class="concept-card">
								<h3>{title}</h3>
								<p>{body}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>

		<section class="stats-section" id="stats">
			{STATS
				.iter()
				.map(|&(target, label)| {
					view! {
						<div class="stat-item">
							<span class="stat-number" data-target=target>"0"</span>
							<span class="stat-label">{label}</span>
						</div>
					}
				})
				.collect_view()}
		</section>

		<section class="explore" id="explore">
			<h2>"Move across the mesh"</h2>
			<div id="mainNetwork" class="main-network"></div>
		</section>
	}
}
