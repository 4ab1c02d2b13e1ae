use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn About() -> impl IntoView {
	view! {
		<Title text="About · Matching playground" />
		<main class="about">
			<h1>"About"</h1>
			<p>
				"Type an undirected graph as an edge list, one pair of integer vertex ids per line. "
				"Preview renders it on the server; Run also computes a minimal fractional maximum "
				"matching and shows the solver's log."
			</p>
			<p>
				"Edges are drawn red when fully matched (weight 1), green when half matched "
				"(weight ½) and plain otherwise. Self-loops, repeated edges and lines that are not "
				"two integers are skipped and listed under the input."
			</p>
			<A href="/">"Back to the playground"</A>
		</main>
	}
}
