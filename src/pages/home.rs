use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::api::ApiClient;
use crate::components::force_graph::{ForceGraphCanvas, PreviewData};
use crate::config::AppConfig;
use crate::edges::WeightClass;
use crate::state::{Command, Status, ViewModel, dispatch};

/// The playground: edge-list input, random generator, actions and output.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_query_map().with_untracked(|q| AppConfig::from_params(|key| q.get(key)));
	log::info!("backend at {:?}", config.endpoint(""));

	let vm = RwSignal::new(ViewModel::new(&config));
	let client = StoredValue::new(ApiClient::new(config));
	let send = move |command: Command| dispatch(vm, client.get_value(), command);

	let preview = Memo::new(move |_| {
		vm.with(|m| PreviewData::from_edges(&m.last_edge_set, &m.last_weights))
	});

	view! {
		<main class="playground">
			<header>
				<h1>"Fractional matching playground"</h1>
				<nav>
					<A href="/about">"About"</A>
				</nav>
			</header>

			<section class="input">
				<label for="edge-list">"Edges, one \"u v\" pair per line"</label>
				<textarea
					id="edge-list"
					rows="12"
					spellcheck="false"
					prop:value=move || vm.with(|m| m.input_text.clone())
					on:input=move |ev| vm.update(|m| m.input_text = event_target_value(&ev))
				/>
				<DroppedLines vm=vm />

				<div class="random">
					<label>
						"Vertices "
						<input
							id="num-vertices"
							type="number"
							min="2"
							prop:value=move || vm.with(|m| m.vertices_text.clone())
							on:input=move |ev| vm.update(|m| m.vertices_text = event_target_value(&ev))
						/>
					</label>
					<label>
						"Edge probability "
						<input
							id="edge-prob"
							type="number"
							min="0"
							max="1"
							step="0.05"
							prop:value=move || vm.with(|m| m.probability_text.clone())
							on:input=move |ev| {
								vm.update(|m| m.probability_text = event_target_value(&ev))
							}
						/>
					</label>
				</div>

				<div class="actions">
					<button id="btn-preview" on:click=move |_| send(Command::Preview)>
						{Command::Preview.label()}
					</button>
					<button id="btn-run" on:click=move |_| send(Command::Run)>
						{Command::Run.label()}
					</button>
					<button id="btn-random" on:click=move |_| send(Command::Randomize)>
						{Command::Randomize.label()}
					</button>
				</div>
				<StatusBanner vm=vm />
			</section>

			<section class="output">
				<div id="graph-area">
					{move || {
						vm.with(|m| m.last_image.clone())
							.map(|src| view! { <img src=src alt="graph" /> })
					}}
				</div>
				<div class="live-preview">
					<ForceGraphCanvas data=preview />
					<Legend />
				</div>
				<pre id="log-area">{move || vm.with(|m| m.last_log.clone().unwrap_or_default())}</pre>
			</section>
		</main>
	}
}

#[component]
fn StatusBanner(vm: RwSignal<ViewModel>) -> impl IntoView {
	move || match vm.with(|m| m.status.clone()) {
		Status::Idle => None,
		Status::Pending(command) => Some(
			view! { <p class="status pending">{format!("{command}: waiting for the server…")}</p> }
				.into_any(),
		),
		Status::Failed(message) => Some(
			view! {
				<div class="status error" role="alert">
					<span>{message}</span>
					<button on:click=move |_| vm.update(ViewModel::dismiss_error)>"Dismiss"</button>
				</div>
			}
			.into_any(),
		),
	}
}

/// Lines the parser skipped on the last Preview or Run.
#[component]
fn DroppedLines(vm: RwSignal<ViewModel>) -> impl IntoView {
	move || {
		let dropped = vm.with(|m| m.last_dropped.clone());
		(!dropped.is_empty()).then(|| {
			let summary = match dropped.len() {
				1 => "1 line ignored".to_owned(),
				n => format!("{n} lines ignored"),
			};
			view! {
				<details class="dropped">
					<summary>{summary}</summary>
					<ul>
						{dropped
							.into_iter()
							.map(|d| {
								view! { <li>{format!("line {}: {:?} ({})", d.line, d.text, d.reason)}</li> }
							})
							.collect_view()}
					</ul>
				</details>
			}
		})
	}
}

#[component]
fn Legend() -> impl IntoView {
	let entries = [
		(WeightClass::Matched, "matched"),
		(WeightClass::Half, "half"),
		(WeightClass::Unmatched, "unmatched"),
	];
	view! {
		<ul class="legend">
			{entries
				.into_iter()
				.map(|(class, css)| view! { <li class=css>{format!("weight {}", class.label())}</li> })
				.collect_view()}
		</ul>
	}
}
