use leptos::prelude::*;
use leptos::task::spawn_local;

use super::command::{Command, Effect};
use super::view_model::ViewModel;
use crate::api::ApiClient;

/// Applies `command` to the view-model and drives its network effects.
///
/// Requests are never cancelled; a superseded one simply has its response
/// discarded by the view-model when it lands.
pub fn dispatch(vm: RwSignal<ViewModel>, client: ApiClient, command: Command) {
	let Some(effect) = vm.try_update(|m| m.dispatch(command, &mut rand::thread_rng())) else {
		return;
	};
	log::info!("{command} issued as {}", effect.ticket());
	spawn_local(run(vm, client, effect));
}

async fn run(vm: RwSignal<ViewModel>, client: ApiClient, first: Effect) {
	let mut next = Some(first);
	while let Some(effect) = next.take() {
		next = match effect {
			Effect::Solve { ticket, request } => match client.solve(&request).await {
				Ok(result) => vm.try_update(|m| m.apply_solve(ticket, result)).flatten(),
				Err(err) => {
					vm.update(|m| {
						m.apply_failure(ticket, &err);
					});
					None
				}
			},
			Effect::Plot { ticket, request } => {
				let outcome = client.plot(&request).await;
				vm.update(|m| {
					match outcome {
						Ok(result) => m.apply_plot(ticket, result),
						Err(err) => m.apply_failure(ticket, &err),
					};
				});
				None
			}
		};
	}
}
