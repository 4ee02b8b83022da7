use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, HtmlInputElement};

use crate::completion::{self, Plan};
use crate::components::key_modal::{DemoBanner, KeyModal};
use crate::components::mind_map::{Graph, MindMapCanvas};
use crate::components::node_panel::NodePanel;
use crate::config::{GenerationSettings, MAX_MAX_TOKENS, MAX_TOKENS_STEP, MIN_MAX_TOKENS};
use crate::error::report;
use crate::storage::{self, StorageArea};
use crate::transfer;

/// The mind map page. Owns all app state.
#[component]
pub fn Home() -> impl IntoView {
	let local = StoredValue::new_local(storage::open(StorageArea::Local));
	let graph = RwSignal::new(local.with_value(|store| storage::load_graph(&**store)));
	let api_key = RwSignal::new(storage::load_credential(&*storage::open(
		StorageArea::Session,
	)));
	let show_key_modal = RwSignal::new(api_key.with_untracked(Option::is_none));
	let key_draft = RwSignal::new(String::new());
	let topic = RwSignal::new(String::new());
	let settings = RwSignal::new(GenerationSettings::default());
	let selected = RwSignal::new(None::<String>);
	let loading = RwSignal::new(false);

	// Mirror every graph change to local storage.
	Effect::new(move |_| {
		let saved = local.with_value(|store| graph.with(|g| storage::save_graph(&**store, g)));
		if let Err(e) = saved {
			log::warn!("failed to save map: {e}");
		}
	});

	let save_key = move |_: ()| {
		let store = storage::open(StorageArea::Session);
		match storage::save_credential(&*store, &key_draft.get_untracked()) {
			Ok(key) => {
				api_key.set(Some(key));
				show_key_modal.set(false);
			}
			Err(e) => report(&e),
		}
	};

	let change_key = move |_| {
		storage::clear_credential(&*storage::open(StorageArea::Session));
		api_key.set(None);
		key_draft.set(String::new());
		show_key_modal.set(true);
	};

	let generate = move |_| {
		let topic = topic.get_untracked();
		let stored_key = api_key.get_untracked();
		let key = match completion::plan(&topic, stored_key.as_deref()) {
			Ok(Plan::Demo) => {
				graph.update(|g| {
					g.seed_demo(&topic);
				});
				return;
			}
			Ok(Plan::Live { api_key }) => api_key.to_owned(),
			Err(e) => {
				report(&e);
				return;
			}
		};

		let settings = settings.get_untracked();
		let prompt = settings.render_prompt(&topic);
		loading.set(true);
		spawn_local(async move {
			match completion::complete(&settings, &key, &prompt).await {
				Ok(text) => graph.update(|g| {
					g.seed_from_completion(&topic, &text);
				}),
				Err(e) => report(&e),
			}
			loading.set(false);
		});
	};

	let export = move |_| {
		if let Err(e) = graph.with_untracked(transfer::export) {
			report(&e);
		}
	};

	let import = move |ev: Event| {
		let input = event_target::<HtmlInputElement>(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		spawn_local(async move {
			let imported = match transfer::read_text(&file).await {
				Ok(text) => {
					let mut outcome = Ok(());
					// Subscribers only hear about a successful replace.
					graph.maybe_update(|g| {
						outcome = g.replace_from_json(&text);
						outcome.is_ok()
					});
					outcome
				}
				Err(e) => Err(e),
			};
			if let Err(e) = imported {
				report(&e);
			}
		});
	};

	let selected_node = Signal::derive(move || {
		let id = selected.get()?;
		graph.with(|g| g.node(&id).cloned())
	});
	let expand = move |id: String| {
		graph.update(|g: &mut Graph| {
			g.expand(&id);
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="app">
				<Show when=move || show_key_modal.get()>
					<KeyModal
						draft=key_draft
						on_save=save_key
						on_demo=move |_: ()| show_key_modal.set(false)
					/>
				</Show>

				<header>
					<h1>"AI MindMap (client-only demo)"</h1>
					<div style="float: right;">
						<button on:click=change_key>"Change API key"</button>
					</div>
				</header>

				<Show when=move || api_key.with(Option::is_none) && !show_key_modal.get()>
					<DemoBanner on_enter_key=move |_: ()| show_key_modal.set(true) />
				</Show>

				<main>
					<section class="controls">
						<input
							prop:value=move || topic.get()
							on:input=move |ev| topic.set(event_target_value(&ev))
							placeholder="Enter a topic (e.g. AActor)"
						/>
						<textarea
							prop:value=move || settings.with(|s| s.template.clone())
							on:input=move |ev| {
								settings.update(|s| s.template = event_target_value(&ev))
							}
						/>
						<div style="display: flex; gap: 8px; align-items: center;">
							<label>"Model:"</label>
							<input
								prop:value=move || settings.with(|s| s.model.clone())
								on:input=move |ev| settings.update(|s| s.model = event_target_value(&ev))
								placeholder="gpt-4o-mini"
								style="width: 200px;"
							/>
						</div>
						<div style="display: flex; gap: 8px; align-items: center;">
							<label>"Organization:"</label>
							<input
								prop:value=move || settings.with(|s| s.organization.clone())
								on:input=move |ev| {
									settings.update(|s| s.organization = event_target_value(&ev))
								}
								placeholder="org_... (optional)"
								style="width: 220px;"
							/>
							<label>"Project:"</label>
							<input
								prop:value=move || settings.with(|s| s.project.clone())
								on:input=move |ev| {
									settings.update(|s| s.project = event_target_value(&ev))
								}
								placeholder="proj_... (optional)"
								style="width: 220px;"
							/>
						</div>
						<div style="display: flex; gap: 8px; align-items: center;">
							<label>"max_tokens:"</label>
							<input
								type="number"
								min=MIN_MAX_TOKENS
								max=MAX_MAX_TOKENS
								step=MAX_TOKENS_STEP
								prop:value=move || settings.with(|s| s.max_tokens.to_string())
								on:input=move |ev| {
									if let Ok(n) = event_target_value(&ev).parse() {
										settings.update(|s| s.max_tokens = n);
									}
								}
								style="width: 120px;"
							/>
						</div>
						<div class="actions">
							<button on:click=generate disabled=move || loading.get()>
								{move || if loading.get() { "Generating..." } else { "Generate" }}
							</button>
							<button on:click=export>"Export"</button>
							<input type="file" accept="application/json,.json" on:change=import />
						</div>
					</section>

					<section class="canvas">
						<MindMapCanvas graph=graph on_select=move |id: String| selected.set(Some(id)) />
						<NodePanel node=selected_node on_expand=expand />
					</section>
				</main>
			</div>
		</ErrorBoundary>
	}
}
