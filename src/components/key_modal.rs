use leptos::prelude::*;

/// Prompt for the API key, shown on startup when none is stored.
#[component]
pub fn KeyModal(
	/// Text currently typed into the key field.
	draft: RwSignal<String>,
	#[prop(into)] on_save: Callback<()>,
	#[prop(into)] on_demo: Callback<()>,
) -> impl IntoView {
	view! {
		<div class="modal">
			<div class="modal-content">
				<h3>"Enter API key"</h3>
				<input
					prop:value=move || draft.get()
					on:input=move |ev| draft.set(event_target_value(&ev))
					placeholder="OpenAI API Key"
				/>
				<div class="modal-actions">
					<button on:click=move |_| on_save.run(())>"Save (session)"</button>
					<button on:click=move |_| on_demo.run(())>"Continue in demo mode"</button>
				</div>
				<p class="warning">
					"This app never stores your key on a server. Be careful when using it in public."
				</p>
			</div>
		</div>
	}
}

/// Notice shown while running without a key.
#[component]
pub fn DemoBanner(#[prop(into)] on_enter_key: Callback<()>) -> impl IntoView {
	view! {
		<div class="banner">
			<div>"No API key is set. Running in demo mode."</div>
			<div>
				<button on:click=move |_| on_enter_key.run(())>"Enter API key"</button>
			</div>
		</div>
	}
}
