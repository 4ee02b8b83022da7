use leptos::prelude::*;

use super::mind_map::Node;

/// Side panel for the selected node.
#[component]
pub fn NodePanel(
	#[prop(into)] node: Signal<Option<Node>>,
	/// Receives the id of the node to grow a child under.
	#[prop(into)]
	on_expand: Callback<String>,
) -> impl IntoView {
	view! {
		<aside class="side">
			<h3>"Selected node"</h3>
			{move || match node.get() {
				Some(n) => {
					let id = n.id;
					view! {
						<div>
							<h4>{n.title}</h4>
							<p>{n.body}</p>
							<button on:click=move |_| on_expand.run(id.clone())>"Expand"</button>
						</div>
					}
						.into_any()
				}
				None => view! { <p>"Select a node"</p> }.into_any(),
			}}
		</aside>
	}
}
