use leptos::prelude::*;

use super::render::{
	self, CANVAS_HEIGHT, CANVAS_WIDTH, EMPTY_FRAME, EMPTY_HINT, LABEL_X, LABEL_Y, NODE_CORNER,
	NODE_HEIGHT, NODE_WIDTH,
};
use super::types::Graph;

#[component]
pub fn MindMapCanvas(
	#[prop(into)] graph: Signal<Graph>,
	/// Receives the id of a clicked node.
	#[prop(into)]
	on_select: Callback<String>,
) -> impl IntoView {
	let scene = Memo::new(move |_| graph.with(render::scene));

	let lines = move || {
		scene
			.get()
			.lines
			.into_iter()
			.map(|l| {
				view! { <line x1=l.x1 y1=l.y1 x2=l.x2 y2=l.y2 stroke="#666" /> }
			})
			.collect_view()
	};

	let boxes = move || {
		scene
			.get()
			.boxes
			.into_iter()
			.map(|b| {
				let transform = b.transform();
				let id = b.id;
				view! {
					<g
						transform=transform
						style="cursor: pointer;"
						on:click=move |_| on_select.run(id.clone())
					>
						<rect
							width=NODE_WIDTH
							height=NODE_HEIGHT
							fill="#fff"
							stroke="#333"
							rx=NODE_CORNER
							ry=NODE_CORNER
						/>
						<text x=LABEL_X y=LABEL_Y>
							{b.title}
						</text>
					</g>
				}
			})
			.collect_view()
	};

	let placeholder = move || {
		scene.with(|s| s.is_empty()).then(|| {
			let (x, y, w, h) = EMPTY_FRAME;
			view! {
				<g>
					<rect x=x y=y width=w height=h fill="#fff" stroke="#ccc" />
					<text
						x=CANVAS_WIDTH / 2.0
						y=CANVAS_HEIGHT / 2.0
						text-anchor="middle"
						style="fill: #888; font-size: 18px;"
					>
						{EMPTY_HINT}
					</text>
				</g>
			}
		})
	};

	view! {
		<svg class="mind-map-canvas" width=CANVAS_WIDTH height=CANVAS_HEIGHT>
			{lines}
			{boxes}
			{placeholder}
		</svg>
	}
}
