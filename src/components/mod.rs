pub mod key_modal;
pub mod mind_map;
pub mod node_panel;
