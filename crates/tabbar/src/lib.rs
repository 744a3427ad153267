pub mod bar;
pub mod container;
pub mod icons;
pub mod item;
pub mod pane;
pub mod registry;
pub mod strip;

pub use container::{TabBarContainer, TabSelection};
pub use item::TabItem;
pub use pane::TabPane;
pub use registry::{use_tab_registry, TabRegistry};
