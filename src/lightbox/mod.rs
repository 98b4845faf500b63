pub mod controller;
pub mod host;
pub mod view;

pub use controller::{LightboxController, LightboxState, MediaAction};
pub use host::{LightboxHost, Pagination};
pub use view::{
    CALL_TO_ACTION, COMING_SOON, DetailView, IMAGE_PLACEHOLDER, MediaView, NarrativeBlock, StatView,
    TechView, VideoLink, WorkflowView, render,
};
