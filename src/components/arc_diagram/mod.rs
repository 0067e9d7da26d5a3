mod component;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod layout;
pub mod render;
pub mod state;
pub mod tooltip;
mod types;

pub use component::ArcDiagramCanvas;
pub use config::ArcDiagramConfig;
pub use error::ArcDiagramError;
pub use filter::ClaimFilter;
pub use state::ArcDiagramState;
pub use types::{ClaimData, ClaimEdge, ClaimNode};
