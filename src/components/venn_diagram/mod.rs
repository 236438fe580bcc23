//! Two-set Venn diagram component.
//!
//! Renders two overlapping circles on an HTML canvas with:
//! - Square-root radius scaling so circle area tracks each set's magnitude
//! - A fixed-offset overlap with the intersection value printed between centers
//! - Entrance animations (circle growth, label fade-in, delayed caption)
//! - Hover and touch feedback once each circle has finished entering
//!
//! The layout, scene and interaction modules are headless and can be driven
//! with explicit timestamps; [`to_svg`] serializes a frame without a browser.
//!
//! # Example
//!
//! ```ignore
//! use venn_diagram::{VennData, VennDiagram, VennLabels};
//!
//! let data = VennData { a: 50.0, b: 30.0, intersection: 10.0 };
//! let labels = VennLabels { label_a: Some("Cats".into()), ..Default::default() };
//!
//! view! { <VennDiagram data=data width=500.0 height=300.0 labels=labels /> }
//! ```

mod component;
pub mod interaction;
pub mod layout;
mod render;
pub mod scale;
pub mod scene;
pub mod state;
pub mod svg;
pub mod theme;
pub mod timeline;
mod types;

pub use component::VennDiagram;
pub use layout::{Layout, Point};
pub use scale::{Radii, SqrtScale};
pub use scene::Scene;
pub use state::VennState;
pub use svg::to_svg;
pub use theme::Theme;
pub use types::{DiagramProps, ResolvedLabels, SetId, VennColors, VennData, VennLabels};
