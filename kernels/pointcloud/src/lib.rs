// Dual-Layout Point Renderer and Interaction Controller
//
// The browser-facing kernel behind the large-population explorers. A point
// cloud carries two complete layouts of the same population; a single
// transition scalar morphs the displayed positions between them while pan,
// zoom, and per-point attribute styling apply on top. Rendering is a
// software rasterizer writing an RGBA buffer the host blits to a canvas,
// so the whole pipeline stays testable off-browser; the wasm bindings in
// `explorer` wrap it for the site.

pub mod autoplay;
pub mod camera;
pub mod cloud;
pub mod explorer;
pub mod fps;
pub mod input;
pub mod palette;
pub mod render;
pub mod transition;

pub use autoplay::{Autoplay, AutoplayFrame, TourZoom};
pub use camera::{Camera, CameraLimits, BELT_LIMITS, STAR_LIMITS};
pub use cloud::{CloudError, PointCloud};
pub use explorer::{BeltExplorer, StarExplorer, Viewer, ViewerConfig, BELT_VIEWER, STAR_VIEWER};
pub use fps::FpsCounter;
pub use input::{action_for_key, Action, LayoutSide};
pub use palette::Palette;
pub use render::{render_cloud, render_orbit_rings, Frame, CLEAR_COLOR};
pub use transition::{ease_in_out_cubic, Transition};
