pub mod curve;
pub mod error;
pub mod hull;
pub mod math;
pub mod outline;
pub mod outliner;
pub mod projection;

pub use curve::{CurveHost, OutlineCurve};
pub use error::{CurveError, GeometryError, OutlineError, OutlinerError, Result};
pub use hull::ConvexHull2d;
pub use outline::{
    compute_outline, project_to_sphere, ComputeOutline, EyeSphere, Outline, OutlineParams,
};
pub use outliner::{ConvexOutliner, ConvexOutlinerBuilder};
pub use projection::{
    EyeSource, Orthographic, PerspectiveView, ScreenAxes, VertexSource, WorldToScreen,
};
