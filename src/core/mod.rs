pub mod extent;
pub mod projection;
pub mod scale;
pub mod types;

pub use extent::Extent;
pub use projection::{filter_points, project_records};
pub use scale::LinearScale;
pub use types::{ActiveBounds, Bounds, Margin, PlotArea, Point};
