pub mod convex_hull;
pub mod view_angle;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;

#[doc(inline)]
pub use view_angle::{narrowest_view, view_angle, view_angles};
