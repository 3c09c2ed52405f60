//! Windows that own particle fields.
//!
//! Each window is driven from the host's draw callback and issues its
//! geometry through a [`DrawSurface`](glamour_ui::DrawSurface).

mod achievement;
mod feature_guide;
mod features_banner;

pub use achievement::{Achievement, AchievementPopup, CloseReason};
pub use feature_guide::{FeatureEntry, FeatureGuide};
pub use features_banner::FeaturesBanner;
