mod view;
pub use view::EntryCard;

pub mod image;
pub mod model;
pub mod radar;

pub use image::{CardImage, ImageFetchError};
pub use model::{Badge, BadgeKind, CardModel, ImageSlot};
pub use radar::RadarChart;
