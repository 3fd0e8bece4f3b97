mod color;
mod sample;

pub use color::{average_color, midpoint2, midpoint4};
pub use sample::{random_channels, random_sample};
