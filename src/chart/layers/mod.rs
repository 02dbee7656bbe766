pub mod cloud;
pub mod precipitation;
pub mod temperature;
pub mod wind;
