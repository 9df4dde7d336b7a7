pub mod serializer;
pub use serializer::Serializer;

mod params;
pub use params::{Generation, ModelParams};
