mod encoder_options;
mod feature_type;

pub use encoder_options::EncoderOptions;
pub use feature_type::FeatureType;
