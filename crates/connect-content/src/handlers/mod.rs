//! Format parsers

mod json;
mod yaml;

pub use self::json::JsonParser;
pub use self::yaml::YamlParser;
