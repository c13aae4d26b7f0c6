mod params;
mod value;

pub use params::{ParamBag, Params};
pub use value::Value;
