/// CustomError implementation: constructor, Display, Error.
pub mod custom_error;
