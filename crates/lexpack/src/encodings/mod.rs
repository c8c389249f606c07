//! Built-in encodings for the JSON-style value universe.

mod array;
mod boolean;
mod null;
mod number;
mod object;
mod sentinel;
mod string;

pub use array::ArrayEncoding;
pub use boolean::BoolEncoding;
pub use null::NullEncoding;
pub use number::NumberEncoding;
pub use object::ObjectEncoding;
pub use sentinel::SentinelEncoding;
pub use string::StringEncoding;
