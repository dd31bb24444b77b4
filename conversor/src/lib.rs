// Conversion pipeline library root.
//
// The pipeline is three pure stages invoked on every input change:
// convert (letters -> numeral string), format (numeral string -> currency
// string) and markup (currency string + percent -> currency string).
// Nothing here performs I/O; the GUI crate owns all event wiring.

pub mod cipher;
pub mod convert;
pub mod error;
pub mod format;
pub mod markup;
pub mod pipeline;

pub use error::ConversionError;
pub use pipeline::Conversor;
