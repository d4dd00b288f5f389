//! Rendering parse errors against the input they came from.

mod printer;


pub use printer::ErrorPrinter;

use crate::Error;

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
