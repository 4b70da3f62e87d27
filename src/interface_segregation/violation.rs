//! The violation: one fat trait forced on every implementer.
//!
//! `Printer` cannot scan or fax, yet `Printable` makes it provide both. The
//! bodies are empty, so calling them is safe but does nothing. Code holding a
//! `&dyn Printable` cannot tell which operations are real.

use tracing::{debug, info};

/// Every office operation in one bundle.
pub trait Printable {
    fn print_document(&self, document: &str);
    fn scan_document(&self, document: &str);
    fn fax_document(&self, document: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Printable for Printer {
    fn print_document(&self, document: &str) {
        info!(document, "Printing document");
    }

    fn scan_document(&self, document: &str) {
        debug!(document, "Scan not supported, ignoring");
    }

    fn fax_document(&self, document: &str) {
        debug!(document, "Fax not supported, ignoring");
    }
}

/// Calls every operation of the bundle, supported or not.
pub fn run_office_day(machine: &dyn Printable, document: &str) {
    machine.print_document(document);
    machine.scan_document(document);
    machine.fax_document(document);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operations_are_safe_no_ops() {
        let printer = Printer;
        printer.scan_document("photo.png");
        printer.fax_document("letter.txt");
        run_office_day(&printer, "report.pdf");
    }
}
