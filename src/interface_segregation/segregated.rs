//! The corrected counter-example: one trait per operation.
//!
//! A provider declares only what it supports. Consumers bound on the single
//! capability they call, so [`print_all`] accepts a plain [`Printer`] and a
//! [`MultiFunctionDevice`] alike, and a scanner-only consumer will never be
//! handed a printer.
//!
//! ```rust
//! use solid_recipe::interface_segregation::segregated::{print_all, PrintDocument};
//!
//! struct LabelPrinter;
//!
//! impl PrintDocument for LabelPrinter {
//!     fn print_document(&self, _document: &str) {}
//! }
//!
//! assert_eq!(print_all(&LabelPrinter, &["shipping-label"]), 1);
//! ```

use tracing::info;

pub trait PrintDocument {
    fn print_document(&self, document: &str);
}

pub trait ScanDocument {
    fn scan_document(&self, document: &str);
}

pub trait FaxDocument {
    fn fax_document(&self, document: &str);
}

/// Prints. Nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl PrintDocument for Printer {
    fn print_document(&self, document: &str) {
        info!(document, "Printing document");
    }
}

/// An all-in-one office machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiFunctionDevice;

impl PrintDocument for MultiFunctionDevice {
    fn print_document(&self, document: &str) {
        info!(document, "Printing document");
    }
}

impl ScanDocument for MultiFunctionDevice {
    fn scan_document(&self, document: &str) {
        info!(document, "Scanning document");
    }
}

impl FaxDocument for MultiFunctionDevice {
    fn fax_document(&self, document: &str) {
        info!(document, "Faxing document");
    }
}

/// Sends each document to the printer and returns how many were sent.
pub fn print_all<P: PrintDocument + ?Sized>(printer: &P, documents: &[&str]) -> usize {
    for document in documents {
        printer.print_document(document);
    }
    documents.len()
}

/// Scans then faxes a document. Needs both capabilities, nothing more.
pub fn scan_and_fax<M: ScanDocument + FaxDocument + ?Sized>(machine: &M, document: &str) {
    machine.scan_document(document);
    machine.fax_document(document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScanner {
        scanned: RefCell<Vec<String>>,
        faxed: RefCell<Vec<String>>,
    }

    impl ScanDocument for RecordingScanner {
        fn scan_document(&self, document: &str) {
            self.scanned.borrow_mut().push(document.to_string());
        }
    }

    impl FaxDocument for RecordingScanner {
        fn fax_document(&self, document: &str) {
            self.faxed.borrow_mut().push(document.to_string());
        }
    }

    #[test]
    fn test_print_only_provider_needs_no_scan_or_fax() {
        assert_eq!(print_all(&Printer, &["a.txt", "b.txt", "c.txt"]), 3);
    }

    #[test]
    fn test_print_all_through_trait_object() {
        let printer: &dyn PrintDocument = &MultiFunctionDevice;
        assert_eq!(print_all(printer, &["a.txt"]), 1);
    }

    #[test]
    fn test_scan_and_fax_without_print() {
        let machine = RecordingScanner::default();
        scan_and_fax(&machine, "form.pdf");
        assert_eq!(*machine.scanned.borrow(), vec!["form.pdf".to_string()]);
        assert_eq!(*machine.faxed.borrow(), vec!["form.pdf".to_string()]);
    }
}
