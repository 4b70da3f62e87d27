//! # Interface Segregation Principle (ISP)
//!
//! > No type should be forced to implement operations it does not use.
//!
//! This lesson ships both sides of the argument:
//!
//! - [`violation`] - **the violation.** One `Printable` trait bundles print,
//!   scan and fax. A plain printer has to implement all three and leaves scan
//!   and fax as silent no-ops.
//! - [`segregated`] - **the corrected counter-example.** Each operation is its
//!   own trait. A plain printer implements only the one it supports.
//!
//! Read them side by side. The no-op bodies in `violation` are the smell the
//! principle is about; `segregated` removes it without losing the all-in-one
//! machine.

pub mod segregated;
pub mod violation;

use segregated::{FaxDocument, MultiFunctionDevice, PrintDocument, ScanDocument};

#[tracing::instrument]
pub fn demonstrate() -> String {
    let legacy = violation::Printer;
    violation::run_office_day(&legacy, "quarterly-report.pdf");

    let printer = segregated::Printer;
    let device = MultiFunctionDevice;
    let printed = segregated::print_all(&printer, &["memo.txt", "invoice.pdf"]);
    device.print_document("contract.pdf");
    device.scan_document("contract.pdf");
    device.fax_document("contract.pdf");

    format!("Printer handled {printed} jobs; multi-function device handled print, scan and fax")
}
