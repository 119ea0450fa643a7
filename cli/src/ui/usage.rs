//! Usage lines for invalid invocations.

/// Print both usage forms to standard output.
pub fn print_usage() {
    println!("Usage : qrlabel QR [EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001] [destination]");
    println!("Usage : qrlabel FILE [list-of-fl-eq-file] [destination]");
}
