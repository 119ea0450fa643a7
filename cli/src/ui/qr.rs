//! Terminal preview of a QR symbol.

use qrlabel_core::encoder::QrMatrix;

/// Print a QR symbol to the terminal.
///
/// Uses Unicode half blocks so each character covers two vertical modules.
pub fn print_qr_code(matrix: &QrMatrix) {
    let width = matrix.width();
    let quiet = "  ";

    // Top quiet zone
    println!("{}{}", quiet, " ".repeat(width + 4));

    for y in (0..width).step_by(2) {
        print!("{}  ", quiet);
        for x in 0..width {
            let ch = match (matrix.is_dark(x, y), matrix.is_dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            print!("{}", ch);
        }
        println!("  ");
    }

    // Bottom quiet zone
    println!("{}{}", quiet, " ".repeat(width + 4));
}
