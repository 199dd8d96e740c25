//! `Display` formatting for [`Matrix`]. Diagnostic only; the layout is not a
//! stable format.

use core::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({}x{}) {{", self.rows, self.cols)?;
        for row in self.data.chunks(self.cols) {
            for v in row {
                write!(f, "\t{v}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
