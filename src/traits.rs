use crate::case::DcCase;
use crate::ybus::YbusDc;

/// An iterative AC/DC power flow.
pub trait DcPowerFlow {
    /// Solves the prepared network, updating bus voltages, converter powers
    /// and branch flows of `case` in place. `case` uses internal bus
    /// numbering, holds in-service elements only and is in per-unit on
    /// `base_mva`. Returns whether the solution converged.
    fn solve(&self, base_mva: f64, case: &mut DcCase, ybus: &YbusDc) -> Result<bool, String>;
}
