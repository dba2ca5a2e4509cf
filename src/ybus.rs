use crate::case::{BranchDc, BusDc, ConvDcDc};
use crate::error::{DcError, Result};
use log::{debug, log_enabled, trace, Level};
use sparsetools::coo::Coo;
use std::fmt;

/// DC bus admittance matrix and branch admittance matrices.
///
/// `y_f * V` and `y_t * V` are the currents injected into each DC branch at
/// its "from" and "to" bus respectively.
///
/// Entries are stored as triplets. Converting to CSR sums duplicates.
#[derive(Clone)]
pub struct YbusDc {
    pub y_bus: Coo<usize, f64>,
    pub y_f: Coo<usize, f64>,
    pub y_t: Coo<usize, f64>,
}

impl fmt::Debug for YbusDc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YbusDc")
            .field("nb", &self.y_bus.rows())
            .field("nl", &self.y_f.rows())
            .field("nnz", &self.y_bus.nnz())
            .finish()
    }
}

fn bus_index(nb: usize, table: &'static str, row: usize, bus: usize) -> Result<usize> {
    if bus == 0 || bus > nb {
        return Err(DcError::UnresolvedBus { table, row, bus });
    }
    Ok(bus - 1)
}

/// Builds the DC bus admittance matrix and branch admittance matrices.
///
/// Expects internal bus numbering (consecutive, starting at 1). DC/DC
/// converters only add to the bus admittance matrix. Their diagonal terms
/// differ at the two ends unless the voltage ratio is 1.
pub fn make_ybus_dc(bus: &[BusDc], branch: &[BranchDc], conv_dcdc: &[ConvDcDc]) -> Result<YbusDc> {
    let nb = bus.len();
    let nl = branch.len();

    // For each branch, compute the elements of the branch admittance matrix where:
    //
    //      | If |   | Yff  Yft |   | Vf |
    //      |    | = |          | * |    |
    //      | It |   | Ytf  Ytt |   | Vt |
    let mut y_bus = Coo::with_size(nb, nb);
    let mut y_f = Coo::with_size(nl, nb);
    let mut y_t = Coo::with_size(nl, nb);

    for (i, br) in branch.iter().enumerate() {
        let f = bus_index(nb, "branchdc", i, br.f_bus)?;
        let t = bus_index(nb, "branchdc", i, br.t_bus)?;
        if !br.is_on() {
            continue;
        }
        let y_s = 1.0 / br.r; // series conductance
        if !y_s.is_finite() {
            return Err(DcError::DegenerateImpedance {
                element: "DC branch",
                row: i,
            });
        }
        let (y_ff, y_ft, y_tf, y_tt) = (y_s, -y_s, -y_s, y_s);

        y_f.push(i, f, y_ff);
        y_f.push(i, t, y_ft);

        y_t.push(i, f, y_tf);
        y_t.push(i, t, y_tt);

        y_bus.push(f, f, y_ff);
        y_bus.push(f, t, y_ft);
        y_bus.push(t, f, y_tf);
        y_bus.push(t, t, y_tt);
    }

    for (i, cv) in conv_dcdc.iter().enumerate() {
        let c = bus_index(nb, "convdcdc", i, cv.c_bus)?;
        let m = bus_index(nb, "convdcdc", i, cv.m_bus)?;
        if !cv.is_on() {
            continue;
        }
        let y_s = 1.0 / cv.r;
        if !y_s.is_finite() {
            return Err(DcError::DegenerateImpedance {
                element: "DC/DC converter",
                row: i,
            });
        }
        y_bus.push(c, c, y_s);
        y_bus.push(c, m, -cv.d * y_s);
        y_bus.push(m, c, -cv.d * y_s);
        y_bus.push(m, m, cv.d * cv.d * y_s + cv.g);
    }

    debug!(
        "DC Ybus: {} buses, {} branches, {} DC/DC converters, {} entries",
        nb,
        nl,
        conv_dcdc.len(),
        y_bus.nnz()
    );
    if log_enabled!(Level::Trace) {
        trace!("Ybusdc:\n{}", y_bus.to_csr().to_table());
    }

    Ok(YbusDc { y_bus, y_f, y_t })
}
