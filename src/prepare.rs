use crate::case::DcCase;
use crate::error::{DcError, Result};
use crate::ext_to_int::ext_to_int_dc;
use crate::int_to_ext::int_to_ext_dc;
use crate::opt::PrepOpt;
use crate::order::DcOrder;
use crate::outage::{dc_outages, restore_ac_buses, DcOutages};
use crate::pu::{ext_to_int_pu, int_to_ext_pu};
use crate::traits::DcPowerFlow;
use crate::ybus::{make_ybus_dc, YbusDc};
use log::{debug, info};

/// A DC network ready for the power flow solver.
#[derive(Clone, Debug)]
pub struct PreparedDc {
    /// System MVA base of `case`.
    pub base_mva: f64,

    /// In-service elements only, internal bus numbering, system base.
    pub case: DcCase,

    pub ybus: YbusDc,
    pub order: DcOrder,
    pub outages: DcOutages,
}

/// Removes out-of-service elements, renumbers the DC buses, converts to the
/// system base and builds the admittance matrices.
pub fn prepare_dc(mut case: DcCase, opt: &PrepOpt) -> Result<PreparedDc> {
    let outages = dc_outages(&mut case, opt.dcdc_status)?;
    let order = ext_to_int_dc(&mut case)?;
    ext_to_int_pu(opt.base_mva, &mut case)?;
    let ybus = make_ybus_dc(&case.bus, &case.branch, case.dcdc())?;

    debug!(
        "prepared {} DC buses, {} branches, {} AC/DC and {} DC/DC converters",
        case.bus.len(),
        case.branch.len(),
        case.conv.len(),
        case.dcdc().len()
    );

    Ok(PreparedDc {
        base_mva: opt.base_mva,
        case,
        ybus,
        order,
        outages,
    })
}

/// Returns a solved network to its original form: case MVA bases, external
/// bus numbering and row order, out-of-service elements and AC connections.
pub fn finish_dc(prepared: PreparedDc) -> Result<DcCase> {
    let PreparedDc {
        base_mva,
        mut case,
        mut order,
        outages,
        ..
    } = prepared;

    int_to_ext_pu(base_mva, &mut case)?;
    int_to_ext_dc(&mut case, &mut order)?;

    case.branch = outages.branch.merge(&case.branch)?;
    case.conv = outages.conv.merge(&case.conv)?;
    if case.conv_dcdc.is_some() {
        case.conv_dcdc = Some(outages.conv_dcdc.merge(case.dcdc())?);
    }
    restore_ac_buses(&mut case.bus, &outages.ac_restore)?;

    Ok(case)
}

/// Prepares `case`, runs `solver` and converts the result back.
pub fn run_dc(case: DcCase, opt: &PrepOpt, solver: &dyn DcPowerFlow) -> Result<(DcCase, bool)> {
    let mut prepared = prepare_dc(case, opt)?;

    let success = solver
        .solve(prepared.base_mva, &mut prepared.case, &prepared.ybus)
        .map_err(DcError::Solver)?;
    if success {
        info!("DC power flow converged");
    } else {
        info!("DC power flow did not converge");
    }

    Ok((finish_dc(prepared)?, success))
}
