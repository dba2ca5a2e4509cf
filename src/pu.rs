use crate::case::DcCase;
use crate::error::{DcError, Result};
use std::collections::HashMap;

fn check_base(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DcError::InvalidBase { name, value })
    }
}

fn check_bases(base_mva: f64, case: &DcCase) -> Result<()> {
    check_base("system MVA base", base_mva)?;
    check_base("AC converter MVA base", case.base_mva_ac)?;
    check_base("DC MVA base", case.base_mva_dc)
}

/// Both ends of every DC branch must have the same base voltage.
fn check_base_kv(case: &DcCase) -> Result<()> {
    let base_kv: HashMap<usize, f64> = case
        .bus
        .iter()
        .map(|b| (b.busdc_i, b.base_kvdc))
        .collect();
    let lookup = |row: usize, bus: usize| {
        base_kv.get(&bus).copied().ok_or(DcError::UnresolvedBus {
            table: "branchdc",
            row,
            bus,
        })
    };
    for (i, br) in case.branch.iter().enumerate() {
        let from_kv = lookup(i, br.f_bus)?;
        let to_kv = lookup(i, br.t_bus)?;
        if from_kv != to_kv {
            return Err(DcError::BaseVoltageMismatch {
                branch: i,
                from_kv,
                to_kv,
            });
        }
    }
    Ok(())
}

/// Multiplies impedances by `z_*` and admittances and currents by `y_*`.
fn scale(case: &mut DcCase, z_ac: f64, y_ac: f64, z_dc: f64, y_dc: f64) {
    for cv in case.conv.iter_mut() {
        cv.rtf *= z_ac;
        cv.xtf *= z_ac;
        cv.rc *= z_ac;
        cv.xc *= z_ac;
        cv.bf *= y_ac;
        cv.imax *= y_ac;
    }
    for b in case.bus.iter_mut() {
        b.cdc *= y_dc;
    }
    for br in case.branch.iter_mut() {
        br.r *= z_dc;
        br.l *= z_dc;
        br.c *= y_dc;
    }
    for cv in case.dcdc_mut() {
        cv.r *= z_dc;
        cv.l *= z_dc;
        cv.g *= y_dc;
        cv.c *= y_dc;
    }
}

/// Converts per-unit quantities of the DC case from the AC converter and DC
/// MVA bases to the system MVA base.
///
/// Impedances scale by `base_mva / base_old`, admittances and currents by
/// `base_old / base_mva`.
pub fn ext_to_int_pu(base_mva: f64, case: &mut DcCase) -> Result<()> {
    check_bases(base_mva, case)?;
    check_base_kv(case)?;

    let (ac, dc) = (case.base_mva_ac, case.base_mva_dc);
    scale(case, base_mva / ac, ac / base_mva, base_mva / dc, dc / base_mva);
    Ok(())
}

/// Converts per-unit quantities from the system MVA base back to the AC
/// converter and DC MVA bases of the case.
pub fn int_to_ext_pu(base_mva: f64, case: &mut DcCase) -> Result<()> {
    check_bases(base_mva, case)?;

    let (ac, dc) = (case.base_mva_ac, case.base_mva_dc);
    scale(case, ac / base_mva, base_mva / ac, dc / base_mva, base_mva / dc);
    Ok(())
}
