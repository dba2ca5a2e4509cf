use crate::case::DcCase;
use crate::error::{DcError, Result};
use crate::order::{DcOrder, State};

fn i2e(order: &DcOrder, table: &'static str, row: usize, bus: usize) -> Result<usize> {
    match order.i2e.get(bus) {
        Some(&e) if bus != 0 => Ok(e),
        _ => Err(DcError::UnresolvedBus { table, row, bus }),
    }
}

/// Reverts [`ext_to_int_dc`](crate::ext_to_int_dc): restores the original bus
/// row order and external bus numbers of buses, branches and converters.
pub fn int_to_ext_dc(case: &mut DcCase, order: &mut DcOrder) -> Result<()> {
    if order.state == State::External {
        return Ok(());
    }
    if case.bus.len() != order.nb() {
        return Err(DcError::Order(format!(
            "ordering covers {} DC buses, case has {}",
            order.nb(),
            case.bus.len()
        )));
    }

    let mut bus = case.bus.clone();
    for (k, &j) in order.pmt.iter().enumerate() {
        let mut b = case.bus[k].clone();
        b.busdc_i = i2e(order, "busdc", k, b.busdc_i)?;
        bus[j] = b;
    }

    let mut branch = case.branch.clone();
    for (i, br) in branch.iter_mut().enumerate() {
        br.f_bus = i2e(order, "branchdc", i, br.f_bus)?;
        br.t_bus = i2e(order, "branchdc", i, br.t_bus)?;
    }
    let mut conv = case.conv.clone();
    for (i, cv) in conv.iter_mut().enumerate() {
        cv.busdc_i = i2e(order, "convdc", i, cv.busdc_i)?;
    }
    let mut conv_dcdc = case.conv_dcdc.clone();
    if let Some(conv_dcdc) = conv_dcdc.as_mut() {
        for (i, cv) in conv_dcdc.iter_mut().enumerate() {
            cv.c_bus = i2e(order, "convdcdc", i, cv.c_bus)?;
            cv.m_bus = i2e(order, "convdcdc", i, cv.m_bus)?;
        }
    }

    case.bus = bus;
    case.branch = branch;
    case.conv = conv;
    case.conv_dcdc = conv_dcdc;

    order.state = State::External;

    Ok(())
}
