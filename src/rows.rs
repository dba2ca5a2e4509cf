use crate::ac::{AcBranch, AcCase, Gen};
use crate::case::{
    AcControl, BranchDc, BusDc, ConvDc, ConvDcDc, DcCase, DcControl, Droop, Polarity,
};
use crate::error::{DcError, Result};
use crate::idx;

/// A numeric table row, as found in case files.
pub type Row = Vec<f64>;

fn check_len(table: &'static str, row: usize, a: &[f64], cols: usize) -> Result<()> {
    if a.len() < cols {
        return Err(DcError::Table {
            table,
            row,
            msg: format!("expected at least {} columns, found {}", cols, a.len()),
        });
    }
    Ok(())
}

fn integer(table: &'static str, row: usize, name: &str, v: f64) -> Result<usize> {
    if v < 0.0 || v.fract() != 0.0 || !v.is_finite() {
        return Err(DcError::Table {
            table,
            row,
            msg: format!("{} must be a non-negative integer, found {}", name, v),
        });
    }
    Ok(v as usize)
}

fn bus_number(table: &'static str, row: usize, v: f64) -> Result<usize> {
    let n = integer(table, row, "bus number", v)?;
    if n == 0 {
        return Err(DcError::Table {
            table,
            row,
            msg: "bus numbers start at 1".to_string(),
        });
    }
    Ok(n)
}

/// Status flags are checked when the table is partitioned.
fn status(table: &'static str, row: usize, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(DcError::Table {
            table,
            row,
            msg: format!("status must be a number, found {}", v),
        });
    }
    Ok(v)
}

fn opt(a: &[f64], col: usize) -> Option<f64> {
    a.get(col).copied()
}

pub fn array_to_busdc(i: usize, a: &[f64]) -> Result<BusDc> {
    check_len("busdc", i, a, idx::BUSDC_COLS)?;
    Ok(BusDc {
        busdc_i: bus_number("busdc", i, a[idx::BUSDC_I])?,
        busac_i: integer("busdc", i, "AC bus number", a[idx::BUSAC_I])?,
        grid: integer("busdc", i, "grid number", a[idx::GRIDDC])?,
        pdc: a[idx::PDC],
        vdc: a[idx::VDC],
        base_kvdc: a[idx::BASE_KVDC],
        vdcmax: a[idx::VDCMAX],
        vdcmin: a[idx::VDCMIN],
        cdc: a[idx::CDC],
    })
}

pub fn array_to_branchdc(i: usize, a: &[f64]) -> Result<BranchDc> {
    check_len("branchdc", i, a, idx::BRANCHDC_COLS)?;
    Ok(BranchDc {
        f_bus: bus_number("branchdc", i, a[idx::F_BUSDC])?,
        t_bus: bus_number("branchdc", i, a[idx::T_BUSDC])?,
        r: a[idx::BRDC_R],
        l: a[idx::BRDC_L],
        c: a[idx::BRDC_C],
        rate_a: a[idx::RATEA_DC],
        rate_b: a[idx::RATEB_DC],
        rate_c: a[idx::RATEC_DC],
        status: status("branchdc", i, a[idx::BRDC_STATUS])?,
        pf: opt(a, idx::PFDC),
        pt: opt(a, idx::PTDC),
    })
}

pub fn array_to_convdc(i: usize, a: &[f64]) -> Result<ConvDc> {
    check_len("convdc", i, a, idx::CONVDC_COLS)?;

    let type_dc = match a[idx::CONVTYPE_DC] as i32 {
        1 => DcControl::Power,
        2 => DcControl::Slack,
        3 => DcControl::Droop,
        _ => {
            return Err(DcError::InvalidControl {
                table: "convdc",
                row: i,
                field: "DC control",
                value: a[idx::CONVTYPE_DC],
            })
        }
    };
    let type_ac = match a[idx::CONVTYPE_AC] as i32 {
        1 => AcControl::PQ,
        2 => AcControl::PV,
        _ => {
            return Err(DcError::InvalidControl {
                table: "convdc",
                row: i,
                field: "AC control",
                value: a[idx::CONVTYPE_AC],
            })
        }
    };
    let droop = if a.len() > idx::DVDCSET {
        Some(Droop {
            k: a[idx::DROOP],
            pdcset: a[idx::PDCSET],
            vdcset: a[idx::VDCSET],
            dvdcset: a[idx::DVDCSET],
        })
    } else {
        None
    };

    Ok(ConvDc {
        busdc_i: bus_number("convdc", i, a[idx::CONV_BUS])?,
        type_dc,
        type_ac,
        p_g: a[idx::PCONV],
        q_g: a[idx::QCONV],
        vtar: a[idx::VCONV],
        rtf: a[idx::RTF],
        xtf: a[idx::XTF],
        bf: a[idx::BF],
        rc: a[idx::RCONV],
        xc: a[idx::XCONV],
        base_kvac: a[idx::BASEKVC],
        vmmax: a[idx::VMMAX],
        vmmin: a[idx::VMMIN],
        imax: a[idx::ICMAX],
        status: status("convdc", i, a[idx::CONVSTATUS])?,
        loss_a: a[idx::LOSSA],
        loss_b: a[idx::LOSSB],
        loss_crec: a[idx::LOSSCR],
        loss_cinv: a[idx::LOSSCI],
        droop,
    })
}

pub fn array_to_convdcdc(i: usize, a: &[f64]) -> Result<ConvDcDc> {
    check_len("convdcdc", i, a, idx::CONVDCDC_COLS)?;
    Ok(ConvDcDc {
        c_bus: bus_number("convdcdc", i, a[idx::C_BUSDC])?,
        m_bus: bus_number("convdcdc", i, a[idx::M_BUSDC])?,
        d: a[idx::D_RATIO],
        r: a[idx::R_DCDC],
        g: a[idx::G_DCDC],
        rate: a[idx::RATE_DCDC],
        l: a[idx::L_DCDC],
        c: a[idx::C_DCDC],
        status: status("convdcdc", i, a[idx::STATUS_DCDC])?,
        pc: opt(a, idx::PC_DCDC),
        pm: opt(a, idx::PM_DCDC),
        ploss: opt(a, idx::PLOSS_DCDC),
    })
}

pub fn array_to_branch(i: usize, a: &[f64]) -> Result<AcBranch> {
    check_len("branch", i, a, idx::BRANCH_COLS)?;
    Ok(AcBranch {
        f_bus: bus_number("branch", i, a[idx::F_BUS])?,
        t_bus: bus_number("branch", i, a[idx::T_BUS])?,
        br_r: a[idx::BR_R],
        br_x: a[idx::BR_X],
        br_b: a[idx::BR_B],
        rate_a: a[idx::RATE_A],
        tap: a[idx::TAP],
        shift: a[idx::SHIFT],
        br_status: status("branch", i, a[idx::BR_STATUS])?,
        pf: opt(a, idx::PF),
        qf: opt(a, idx::QF),
        pt: opt(a, idx::PT),
        qt: opt(a, idx::QT),
    })
}

pub fn array_to_gen(i: usize, a: &[f64]) -> Result<Gen> {
    check_len("gen", i, a, idx::GEN_COLS)?;
    Ok(Gen {
        gen_bus: bus_number("gen", i, a[idx::GEN_BUS])?,
        pg: a[idx::PG],
        qg: a[idx::QG],
        qmax: a[idx::QMAX],
        qmin: a[idx::QMIN],
        vg: a[idx::VG],
        mbase: a[idx::MBASE],
        gen_status: status("gen", i, a[idx::GEN_STATUS])?,
        pmax: a[idx::PMAX],
        pmin: a[idx::PMIN],
    })
}

fn table<T>(rows: &[Row], f: fn(usize, &[f64]) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().enumerate().map(|(i, a)| f(i, a)).collect()
}

impl DcCase {
    /// Builds a DC case from the numeric tables of a case file.
    ///
    /// An empty `convdcdc` table is treated the same as an absent one.
    pub fn from_tables(
        base_mva_ac: f64,
        base_mva_dc: f64,
        pol: f64,
        busdc: &[Row],
        convdc: &[Row],
        branchdc: &[Row],
        convdcdc: Option<&[Row]>,
    ) -> Result<DcCase> {
        let pol = match pol {
            p if p == 1.0 => Polarity::Monopolar,
            p if p == 2.0 => Polarity::SymmetricMonopolar,
            p => return Err(DcError::InvalidPolarity(p)),
        };
        let conv_dcdc = match convdcdc {
            Some(rows) if !rows.is_empty() => Some(table(rows, array_to_convdcdc)?),
            _ => None,
        };
        Ok(DcCase {
            base_mva_ac,
            base_mva_dc,
            pol,
            bus: table(busdc, array_to_busdc)?,
            branch: table(branchdc, array_to_branchdc)?,
            conv: table(convdc, array_to_convdc)?,
            conv_dcdc,
        })
    }
}

impl AcCase {
    pub fn from_tables(base_mva: f64, gen: &[Row], branch: &[Row]) -> Result<AcCase> {
        Ok(AcCase {
            base_mva,
            gen: table(gen, array_to_gen)?,
            branch: table(branch, array_to_branch)?,
        })
    }
}

pub fn busdc_to_array(b: &BusDc) -> Row {
    vec![
        b.busdc_i as f64,
        b.busac_i as f64,
        b.grid as f64,
        b.pdc,
        b.vdc,
        b.base_kvdc,
        b.vdcmax,
        b.vdcmin,
        b.cdc,
    ]
}

pub fn branchdc_to_array(br: &BranchDc) -> Row {
    let mut a = vec![
        br.f_bus as f64,
        br.t_bus as f64,
        br.r,
        br.l,
        br.c,
        br.rate_a,
        br.rate_b,
        br.rate_c,
        br.status,
    ];
    if let (Some(pf), Some(pt)) = (br.pf, br.pt) {
        a.extend([pf, pt]);
    }
    a
}

pub fn convdc_to_array(cv: &ConvDc) -> Row {
    let mut a = vec![
        cv.busdc_i as f64,
        cv.type_dc as i32 as f64,
        cv.type_ac as i32 as f64,
        cv.p_g,
        cv.q_g,
        cv.vtar,
        cv.rtf,
        cv.xtf,
        cv.bf,
        cv.rc,
        cv.xc,
        cv.base_kvac,
        cv.vmmax,
        cv.vmmin,
        cv.imax,
        cv.status,
        cv.loss_a,
        cv.loss_b,
        cv.loss_crec,
        cv.loss_cinv,
    ];
    if let Some(d) = &cv.droop {
        a.extend([d.k, d.pdcset, d.vdcset, d.dvdcset]);
    }
    a
}

pub fn convdcdc_to_array(cv: &ConvDcDc) -> Row {
    let mut a = vec![
        cv.c_bus as f64,
        cv.m_bus as f64,
        cv.d,
        cv.r,
        cv.g,
        cv.rate,
        cv.l,
        cv.c,
        cv.status,
    ];
    if let (Some(pc), Some(pm), Some(ploss)) = (cv.pc, cv.pm, cv.ploss) {
        a.extend([pc, pm, ploss]);
    }
    a
}
