// DC bus //

pub(crate) const BUSDC_I: usize = 0; // DC bus number
pub(crate) const BUSAC_I: usize = 1; // AC bus number (0 if no AC connection)
pub(crate) const GRIDDC: usize = 2; // DC grid number
pub(crate) const PDC: usize = 3; // Pdc, power withdrawn from the DC grid (MW)
pub(crate) const VDC: usize = 4; // Vdc, DC voltage (p.u.)
pub(crate) const BASE_KVDC: usize = 5; // baseKVdc, base DC voltage (kV)
pub(crate) const VDCMAX: usize = 6; // maximum DC voltage (p.u.)
pub(crate) const VDCMIN: usize = 7; // minimum DC voltage (p.u.)
pub(crate) const CDC: usize = 8; // DC bus capacitance (p.u.)

pub(crate) const BUSDC_COLS: usize = 9;

// DC branch //

pub(crate) const F_BUSDC: usize = 0; // f, from bus number
pub(crate) const T_BUSDC: usize = 1; // t, to bus number
pub(crate) const BRDC_R: usize = 2; // r, resistance (p.u.)
pub(crate) const BRDC_L: usize = 3; // l, inductance (p.u./s)
pub(crate) const BRDC_C: usize = 4; // c, total line capacitance (p.u.*s)
pub(crate) const RATEA_DC: usize = 5; // rateA, MVA rating A (long term rating)
pub(crate) const RATEB_DC: usize = 6; // rateB, MVA rating B (short term rating)
pub(crate) const RATEC_DC: usize = 7; // rateC, MVA rating C (emergency rating)
pub(crate) const BRDC_STATUS: usize = 8; // initial branch status, 1 - in service, 0 - out of service

pub(crate) const BRANCHDC_COLS: usize = 9;

// included in power flow solution, not necessarily in input
pub(crate) const PFDC: usize = 9; // real power injected at "from" bus end (MW)
pub(crate) const PTDC: usize = 10; // real power injected at "to" bus end (MW)

// AC/DC converter //

pub(crate) const CONV_BUS: usize = 0; // DC bus number
pub(crate) const CONVTYPE_DC: usize = 1; // DC bus type (1 = P, 2 = slack, 3 = droop)
pub(crate) const CONVTYPE_AC: usize = 2; // AC bus type (1 = PQ, 2 = PV)
pub(crate) const PCONV: usize = 3; // active power injected in the AC grid (MW)
pub(crate) const QCONV: usize = 4; // reactive power injected in the AC grid (MVAr)
pub(crate) const VCONV: usize = 5; // AC voltage setpoint (p.u.)
pub(crate) const RTF: usize = 6; // transformer resistance (p.u.)
pub(crate) const XTF: usize = 7; // transformer reactance (p.u.)
pub(crate) const BF: usize = 8; // filter susceptance (p.u.)
pub(crate) const RCONV: usize = 9; // converter reactor resistance (p.u.)
pub(crate) const XCONV: usize = 10; // converter reactor reactance (p.u.)
pub(crate) const BASEKVC: usize = 11; // converter AC base voltage (kV)
pub(crate) const VMMAX: usize = 12; // maximum converter voltage magnitude (p.u.)
pub(crate) const VMMIN: usize = 13; // minimum converter voltage magnitude (p.u.)
pub(crate) const ICMAX: usize = 14; // maximum converter current (p.u.)
pub(crate) const CONVSTATUS: usize = 15; // converter status, 1 - in service, 0 - out of service
pub(crate) const LOSSA: usize = 16; // constant loss coefficient (MW)
pub(crate) const LOSSB: usize = 17; // linear loss coefficient (kV)
pub(crate) const LOSSCR: usize = 18; // quadratic loss coefficient, rectifier (Ohm)
pub(crate) const LOSSCI: usize = 19; // quadratic loss coefficient, inverter (Ohm)

pub(crate) const CONVDC_COLS: usize = 20;

// voltage droop control, not necessarily in input
pub(crate) const DROOP: usize = 20; // DC voltage droop (MW/p.u.)
pub(crate) const PDCSET: usize = 21; // voltage droop power setpoint (MW)
pub(crate) const VDCSET: usize = 22; // voltage droop voltage setpoint (p.u.)
pub(crate) const DVDCSET: usize = 23; // voltage droop deadband (p.u.)

// DC/DC converter //

pub(crate) const C_BUSDC: usize = 0; // higher voltage bus number
pub(crate) const M_BUSDC: usize = 1; // lower voltage bus number
pub(crate) const D_RATIO: usize = 2; // voltage ratio D (p.u.)
pub(crate) const R_DCDC: usize = 3; // series resistance (p.u.)
pub(crate) const G_DCDC: usize = 4; // shunt conductance (p.u.)
pub(crate) const RATE_DCDC: usize = 5; // power rating (MW)
pub(crate) const L_DCDC: usize = 6; // series inductance (p.u.), dynamics only
pub(crate) const C_DCDC: usize = 7; // shunt capacitance (p.u.), dynamics only
pub(crate) const STATUS_DCDC: usize = 8; // status, 1 - in service, 0 - out of service

pub(crate) const CONVDCDC_COLS: usize = 9;

// included in power flow solution, not necessarily in input
pub(crate) const PC_DCDC: usize = 9; // power at the higher voltage bus (MW)
pub(crate) const PM_DCDC: usize = 10; // power at the lower voltage bus (MW)
pub(crate) const PLOSS_DCDC: usize = 11; // total losses (MW)

// AC branch //

pub(crate) const F_BUS: usize = 0; // f, from bus number
pub(crate) const T_BUS: usize = 1; // t, to bus number
pub(crate) const BR_R: usize = 2; // r, resistance (p.u.)
pub(crate) const BR_X: usize = 3; // x, reactance (p.u.)
pub(crate) const BR_B: usize = 4; // b, total line charging susceptance (p.u.)
pub(crate) const RATE_A: usize = 5; // rateA, MVA rating A (long term rating)
pub(crate) const TAP: usize = 8; // ratio, transformer off nominal turns ratio
pub(crate) const SHIFT: usize = 9; // angle, transformer phase shift angle (degrees)
pub(crate) const BR_STATUS: usize = 10; // initial branch status, 1 - in service, 0 - out of service

pub(crate) const BRANCH_COLS: usize = 11;

pub(crate) const PF: usize = 13; // real power injected at "from" bus end (MW)
pub(crate) const QF: usize = 14; // reactive power injected at "from" bus end (MVAr)
pub(crate) const PT: usize = 15; // real power injected at "to" bus end (MW)
pub(crate) const QT: usize = 16; // reactive power injected at "to" bus end (MVAr)

// Gen //

pub(crate) const GEN_BUS: usize = 0; // bus number
pub(crate) const PG: usize = 1; // Pg, real power output (MW)
pub(crate) const QG: usize = 2; // Qg, reactive power output (MVAr)
pub(crate) const QMAX: usize = 3; // Qmax, maximum reactive power output at Pmin (MVAr)
pub(crate) const QMIN: usize = 4; // Qmin, minimum reactive power output at Pmin (MVAr)
pub(crate) const VG: usize = 5; // Vg, voltage magnitude setpoint (p.u.)
pub(crate) const MBASE: usize = 6; // mBase, total MVA base of this machine, defaults to baseMVA
pub(crate) const GEN_STATUS: usize = 7; // status, 1 - machine in service, 0 - machine out of service
pub(crate) const PMAX: usize = 8; // Pmax, maximum real power output (MW)
pub(crate) const PMIN: usize = 9; // Pmin, minimum real power output (MW)

pub(crate) const GEN_COLS: usize = 10;
