/// AcCase holds the parts of an AC case that take part in outage
/// processing. Bus data and the solve itself belong to the AC power flow.
#[derive(Clone, Debug, PartialEq)]
pub struct AcCase {
    /// System MVA base used for converting power into per-unit quantities.
    pub base_mva: f64,

    /// Generators and dispatchable loads.
    pub gen: Vec<Gen>,

    /// Transmission lines/cables and transformers.
    pub branch: Vec<AcBranch>,
}

/// Gen is a generator or dispatchable load.
#[derive(Clone, Debug, PartialEq)]
pub struct Gen {
    /// Bus number.
    pub gen_bus: usize,

    /// Real power output (MW).
    pub pg: f64,

    /// Reactive power output (MVAr).
    pub qg: f64,

    /// Maximum reactive power output (MVAr).
    pub qmax: f64,

    /// Minimum reactive power output (MVAr).
    pub qmin: f64,

    /// Voltage magnitude setpoint (p.u.).
    pub vg: f64,

    /// Total MVA base of this machine, defaults to base_mva.
    pub mbase: f64,

    pub gen_status: f64,

    /// Maximum real power output (MW).
    pub pmax: f64,

    /// Minimum real power output (MW).
    pub pmin: f64,
}

impl Gen {
    pub fn is_on(&self) -> bool {
        self.gen_status > 0.0
    }
}

/// AcBranch represents either a transmission line/cable or a two winding
/// transformer.
#[derive(Clone, Debug, PartialEq)]
pub struct AcBranch {
    pub f_bus: usize,
    pub t_bus: usize,

    /// Resistance (p.u.).
    pub br_r: f64,

    /// Reactance (p.u.).
    pub br_x: f64,

    /// Total line charging susceptance (p.u.).
    pub br_b: f64,

    /// MVA rating A (long term rating).
    pub rate_a: f64,

    /// Transformer off nominal tap ratio.
    pub tap: f64,

    /// Transformer phase shift angle (degrees).
    pub shift: f64,

    pub br_status: f64,

    pub pf: Option<f64>,
    pub qf: Option<f64>,
    pub pt: Option<f64>,
    pub qt: Option<f64>,
}

impl AcBranch {
    pub fn is_on(&self) -> bool {
        self.br_status == 1.0
    }
}
