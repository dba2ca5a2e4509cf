use num_complex::Complex64;

/// DcCase models the DC part of a hybrid AC/DC power system: DC buses, DC
/// branches, AC/DC converters and (optionally) DC/DC converters.
#[derive(Clone, Debug, PartialEq)]
pub struct DcCase {
    /// MVA base of the AC side of the converters.
    pub base_mva_ac: f64,

    /// MVA base of the DC grid.
    pub base_mva_dc: f64,

    /// DC grid topology.
    pub pol: Polarity,

    pub bus: Vec<BusDc>,

    pub branch: Vec<BranchDc>,

    /// AC/DC converters.
    pub conv: Vec<ConvDc>,

    /// DC/DC converters. `None` when the case has no such section.
    pub conv_dcdc: Option<Vec<ConvDcDc>>,
}

impl DcCase {
    /// DC/DC converters, or an empty slice if the section is absent.
    pub fn dcdc(&self) -> &[ConvDcDc] {
        self.conv_dcdc.as_deref().unwrap_or(&[])
    }

    pub(crate) fn dcdc_mut(&mut self) -> &mut [ConvDcDc] {
        self.conv_dcdc.as_deref_mut().unwrap_or(&mut [])
    }
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Polarity {
    Monopolar = 1,
    /// Symmetrically grounded monopolar.
    SymmetricMonopolar = 2,
}

impl Polarity {
    pub fn poles(&self) -> f64 {
        match self {
            Polarity::Monopolar => 1.0,
            Polarity::SymmetricMonopolar => 2.0,
        }
    }
}

/// BusDc is a node of a DC grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BusDc {
    /// DC bus number.
    pub busdc_i: usize,

    /// Number of the AC bus the bus is attached to through a converter.
    /// Zero if there is no AC connection.
    pub busac_i: usize,

    /// DC grid number.
    pub grid: usize,

    /// Power withdrawn from the DC grid (MW).
    pub pdc: f64,

    /// DC voltage (p.u.).
    pub vdc: f64,

    /// Base DC voltage (kV).
    pub base_kvdc: f64,

    /// Maximum DC voltage (p.u.).
    pub vdcmax: f64,

    /// Minimum DC voltage (p.u.).
    pub vdcmin: f64,

    /// DC bus capacitance (p.u.).
    pub cdc: f64,
}

impl BusDc {
    pub fn has_ac(&self) -> bool {
        self.busac_i != 0
    }
}

/// BranchDc is a DC line or cable.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchDc {
    pub f_bus: usize,
    pub t_bus: usize,

    /// Resistance (p.u.).
    pub r: f64,

    /// Inductance (p.u./s). Dynamics only.
    pub l: f64,

    /// Total line capacitance (p.u.*s). Dynamics only.
    pub c: f64,

    /// MW rating A (long term rating).
    pub rate_a: f64,

    /// MW rating B (short term rating).
    pub rate_b: f64,

    /// MW rating C (emergency rating).
    pub rate_c: f64,

    /// Branch status, 1 - in service, 0 - out of service.
    pub status: f64,

    /// Power injected at the "from" bus end (MW). Power flow result.
    pub pf: Option<f64>,

    /// Power injected at the "to" bus end (MW). Power flow result.
    pub pt: Option<f64>,
}

impl BranchDc {
    pub fn is_on(&self) -> bool {
        self.status == 1.0
    }
}

/// DC side control of an AC/DC converter.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DcControl {
    /// Constant active power.
    Power = 1,
    /// DC slack bus.
    Slack = 2,
    /// DC voltage droop.
    Droop = 3,
}

/// AC side control of an AC/DC converter.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum AcControl {
    PQ = 1,
    PV = 2,
}

/// ConvDc is a voltage source converter connecting an AC bus to a DC bus
/// through a phase reactor, a filter and a transformer.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvDc {
    /// DC bus number.
    pub busdc_i: usize,

    pub type_dc: DcControl,
    pub type_ac: AcControl,

    /// Active power injected into the AC grid (MW).
    pub p_g: f64,

    /// Reactive power injected into the AC grid (MVAr).
    pub q_g: f64,

    /// AC voltage setpoint (p.u.).
    pub vtar: f64,

    /// Transformer resistance (p.u.).
    pub rtf: f64,

    /// Transformer reactance (p.u.).
    pub xtf: f64,

    /// Filter susceptance (p.u.).
    pub bf: f64,

    /// Phase reactor resistance (p.u.).
    pub rc: f64,

    /// Phase reactor reactance (p.u.).
    pub xc: f64,

    /// Converter AC base voltage (kV).
    pub base_kvac: f64,

    pub vmmax: f64,
    pub vmmin: f64,

    /// Maximum converter current (p.u.).
    pub imax: f64,

    pub status: f64,

    /// Constant loss coefficient (MW).
    pub loss_a: f64,

    /// Linear loss coefficient (kV).
    pub loss_b: f64,

    /// Quadratic loss coefficient for rectifier operation (Ohm).
    pub loss_crec: f64,

    /// Quadratic loss coefficient for inverter operation (Ohm).
    pub loss_cinv: f64,

    pub droop: Option<Droop>,
}

/// Voltage droop control settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Droop {
    /// DC voltage droop (MW/p.u.).
    pub k: f64,

    /// Power setpoint (MW).
    pub pdcset: f64,

    /// Voltage setpoint (p.u.).
    pub vdcset: f64,

    /// Deadband (p.u.).
    pub dvdcset: f64,
}

impl ConvDc {
    pub fn is_on(&self) -> bool {
        self.status == 1.0
    }

    /// Transformer impedance.
    pub fn z_tf(&self) -> Complex64 {
        Complex64::new(self.rtf, self.xtf)
    }

    /// Phase reactor impedance.
    pub fn z_c(&self) -> Complex64 {
        Complex64::new(self.rc, self.xc)
    }

    /// Filter admittance.
    pub fn y_f(&self) -> Complex64 {
        Complex64::new(0.0, self.bf)
    }
}

/// ConvDcDc is a DC/DC converter with constant voltage ratio between a
/// higher voltage bus (C) and a lower voltage bus (M).
#[derive(Clone, Debug, PartialEq)]
pub struct ConvDcDc {
    pub c_bus: usize,
    pub m_bus: usize,

    /// Voltage ratio D (p.u.).
    pub d: f64,

    /// Series resistance (p.u.).
    pub r: f64,

    /// Shunt conductance (p.u.).
    pub g: f64,

    /// Power rating (MW).
    pub rate: f64,

    /// Series inductance (p.u.). Dynamics only.
    pub l: f64,

    /// Shunt capacitance (p.u.). Dynamics only.
    pub c: f64,

    pub status: f64,

    /// Power at the C bus (MW). Power flow result.
    pub pc: Option<f64>,

    /// Power at the M bus (MW). Power flow result.
    pub pm: Option<f64>,

    /// Converter losses (MW). Power flow result.
    pub ploss: Option<f64>,
}

impl ConvDcDc {
    pub fn is_on(&self) -> bool {
        self.status == 1.0
    }
}
