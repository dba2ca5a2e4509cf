use derive_builder::Builder;

/// How invalid DC/DC converter status flags are handled.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub enum StatusPolicy {
    /// Invalid flags abort the pipeline, as for DC branches and AC/DC
    /// converters.
    #[default]
    Strict,
    /// Invalid flags are logged and the converter is treated as out of
    /// service.
    Lenient,
}

/// Options for preparing a DC network for power flow.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct PrepOpt {
    /// System MVA base all per-unit quantities are converted to.
    pub base_mva: f64,

    /// Handling of invalid DC/DC converter status flags.
    pub dcdc_status: StatusPolicy,
}

impl Default for PrepOpt {
    fn default() -> Self {
        Self {
            base_mva: 100.0,
            dcdc_status: StatusPolicy::Strict,
        }
    }
}

impl PrepOptBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(base_mva) = self.base_mva {
            if !(base_mva > 0.0 && base_mva.is_finite()) {
                return Err(format!("base_mva must be positive (got {})", base_mva));
            }
        }
        Ok(())
    }
}
