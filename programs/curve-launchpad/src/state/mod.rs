use std::collections::HashMap;

use crate::address::{bonding_curve_address, Address};

pub mod bonding_curve;
pub mod global_config;

pub use bonding_curve::BondingCurve;
pub use global_config::{GlobalConfig, GlobalSettingsInput};

/// Durable state owned by the program: the GlobalConfig singleton plus
/// one BondingCurve per mint, keyed by derived curve address.
#[derive(Debug, Default, Clone)]
pub struct AccountStore {
    global: Option<GlobalConfig>,
    curves: HashMap<Address, BondingCurve>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global(&self) -> Option<&GlobalConfig> {
        self.global.as_ref()
    }

    pub fn set_global(&mut self, config: GlobalConfig) {
        self.global = Some(config);
    }

    pub fn curve(&self, mint: &Address) -> Option<&BondingCurve> {
        self.curves.get(&bonding_curve_address(mint))
    }

    /// Write a curve back under its derived address. Transitions call
    /// this exactly once, after every check has passed.
    pub fn insert_curve(&mut self, curve: BondingCurve) {
        self.curves.insert(bonding_curve_address(&curve.mint), curve);
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }
}
