//! Core state types for the electrostatics engine.
//!
//! Defines the charge body and the charge store:
//! - `Charge` — one spherically symmetric, uniformly charged body
//! - `ChargeSystem` — the insertion-ordered, append-only collection of charges
//!
//! All evaluations over the store are order-independent sums; insertion order
//! is kept anyway so scans (e.g. [`ChargeSystem::strongest`]) are reproducible.

use nalgebra::Vector3;

use crate::error::EmError;

pub type NVec3 = Vector3<f64>;

/// Stable handle to a charge inside a [`ChargeSystem`]
/// Charges are never removed, so the index stays valid for the store's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeHandle(pub usize);

#[derive(Debug, Clone)]
pub struct Charge {
    pub position: NVec3, // sphere center, meters
    pub radius: f64, // meters, always > 0
    pub charge_density: f64, // C/m^3, sign is polarity
}

impl Charge {
    /// Sphere volume in m^3, computed on demand
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }

    /// Total charge in coulombs: density * volume
    /// Never cached, so it always agrees with the current radius/density
    pub fn charge(&self) -> f64 {
        self.charge_density * self.volume()
    }
}

/// The charge store: ground-truth state of the simulated system
/// Append-only; there is no removal or mutation API, an "update" is a new charge
#[derive(Debug, Clone, Default)]
pub struct ChargeSystem {
    pub charges: Vec<Charge>, // insertion-ordered collection of bodies
}

impl ChargeSystem {
    pub fn new() -> Self {
        Self { charges: Vec::new() }
    }

    /// Append a charge to the store
    /// Fails with [`EmError::InvalidGeometry`] for a non-positive radius;
    /// no field recomputation happens here, evaluation is always on demand
    pub fn add_charge(
        &mut self,
        position: NVec3,
        radius: f64,
        charge_density: f64,
    ) -> Result<ChargeHandle, EmError> {
        if radius <= 0.0 {
            return Err(EmError::InvalidGeometry { radius });
        }
        self.charges.push(Charge {
            position,
            radius,
            charge_density,
        });
        Ok(ChargeHandle(self.charges.len() - 1))
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Linear scan for the charge of greatest total charge
    /// First-encountered wins on ties; `None` for an empty store
    pub fn strongest(&self) -> Option<(ChargeHandle, &Charge)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, c) in self.charges.iter().enumerate() {
            let q = c.charge();
            match best {
                Some((_, bq)) if q <= bq => {}
                _ => best = Some((i, q)),
            }
        }
        best.map(|(i, _)| (ChargeHandle(i), &self.charges[i]))
    }
}
