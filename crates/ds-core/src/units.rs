// ds-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricCharge as UomElectricCharge,
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    ElectricalResistance as UomElectricalResistance,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Charge = UomElectricCharge;
pub type Current = UomElectricCurrent;
pub type Potential = UomElectricPotential;
pub type Resistance = UomElectricalResistance;

#[inline]
pub fn volt(v: f64) -> Potential {
    use uom::si::electric_potential::volt;
    Potential::new::<volt>(v)
}

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn ampere(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn ampere_hour(v: f64) -> Charge {
    use uom::si::electric_charge::ampere_hour;
    Charge::new::<ampere_hour>(v)
}
