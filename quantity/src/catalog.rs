/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The default contents of the three registries.

use crate::conversion::ConversionRule;
use crate::error::UnitError;
use crate::family::{
    AmountUnit, AreaUnit, CurrentUnit, DataRateUnit, DimensionlessUnit,
    EnergyUnit, ForceUnit, FrequencyUnit, InformationUnit, LengthUnit,
    LuminousUnit, MassUnit, PowerUnit, PressureUnit, SpeedUnit,
    TemperatureUnit, TimeUnit, UnitFamily, VolumeUnit,
};
use crate::formula::DimensionalFormula as F;
use crate::numeric::{Backend, RoundingMode};
use crate::prefix::{BinPrefix, DecPrefix, FracPrefix, Prefix, SiPrefix};
use crate::quantity::QuantityType;
use crate::registry::{
    ConversionFactorRegistry, ResultTypeRegistry, UnitRegistry,
};
use crate::system::UnitSystem;
use crate::unit::Unit;

/// A conversion rule for every catalog unit.
pub fn default_conversions(
    backend: &Backend,
    rule_scale: u32,
    mode: RoundingMode,
) -> Result<ConversionFactorRegistry, UnitError> {
    let mut registry = ConversionFactorRegistry::new(backend);
    for unit in Unit::all() {
        let rule = ConversionRule::for_unit(unit, backend, rule_scale, mode)?;
        registry.register(unit, rule)?;
    }
    log::debug!(
        "built default conversion registry: {} units ({} backend)",
        registry.len(),
        backend.kind()
    );
    Ok(registry)
}

/// Quantity types for the display units.
pub fn default_units() -> Result<UnitRegistry, UnitError> {
    let mut registry = UnitRegistry::new();
    for unit in display_units() {
        registry.register(unit, QuantityType::for_unit(unit))?;
    }
    log::debug!("built default unit registry: {} units", registry.len());
    Ok(registry)
}

/// Result types for the formulas cross-dimension arithmetic commonly
/// produces. Other systems fall back to the metric entry.
pub fn default_result_types() -> Result<ResultTypeRegistry, UnitError> {
    use UnitSystem::{Digital, Imperial, Metric, UsCustomary};

    let m = LengthUnit::Meter(SiPrefix::Unit);
    let ft = LengthUnit::Foot;
    let s = TimeUnit::Second(FracPrefix::Unit);
    let byte = InformationUnit::Byte(DecPrefix::Unit);

    let entries = [
        (Metric, Unit::Length(m)),
        (Imperial, Unit::Length(ft)),
        (UsCustomary, Unit::Length(ft)),
        (Metric, Unit::Area(AreaUnit::Square(m))),
        (Imperial, Unit::Area(AreaUnit::Square(ft))),
        (UsCustomary, Unit::Area(AreaUnit::Square(ft))),
        (Metric, Unit::Volume(VolumeUnit::Cubic(m))),
        (Imperial, Unit::Volume(VolumeUnit::Cubic(ft))),
        (UsCustomary, Unit::Volume(VolumeUnit::Cubic(ft))),
        (Metric, Unit::Mass(MassUnit::BASE)),
        (Imperial, Unit::Mass(MassUnit::Pound)),
        (Metric, Unit::Time(TimeUnit::BASE)),
        (Metric, Unit::Speed(SpeedUnit::BASE)),
        (Imperial, Unit::Speed(SpeedUnit::Per(ft, s))),
        (UsCustomary, Unit::Speed(SpeedUnit::Per(ft, s))),
        (Metric, Unit::Coherent(F::LENGTH.divide(F::TIME.power(2)))),
        (Metric, Unit::Frequency(FrequencyUnit::BASE)),
        (Metric, Unit::Force(ForceUnit::BASE)),
        (Metric, Unit::Energy(EnergyUnit::BASE)),
        (Metric, Unit::Power(PowerUnit::BASE)),
        (Metric, Unit::Pressure(PressureUnit::BASE)),
        (Metric, Unit::ElectricCurrent(CurrentUnit::BASE)),
        (Digital, Unit::Information(byte)),
        (Digital, Unit::DataRate(DataRateUnit::Per(byte, s))),
        (Metric, Unit::Dimensionless(DimensionlessUnit::BASE)),
    ];

    let mut registry = ResultTypeRegistry::new();
    for (system, unit) in entries {
        registry.register(
            unit.formula(),
            system,
            unit,
            QuantityType::for_unit(unit),
        )?;
    }
    log::debug!(
        "built default result type registry: {} entries",
        registry.len()
    );
    Ok(registry)
}

/// Units offered for display and autoscaling: the everyday subset of
/// the catalog.
pub fn display_units() -> Vec<Unit> {
    use SiPrefix::{Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, Unit as One};

    let lengths = [
        LengthUnit::Meter(Nano),
        LengthUnit::Meter(Micro),
        LengthUnit::Meter(Milli),
        LengthUnit::Meter(SiPrefix::Centi),
        LengthUnit::Meter(One),
        LengthUnit::Meter(Kilo),
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];
    let areas = LengthUnit::COMMON
        .map(AreaUnit::Square)
        .into_iter()
        .chain([AreaUnit::Hectare, AreaUnit::Acre]);
    let volumes = [
        VolumeUnit::Cubic(LengthUnit::Meter(SiPrefix::Centi)),
        VolumeUnit::Cubic(LengthUnit::Meter(One)),
        VolumeUnit::Cubic(LengthUnit::Inch),
        VolumeUnit::Cubic(LengthUnit::Foot),
        VolumeUnit::Liter(Milli),
        VolumeUnit::Liter(One),
        VolumeUnit::UsGallon,
        VolumeUnit::ImperialGallon,
    ];
    let masses = [
        MassUnit::Gram(Milli),
        MassUnit::Gram(One),
        MassUnit::Gram(Kilo),
        MassUnit::Tonne,
        MassUnit::Ounce,
        MassUnit::Pound,
        MassUnit::Stone,
    ];
    let times = FracPrefix::SCALE
        .iter()
        .skip(1)
        .map(|p| TimeUnit::Second(*p))
        .chain([
            TimeUnit::Minute,
            TimeUnit::Hour,
            TimeUnit::Day,
            TimeUnit::Week,
        ]);
    let second = TimeUnit::Second(FracPrefix::Unit);
    let speeds = [
        SpeedUnit::BASE,
        SpeedUnit::Per(LengthUnit::Meter(Kilo), TimeUnit::Hour),
        SpeedUnit::Per(LengthUnit::Mile, TimeUnit::Hour),
        SpeedUnit::Per(LengthUnit::Foot, second),
        SpeedUnit::Knot,
    ];
    let si = [Milli, One, Kilo, Mega, Giga];
    let hertz = si[1..]
        .iter()
        .map(|p| Unit::Frequency(FrequencyUnit::Hertz(*p)));
    let forces = [
        ForceUnit::BASE,
        ForceUnit::Newton(Kilo),
        ForceUnit::PoundForce,
    ];
    let energies = [
        EnergyUnit::WattHour(One),
        EnergyUnit::WattHour(Kilo),
        EnergyUnit::WattHour(Mega),
        EnergyUnit::Calorie(One),
        EnergyUnit::Calorie(Kilo),
        EnergyUnit::BritishThermalUnit,
    ];
    let pressures = [
        PressureUnit::Pascal(One),
        PressureUnit::Pascal(Hecto),
        PressureUnit::Pascal(Kilo),
        PressureUnit::Pascal(Mega),
        PressureUnit::Bar(Milli),
        PressureUnit::Bar(One),
        PressureUnit::Atmosphere,
        PressureUnit::PoundPerSquareInch,
    ];
    let bytes = DecPrefix::SCALE
        .iter()
        .map(|p| InformationUnit::Byte(*p))
        .chain(
            BinPrefix::SCALE
                .iter()
                .map(|p| InformationUnit::BinaryByte(*p)),
        )
        .chain([InformationUnit::Bit(DecPrefix::Unit)]);
    let rates = DecPrefix::SCALE
        .iter()
        .flat_map(|p| {
            [InformationUnit::Byte(*p), InformationUnit::Bit(*p)]
        })
        .map(move |i| DataRateUnit::Per(i, second));

    std::iter::empty::<Unit>()
        .chain(lengths.map(Unit::Length))
        .chain(areas.map(Unit::Area))
        .chain(volumes.map(Unit::Volume))
        .chain(masses.map(Unit::Mass))
        .chain(times.map(Unit::Time))
        .chain(TemperatureUnit::all().into_iter().map(Unit::Temperature))
        .chain(si.map(|p| Unit::ElectricCurrent(CurrentUnit::Ampere(p))))
        .chain([Unit::AmountOfSubstance(AmountUnit::BASE)])
        .chain([Unit::LuminousIntensity(LuminousUnit::BASE)])
        .chain(hertz)
        .chain([Unit::Frequency(FrequencyUnit::RevolutionsPerMinute)])
        .chain(speeds.map(Unit::Speed))
        .chain(forces.map(Unit::Force))
        .chain(si.map(|p| Unit::Energy(EnergyUnit::Joule(p))))
        .chain(energies.map(Unit::Energy))
        .chain(si.map(|p| Unit::Power(PowerUnit::Watt(p))))
        .chain([Unit::Power(PowerUnit::Horsepower)])
        .chain(pressures.map(Unit::Pressure))
        .chain(bytes.map(Unit::Information))
        .chain(rates.map(Unit::DataRate))
        .chain(DimensionlessUnit::all().into_iter().map(Unit::Dimensionless))
        .collect()
}
