//! Unit definitions - length, weight and temperature

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::Measure;
use crate::unit::{Scale, UnitDefinition};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: Vec<UnitDefinition>,
    /// lowercased name -> index into `units`
    names: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            names: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by any of its names, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&UnitDefinition> {
        self.names
            .get(&name.to_lowercase())
            .map(|&index| &self.units[index])
    }

    /// All units in declaration order
    pub fn all_units(&self) -> &[UnitDefinition] {
        &self.units
    }

    /// Get all units of a measure, in declaration order
    pub fn by_measure(&self, measure: Measure) -> Vec<&UnitDefinition> {
        self.units.iter()
            .filter(|u| u.measure == measure)
            .collect()
    }

    /// The pivot unit every conversion of `measure` goes through
    pub fn base_unit(&self, measure: Measure) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.measure == measure && u.is_base())
    }

    // Declaration order wins: a name already taken by an earlier unit keeps
    // pointing at it.
    fn register(&mut self, unit: UnitDefinition) {
        let index = self.units.len();
        for name in unit.names {
            self.names.entry(name.to_lowercase()).or_insert(index);
        }
        self.units.push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        self.register(UnitDefinition::linear(Measure::Length, &["meter", "meters", "m"], 1.0));
        self.register(UnitDefinition::linear(Measure::Length, &["kilometer", "kilometers", "km"], 1_000.0));
        self.register(UnitDefinition::linear(Measure::Length, &["centimeter", "centimeters", "cm"], 0.01));
        self.register(UnitDefinition::linear(Measure::Length, &["millimeter", "millimeters", "mm"], 0.001));
        self.register(UnitDefinition::linear(Measure::Length, &["mile", "miles", "mi"], 1_609.35));
        self.register(UnitDefinition::linear(Measure::Length, &["yard", "yards", "yd"], 0.9144));
        self.register(UnitDefinition::linear(Measure::Length, &["foot", "feet", "ft"], 0.3048));
        self.register(UnitDefinition::linear(Measure::Length, &["inch", "inches", "in"], 0.0254));
    }

    fn register_weight_units(&mut self) {
        self.register(UnitDefinition::linear(Measure::Weight, &["gram", "grams", "g"], 1.0));
        self.register(UnitDefinition::linear(Measure::Weight, &["kilogram", "kilograms", "kg"], 1_000.0));
        self.register(UnitDefinition::linear(Measure::Weight, &["milligram", "milligrams", "mg"], 0.001));
        self.register(UnitDefinition::linear(Measure::Weight, &["pound", "pounds", "lb"], 453.592));
        self.register(UnitDefinition::linear(Measure::Weight, &["ounce", "ounces", "oz"], 28.3495));
    }

    fn register_temperature_units(&mut self) {
        // Kelvin is the base: offset 0, identity scale
        self.register(UnitDefinition::affine(
            Measure::Temperature,
            &["kelvin", "kelvins", "k"],
            0.0,
            Scale::IDENTITY,
            Scale::IDENTITY,
        ));

        // K = C + 273.15
        self.register(UnitDefinition::affine(
            Measure::Temperature,
            &["degree Celsius", "degrees Celsius", "celsius", "dc", "c"],
            273.15,
            Scale::IDENTITY,
            Scale::IDENTITY,
        ));

        // K = (F + 459.67) * 5/9
        self.register(UnitDefinition::affine(
            Measure::Temperature,
            &["degree Fahrenheit", "degrees Fahrenheit", "fahrenheit", "df", "f"],
            459.67,
            Scale::new(5.0, 9.0),
            Scale::new(9.0, 5.0),
        ));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a unit in the global registry
pub fn lookup(name: &str) -> Option<&'static UnitDefinition> {
    UNITS.lookup(name)
}

/// All units of the global registry, in declaration order
pub fn all_units() -> &'static [UnitDefinition] {
    UNITS.all_units()
}
