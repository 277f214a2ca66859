use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Mass,
    Volume,
}

struct UnitDef {
    symbols: &'static [&'static str],
    dimension: Dimension,
    per_base: i64,
}

// Bases: meter, kilogram, liter. per_base is how many of the unit make one base unit.
const UNIT_TABLE: &[UnitDef] = &[
    UnitDef {
        symbols: &["m", "meter", "meters"],
        dimension: Dimension::Length,
        per_base: 1,
    },
    UnitDef {
        symbols: &["cm", "centimeter", "centimeters"],
        dimension: Dimension::Length,
        per_base: 100,
    },
    UnitDef {
        symbols: &["kg", "kilo", "kilos", "kilogram", "kilograms"],
        dimension: Dimension::Mass,
        per_base: 1,
    },
    UnitDef {
        symbols: &["g", "gram", "grams"],
        dimension: Dimension::Mass,
        per_base: 1000,
    },
    UnitDef {
        symbols: &["l", "liter", "liters"],
        dimension: Dimension::Volume,
        per_base: 1,
    },
    UnitDef {
        symbols: &["ml", "milliliter", "milliliters"],
        dimension: Dimension::Volume,
        per_base: 1000,
    },
];

fn lookup(unit: &str) -> Option<&'static UnitDef> {
    let normalized = unit.trim().to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|def| def.symbols.contains(&normalized.as_str()))
}

pub fn dimension_of(unit: &str) -> Option<Dimension> {
    lookup(unit).map(|def| def.dimension)
}

// Unrecognized symbols are count units and pass through unchanged.
pub fn to_base(value: Decimal, unit: &str) -> Decimal {
    match lookup(unit) {
        Some(def) => value / Decimal::from(def.per_base),
        None => value,
    }
}

pub fn from_base(value: Decimal, unit: &str) -> Decimal {
    match lookup(unit) {
        Some(def) => value * Decimal::from(def.per_base),
        None => value,
    }
}

pub fn convert(value: Decimal, from_unit: &str, to_unit: &str) -> Decimal {
    from_base(to_base(value, from_unit), to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centimeters_convert_against_the_meter_base() {
        assert_eq!(to_base(Decimal::from(150), "cm"), Decimal::new(15, 1));
        assert_eq!(from_base(Decimal::new(15, 1), "cm"), Decimal::from(150));
    }

    #[test]
    fn mass_and_volume_scale_by_a_thousand() {
        assert_eq!(to_base(Decimal::from(2500), "g"), Decimal::new(25, 1));
        assert_eq!(from_base(Decimal::from(2), "ml"), Decimal::from(2000));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(to_base(Decimal::from(2000), "Grams"), Decimal::from(2));
        assert_eq!(dimension_of("KG"), Some(Dimension::Mass));
        assert_eq!(dimension_of("Liters"), Some(Dimension::Volume));
    }

    #[test]
    fn abbreviations_and_full_words_agree() {
        let value = Decimal::from(330);
        assert_eq!(to_base(value, "ml"), to_base(value, "milliliters"));
        assert_eq!(to_base(value, "cm"), to_base(value, "centimeters"));
        assert_eq!(from_base(value, "g"), from_base(value, "grams"));
        assert_eq!(from_base(value, "kg"), from_base(value, "kilograms"));
    }

    #[test]
    fn unknown_symbols_pass_through() {
        let value = Decimal::from(7);
        assert_eq!(to_base(value, "units"), value);
        assert_eq!(from_base(value, "spool"), value);
        assert_eq!(dimension_of("units"), None);
    }

    #[test]
    fn convert_is_identity_on_the_same_unit() {
        let value = Decimal::new(1234, 2);
        for unit in ["m", "cm", "kg", "g", "l", "ml", "units"] {
            assert_eq!(convert(value, unit, unit), value);
        }
    }

    #[test]
    fn round_trips_are_exact() {
        let value = Decimal::new(98765, 3);
        for unit in ["m", "cm", "kg", "g", "l", "ml"] {
            assert_eq!(from_base(to_base(value, unit), unit), value);
        }
    }

    #[test]
    fn cross_dimension_pairs_stay_numeric() {
        // Not validated: a meter-to-gram conversion is meaningless but defined.
        assert_eq!(convert(Decimal::from(1), "m", "g"), Decimal::from(1000));
    }
}
