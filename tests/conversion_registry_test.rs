use advcalc::registry::{self, convert, get_conversion, list_categories, list_conversions};
use advcalc::{CalcError, Category, Conversion};
use std::collections::HashSet;

/// Reference formulas, written out independently of the registry.
fn expected_formulas() -> [(&'static str, fn(f64) -> f64); 42] {
    [
        ("celsiusToFahrenheit", |c| c * 9.0 / 5.0 + 32.0),
        ("fahrenheitToCelsius", |f| (f - 32.0) * 5.0 / 9.0),
        ("celsiusToKelvin", |c| c + 273.15),
        ("kelvinToCelsius", |k| k - 273.15),
        ("fahrenheitToKelvin", |f| (f - 32.0) * 5.0 / 9.0 + 273.15),
        ("kelvinToFahrenheit", |k| (k - 273.15) * 9.0 / 5.0 + 32.0),
        ("metersToFeet", |m| m * 3.28084),
        ("feetToMeters", |f| f / 3.28084),
        ("milesToKilometers", |mi| mi * 1.60934),
        ("kilometersToMiles", |km| km / 1.60934),
        ("inchesToCentimeters", |i| i * 2.54),
        ("centimetersToInches", |cm| cm / 2.54),
        ("kilogramsToPounds", |kg| kg * 2.20462),
        ("poundsToKilograms", |lb| lb / 2.20462),
        ("ouncesToGrams", |oz| oz * 28.3495),
        ("gramsToOunces", |g| g / 28.3495),
        ("litersToGallons", |l| l * 0.264172),
        ("gallonsToLiters", |gal| gal / 0.264172),
        ("litersToCups", |l| l * 4.22675),
        ("cupsToLiters", |c| c / 4.22675),
        ("millilitersToFluidOunces", |ml| ml * 0.033814),
        ("fluidOuncesToMilliliters", |oz| oz / 0.033814),
        ("kphToMph", |kph| kph * 0.621371),
        ("mphToKph", |mph| mph / 0.621371),
        ("metersPerSecondToKph", |mps| mps * 3.6),
        ("kphToMetersPerSecond", |kph| kph / 3.6),
        ("squareMetersToSquareFeet", |m2| m2 * 10.7639),
        ("squareFeetToSquareMeters", |f2| f2 / 10.7639),
        ("acresToHectares", |ac| ac * 0.404686),
        ("hectaresToAcres", |ha| ha / 0.404686),
        ("hoursToMinutes", |h| h * 60.0),
        ("minutesToHours", |m| m / 60.0),
        ("daysToHours", |d| d * 24.0),
        ("hoursToDays", |h| h / 24.0),
        ("weeksTodays", |w| w * 7.0),
        ("daysToWeeks", |d| d / 7.0),
        ("megabytesToGigabytes", |mb| mb / 1024.0),
        ("gigabytesToMegabytes", |gb| gb * 1024.0),
        ("gigabytesToTerabytes", |gb| gb / 1024.0),
        ("terabytesToGigabytes", |tb| tb * 1024.0),
        ("bytesToKilobytes", |b| b / 1024.0),
        ("kilobytesToBytes", |kb| kb * 1024.0),
    ]
}

#[test]
fn test_every_conversion_matches_its_formula() {
    let formulas = expected_formulas();
    assert_eq!(formulas.len(), 42);

    for (name, formula) in formulas {
        for input in [0.0, 1.0, -17.5, 12345.678] {
            let actual = convert(name, input).unwrap();
            assert_eq!(
                actual.to_bits(),
                formula(input).to_bits(),
                "{}({}) = {}",
                name,
                input,
                actual
            );
        }
    }
}

#[test]
fn test_round_trips() {
    let inputs = [-100.0, 0.0, 1.0, 100.0, 12345.678];

    for conversion in Conversion::all() {
        let inverse = conversion.inverse();
        for x in inputs {
            let back = inverse.apply(conversion.apply(x));
            let tolerance = 1e-9 * x.abs().max(1.0);
            assert!(
                (back - x).abs() <= tolerance,
                "{} then {} on {} gave {}",
                conversion,
                inverse,
                x,
                back
            );
        }
    }
}

#[test]
fn test_categories_are_fixed() {
    let expected = [
        "temperature",
        "length",
        "weight",
        "volume",
        "speed",
        "area",
        "time",
        "data",
    ];

    let before: Vec<&str> = list_categories().iter().map(|c| c.name()).collect();
    convert("celsiusToKelvin", 10.0).unwrap();
    let _ = convert("doesNotExist", 1.0);
    let after: Vec<&str> = list_categories().iter().map(|c| c.name()).collect();

    assert_eq!(before, expected);
    assert_eq!(after, expected);
}

#[test]
fn test_category_sizes() {
    let expected = [
        ("temperature", 6),
        ("length", 6),
        ("weight", 4),
        ("volume", 6),
        ("speed", 4),
        ("area", 4),
        ("time", 6),
        ("data", 6),
    ];

    let mut total = 0;
    for (category, size) in expected {
        let conversions = list_conversions(category).unwrap();
        let unique: HashSet<&str> = conversions.iter().map(|c| c.name()).collect();
        assert_eq!(unique.len(), size, "{}", category);
        total += size;
    }
    assert_eq!(total, 42);
    assert_eq!(registry::conversion_names().len(), 42);
}

#[test]
fn test_lookup_failures() {
    assert!(matches!(
        convert("doesNotExist", 5.0),
        Err(CalcError::UnknownConversion { .. })
    ));
    assert!(matches!(
        list_conversions("bogus"),
        Err(CalcError::UnknownCategory { .. })
    ));
    assert!(matches!(
        list_conversions("Temperature"),
        Err(CalcError::UnknownCategory { .. })
    ));
    assert!(get_conversion("doesNotExist").is_none());
}

#[test]
fn test_documented_examples() {
    assert_eq!(convert("celsiusToFahrenheit", 100.0).unwrap(), 212.0);
    assert_eq!(convert("gigabytesToMegabytes", 2.0).unwrap(), 2048.0);

    let miles = convert("kilometersToMiles", 10.0).unwrap();
    assert!((miles - 6.213727366498068).abs() < 1e-12);
}

#[test]
fn test_lookup_spans_all_categories() {
    for category in Category::ALL {
        for conversion in category.conversions() {
            assert_eq!(get_conversion(conversion.name()), Some(*conversion));
        }
    }
}
