use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement category grouping related conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Temperature,
    Length,
    Weight,
    Volume,
    Speed,
    Area,
    Time,
    Data,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Temperature,
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Speed,
        Category::Area,
        Category::Time,
        Category::Data,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Area => "area",
            Category::Time => "time",
            Category::Data => "data",
        }
    }

    /// Heading used by the shell listing.
    pub fn title(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Area => "Area",
            Category::Time => "Time",
            Category::Data => "Data",
        }
    }

    pub fn conversions(self) -> &'static [Conversion] {
        use Conversion::*;
        match self {
            Category::Temperature => &[
                CelsiusToFahrenheit,
                FahrenheitToCelsius,
                CelsiusToKelvin,
                KelvinToCelsius,
                FahrenheitToKelvin,
                KelvinToFahrenheit,
            ],
            Category::Length => &[
                MetersToFeet,
                FeetToMeters,
                MilesToKilometers,
                KilometersToMiles,
                InchesToCentimeters,
                CentimetersToInches,
            ],
            Category::Weight => &[
                KilogramsToPounds,
                PoundsToKilograms,
                OuncesToGrams,
                GramsToOunces,
            ],
            Category::Volume => &[
                LitersToGallons,
                GallonsToLiters,
                LitersToCups,
                CupsToLiters,
                MillilitersToFluidOunces,
                FluidOuncesToMilliliters,
            ],
            Category::Speed => &[
                KphToMph,
                MphToKph,
                MetersPerSecondToKph,
                KphToMetersPerSecond,
            ],
            Category::Area => &[
                SquareMetersToSquareFeet,
                SquareFeetToSquareMeters,
                AcresToHectares,
                HectaresToAcres,
            ],
            Category::Time => &[
                HoursToMinutes,
                MinutesToHours,
                DaysToHours,
                HoursToDays,
                WeeksTodays,
                DaysToWeeks,
            ],
            Category::Data => &[
                MegabytesToGigabytes,
                GigabytesToMegabytes,
                GigabytesToTerabytes,
                TerabytesToGigabytes,
                BytesToKilobytes,
                KilobytesToBytes,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| CalcError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Every unit conversion the calculator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    CelsiusToKelvin,
    KelvinToCelsius,
    FahrenheitToKelvin,
    KelvinToFahrenheit,
    MetersToFeet,
    FeetToMeters,
    MilesToKilometers,
    KilometersToMiles,
    InchesToCentimeters,
    CentimetersToInches,
    KilogramsToPounds,
    PoundsToKilograms,
    OuncesToGrams,
    GramsToOunces,
    LitersToGallons,
    GallonsToLiters,
    LitersToCups,
    CupsToLiters,
    MillilitersToFluidOunces,
    FluidOuncesToMilliliters,
    KphToMph,
    MphToKph,
    MetersPerSecondToKph,
    KphToMetersPerSecond,
    SquareMetersToSquareFeet,
    SquareFeetToSquareMeters,
    AcresToHectares,
    HectaresToAcres,
    HoursToMinutes,
    MinutesToHours,
    DaysToHours,
    HoursToDays,
    WeeksTodays,
    DaysToWeeks,
    MegabytesToGigabytes,
    GigabytesToMegabytes,
    GigabytesToTerabytes,
    TerabytesToGigabytes,
    BytesToKilobytes,
    KilobytesToBytes,
}

impl Conversion {
    pub fn name(self) -> &'static str {
        use Conversion::*;
        match self {
            CelsiusToFahrenheit => "celsiusToFahrenheit",
            FahrenheitToCelsius => "fahrenheitToCelsius",
            CelsiusToKelvin => "celsiusToKelvin",
            KelvinToCelsius => "kelvinToCelsius",
            FahrenheitToKelvin => "fahrenheitToKelvin",
            KelvinToFahrenheit => "kelvinToFahrenheit",
            MetersToFeet => "metersToFeet",
            FeetToMeters => "feetToMeters",
            MilesToKilometers => "milesToKilometers",
            KilometersToMiles => "kilometersToMiles",
            InchesToCentimeters => "inchesToCentimeters",
            CentimetersToInches => "centimetersToInches",
            KilogramsToPounds => "kilogramsToPounds",
            PoundsToKilograms => "poundsToKilograms",
            OuncesToGrams => "ouncesToGrams",
            GramsToOunces => "gramsToOunces",
            LitersToGallons => "litersToGallons",
            GallonsToLiters => "gallonsToLiters",
            LitersToCups => "litersToCups",
            CupsToLiters => "cupsToLiters",
            MillilitersToFluidOunces => "millilitersToFluidOunces",
            FluidOuncesToMilliliters => "fluidOuncesToMilliliters",
            KphToMph => "kphToMph",
            MphToKph => "mphToKph",
            MetersPerSecondToKph => "metersPerSecondToKph",
            KphToMetersPerSecond => "kphToMetersPerSecond",
            SquareMetersToSquareFeet => "squareMetersToSquareFeet",
            SquareFeetToSquareMeters => "squareFeetToSquareMeters",
            AcresToHectares => "acresToHectares",
            HectaresToAcres => "hectaresToAcres",
            HoursToMinutes => "hoursToMinutes",
            MinutesToHours => "minutesToHours",
            DaysToHours => "daysToHours",
            HoursToDays => "hoursToDays",
            WeeksTodays => "weeksTodays",
            DaysToWeeks => "daysToWeeks",
            MegabytesToGigabytes => "megabytesToGigabytes",
            GigabytesToMegabytes => "gigabytesToMegabytes",
            GigabytesToTerabytes => "gigabytesToTerabytes",
            TerabytesToGigabytes => "terabytesToGigabytes",
            BytesToKilobytes => "bytesToKilobytes",
            KilobytesToBytes => "kilobytesToBytes",
        }
    }

    pub fn category(self) -> Category {
        use Conversion::*;
        match self {
            CelsiusToFahrenheit | FahrenheitToCelsius | CelsiusToKelvin | KelvinToCelsius
            | FahrenheitToKelvin | KelvinToFahrenheit => Category::Temperature,
            MetersToFeet | FeetToMeters | MilesToKilometers | KilometersToMiles
            | InchesToCentimeters | CentimetersToInches => Category::Length,
            KilogramsToPounds | PoundsToKilograms | OuncesToGrams | GramsToOunces => {
                Category::Weight
            }
            LitersToGallons | GallonsToLiters | LitersToCups | CupsToLiters
            | MillilitersToFluidOunces | FluidOuncesToMilliliters => Category::Volume,
            KphToMph | MphToKph | MetersPerSecondToKph | KphToMetersPerSecond => Category::Speed,
            SquareMetersToSquareFeet | SquareFeetToSquareMeters | AcresToHectares
            | HectaresToAcres => Category::Area,
            HoursToMinutes | MinutesToHours | DaysToHours | HoursToDays | WeeksTodays
            | DaysToWeeks => Category::Time,
            MegabytesToGigabytes | GigabytesToMegabytes | GigabytesToTerabytes
            | TerabytesToGigabytes | BytesToKilobytes | KilobytesToBytes => Category::Data,
        }
    }

    /// Apply the conversion. Never fails: non-finite input yields non-finite output.
    pub fn apply(self, v: f64) -> f64 {
        use Conversion::*;
        match self {
            CelsiusToFahrenheit => v * 9.0 / 5.0 + 32.0,
            FahrenheitToCelsius => (v - 32.0) * 5.0 / 9.0,
            CelsiusToKelvin => v + 273.15,
            KelvinToCelsius => v - 273.15,
            FahrenheitToKelvin => (v - 32.0) * 5.0 / 9.0 + 273.15,
            KelvinToFahrenheit => (v - 273.15) * 9.0 / 5.0 + 32.0,
            MetersToFeet => v * 3.28084,
            FeetToMeters => v / 3.28084,
            MilesToKilometers => v * 1.60934,
            KilometersToMiles => v / 1.60934,
            InchesToCentimeters => v * 2.54,
            CentimetersToInches => v / 2.54,
            KilogramsToPounds => v * 2.20462,
            PoundsToKilograms => v / 2.20462,
            OuncesToGrams => v * 28.3495,
            GramsToOunces => v / 28.3495,
            LitersToGallons => v * 0.264172,
            GallonsToLiters => v / 0.264172,
            LitersToCups => v * 4.22675,
            CupsToLiters => v / 4.22675,
            MillilitersToFluidOunces => v * 0.033814,
            FluidOuncesToMilliliters => v / 0.033814,
            KphToMph => v * 0.621371,
            MphToKph => v / 0.621371,
            MetersPerSecondToKph => v * 3.6,
            KphToMetersPerSecond => v / 3.6,
            SquareMetersToSquareFeet => v * 10.7639,
            SquareFeetToSquareMeters => v / 10.7639,
            AcresToHectares => v * 0.404686,
            HectaresToAcres => v / 0.404686,
            HoursToMinutes => v * 60.0,
            MinutesToHours => v / 60.0,
            DaysToHours => v * 24.0,
            HoursToDays => v / 24.0,
            WeeksTodays => v * 7.0,
            DaysToWeeks => v / 7.0,
            MegabytesToGigabytes => v / 1024.0,
            GigabytesToMegabytes => v * 1024.0,
            GigabytesToTerabytes => v / 1024.0,
            TerabytesToGigabytes => v * 1024.0,
            BytesToKilobytes => v / 1024.0,
            KilobytesToBytes => v * 1024.0,
        }
    }

    /// The conversion that undoes this one.
    pub fn inverse(self) -> Conversion {
        use Conversion::*;
        match self {
            CelsiusToFahrenheit => FahrenheitToCelsius,
            FahrenheitToCelsius => CelsiusToFahrenheit,
            CelsiusToKelvin => KelvinToCelsius,
            KelvinToCelsius => CelsiusToKelvin,
            FahrenheitToKelvin => KelvinToFahrenheit,
            KelvinToFahrenheit => FahrenheitToKelvin,
            MetersToFeet => FeetToMeters,
            FeetToMeters => MetersToFeet,
            MilesToKilometers => KilometersToMiles,
            KilometersToMiles => MilesToKilometers,
            InchesToCentimeters => CentimetersToInches,
            CentimetersToInches => InchesToCentimeters,
            KilogramsToPounds => PoundsToKilograms,
            PoundsToKilograms => KilogramsToPounds,
            OuncesToGrams => GramsToOunces,
            GramsToOunces => OuncesToGrams,
            LitersToGallons => GallonsToLiters,
            GallonsToLiters => LitersToGallons,
            LitersToCups => CupsToLiters,
            CupsToLiters => LitersToCups,
            MillilitersToFluidOunces => FluidOuncesToMilliliters,
            FluidOuncesToMilliliters => MillilitersToFluidOunces,
            KphToMph => MphToKph,
            MphToKph => KphToMph,
            MetersPerSecondToKph => KphToMetersPerSecond,
            KphToMetersPerSecond => MetersPerSecondToKph,
            SquareMetersToSquareFeet => SquareFeetToSquareMeters,
            SquareFeetToSquareMeters => SquareMetersToSquareFeet,
            AcresToHectares => HectaresToAcres,
            HectaresToAcres => AcresToHectares,
            HoursToMinutes => MinutesToHours,
            MinutesToHours => HoursToMinutes,
            DaysToHours => HoursToDays,
            HoursToDays => DaysToHours,
            WeeksTodays => DaysToWeeks,
            DaysToWeeks => WeeksTodays,
            MegabytesToGigabytes => GigabytesToMegabytes,
            GigabytesToMegabytes => MegabytesToGigabytes,
            GigabytesToTerabytes => TerabytesToGigabytes,
            TerabytesToGigabytes => GigabytesToTerabytes,
            BytesToKilobytes => KilobytesToBytes,
            KilobytesToBytes => BytesToKilobytes,
        }
    }

    /// Every conversion, grouped in category order.
    pub fn all() -> impl Iterator<Item = Conversion> {
        Category::ALL
            .into_iter()
            .flat_map(|category| category.conversions().iter().copied())
    }

    pub fn from_name(name: &str) -> Option<Conversion> {
        Conversion::all().find(|conversion| conversion.name() == name)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Conversion::from_name(s).ok_or_else(|| CalcError::UnknownConversion {
            name: s.to_string(),
        })
    }
}

/// Operation applied to a memory register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryOperation {
    Add,
    Subtract,
    Clear,
    Set,
}

impl MemoryOperation {
    pub const VALID: [&'static str; 4] = ["add", "subtract", "clear", "set"];

    pub fn name(self) -> &'static str {
        match self {
            MemoryOperation::Add => "add",
            MemoryOperation::Subtract => "subtract",
            MemoryOperation::Clear => "clear",
            MemoryOperation::Set => "set",
        }
    }

    pub fn requires_value(self) -> bool {
        !matches!(self, MemoryOperation::Clear)
    }
}

impl FromStr for MemoryOperation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(MemoryOperation::Add),
            "subtract" => Ok(MemoryOperation::Subtract),
            "clear" => Ok(MemoryOperation::Clear),
            "set" => Ok(MemoryOperation::Set),
            _ => Err(CalcError::InvalidMemoryOperation {
                operation: s.to_string(),
            }),
        }
    }
}

/// Memory value before and after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryChange {
    pub old_value: f64,
    pub new_value: f64,
}
