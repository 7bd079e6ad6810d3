//! Vehicle data records and the shared info capability.

use std::fmt;

/// Capability shared by every vehicle-like record.
///
/// Implementors only expose their base [`Vehicle`]. The description comes from
/// [`Vehicle::info`], so every implementor formats it the same way.
pub trait VehicleInfo {
    /// Returns the base vehicle record.
    fn vehicle(&self) -> &Vehicle;

    fn make(&self) -> &str {
        &self.vehicle().make
    }

    fn year(&self) -> i32 {
        self.vehicle().year
    }

    /// Delegates to [`Vehicle::info`] on the base record.
    fn info(&self) -> String {
        self.vehicle().info()
    }
}

/// A vehicle with a make and a model year. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    /// Formats as `"Make: {make}, Year: {year}"`.
    pub fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

impl VehicleInfo for Vehicle {
    fn vehicle(&self) -> &Vehicle {
        self
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// A vehicle with a model name.
///
/// # Examples
///
/// ```
/// use u_basics::vehicle::{Car, VehicleInfo};
///
/// let car = Car::new("Toyota", 2020, "Corolla");
/// assert_eq!(car.info(), "Make: Toyota, Year: 2020");
/// assert_eq!(car.model_label(), "Model: Corolla");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    base: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            base: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Formats as `"Model: {model}"`.
    pub fn model_label(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl VehicleInfo for Car {
    fn vehicle(&self) -> &Vehicle {
        &self.base
    }
}

impl AsRef<Vehicle> for Car {
    fn as_ref(&self) -> &Vehicle {
        &self.base
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        car.base
    }
}
