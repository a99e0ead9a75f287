use std::f64::consts;

use crate::ast::{AngleUnit, Constant, Function};

impl Function {
    /// Applies the function to an evaluated argument.
    ///
    /// Trigonometric arguments are first converted from `angle_unit` to
    /// radians; the unit is ignored for the other functions. No domain checks
    /// are made: `sqrt(-1)` and `ln(-1)` are NaN, `ln(0)` is negative
    /// infinity, and `ctg(0)` is infinity.
    ///
    /// # Example
    /// ```
    /// use recurcalc::ast::{AngleUnit, Function};
    ///
    /// assert_eq!(Function::Sqrt.apply(9.0, AngleUnit::Degree), 3.0);
    /// assert!((Function::Sin.apply(90.0, AngleUnit::Degree) - 1.0).abs() < 1e-12);
    /// assert!(Function::Sqrt.apply(-1.0, AngleUnit::Radian).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, argument: f64, angle_unit: AngleUnit) -> f64 {
        let x = if self.is_trigonometric() {
            angle_unit.to_radians(argument)
        } else {
            argument
        };

        match self {
            Self::Sqrt => x.sqrt(),
            Self::Ln => x.ln(),
            Self::Exp => x.exp(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Cot => x.tan().recip(),
        }
    }
}

impl Constant {
    /// The value of the constant at full `f64` precision.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}
