use std::fmt;
use std::ops::{Add, Mul};

/// A complex number with double-precision real and imaginary parts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// The zero value `0+0j`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a complex number from its real and imaginary parts
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number with no imaginary part
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Complex conjugate `re - im·j`
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared magnitude `|z|²`
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.re.mul_add(self.re, self.im * self.im)
    }

    /// Magnitude `|z|`
    #[must_use]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// True when both parts are zero. Signed zeros count as zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Divide by `rhs`, multiplying by its conjugate over `|rhs|²`.
    ///
    /// Returns `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let denom = rhs.norm_sqr();
        let num = self * rhs.conj();
        Some(Self::new(num.re / denom, num.im / denom))
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

/// Below this magnitude a component switches to exponent notation.
const SMALLEST_PLAIN: f64 = 1e-4;
/// From this magnitude on a component switches to exponent notation.
const LARGEST_PLAIN: f64 = 1e16;

/// Writes one component the way the calculator shows numbers: integral values
/// without a fractional part, `inf` and `nan` in lower case, and very large or
/// very small magnitudes as `1e+16` or `3.5e-06`.
fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    let magnitude = value.abs();
    if magnitude.is_finite()
        && magnitude > 0.0
        && !(SMALLEST_PLAIN..LARGEST_PLAIN).contains(&magnitude)
    {
        return write_scientific(f, value);
    }
    write!(f, "{value}")
}

/// `{:e}` prints `1e16`; the exponent is written signed and at least two
/// digits wide instead.
fn write_scientific(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let shortest = format!("{value:e}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return f.write_str(&shortest);
    };
    let (sign, digits) = exponent.strip_prefix('-').map_or(('+', exponent), |rest| ('-', rest));
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Formats as `(re±imj)`, or `imj` alone when the real part is a positive zero.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 && self.re.is_sign_positive() {
            write_component(f, self.im)?;
            return f.write_str("j");
        }

        f.write_str("(")?;
        write_component(f, self.re)?;
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() { '-' } else { '+' };
        write!(f, "{sign}")?;
        write_component(f, self.im.abs())?;
        f.write_str("j)")
    }
}
