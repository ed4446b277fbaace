use crate::error::Error;
use hashbrown::HashMap;
use libm::{acos, acosh, asin, asinh, atan, atanh, cos, cosh, sin, sinh, sqrt, tan, tanh};
use log::trace;

lazy_static! {
    /// Functions of a single argument, by name. Inverse trigonometric
    /// functions are available under both their short and `arc` names.
    pub static ref FUNCTIONS: HashMap<&'static str, fn(f64) -> f64> = {
        let mut map = HashMap::<&'static str, fn(f64) -> f64>::new();
        map.insert("sin", sin);
        map.insert("cos", cos);
        map.insert("tan", tan);
        map.insert("csc", |x| 1.0 / sin(x));
        map.insert("sec", |x| 1.0 / cos(x));
        map.insert("cot", |x| cos(x) / sin(x));
        map.insert("asin", asin);
        map.insert("arcsin", asin);
        map.insert("acos", acos);
        map.insert("arccos", acos);
        map.insert("atan", atan);
        map.insert("arctan", atan);
        map.insert("acsc", |x| asin(1.0 / x));
        map.insert("arccsc", |x| asin(1.0 / x));
        map.insert("asec", |x| acos(1.0 / x));
        map.insert("arcsec", |x| acos(1.0 / x));
        map.insert("acot", |x| atan(1.0 / x));
        map.insert("arccot", |x| atan(1.0 / x));
        map.insert("sinh", sinh);
        map.insert("cosh", cosh);
        map.insert("tanh", tanh);
        map.insert("asinh", asinh);
        map.insert("arcsinh", asinh);
        map.insert("acosh", acosh);
        map.insert("arccosh", acosh);
        map.insert("atanh", atanh);
        map.insert("arctanh", atanh);
        map.shrink_to_fit();
        map
    };

    /// Functions working on the whole argument list, by name
    pub static ref AGGREGATES: HashMap<&'static str, fn(&mut [f64]) -> f64> = {
        let mut map = HashMap::<&'static str, fn(&mut [f64]) -> f64>::new();
        map.insert("sum", sum);
        map.insert("mean", mean);
        map.insert("median", median);
        map.insert("stdev", stdev);
        map.shrink_to_fit();
        map
    };
}

/// Call the function `name` with `arguments`.
///
/// Aggregates accept any number of arguments, other functions exactly one.
/// Names are matched without regard to ASCII case. The arguments may be
/// reordered by the call.
///
/// # Examples
///
/// ```
/// # use treecalc::{call, Error};
/// assert_eq!(call("median", &mut [3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(call("cos", &mut [0.0]), Ok(1.0));
/// assert!(matches!(call("cos", &mut [0.0, 1.0]), Err(Error::UnrecognizedFunction { .. })));
/// ```
pub fn call(name: &str, arguments: &mut [f64]) -> Result<f64, Error> {
    let name = name.to_ascii_lowercase();
    trace!("calling {} with {:?}", name, arguments);
    if let Some(aggregate) = AGGREGATES.get(name.as_str()) {
        return Ok(aggregate(arguments));
    }
    match (FUNCTIONS.get(name.as_str()), &*arguments) {
        (Some(func), [argument]) => Ok(func(*argument)),
        _ => Err(Error::UnrecognizedFunction {
            name,
            arity: arguments.len(),
        }),
    }
}

fn sum(values: &mut [f64]) -> f64 {
    values.iter().sum()
}

fn mean(values: &mut [f64]) -> f64 {
    sum(values) / values.len() as f64
}

fn median(values: &mut [f64]) -> f64 {
    let size = values.len();
    if size == 0 {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);
    if size % 2 == 0 {
        (values[size / 2 - 1] + values[size / 2]) / 2.0
    } else {
        values[size / 2]
    }
}

/// Sample standard deviation, NaN for a single value
fn stdev(values: &mut [f64]) -> f64 {
    let mean = mean(values);
    let squares: f64 = values.iter().map(|value| (value - mean) * (value - mean)).sum();
    sqrt(squares / (values.len() as f64 - 1.0))
}
