//! Serialization of Real.
//! Numbers are serialized to strings in scientific notation, which preserves the value exactly.

use crate::num::Real;
use serde::{Serialize, Serializer};

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:E}", self))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::num::Real;
    use crate::num::INF_NEG;
    use crate::num::NAN;
    use crate::num::ZERO;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&ZERO).unwrap(), "\"0\"");
        assert_eq!(to_string(&NAN).unwrap(), "\"NaN\"");
        assert_eq!(to_string(&INF_NEG).unwrap(), "\"-Infinity\"");
        assert_eq!(to_string(&Real::new(0.3, 0)).unwrap(), "\"3E-01\"");
        assert_eq!(
            to_string(&Real::new(-1.2345, 123456789012)).unwrap(),
            "\"-1.2345E+123456789012\""
        );
        assert_eq!(
            to_string(&vec![Real::new(1.5, 0), Real::new(2.0, -3)]).unwrap(),
            "[\"1.5E+00\",\"2E-03\"]"
        );
    }
}
