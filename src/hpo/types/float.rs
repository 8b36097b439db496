//! Serde helpers keeping NaN and infinities intact in JSON
//!
//! Finite values are written as numbers; non-finite ones as the strings
//! `"NaN"`, `"inf"` and `"-inf"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Tag(String),
}

fn to_repr(value: f64) -> Repr {
    if value.is_nan() {
        Repr::Tag("NaN".to_string())
    } else if value == f64::INFINITY {
        Repr::Tag("inf".to_string())
    } else if value == f64::NEG_INFINITY {
        Repr::Tag("-inf".to_string())
    } else {
        Repr::Number(value)
    }
}

fn from_repr<E: serde::de::Error>(repr: Repr) -> Result<f64, E> {
    match repr {
        Repr::Number(v) => Ok(v),
        Repr::Tag(tag) => match tag.as_str() {
            "NaN" | "nan" => Ok(f64::NAN),
            "inf" | "+inf" | "Infinity" => Ok(f64::INFINITY),
            "-inf" | "-Infinity" => Ok(f64::NEG_INFINITY),
            other => Err(E::custom(format!(
                "expected a number, \"NaN\", \"inf\" or \"-inf\", got \"{other}\""
            ))),
        },
    }
}

/// `Option<f64>` fields
pub(crate) mod option {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(to_repr).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<Repr>::deserialize(deserializer)?.map(from_repr).transpose()
    }
}

/// Step-keyed value maps
pub(crate) mod step_map {
    use std::collections::BTreeMap;

    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        values: &BTreeMap<usize, f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(values.iter().map(|(step, v)| (step, to_repr(*v))))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<usize, f64>, D::Error> {
        BTreeMap::<usize, Repr>::deserialize(deserializer)?
            .into_iter()
            .map(|(step, repr)| from_repr(repr).map(|v| (step, v)))
            .collect()
    }
}
