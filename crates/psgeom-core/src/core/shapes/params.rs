use super::ShapeError;
use super::kind::ShapeKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Named numeric parameters supplied for a single shape, keyed by their
/// simulation-input names (`widthParam`, `walledge`, `cylcenterX`, ...).
pub type ParamMap = BTreeMap<String, f64>;

/// Checks `params` against the parameter list of `kind` and deserializes the typed
/// parameter struct.
///
/// Missing required keys and keys the shape does not know are both rejected; a
/// supplied mapping is never completed from defaults.
pub(crate) fn parse<T: DeserializeOwned>(
    kind: ShapeKind,
    params: &ParamMap,
) -> Result<T, ShapeError> {
    let shape = kind.name();

    if let Some(unknown) = params
        .keys()
        .find(|key| !kind.accepts_parameter(key.as_str()))
    {
        return Err(ShapeError::UnknownParameter {
            shape,
            parameter: unknown.clone(),
        });
    }
    if let Some(missing) = kind
        .required_parameters()
        .iter()
        .find(|name| !params.contains_key(**name))
    {
        return Err(ShapeError::MissingParameter {
            shape,
            parameter: *missing,
        });
    }
    for (name, value) in params {
        if !value.is_finite() {
            return Err(ShapeError::InvalidValue {
                shape,
                parameter: name.clone(),
                reason: format!("must be finite (got {})", value),
            });
        }
    }

    let table: toml::Table = params
        .iter()
        .map(|(key, value)| (key.clone(), toml::Value::Float(*value)))
        .collect();
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| ShapeError::Malformed {
            shape,
            message: e.to_string(),
        })
}

/// Flattens a typed parameter struct back into its named mapping.
pub(crate) fn to_map<T: Serialize>(params: &T) -> ParamMap {
    match toml::Value::try_from(params) {
        Ok(toml::Value::Table(table)) => table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::Float(v) => Some((key, v)),
                toml::Value::Integer(v) => Some((key, v as f64)),
                _ => None,
            })
            .collect(),
        _ => ParamMap::new(),
    }
}

pub(crate) fn require_positive(
    kind: ShapeKind,
    parameter: &str,
    value: f64,
) -> Result<(), ShapeError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidValue {
            shape: kind.name(),
            parameter: parameter.to_string(),
            reason: format!("must be greater than zero (got {})", value),
        })
    }
}

pub(crate) fn require_nonzero(
    kind: ShapeKind,
    parameter: &str,
    value: f64,
) -> Result<(), ShapeError> {
    if value != 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidValue {
            shape: kind.name(),
            parameter: parameter.to_string(),
            reason: "must be non-zero".to_string(),
        })
    }
}

/// Builds a [`ParamMap`] from `(name, value)` pairs.
pub fn param_map<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> ParamMap {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::walls::FlatWallParams;

    #[test]
    fn parse_accepts_complete_mapping() {
        let params = param_map([("widthParam", 2.0), ("walledge", 12.0)]);
        let parsed: FlatWallParams = parse(ShapeKind::LeftFlatWall, &params).unwrap();
        assert_eq!(parsed.width, 2.0);
        assert_eq!(parsed.wall_edge, 12.0);
    }

    #[test]
    fn parse_reports_first_missing_required_parameter() {
        let params = param_map([("widthParam", 2.0)]);
        let err = parse::<FlatWallParams>(ShapeKind::LeftFlatWall, &params).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingParameter {
                shape: "leftFlatWall",
                parameter: "walledge"
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_keys_instead_of_absorbing_them() {
        let params = param_map([("widthParam", 2.0), ("walledge", 12.0), ("radius", 3.0)]);
        let err = parse::<FlatWallParams>(ShapeKind::TopFlatWall, &params).unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnknownParameter {
                shape: "topFlatWall",
                parameter: "radius".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_non_finite_values() {
        let params = param_map([("widthParam", f64::NAN), ("walledge", 12.0)]);
        let err = parse::<FlatWallParams>(ShapeKind::LeftFlatWall, &params).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidValue { parameter, .. } if parameter == "widthParam"
        ));
    }

    #[test]
    fn to_map_round_trips_parameter_names() {
        let map = to_map(&FlatWallParams {
            width: 1.5,
            wall_edge: 8.0,
        });
        assert_eq!(map, param_map([("widthParam", 1.5), ("walledge", 8.0)]));
    }
}
