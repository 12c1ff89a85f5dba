use serde::{Deserialize, Serialize};

use crate::error::LifeError;

/// Run parameters, from the command line or a JSON request.
/// Counts are signed so out-of-range input reaches validation instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub rows: i64,
    pub columns: i64,
    pub seeds: i64,
    pub steps: usize,
    /// RNG seed; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            seeds: 3,
            steps: 3,
            seed: None,
        }
    }
}

impl Params {
    /// Positional `rows columns seeds steps [seed]`, program name excluded.
    /// Missing values keep their defaults.
    pub fn from_args(args: &[String]) -> Result<Self, LifeError> {
        let defaults = Self::default();
        Ok(Self {
            rows: parse_arg(args, 0, "rows")?.unwrap_or(defaults.rows),
            columns: parse_arg(args, 1, "columns")?.unwrap_or(defaults.columns),
            seeds: parse_arg(args, 2, "seeds")?.unwrap_or(defaults.seeds),
            steps: parse_arg(args, 3, "steps")?.unwrap_or(defaults.steps),
            seed: parse_arg(args, 4, "seed")?,
        })
    }
}

fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    i: usize,
    name: &'static str,
) -> Result<Option<T>, LifeError> {
    args.get(i)
        .map(|s| {
            s.parse().map_err(|_| LifeError::InvalidArgument {
                name,
                value: s.clone(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_give_defaults() {
        assert_eq!(Params::from_args(&[]).unwrap(), Params::default());
    }

    #[test]
    fn positional_args_override() {
        let p = Params::from_args(&args(&["10", "20", "50", "7", "42"])).unwrap();
        assert_eq!(
            p,
            Params {
                rows: 10,
                columns: 20,
                seeds: 50,
                steps: 7,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn negative_counts_parse_for_later_validation() {
        let p = Params::from_args(&args(&["3", "3", "-1"])).unwrap();
        assert_eq!(p.seeds, -1);
    }

    #[test]
    fn garbage_is_reported() {
        let err = Params::from_args(&args(&["3", "wide"])).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidArgument { name: "columns", ref value } if value == "wide"
        ));
    }

    #[test]
    fn json_fills_missing_fields() {
        let p: Params = serde_json::from_str(r#"{"rows": 5, "seed": 9}"#).unwrap();
        assert_eq!(p.rows, 5);
        assert_eq!(p.columns, 3);
        assert_eq!(p.seed, Some(9));
    }
}
