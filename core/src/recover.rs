use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use num_rational::BigRational;
use shamir_math::prelude::*;

use crate::config::RecoveryConfig;
use crate::decoder::PointDecoder;
use crate::document::ShareDocument;
use crate::error::{RecoveryError, Result};

/// Everything a recovery run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    /// The points that were interpolated, in selection order.
    pub points: Vec<Point>,
    /// `n` from the control record, if present.
    pub declared_total: Option<i64>,
    pub secret: BigInt,
    /// Exact value of the interpolated polynomial at zero.
    pub value: BigRational,
    /// Indices into `points` whose Lagrange term did not divide evenly.
    pub inexact_pivots: Vec<usize>,
}

impl Recovery {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_exact(&self) -> bool {
        self.inexact_pivots.is_empty()
    }

    pub fn is_integral(&self) -> bool {
        self.value.is_integer()
    }
}

/// Decode and interpolate an already parsed document.
pub fn recover(
    document: &ShareDocument,
    config: &RecoveryConfig,
) -> Result<Recovery> {
    let points = PointDecoder::new(config.selection).decode(document)?;
    let Interpolation {
        secret,
        value,
        inexact_pivots,
    } = interpolate_at_zero_checked(&points)?;

    if config.require_integral_secret && !value.is_integer() {
        return Err(RecoveryError::NonIntegralSecret {
            value: value.to_string(),
        });
    }

    Ok(Recovery {
        points,
        declared_total: document.declared_total(),
        secret,
        value,
        inexact_pivots,
    })
}

/// Parse `text` as a share document and recover its secret.
pub fn recover_from_str(text: &str, config: &RecoveryConfig) -> Result<Recovery> {
    let document = ShareDocument::from_json(text)?;
    recover(&document, config)
}

/// Read the share document at `path` and recover its secret.
pub fn recover_from_path(
    path: impl AsRef<Path>,
    config: &RecoveryConfig,
) -> Result<Recovery> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).map_err(|source| RecoveryError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    recover_from_str(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Selection;
    use serde_json::json;

    fn run(value: serde_json::Value) -> Result<Recovery> {
        recover_from_str(&value.to_string(), &RecoveryConfig::default())
    }

    #[test]
    fn recovers_the_line_example() {
        let recovery = run(json!({
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        }))
        .unwrap();

        assert_eq!(recovery.secret, BigInt::from(1));
        assert_eq!(recovery.point_count(), 2);
        assert_eq!(recovery.declared_total, Some(3));
        assert!(recovery.is_exact());
        assert!(recovery.is_integral());
    }

    #[test]
    fn negative_share_count_is_carried_not_checked() {
        let recovery = run(json!({
            "keys": { "n": -1, "k": 2 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        }))
        .unwrap();
        assert_eq!(recovery.secret, BigInt::from(1));
        assert_eq!(recovery.declared_total, Some(-1));
    }

    #[test]
    fn zero_threshold_is_empty_input() {
        let result = run(json!({
            "keys": { "n": 1, "k": 0 },
            "1": { "base": "10", "value": "4" }
        }));
        assert!(matches!(result, Err(RecoveryError::EmptyInput)));
    }

    #[test]
    fn duplicate_coordinates_never_yield_a_secret() {
        let result = run(json!({
            "keys": { "n": 3, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" },
            "01": { "base": "10", "value": "4" }
        }));
        assert!(matches!(
            result,
            Err(RecoveryError::DuplicateCoordinate { x }) if x == BigInt::from(1)
        ));
    }

    #[test]
    fn uneven_terms_are_reported_but_still_exact() {
        // f(x) = x^2 sampled at 1, 2, 4.
        let recovery = run(json!({
            "keys": { "k": 3 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "4" },
            "4": { "base": "16", "value": "10" }
        }))
        .unwrap();

        assert_eq!(recovery.secret, BigInt::from(0));
        assert_eq!(recovery.inexact_pivots, vec![0, 2]);
        assert!(!recovery.is_exact());
        assert!(recovery.is_integral());
    }

    #[test]
    fn non_integral_secret_depends_on_config() {
        let text = json!({
            "keys": { "k": 2 },
            "1": { "base": "10", "value": "1" },
            "3": { "base": "10", "value": "2" }
        })
        .to_string();

        let lenient = recover_from_str(&text, &RecoveryConfig::default()).unwrap();
        assert!(!lenient.is_integral());
        assert_eq!(lenient.secret, BigInt::from(0));

        let strict = RecoveryConfig::default().with_integral_secret(true);
        assert!(matches!(
            recover_from_str(&text, &strict),
            Err(RecoveryError::NonIntegralSecret { value }) if value == "1/2"
        ));
    }

    #[test]
    fn selection_changes_which_points_are_used() {
        let text = json!({
            "keys": { "n": 3, "k": 2 },
            "5": { "base": "10", "value": "16" },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        })
        .to_string();

        let source =
            recover_from_str(&text, &RecoveryConfig::default()).unwrap();
        assert_eq!(source.points, points![(5, 16), (1, 4)]);

        let config = RecoveryConfig::default().with_selection(Selection::AscendingX);
        let ascending = recover_from_str(&text, &config).unwrap();
        assert_eq!(ascending.points, points![(1, 4), (2, 7)]);

        assert_eq!(source.secret, ascending.secret);
    }

    #[test]
    fn unreadable_input_is_reported_with_its_path() {
        let path = Path::new("definitely/not/a/real/shares.json");
        let err = recover_from_path(path, &RecoveryConfig::default())
            .expect_err("missing file");
        assert!(matches!(
            &err,
            RecoveryError::InputUnreadable { path: p, .. } if p == path
        ));
        assert!(err.to_string().starts_with("failed to read definitely/not/a/real/shares.json"));
    }
}
