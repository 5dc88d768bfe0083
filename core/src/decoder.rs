use num_bigint::BigInt;
use shamir_math::prelude::*;

use crate::config::Selection;
use crate::document::{ShareDocument, ShareRecord};
use crate::error::{RecoveryError, Result};

/// Turns a [`ShareDocument`] into the `k` points handed to the interpolator.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointDecoder {
    selection: Selection,
}

impl PointDecoder {
    pub fn new(selection: Selection) -> Self {
        PointDecoder { selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Decode exactly `k` points, or fail with the first invalid record.
    pub fn decode(&self, document: &ShareDocument) -> Result<Vec<Point>> {
        let required = document.threshold();
        let points = match self.selection {
            Selection::SourceOrder => Self::decode_in_source_order(document)?,
            Selection::AscendingX => Self::decode_ascending(document)?,
        };

        if points.len() < required {
            return Err(RecoveryError::InsufficientPoints {
                found: points.len(),
                required,
            });
        }
        Ok(points)
    }

    /// Walk the entries in document order and stop once `k` are collected.
    fn decode_in_source_order(document: &ShareDocument) -> Result<Vec<Point>> {
        document
            .entries()
            .take(document.threshold())
            .map(|(key, raw)| {
                let x = parse_coordinate(key)?;
                decode_share(x, &ShareRecord::from_entry(key, raw)?)
            })
            .collect()
    }

    /// Parse every coordinate, then decode the `k` smallest.
    fn decode_ascending(document: &ShareDocument) -> Result<Vec<Point>> {
        let mut keyed = document
            .entries()
            .map(|(key, raw)| -> Result<_> {
                Ok((parse_coordinate(key)?, key, raw))
            })
            .collect::<Result<Vec<_>>>()?;
        // Stable, so repeated coordinates keep their document order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        keyed
            .into_iter()
            .take(document.threshold())
            .map(|(x, key, raw)| {
                decode_share(x, &ShareRecord::from_entry(key, raw)?)
            })
            .collect()
    }
}

/// Decode `document` with the default [`Selection`].
pub fn decode(document: &ShareDocument) -> Result<Vec<Point>> {
    PointDecoder::default().decode(document)
}

/// Parse a share key as a base-10 x-coordinate.
pub fn parse_coordinate(key: &str) -> Result<BigInt> {
    decode_bigint(key, 10).map_err(|source| RecoveryError::InvalidCoordinate {
        key: key.to_owned(),
        source,
    })
}

/// Decode one share record into a point at `x`.
pub fn decode_share(x: BigInt, record: &ShareRecord) -> Result<Point> {
    let radix =
        parse_radix(&record.base).map_err(|source| RecoveryError::InvalidBase {
            x: x.clone(),
            base: record.base.clone(),
            source,
        })?;
    let y = decode_bigint(&record.value, radix).map_err(|source| {
        RecoveryError::InvalidEncodedValue {
            x: x.clone(),
            value: record.value.clone(),
            source,
        }
    })?;
    Ok(Point::new(x, y))
}
