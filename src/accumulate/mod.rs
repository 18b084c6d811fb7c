// ============================================================================
// Accumulate Module
// Folding sequences of raw values into a compensated value
// ============================================================================
//
// Values are absorbed one at a time, strictly in input order. The
// Kahan-Neumaier branch depends on the running sum, so the order is part of
// the result and is never changed.

mod config;

pub use config::{AccumulateConfig, NonFinitePolicy};

use crate::classify::Compensable;
use crate::numeric::{CompensatedError, CompensatedResult, Finite};
use crate::CompensatedValue;
use std::iter::Sum;

/// Outcome of a successful [`CompensatedValue::try_accumulate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccumulateReport {
    /// Values folded into the target
    pub used: usize,
    /// Non-finite values left out under `NonFinitePolicy::Skip`
    pub skipped: usize,
    /// Whether any NaN or infinite value was seen
    pub non_finite_seen: bool,
}

impl<V: Compensable> CompensatedValue<V> {
    /// Adds every value of `values`, in order, with `+=`.
    ///
    /// # Example
    /// ```
    /// use compensated::CompensatedValue;
    ///
    /// let mut total = CompensatedValue::<f64>::zero();
    /// total.accumulate([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(total.to_raw(), 10.0);
    /// ```
    pub fn accumulate<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            *self += value;
        }
    }

    /// Adds every value of `values`, in order, under `config`.
    ///
    /// The target is only updated when the whole input was accepted; on
    /// error it keeps its previous value.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation
    /// - `NonFinite` on a NaN or infinite value under `NonFinitePolicy::Reject`
    /// - `ItemLimitExceeded` if the input yields more than `max_items` values
    pub fn try_accumulate<I>(
        &mut self,
        values: I,
        config: &AccumulateConfig,
    ) -> CompensatedResult<AccumulateReport>
    where
        I: IntoIterator<Item = V>,
        V: Finite,
    {
        config.validate()?;

        let mut staged = *self;
        let mut report = AccumulateReport::default();

        for (index, value) in values.into_iter().enumerate() {
            if let Some(limit) = config.max_items {
                if index >= limit {
                    tracing::debug!(limit, "accumulation input exceeded item limit");
                    return Err(CompensatedError::ItemLimitExceeded { limit });
                }
            }

            if !value.is_finite() {
                report.non_finite_seen = true;
                match config.non_finite {
                    NonFinitePolicy::Propagate => {},
                    NonFinitePolicy::Skip => {
                        tracing::trace!(index, "skipping non-finite value");
                        report.skipped += 1;
                        continue;
                    },
                    NonFinitePolicy::Reject => {
                        tracing::debug!(index, "rejecting non-finite value");
                        return Err(CompensatedError::NonFinite { index });
                    },
                }
            }

            staged += value;
            report.used += 1;
        }

        *self = staged;
        let classification = Self::classification();
        tracing::debug!(
            used = report.used,
            skipped = report.skipped,
            %classification,
            magnitude_adaptive = classification.is_magnitude_adaptive(),
            "compensated accumulation finished"
        );
        Ok(report)
    }
}

// ============================================================================
// Iterator Traits
// ============================================================================

impl<V: Compensable> Extend<V> for CompensatedValue<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, values: I) {
        self.accumulate(values);
    }
}

impl<'a, V: Compensable> Extend<&'a V> for CompensatedValue<V> {
    fn extend<I: IntoIterator<Item = &'a V>>(&mut self, values: I) {
        self.accumulate(values.into_iter().copied());
    }
}

impl<V: Compensable> FromIterator<V> for CompensatedValue<V> {
    fn from_iter<I: IntoIterator<Item = V>>(values: I) -> Self {
        let mut total = Self::zero();
        total.accumulate(values);
        total
    }
}

impl<V: Compensable> Sum<V> for CompensatedValue<V> {
    fn sum<I: Iterator<Item = V>>(values: I) -> Self {
        values.collect()
    }
}

impl<'a, V: Compensable> Sum<&'a V> for CompensatedValue<V> {
    fn sum<I: Iterator<Item = &'a V>>(values: I) -> Self {
        values.copied().collect()
    }
}

impl<V: Compensable> Sum for CompensatedValue<V> {
    fn sum<I: Iterator<Item = Self>>(values: I) -> Self {
        values.fold(Self::zero(), |total, value| total + value)
    }
}
