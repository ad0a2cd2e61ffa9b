//! The draw engine: sampling cards and orientations for a reading.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Catalog;
use crate::core::{ConfigError, DrawConfig, DrawError, ReadingRng, DEFAULT_REVERSAL_PROBABILITY};

use super::reading::{DrawnCard, Orientation, Reading};
use super::spread::SpreadKind;

/// Draw `size` distinct cards from `catalog` using the default reversal
/// probability.
///
/// Every ordered selection of `size` cards is equally likely. With
/// `reversals_enabled`, each card is independently reversed with
/// probability [`DEFAULT_REVERSAL_PROBABILITY`]; otherwise all are upright.
///
/// ```
/// use rust_tarot::cards::Catalog;
/// use rust_tarot::core::ReadingRng;
/// use rust_tarot::draw::draw_spread;
///
/// let catalog = Catalog::standard().unwrap();
/// let mut rng = ReadingRng::new(7);
///
/// let reading = draw_spread(&catalog, 3, false, &mut rng).unwrap();
/// assert_eq!(reading.len(), 3);
/// assert!(reading.cards().iter().all(|c| !c.is_reversed()));
/// ```
pub fn draw_spread(
    catalog: &Catalog,
    size: usize,
    reversals_enabled: bool,
    rng: &mut ReadingRng,
) -> Result<Reading, DrawError> {
    draw_with_probability(catalog, size, reversals_enabled, DEFAULT_REVERSAL_PROBABILITY, rng)
}

fn draw_with_probability(
    catalog: &Catalog,
    size: usize,
    reversals_enabled: bool,
    reversal_probability: f64,
    rng: &mut ReadingRng,
) -> Result<Reading, DrawError> {
    let available = catalog.len();
    if size == 0 || size > available {
        return Err(DrawError::InvalidArgument { requested: size, available });
    }

    let cards: SmallVec<[DrawnCard; 3]> = rng
        .sample_indices(available, size)
        .into_iter()
        .filter_map(|i| catalog.get_at(i))
        .map(|card| {
            let orientation = if reversals_enabled && rng.gen_bool(reversal_probability) {
                Orientation::Reversed
            } else {
                Orientation::Upright
            };
            DrawnCard::new(card.clone(), orientation)
        })
        .collect();

    debug!(
        size,
        reversals_enabled,
        reversed = cards.iter().filter(|c| c.is_reversed()).count(),
        "spread drawn"
    );

    Ok(Reading::new(cards))
}

/// Draw engine bound to a validated policy.
#[derive(Clone, Debug, Default)]
pub struct DrawEngine {
    config: DrawConfig,
}

impl DrawEngine {
    /// Create an engine, rejecting an unusable configuration.
    pub fn new(config: DrawConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Draw `size` distinct cards; see [`draw_spread`].
    pub fn draw(
        &self,
        catalog: &Catalog,
        size: usize,
        reversals_enabled: bool,
        rng: &mut ReadingRng,
    ) -> Result<Reading, DrawError> {
        draw_with_probability(catalog, size, reversals_enabled, self.config.reversal_probability, rng)
    }

    /// Draw a named spread.
    pub fn draw_spread_kind(
        &self,
        catalog: &Catalog,
        spread: SpreadKind,
        reversals_enabled: bool,
        rng: &mut ReadingRng,
    ) -> Result<Reading, DrawError> {
        self.draw(catalog, spread.size(), reversals_enabled, rng)
    }
}
