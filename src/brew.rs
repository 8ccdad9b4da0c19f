//! Combination resolver: reagent tags to an effective mixture
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::FATAL_TOXIC_COUNT;
use crate::data::Ingredient;
use crate::tags::Tag;

/// The effective result of combining 2-3 reagents in the cauldron.
///
/// Tags are kept as a sorted multiset so two mixtures brewed from the same
/// reagents compare equal regardless of the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Mixture {
    pub tags: SmallVec<[Tag; 8]>,
    pub fatal: bool,
}

impl Mixture {
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    #[must_use]
    pub fn count_tag(&self, tag: Tag) -> usize {
        self.tags.iter().filter(|t| **t == tag).count()
    }
}

/// Resolve an ordered reagent list into its effective tag multiset.
///
/// Union of all tags, then each Hot cancels one Cooling pairwise. Two or
/// more Toxic tags surviving cancellation mark the mixture fatal. Pure and
/// order-independent; ingredient-count validation (2-3) is the caller's job.
#[must_use]
pub fn resolve_mixture(ingredients: &[&Ingredient]) -> Mixture {
    let mut tags: SmallVec<[Tag; 8]> = SmallVec::new();
    for ingredient in ingredients {
        tags.extend(ingredient.tags.iter().copied());
    }

    let hot = tags.iter().filter(|t| **t == Tag::Hot).count();
    let cooling = tags.iter().filter(|t| **t == Tag::Cooling).count();
    let cancelled = hot.min(cooling);
    if cancelled > 0 {
        remove_n(&mut tags, Tag::Hot, cancelled);
        remove_n(&mut tags, Tag::Cooling, cancelled);
    }

    let fatal = tags.iter().filter(|t| **t == Tag::Toxic).count() >= FATAL_TOXIC_COUNT;
    tags.sort_unstable();
    Mixture { tags, fatal }
}

fn remove_n(tags: &mut SmallVec<[Tag; 8]>, tag: Tag, mut n: usize) {
    tags.retain(|t| {
        if *t == tag && n > 0 {
            n -= 1;
            false
        } else {
            true
        }
    });
}
