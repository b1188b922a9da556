//! Trade recommendation synthesis.
//!
//! An explicit decision table over all 27 (trend, momentum, buyer_signal)
//! combinations. Precedence when signals disagree: trend first, momentum
//! second, buyer signal third — an opposing momentum pulls the action to
//! HOLD rather than flipping it, and buyer signal moves confidence only.
//! No wildcard arm: the compiler guarantees totality.

use crate::domain::{Action, BuyerSignal, Momentum, Recommendation, Trend};

/// Synthesize the discrete recommendation for one signal combination.
///
/// Deterministic and total — every combination maps to exactly one
/// (action, confidence, reason) row.
pub fn synthesize(trend: Trend, buyer_signal: BuyerSignal, momentum: Momentum) -> Recommendation {
    use Action::*;
    use BuyerSignal as B;
    use Momentum as M;
    use Trend as T;

    let (action, confidence, reason) = match (trend, momentum, buyer_signal) {
        // Uptrend: momentum agreement strengthens the buy; opposing
        // momentum degrades to hold.
        (T::Up, M::Rising, B::Strong) => {
            (Buy, 90, "uptrend confirmed by rising momentum and strong buyer interest")
        }
        (T::Up, M::Rising, B::Stable) => (Buy, 85, "uptrend confirmed by rising momentum"),
        (T::Up, M::Rising, B::Weak) => {
            (Buy, 75, "uptrend with rising momentum despite weak buyer interest")
        }
        (T::Up, M::Neutral, B::Strong) => (Buy, 75, "uptrend with strong buyer interest"),
        (T::Up, M::Neutral, B::Stable) => (Buy, 70, "sustained uptrend in prices"),
        (T::Up, M::Neutral, B::Weak) => (Buy, 60, "uptrend intact but buyer interest is weak"),
        (T::Up, M::Falling, B::Strong) => {
            (Hold, 60, "uptrend contradicted by falling momentum; strong buyers cushion the move")
        }
        (T::Up, M::Falling, B::Stable) => (Hold, 55, "uptrend contradicted by falling momentum"),
        (T::Up, M::Falling, B::Weak) => {
            (Hold, 50, "uptrend fading: falling momentum and weak buyer interest")
        }

        // Flat trend: momentum decides, buyer signal arbitrates the
        // borderline rows.
        (T::Stable, M::Rising, B::Strong) => {
            (Buy, 65, "flat trend but rising momentum and strong buyer interest")
        }
        (T::Stable, M::Rising, B::Stable) => (Buy, 55, "flat trend with early rising momentum"),
        (T::Stable, M::Rising, B::Weak) => {
            (Hold, 55, "rising momentum not yet backed by buyer interest")
        }
        (T::Stable, M::Neutral, B::Strong) => (Hold, 65, "stable prices with strong buyer interest"),
        (T::Stable, M::Neutral, B::Stable) => {
            (Hold, 70, "stable prices with no directional signal")
        }
        (T::Stable, M::Neutral, B::Weak) => (Hold, 60, "stable prices but weak buyer interest"),
        (T::Stable, M::Falling, B::Strong) => {
            (Hold, 55, "falling momentum offset by strong buyer interest")
        }
        (T::Stable, M::Falling, B::Stable) => (Sell, 55, "flat trend with early falling momentum"),
        (T::Stable, M::Falling, B::Weak) => {
            (Sell, 65, "flat trend, falling momentum and weak buyer interest")
        }

        // Downtrend: mirror of the uptrend block.
        (T::Down, M::Rising, B::Strong) => {
            (Hold, 50, "downtrend fading: rising momentum and strong buyer interest")
        }
        (T::Down, M::Rising, B::Stable) => (Hold, 55, "downtrend contradicted by rising momentum"),
        (T::Down, M::Rising, B::Weak) => {
            (Hold, 60, "downtrend pausing on rising momentum; weak buyers keep pressure on prices")
        }
        (T::Down, M::Neutral, B::Strong) => {
            (Sell, 60, "downtrend intact though buyer interest is strong")
        }
        (T::Down, M::Neutral, B::Stable) => (Sell, 70, "sustained downtrend in prices"),
        (T::Down, M::Neutral, B::Weak) => (Sell, 75, "downtrend with weak buyer interest"),
        (T::Down, M::Falling, B::Strong) => {
            (Sell, 75, "downtrend confirmed by falling momentum despite strong buyers")
        }
        (T::Down, M::Falling, B::Stable) => (Sell, 85, "downtrend confirmed by falling momentum"),
        (T::Down, M::Falling, B::Weak) => {
            (Sell, 90, "downtrend confirmed by falling momentum and weak buyer interest")
        }
    };

    Recommendation::new(action, confidence, reason)
}

/// All variants, for exhaustive table tests.
#[cfg(test)]
pub(crate) const ALL_TRENDS: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];
#[cfg(test)]
pub(crate) const ALL_MOMENTA: [Momentum; 3] =
    [Momentum::Rising, Momentum::Falling, Momentum::Neutral];
#[cfg(test)]
pub(crate) const ALL_BUYER_SIGNALS: [BuyerSignal; 3] =
    [BuyerSignal::Strong, BuyerSignal::Stable, BuyerSignal::Weak];
