//! Static trading best-practice advice.
//!
//! Rendered verbatim by presentation layers; it plays no part in any
//! computation.

/// Daily trading best practices, in display order.
pub const BEST_PRACTICES: [&str; 10] = [
    "Always define your risk per trade before entering a position.",
    "Stick to your daily maximum number of trades.",
    "Use proper risk:reward ratio for all trades.",
    "Avoid revenge trading after a loss.",
    "Keep a trading journal for each trade.",
    "Follow your SL and TP rules strictly.",
    "Focus on quality setups rather than quantity.",
    "Stay informed about major market news and events.",
    "Take breaks to avoid emotional trading.",
    "Continuously review and learn from past trades.",
];

/// Heading shown above the advice list.
pub const HEADING: &str = "Best Daily Trading Practices";

/// The advice list as a slice.
pub fn best_practices() -> &'static [&'static str] {
    &BEST_PRACTICES
}
