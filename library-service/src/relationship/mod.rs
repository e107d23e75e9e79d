//! Author and book link maintenance.
//!
//! Links are stored on both sides, as the author's book set and the book's
//! author list. Every change made here writes both sides before moving on.

/// Difference application between current and desired link sets.
pub mod reconciler;
