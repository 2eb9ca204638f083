//! The `DispatchStrategy` trait — the fleet's pluggable assignment rule.

use lift_cab::Cab;
use lift_core::FloorRequest;

/// Selects which cab should serve a hallway call.
///
/// `select` receives the fleet's cabs as they are *at that moment of the
/// drain*: calls assigned earlier in the same tick are already reflected in
/// the queue lengths.  Implementations must be pure: no interior mutability,
/// and identical inputs must give identical output.
///
/// # Example
///
/// ```rust,ignore
/// struct LowestId;
///
/// impl DispatchStrategy for LowestId {
///     fn name(&self) -> &'static str { "lowest-id" }
///
///     fn select(&self, cabs: &[Cab], _request: &FloorRequest) -> Option<usize> {
///         cabs.iter()
///             .enumerate()
///             .min_by_key(|(_, cab)| cab.id())
///             .map(|(i, _)| i)
///     }
/// }
/// ```
pub trait DispatchStrategy: Send + Sync + 'static {
    /// Short human-readable label (shown by front ends and written to output).
    fn name(&self) -> &'static str;

    /// Index into `cabs` of the chosen cab.
    ///
    /// Returns `None` only when `cabs` is empty, which a fleet never passes.
    fn select(&self, cabs: &[Cab], request: &FloorRequest) -> Option<usize>;
}

/// Index of the cab with the smallest `key`.  Shared by the built-in policies.
pub(crate) fn argmin_by_key<K, F>(cabs: &[Cab], mut key: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&Cab) -> K,
{
    cabs.iter()
        .enumerate()
        .min_by_key(|(_, cab)| key(cab))
        .map(|(i, _)| i)
}
