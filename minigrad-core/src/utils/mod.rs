// Shared helpers for this crate's unit tests.
#[cfg(test)]
pub(crate) mod testing;
