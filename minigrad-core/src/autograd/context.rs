/// Forward-state memo of a single operator application.
///
/// An operation stores here whatever its backward formula needs (inputs,
/// intermediate results) while computing its forward value. The slot holds the
/// values of the most recent [`save`](Context::save) only: a later save replaces
/// an earlier one.
///
/// When the surrounding scope disabled differentiation (`no_grad`), saving is a
/// no-op and [`saved`](Context::saved) is always empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<T> {
    no_grad: bool,
    saved: Option<Vec<T>>,
}

impl<T> Context<T> {
    pub fn new(no_grad: bool) -> Self {
        Context { no_grad, saved: None }
    }

    /// Returns true if this memo ignores saves.
    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Replaces the saved values with `values`, unless `no_grad` is set.
    pub fn save<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.no_grad {
            return;
        }
        self.saved = Some(values.into_iter().collect());
    }

    /// The values of the last save; empty if nothing was saved or `no_grad` is set.
    pub fn saved(&self) -> &[T] {
        self.saved.as_deref().unwrap_or(&[])
    }
}

impl<T> Default for Context<T> {
    fn default() -> Self {
        Context::new(false)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
