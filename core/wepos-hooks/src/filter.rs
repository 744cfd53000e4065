use tracing::trace;

type FilterFn<T> = Box<dyn Fn(T) -> T + Send + Sync>;

struct Subscriber<T> {
    priority: i32,
    callback: FilterFn<T>,
}

/// An ordered list of value transformers bound to one hook point.
pub struct FilterChain<T> {
    name: &'static str,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> FilterChain<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            subscribers: Vec::new(),
        }
    }

    /// Hook point name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Subscribes `callback` at `priority`.
    pub fn add_filter<F>(&mut self, priority: i32, callback: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        // Insert after every subscriber with priority <= ours so equal
        // priorities keep registration order.
        let at = self
            .subscribers
            .iter()
            .position(|s| s.priority > priority)
            .unwrap_or(self.subscribers.len());
        self.subscribers.insert(
            at,
            Subscriber {
                priority,
                callback: Box::new(callback),
            },
        );
    }

    /// Passes `value` through every subscriber and returns the result.
    pub fn apply(&self, value: T) -> T {
        trace!(hook = self.name, subscribers = self.subscribers.len(), "applying filters");
        self.subscribers
            .iter()
            .fold(value, |acc, s| (s.callback)(acc))
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> std::fmt::Debug for FilterChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_returns_value_unchanged() {
        let chain: FilterChain<i32> = FilterChain::new("noop");
        assert_eq!(chain.apply(7), 7);
        assert!(chain.is_empty());
    }

    #[test]
    fn lower_priority_runs_first() {
        let mut chain = FilterChain::new("order");
        chain.add_filter(20, |s: String| format!("{s}b"));
        chain.add_filter(5, |s: String| format!("{s}a"));
        assert_eq!(chain.apply(String::new()), "ab");
    }
}
