use tracing::debug;

type ActionFn<C> = Box<dyn Fn(&mut C) + Send + Sync>;

struct Subscriber<C> {
    priority: i32,
    callback: ActionFn<C>,
}

/// An ordered list of side-effecting callbacks fired against a context.
///
/// The context is passed explicitly so a hook never reaches for
/// process-wide state.
pub struct ActionHook<C> {
    name: &'static str,
    subscribers: Vec<Subscriber<C>>,
}

impl<C> ActionHook<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            subscribers: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Subscribes `callback` at `priority`.
    pub fn add_action<F>(&mut self, priority: i32, callback: F)
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
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

    /// Runs every subscriber against `ctx` in priority order.
    pub fn fire(&self, ctx: &mut C) {
        debug!(hook = self.name, subscribers = self.subscribers.len(), "firing action");
        for s in &self.subscribers {
            (s.callback)(ctx);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<C> std::fmt::Debug for ActionHook<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionHook")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
