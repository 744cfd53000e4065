use pretty_assertions::assert_eq;
use wepos_hooks::{ActionHook, DEFAULT_PRIORITY, FilterChain};

// ── FilterChain ──────────────────────────────────────────────────

#[test]
fn filters_with_equal_priority_keep_registration_order() {
    let mut chain: FilterChain<Vec<&str>> = FilterChain::new("sections");
    chain.add_filter(DEFAULT_PRIORITY, |mut v| {
        v.push("first");
        v
    });
    chain.add_filter(DEFAULT_PRIORITY, |mut v| {
        v.push("second");
        v
    });
    chain.add_filter(1, |mut v| {
        v.push("early");
        v
    });

    assert_eq!(chain.apply(vec!["seed"]), vec!["seed", "early", "first", "second"]);
    assert_eq!(chain.len(), 3);
}

#[test]
fn filter_can_remove_entries() {
    let mut chain = FilterChain::new("fields");
    chain.add_filter(DEFAULT_PRIORITY, |v: Vec<u32>| {
        v.into_iter().filter(|n| n % 2 == 0).collect()
    });
    assert_eq!(chain.apply(vec![1, 2, 3, 4]), vec![2, 4]);
}

#[test]
fn filter_chain_reports_name() {
    let chain: FilterChain<()> = FilterChain::new("wepos_settings_fields");
    assert_eq!(chain.name(), "wepos_settings_fields");
    assert!(format!("{chain:?}").contains("wepos_settings_fields"));
}

// ── ActionHook ───────────────────────────────────────────────────

#[test]
fn actions_mutate_context_in_priority_order() {
    let mut hook: ActionHook<Vec<String>> = ActionHook::new("enqueue");
    hook.add_action(999, |log| log.push("late".into()));
    hook.add_action(7, |log| log.push("early".into()));
    hook.add_action(999, |log| log.push("late-2".into()));

    let mut log = Vec::new();
    hook.fire(&mut log);
    assert_eq!(log, vec!["early", "late", "late-2"]);
}

#[test]
fn firing_twice_runs_subscribers_twice() {
    let mut hook: ActionHook<u32> = ActionHook::new("count");
    hook.add_action(DEFAULT_PRIORITY, |n| *n += 1);

    let mut n = 0;
    hook.fire(&mut n);
    hook.fire(&mut n);
    assert_eq!(n, 2);
}

#[test]
fn empty_action_hook_leaves_context_alone() {
    let hook: ActionHook<String> = ActionHook::new("noop");
    let mut ctx = String::from("unchanged");
    hook.fire(&mut ctx);
    assert_eq!(ctx, "unchanged");
    assert!(hook.is_empty());
}
