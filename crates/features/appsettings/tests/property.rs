mod fixtures;

use fixtures::{ScriptedRunner, logged_in, ok, pusher};
use proptest::prelude::*;
use std::collections::HashSet;
use swa_appsettings::settings::MASK;
use swa_appsettings::{RunMode, SettingsMap};
use swa_domain::config::SettingEntry;

/// Unique names in arbitrary (not sorted) order, each with a printable value.
fn settings_strategy() -> impl Strategy<Value = Vec<SettingEntry>> {
    proptest::collection::hash_set("[A-Z][A-Z_]{0,15}", 0..12)
        .prop_flat_map(|names| {
            let len = names.len();
            (
                Just(names.into_iter().collect::<Vec<_>>()).prop_shuffle(),
                proptest::collection::vec("[ -~]{0,24}", len),
            )
        })
        .prop_map(|(names, values)| {
            names.into_iter().zip(values).map(|(name, value)| SettingEntry::new(name, value)).collect()
        })
}

proptest! {
    #[test]
    fn one_token_per_entry_in_order(entries in settings_strategy()) {
        let map = SettingsMap::from_entries(entries.clone()).unwrap();
        let runner = ScriptedRunner::new([logged_in(), ok()]);
        pusher(&runner, map).run(&mut std::io::sink(), RunMode::Apply).unwrap();

        let calls = runner.calls();
        let args = &calls[1].1;
        let at = args.iter().position(|a| a == "--setting-names").unwrap();
        let expected: Vec<String> =
            entries.iter().map(|e| format!("{}={}", e.name, e.value)).collect();
        prop_assert_eq!(&args[at + 1..], expected.as_slice());
    }

    #[test]
    fn report_masks_exactly_the_pass_keys(entries in settings_strategy()) {
        let map = SettingsMap::from_entries(entries.clone()).unwrap();
        let runner = ScriptedRunner::new([]);
        let mut out = Vec::new();
        pusher(&runner, map).report(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: HashSet<&str> = out.lines().collect();

        for entry in &entries {
            let raw = format!("   {} = {}", entry.name, entry.value);
            if entry.name.contains("PASS") {
                let masked = format!("   {} = {MASK}", entry.name);
                prop_assert!(lines.contains(masked.as_str()), "missing {:?} in {:?}", masked, out);
                if entry.value != MASK {
                    prop_assert!(!lines.contains(raw.as_str()), "secret shown: {:?}", raw);
                }
            } else {
                prop_assert!(lines.contains(raw.as_str()), "missing {:?} in {:?}", raw, out);
            }
        }
        prop_assert!(runner.calls().is_empty());
    }
}
