use fabric_core::alloc::HashMap;
use fabric_core::{Config, ProfilingMode, init};

#[test]
fn test_init_is_repeatable() {
    let config = Config {
        profiling: ProfilingMode::On,
        log_filter: "fabric_core=trace".to_string(),
    };

    init(&config);
    init(&config);
    init(&Config::default());

    tracing::info!("logging still works after repeated init");
}

#[test]
fn test_hash_map_alias() {
    let mut names: HashMap<&'static str, usize> = HashMap::new();
    names.insert("View", 0);
    names.insert("Text", 1);

    assert_eq!(names.get("Text"), Some(&1));
    assert_eq!(names.len(), 2);
}
