use data_runtime::configs::world_gen::load_default;

#[test]
fn seed_env_override_parses() {
    unsafe {
        std::env::set_var("GREENWOLD_SEED", "12345");
    }
    let cfg = load_default().expect("load");
    assert_eq!(cfg.seed, Some(12345));
    assert!((cfg.chunk_size() - 20.0).abs() < f32::EPSILON);
    assert_eq!(cfg.visible_chunks(), 5);
    assert_eq!((cfg.trees_min(), cfg.trees_max()), (3, 5));
    assert_eq!((cfg.tokens_min(), cfg.tokens_max()), (2, 4));
    let gold = 1.0 - cfg.silver_weight() - cfg.bronze_weight();
    assert!(gold > 0.0 && gold < cfg.bronze_weight());
}

#[test]
fn max_accessors_never_undercut_min() {
    let cfg: data_runtime::configs::world_gen::WorldGenCfg =
        toml::from_str("trees_min = 7\ntrees_max = 2\n").expect("toml");
    assert_eq!(cfg.trees_max(), 7);
}
