pub fn init_logging() {
    let _ = env_logger::builder()
        .parse_env(env_logger::Env::default().default_filter_or("info"))
        .format_level(true)
        .format_module_path(false)
        .is_test(true)
        .try_init();
}
