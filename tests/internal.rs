use commonlog::{Config, Error, internal};

#[test]
fn disabled_internal_logger_ignores_level() {
    let config = Config::parse("[internal]\nlevel = \"nonsense\"\n").unwrap();
    assert!(internal::init_with_config(&config).is_ok());
}

#[test]
fn unknown_internal_level_is_reported() {
    let config = Config::parse("[internal]\nenabled = true\nlevel = \"warnig\"\n").unwrap();
    let err = internal::init_with_config(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(ref s) if s == "warnig"));
}
