use dynarr_demo::{DemoError, DemoSettings, expand_error, install_log_formats, run};

#[test]
fn test_formats_and_error_chain_after_init() {
    assert!(install_log_formats().is_err());
    assert!(!expand_error!(&DemoError::IndexOutOfRange { index: 1, count: 0 }));

    dynarr_log::init();
    dynarr_log::init();
    install_log_formats().unwrap();
    install_log_formats().unwrap();

    let err = DemoSettings::from_lookup(|_| Some("x".to_string())).unwrap_err();
    assert!(expand_error!(&err));

    assert!(run(&DemoSettings::default()).is_ok());
}
