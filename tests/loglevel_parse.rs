use pw_io::LogLevel;

#[test]
fn parses_names_case_insensitively() {
    assert_eq!(LogLevel::parse("QUIET"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse(" Normal "), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("Debug"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("chatty"), None);
}

#[test]
fn from_str_and_display_agree() {
    for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
    }
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn filter_directives() {
    assert_eq!(LogLevel::Quiet.filter_directive(), "error");
    assert_eq!(LogLevel::Normal.filter_directive(), "warn");
    assert_eq!(LogLevel::Info.filter_directive(), "info");
    assert_eq!(LogLevel::Debug.filter_directive(), "trace");
    assert_eq!(LogLevel::default(), LogLevel::Normal);
}
