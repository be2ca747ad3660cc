#[cfg(test)]
mod common_tests {
    use crate::common::common::{current_time, parse_log_level, sha1_hex};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("info").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let error = parse_log_level("verbose").unwrap_err();
        assert_eq!(error.message(), "Unknown log level encountered: 'verbose'");
    }

    #[test]
    fn test_sha1_hex_known_digest() {
        // sha1("abc")
        assert_eq!(sha1_hex("a", "bc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(sha1_hex("", "abc"), sha1_hex("ab", "c"));
    }

    #[test]
    fn test_sha1_hex_length() {
        assert_eq!(sha1_hex("announce_log", "x").len(), 40);
    }

    #[test]
    fn test_current_time_is_recent() {
        assert!(current_time() > 1_600_000_000);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }
}
