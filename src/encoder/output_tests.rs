//! Tests for output shapes.

use super::{Encoded, OutputMode, split_joined};
use crate::config::ConfigError;

mod mode {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("list".parse::<OutputMode>().unwrap(), OutputMode::List);
        assert_eq!("str".parse::<OutputMode>().unwrap(), OutputMode::Str);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = "List".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedOutputMode { value } if value == "List"));
    }

    #[test]
    fn rejects_other_modes() {
        assert!("json".parse::<OutputMode>().is_err());
        assert!("".parse::<OutputMode>().is_err());
    }

    #[test]
    fn defaults_to_str() {
        assert_eq!(OutputMode::default(), OutputMode::Str);
    }

    #[test]
    fn displays_as_parsed() {
        for mode in [OutputMode::List, OutputMode::Str] {
            assert_eq!(mode.to_string().parse::<OutputMode>().unwrap(), mode);
        }
    }
}

mod encoded {
    use super::*;

    fn tokens() -> Vec<String> {
        vec!["-Xss1m".to_string(), "-XX:+UseG1GC".to_string()]
    }

    #[test]
    fn list_keeps_tokens() {
        let encoded = Encoded::new(tokens(), OutputMode::List);
        assert_eq!(encoded, Encoded::List(tokens()));
        assert_eq!(encoded.mode(), OutputMode::List);
    }

    #[test]
    fn str_joins_with_spaces() {
        let encoded = Encoded::new(tokens(), OutputMode::Str);
        assert_eq!(encoded, Encoded::Joined("-Xss1m -XX:+UseG1GC".to_string()));
        assert_eq!(encoded.tokens(), tokens());
    }

    #[test]
    fn empty_str_is_empty() {
        assert_eq!(
            Encoded::new(Vec::new(), OutputMode::Str),
            Encoded::Joined(String::new())
        );
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&Encoded::new(tokens(), OutputMode::List)).unwrap(),
            r#"["-Xss1m","-XX:+UseG1GC"]"#
        );
        assert_eq!(
            serde_json::to_string(&Encoded::new(tokens(), OutputMode::Str)).unwrap(),
            r#""-Xss1m -XX:+UseG1GC""#
        );
    }
}

mod splitting {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(
            split_joined("  -Xmx4g\t-XX:+UseG1GC\n -XX:NewRatio=2 "),
            vec!["-Xmx4g", "-XX:+UseG1GC", "-XX:NewRatio=2"]
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(split_joined("").is_empty());
        assert!(split_joined("   ").is_empty());
    }
}
