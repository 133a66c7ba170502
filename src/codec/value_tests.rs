//! Tests for value codecs.

use super::{CodecError, IntegerCodec, MemoryCodec, MemoryUnit, SignCodec, ValueCodec};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

mod memory {
    use super::*;

    #[test]
    fn encodes_gibibytes_as_mebibytes() {
        let codec = MemoryCodec::gib_as_mib();
        assert_eq!(codec.encode(4.0).unwrap(), "4096m");
        assert_eq!(codec.encode(0.5).unwrap(), "512m");
        assert_eq!(codec.encode(1.625).unwrap(), "1664m");
    }

    #[test]
    fn encode_rounds_to_nearest_mebibyte() {
        let codec = MemoryCodec::gib_as_mib();
        // 1.0001 GiB = 1024.1024 MiB
        assert_eq!(codec.encode(1.0001).unwrap(), "1024m");
    }

    #[test]
    fn encode_rejects_negative_sizes() {
        let codec = MemoryCodec::gib_as_mib();
        assert!(matches!(
            codec.encode(-1.0),
            Err(CodecError::Unrepresentable { .. })
        ));
        assert!(codec.encode(f64::NAN).is_err());
    }

    #[test]
    fn encode_fails_without_jvm_suffix() {
        let codec = MemoryCodec::new(MemoryUnit::Exbi, MemoryUnit::Pebi);
        assert!(codec.encode(1.0).is_err());
    }

    #[test]
    fn decodes_any_supported_suffix() {
        let codec = MemoryCodec::gib_as_mib();
        assert!(approx(codec.decode("3072m").unwrap(), 3.0));
        assert!(approx(codec.decode("3072M").unwrap(), 3.0));
        assert!(approx(codec.decode("2g").unwrap(), 2.0));
        assert!(approx(codec.decode("524288k").unwrap(), 0.5));
        assert!(approx(codec.decode("1Ti").unwrap(), 1024.0));
        assert!(approx(codec.decode("1P").unwrap(), 1024.0 * 1024.0));
    }

    #[test]
    fn resolution_is_one_literal_unit() {
        assert!(approx(MemoryCodec::gib_as_mib().resolution(), 1.0 / 1024.0));
        let codec = MemoryCodec::new(MemoryUnit::Mebi, MemoryUnit::Kibi);
        assert!(approx(codec.resolution(), 1.0 / 1024.0));
        let codec = MemoryCodec::new(MemoryUnit::Tebi, MemoryUnit::Gibi);
        assert!(approx(codec.resolution(), 1.0 / 1024.0));
        let codec = MemoryCodec::new(MemoryUnit::Mebi, MemoryUnit::Mebi);
        assert!(approx(codec.resolution(), 1.0));
    }

    #[test]
    fn decode_rejects_fractional_magnitude() {
        let codec = MemoryCodec::gib_as_mib();
        assert_eq!(
            codec.decode("5.2g").unwrap_err(),
            CodecError::NotAnInteger {
                literal: "5.2g".to_string()
            }
        );
    }

    #[test]
    fn decode_rejects_missing_suffix() {
        let codec = MemoryCodec::gib_as_mib();
        assert!(matches!(
            codec.decode("4096"),
            Err(CodecError::UnknownSuffix { .. })
        ));
    }

    #[test]
    fn round_trips_eighth_gibibyte_lattice() {
        let codec = MemoryCodec::gib_as_mib();
        for k in 0..=48 {
            let value = 0.5 + f64::from(k) * 0.125;
            let literal = codec.encode(value).unwrap();
            assert!(approx(codec.decode(&literal).unwrap(), value), "{literal}");
        }
    }
}

mod integer {
    use super::*;

    #[test]
    fn encodes_decimal_string() {
        assert_eq!(IntegerCodec.encode(59.0).unwrap(), "59");
        assert_eq!(IntegerCodec.encode(0.0).unwrap(), "0");
        assert_eq!(IntegerCodec.encode(-3.0).unwrap(), "-3");
    }

    #[test]
    fn encode_rejects_fractions() {
        assert!(IntegerCodec.encode(2.5).is_err());
        assert!(IntegerCodec.encode(f64::INFINITY).is_err());
    }

    #[test]
    fn resolution_is_one() {
        assert!(approx(IntegerCodec.resolution(), 1.0));
        assert!(approx(SignCodec.resolution(), 1.0));
    }

    #[test]
    fn decodes_decimal_string() {
        assert!(approx(IntegerCodec.decode("19").unwrap(), 19.0));
    }

    #[test]
    fn decode_rejects_non_integers() {
        assert_eq!(
            IntegerCodec.decode("None").unwrap_err(),
            CodecError::NotAnInteger {
                literal: "None".to_string()
            }
        );
        assert!(IntegerCodec.decode("1.5").is_err());
        assert!(IntegerCodec.decode("").is_err());
    }
}

mod sign {
    use super::*;

    #[test]
    fn encodes_plus_and_minus() {
        assert_eq!(SignCodec.encode(1.0).unwrap(), "+");
        assert_eq!(SignCodec.encode(0.0).unwrap(), "-");
    }

    #[test]
    fn encode_rejects_other_values() {
        assert!(SignCodec.encode(2.0).is_err());
        assert!(SignCodec.encode(0.5).is_err());
    }

    #[test]
    fn missing_sign_means_on() {
        assert!(approx(SignCodec.decode("").unwrap(), 1.0));
        assert!(approx(SignCodec.decode("+").unwrap(), 1.0));
        assert!(approx(SignCodec.decode("-").unwrap(), 0.0));
    }

    #[test]
    fn unknown_sign_is_an_error() {
        assert_eq!(
            SignCodec.decode("~").unwrap_err(),
            CodecError::InvalidSign {
                literal: "~".to_string()
            }
        );
    }

    #[test]
    fn pattern_only_admits_signs() {
        assert_eq!(SignCodec.literal_pattern(), "[+-]?");
        assert_eq!(IntegerCodec.literal_pattern(), ".*");
    }
}
