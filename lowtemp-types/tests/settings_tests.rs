use lowtemp_types::{
    LowTempSettings, ValidationError, SAMPLE_COUNT_RANGE, TARGET_VALUE_RANGE, WAIT_MINUTES_RANGE,
};

fn valid_record() -> LowTempSettings {
    LowTempSettings {
        enabled: true,
        target_value: -10.0,
        wait_minutes: 5,
        sample_count: 3,
    }
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn default_record() {
    let record = LowTempSettings::default();
    assert!(!record.enabled);
    assert_eq!(record.target_value, -32.0);
    assert_eq!(record.wait_minutes, 200);
    assert_eq!(record.sample_count, 10);
}

#[test]
fn default_record_is_valid() {
    assert!(LowTempSettings::default().validate().is_ok());
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn in_range_record_validates() {
    assert!(valid_record().validate().is_ok());
}

#[test]
fn target_value_below_range_rejected() {
    let record = LowTempSettings {
        target_value: -51.0,
        ..valid_record()
    };
    assert_eq!(
        record.validate(),
        Err(ValidationError::TargetValue(-51.0))
    );
}

#[test]
fn target_value_above_range_rejected() {
    let record = LowTempSettings {
        target_value: 999.0,
        ..valid_record()
    };
    assert_eq!(record.validate(), Err(ValidationError::TargetValue(999.0)));
}

#[test]
fn target_value_boundaries_accepted() {
    for value in [-50.0, 30.0] {
        let record = LowTempSettings {
            target_value: value,
            ..valid_record()
        };
        assert!(record.validate().is_ok(), "expected {value} to be valid");
    }
}

#[test]
fn target_value_just_outside_boundaries_rejected() {
    for value in [-50.0001, 30.0001] {
        let record = LowTempSettings {
            target_value: value,
            ..valid_record()
        };
        assert!(record.validate().is_err(), "expected {value} to be invalid");
    }
}

#[test]
fn target_value_nan_rejected() {
    let record = LowTempSettings {
        target_value: f64::NAN,
        ..valid_record()
    };
    assert!(record.validate().is_err());
}

#[test]
fn wait_minutes_out_of_range_rejected() {
    let zero = LowTempSettings {
        wait_minutes: 0,
        ..valid_record()
    };
    assert_eq!(zero.validate(), Err(ValidationError::WaitMinutes(0)));

    let high = LowTempSettings {
        wait_minutes: 1000,
        ..valid_record()
    };
    assert_eq!(high.validate(), Err(ValidationError::WaitMinutes(1000)));
}

#[test]
fn wait_minutes_boundaries_accepted() {
    for value in [1, 999] {
        let record = LowTempSettings {
            wait_minutes: value,
            ..valid_record()
        };
        assert!(record.validate().is_ok());
    }
}

#[test]
fn sample_count_out_of_range_rejected() {
    let zero = LowTempSettings {
        sample_count: 0,
        ..valid_record()
    };
    assert_eq!(zero.validate(), Err(ValidationError::SampleCount(0)));

    let high = LowTempSettings {
        sample_count: 11,
        ..valid_record()
    };
    assert_eq!(high.validate(), Err(ValidationError::SampleCount(11)));
}

#[test]
fn sample_count_boundaries_accepted() {
    for value in [1, 10] {
        let record = LowTempSettings {
            sample_count: value,
            ..valid_record()
        };
        assert!(record.validate().is_ok());
    }
}

#[test]
fn validation_error_names_the_field() {
    let record = LowTempSettings {
        target_value: 999.0,
        ..valid_record()
    };
    let message = record.validate().unwrap_err().to_string();
    assert!(message.contains("targetValue"));
    assert!(message.contains("999"));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn json_roundtrip() {
    let record = valid_record();
    let json = record.to_json().unwrap();
    let parsed = LowTempSettings::from_json(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn wire_names_are_camel_case() {
    let json = valid_record().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["enabled"], true);
    assert_eq!(value["targetValue"], -10.0);
    assert_eq!(value["waitMinutes"], 5);
    assert_eq!(value["sampleCount"], 3);
}

#[test]
fn parses_wire_shape() {
    let record = LowTempSettings::from_json(
        r#"{"enabled":true,"targetValue":-10,"waitMinutes":5,"sampleCount":3}"#,
    )
    .unwrap();
    assert_eq!(record, valid_record());
}

#[test]
fn missing_field_fails_to_parse() {
    let result =
        LowTempSettings::from_json(r#"{"enabled":true,"targetValue":-10,"waitMinutes":5}"#);
    assert!(result.is_err());
}

#[test]
fn fractional_count_fails_to_parse() {
    // wait/read counts are integral; fractional payloads are rejected
    // at the decode boundary.
    let result = LowTempSettings::from_json(
        r#"{"enabled":true,"targetValue":-10,"waitMinutes":2.5,"sampleCount":3}"#,
    );
    assert!(result.is_err());
}

// ── Range constants ──────────────────────────────────────────────

#[test]
fn declared_ranges() {
    assert_eq!(TARGET_VALUE_RANGE, -50.0..=30.0);
    assert_eq!(WAIT_MINUTES_RANGE, 1..=999);
    assert_eq!(SAMPLE_COUNT_RANGE, 1..=10);
}
