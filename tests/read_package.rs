use fitness_tracker::{WorkoutError, WorkoutKind, read_package};

#[test]
fn builds_each_kind() {
    let cases = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
        ("RUN", vec![15000.0, 1.0, 75.0], WorkoutKind::Running),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0], WorkoutKind::SportsWalking),
    ];
    for (code, data, kind) in cases {
        let workout = read_package(code, &data).unwrap();
        assert_eq!(workout.kind(), kind);
        assert_eq!(workout.summary().workout_type, kind.label());
    }
}

#[test]
fn swimming_package_formulas() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(workout.mean_speed(), 1.0);
    assert_eq!(workout.spent_calories(), 336.0);
}

#[test]
fn running_package_calories() {
    let workout = read_package("RUN", &[9000.0, 1.0, 75.0]).unwrap();
    assert_eq!(workout.spent_calories(), 383.85);
}

#[test]
fn walking_package_keeps_floor_division() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(workout.spent_calories(), 157.500_000_000_000_03);
}

#[test]
fn positional_binding_follows_field_order() {
    let workout = read_package("SWM", &[720.0, 2.0, 80.0, 25.0, 40.0]).unwrap();
    let session = workout.session();
    assert_eq!(session.action, 720.0);
    assert_eq!(session.duration, 2.0);
    assert_eq!(session.weight, 80.0);
    assert_eq!(workout.mean_speed(), 0.5);
}

#[test]
fn unknown_code_names_offender_and_valid_set() {
    let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    let WorkoutError::UnknownWorkoutType { code, valid } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(code, "XYZ");
    assert_eq!(valid, &["RUN", "WLK", "SWM"]);

    let message = err.to_string();
    assert!(message.contains("'XYZ'"));
    assert!(message.contains("'RUN', 'WLK', 'SWM'"));
}

#[test]
fn wrong_arity_is_rejected() {
    assert_eq!(
        read_package("RUN", &[9000.0, 1.0, 75.0, 180.0]).unwrap_err(),
        WorkoutError::ArgumentCount {
            code: "RUN",
            expected: 3,
            got: 4,
        }
    );
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err(),
        WorkoutError::ArgumentCount {
            code: "SWM",
            expected: 5,
            got: 3,
        }
    );
}

#[test]
fn fractional_values_are_used_as_given() {
    let run = read_package("RUN", &[9000.5, 1.0, 75.0]).unwrap();
    assert_eq!(run.session().action, 9000.5);
    assert_eq!(run.distance(), 9000.5 * 0.65 / 1000.0);

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.5]).unwrap();
    assert_eq!(walk.spent_calories(), 157.500_000_000_000_03);

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.5, 40.0]).unwrap();
    assert_eq!(swim.mean_speed(), 1.02);
}

#[test]
fn zero_duration_propagates_infinity() {
    let workout = read_package("RUN", &[9000.0, 0.0, 75.0]).unwrap();
    assert!(workout.mean_speed().is_infinite());
}

#[test]
fn summary_lines_match_reference_output() {
    let cases = [
        (
            "SWM",
            vec![720.0, 1.0, 80.0, 25.0, 40.0],
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Average speed: 1.000 km/h; Calories spent: 336.000.",
        ),
        (
            "RUN",
            vec![1206.0, 12.0, 6.0],
            "Workout type: Running; Duration: 12.000 h.; Distance: 0.784 km; \
             Average speed: 0.065 km/h; Calories spent: -81.320.",
        ),
        (
            "WLK",
            vec![9000.0, 1.0, 75.0, 180.0],
            "Workout type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Average speed: 5.850 km/h; Calories spent: 157.500.",
        ),
    ];
    for (code, data, expected) in cases {
        let workout = read_package(code, &data).unwrap();
        assert_eq!(workout.summary().render(), expected);
    }
}
