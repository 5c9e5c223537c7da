//! Driver behavior across a batch of packages.

use workouts::prelude::*;

#[test]
fn processes_samples_in_order() {
    let reports: Vec<InfoMessage> = process_packages(&default_packages())
        .into_iter()
        .collect::<Result<_>>()
        .unwrap();

    let types: Vec<&str> = reports.iter().map(|r| r.training_type()).collect();
    assert_eq!(types, ["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn continues_past_failing_workout() {
    let packages = vec![
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("XYZ", [1.0, 1.0, 1.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0]),
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let results = process_packages(&packages);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().training_type(), "Running");
    assert!(matches!(results[1], Err(WorkoutError::UnknownActivityCode(_))));
    assert!(matches!(
        results[2],
        Err(WorkoutError::ParameterCount {
            code: "WLK",
            expected: 4,
            actual: 3
        })
    ));
    assert_eq!(results[3].as_ref().unwrap().training_type(), "Swimming");
}

#[test]
fn empty_batch() {
    assert!(process_packages(&[]).is_empty());
}
