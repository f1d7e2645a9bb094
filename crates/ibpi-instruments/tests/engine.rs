use ibpi_instruments::engine::{
    LOW_RELIABILITY_WARNING, calculate_scores, calculate_scores_for, interpret, process_score,
};
use ibpi_instruments::error::InstrumentError;
use ibpi_instruments::inventory;
use ibpi_instruments::scoring::{Code, Factor, ScoreResult, TestType};

fn sheet(len: usize, choice: i8) -> Vec<Option<i8>> {
    vec![Some(choice); len]
}

fn factor_raws(result: &ScoreResult) -> Vec<(Factor, i32, u32)> {
    result
        .factor_scores
        .iter()
        .map(|(factor, score)| (*factor, score.raw, score.count))
        .collect()
}

#[test]
fn unanswered_scores_zero_everywhere() {
    // 4 is reverse, 12 is validity, 1 is plain.
    for q in [1, 4, 12] {
        assert_eq!(process_score(None, q, TestType::Adult), 0);
    }
}

#[test]
fn plain_items_score_choice_plus_one() {
    for choice in 0..=3i8 {
        assert_eq!(process_score(Some(choice), 1, TestType::Adult), i32::from(choice) + 1);
    }
}

#[test]
fn out_of_range_choices_are_scored_literally() {
    // q1 plain, q4 reverse, q12 validity (designated 4).
    assert_eq!(process_score(Some(-2), 1, TestType::Adult), -1);
    assert_eq!(process_score(Some(-2), 4, TestType::Adult), 6);
    assert_eq!(process_score(Some(-2), 12, TestType::Adult), 1);
    assert_eq!(process_score(Some(5), 1, TestType::Adult), 6);
}

#[test]
fn reverse_items_are_inverted() {
    for (test_type, q) in [(TestType::Adult, 4), (TestType::Youth, 22), (TestType::Child, 4)] {
        assert!(inventory(test_type).is_reverse(q));
        assert_eq!(process_score(Some(0), q, test_type), 4);
        assert_eq!(process_score(Some(1), q, test_type), 3);
        assert_eq!(process_score(Some(2), q, test_type), 2);
        assert_eq!(process_score(Some(3), q, test_type), 1);
    }
}

#[test]
fn validity_items_score_zero_only_on_the_designated_answer() {
    for test_type in TestType::ALL {
        for &(q, designated) in inventory(test_type).validity_items() {
            for choice in 0..=3i8 {
                let expected = if i32::from(choice) + 1 == i32::from(designated) {
                    0
                } else {
                    1
                };
                assert_eq!(
                    process_score(Some(choice), q, test_type),
                    expected,
                    "{test_type} q{q} choice {choice}"
                );
            }
        }
    }
}

#[test]
fn adult_all_first_choice_golden_master() {
    let result = calculate_scores(&sheet(107, 0), TestType::Adult);

    assert_eq!(
        factor_raws(&result),
        vec![
            (Factor::Cl, 47, 20),
            (Factor::Co, 29, 20),
            (Factor::Gu, 36, 24),
            (Factor::Ob, 32, 20),
            (Factor::Sd, 27, 15),
            (Factor::Val, 4, 8),
        ]
    );
    assert_eq!(result.cl_raw, 47);
    assert_eq!(result.co_raw, 29);
    assert_eq!(result.gu_raw, 36);
    assert_eq!(result.ob_raw, 32);
    assert_eq!(result.sd_raw, 27);
    assert_eq!(result.validity_score, 4);
    assert_eq!(result.total_score, 175);
    assert_eq!(result.interpretation, LOW_RELIABILITY_WARNING);

    let code = |name: &str| {
        let code: Code = name.parse().unwrap();
        let score = result.code(code).unwrap();
        (score.raw, score.count)
    };
    assert_eq!(code("CL1"), (7, 4));
    assert_eq!(code("CL4"), (13, 4));
    assert_eq!(code("CO4"), (10, 4));
    assert_eq!(code("GU6"), (4, 4));
    assert_eq!(code("OB3"), (10, 4));
    assert_eq!(code("SD3"), (3, 3));
    assert_eq!(code("VAL1"), (4, 8));
    assert_eq!(result.code_scores.len(), 27);
}

#[test]
fn adult_consistent_validity_answers_are_interpreted() {
    let mut answers = sheet(107, 0);
    for &(q, designated) in inventory(TestType::Adult).validity_items() {
        answers[q - 1] = Some(designated as i8 - 1);
    }
    let result = calculate_scores(&answers, TestType::Adult);

    assert_eq!(result.validity_score, 0);
    assert_eq!(result.total_score, 171);
    assert_eq!(
        result.interpretation,
        "친밀성: 47점, 협동성: 29점, 포기: 36점, 의무감: 32점, 자기발전: 27점"
    );
}

#[test]
fn youth_all_last_choice_golden_master() {
    let result = calculate_scores(&sheet(103, 3), TestType::Youth);
    assert_eq!(
        factor_raws(&result),
        vec![
            (Factor::Cl, 68, 20),
            (Factor::Co, 53, 20),
            (Factor::Gu, 62, 20),
            (Factor::Ob, 68, 20),
            (Factor::Sd, 61, 16),
            (Factor::Val, 4, 7),
        ]
    );
    assert_eq!(result.total_score, 316);
    assert_eq!(result.code_scores.len(), 26);
}

#[test]
fn child_cycling_choices_golden_master() {
    let answers: Vec<Option<i8>> = (0..95).map(|i| Some((i % 4) as i8)).collect();
    let result = calculate_scores(&answers, TestType::Child);
    assert_eq!(
        factor_raws(&result),
        vec![
            (Factor::Cl, 55, 20),
            (Factor::Co, 48, 20),
            (Factor::Gu, 47, 19),
            (Factor::Ob, 33, 15),
            (Factor::Sd, 44, 15),
            (Factor::Val, 5, 6),
        ]
    );
    assert_eq!(result.total_score, 232);
    assert_eq!(result.interpretation, LOW_RELIABILITY_WARNING);
}

#[test]
fn short_sheet_lowers_counts_without_failing() {
    let result = calculate_scores(&sheet(50, 1), TestType::Adult);

    let co1 = result.code("CO1".parse().unwrap()).unwrap();
    assert_eq!((co1.raw, co1.count), (0, 0));
    assert_eq!(co1.average, 0.0);
    let ob4 = result.code("OB4".parse().unwrap()).unwrap();
    assert_eq!((ob4.raw, ob4.count), (9, 4));
    let cl3 = result.code("CL3".parse().unwrap()).unwrap();
    assert_eq!((cl3.raw, cl3.count), (7, 3));

    assert_eq!(result.validity_score, 3);
    assert_eq!(result.total_score, 108);
    assert_eq!(result.factor(Factor::Cl).map(|f| (f.raw, f.count)), Some((31, 13)));
}

#[test]
fn empty_sheet_scores_zero() {
    let result = calculate_scores(&[], TestType::Youth);
    assert_eq!(result.total_score, 0);
    assert!(result.code_scores.values().all(|s| s.count == 0 && s.average == 0.0));
}

#[test]
fn unanswered_items_still_count_toward_the_average() {
    let result = calculate_scores(&vec![None; 95], TestType::Child);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.validity_score, 0);
    assert_eq!(result.factor(Factor::Cl).map(|f| f.count), Some(20));
    assert_eq!(result.factor(Factor::Gu).map(|f| f.count), Some(19));
    assert!(result.factor_scores.values().all(|f| f.average == 0.0));
    assert_eq!(
        result.interpretation,
        "친밀성: 0점, 협동성: 0점, 포기: 0점, 의무감: 0점, 자기발전: 0점"
    );

    // An unanswered CL1 item keeps its place in the denominator.
    let mut answers = sheet(107, 1);
    answers[14] = None;
    let cl1 = *calculate_scores(&answers, TestType::Adult)
        .code("CL1".parse().unwrap())
        .unwrap();
    assert_eq!(cl1.count, 4);
    assert_eq!(cl1.average, f64::from(cl1.raw) / 4.0);
}

#[test]
fn averages_divide_raw_by_count() {
    let result = calculate_scores(&sheet(107, 2), TestType::Adult);
    for score in result.code_scores.values() {
        assert_eq!(score.average, f64::from(score.raw) / f64::from(score.count));
    }
    for score in result.factor_scores.values() {
        assert_eq!(score.average, f64::from(score.raw) / f64::from(score.count));
    }
}

#[test]
fn total_is_the_sum_of_every_factor_including_validity() {
    let inputs = [
        (sheet(107, 0), TestType::Adult),
        (sheet(103, 2), TestType::Youth),
        (sheet(40, 3), TestType::Child),
        ((0..107).map(|i| Some((i * 7 % 4) as i8)).collect(), TestType::Adult),
    ];
    for (answers, test_type) in inputs {
        let result = calculate_scores(&answers, test_type);
        let sum: i32 = result.factor_scores.values().map(|f| f.raw).sum();
        assert_eq!(result.total_score, sum, "{test_type}");
        assert_eq!(
            result.total_score,
            result.cl_raw
                + result.co_raw
                + result.gu_raw
                + result.ob_raw
                + result.sd_raw
                + result.validity_score
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let answers: Vec<Option<i8>> = (0..103)
        .map(|i| if i % 9 == 0 { None } else { Some((i % 4) as i8) })
        .collect();
    let first = calculate_scores(&answers, TestType::Youth);
    let second = calculate_scores(&answers, TestType::Youth);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn high_validity_always_yields_the_warning() {
    for choice in 0..=3i8 {
        let mut answers = sheet(107, choice);
        for &(q, designated) in inventory(TestType::Adult).validity_items() {
            answers[q - 1] = Some(if designated == 4 { 0 } else { 3 });
        }
        let result = calculate_scores(&answers, TestType::Adult);
        assert_eq!(result.validity_score, 8);
        assert_eq!(result.interpretation, LOW_RELIABILITY_WARNING);
    }
}

#[test]
fn interpretation_threshold_is_exclusive() {
    let result = calculate_scores(&sheet(95, 0), TestType::Child);
    assert_eq!(interpret(&result.factor_scores, 2), {
        let parts: Vec<String> = [Factor::Cl, Factor::Co, Factor::Gu, Factor::Ob, Factor::Sd]
            .iter()
            .map(|f| format!("{}: {}점", f.display_name(), result.factor(*f).unwrap().raw))
            .collect();
        parts.join(", ")
    });
    assert_eq!(interpret(&result.factor_scores, 3), LOW_RELIABILITY_WARNING);
}

#[test]
fn unsupported_test_type_is_rejected() {
    let err = calculate_scores_for(&[], "teen").unwrap_err();
    assert!(matches!(err, InstrumentError::UnsupportedTestType(ref t) if t == "teen"));
    assert_eq!(err.to_string(), "unsupported test type: teen");

    assert!(calculate_scores_for(&sheet(103, 0), "Youth").is_err());
}

#[test]
fn string_entry_point_matches_typed_one() {
    let answers = sheet(95, 2);
    assert_eq!(
        calculate_scores_for(&answers, "child").unwrap(),
        calculate_scores(&answers, TestType::Child)
    );
}

#[test]
fn result_serializes_with_string_keys() {
    let result = calculate_scores(&sheet(107, 0), TestType::Adult);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_score"], 175);
    assert_eq!(json["code_scores"]["CL1"]["raw"], 7);
    assert_eq!(json["code_scores"]["VAL1"]["count"], 8);
    assert_eq!(json["factor_scores"]["SD"]["raw"], 27);

    let back: ScoreResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.total_score, result.total_score);
    assert_eq!(back.interpretation, result.interpretation);
    assert!(back.code_scores.keys().eq(result.code_scores.keys()));
    assert_eq!(back.factor(Factor::Gu).map(|f| f.raw), Some(36));
}

#[test]
fn summary_text_lists_factors_and_codes() {
    let adult = inventory(TestType::Adult);
    let result = calculate_scores(&sheet(107, 0), TestType::Adult);
    let text = adult.to_summary_text(&result);
    assert!(text.starts_with("## IBPI 성인용 (adult)"));
    assert!(text.contains("- 총점: 175\n"));
    assert!(text.contains("### 친밀성 (CL): 47 (평균 2.35)\n"));
    assert!(text.contains("- GU6: 4 / 4문항 (평균 1.00)\n"));
    assert!(text.contains("### 타당도 (VAL): 4"));
}
