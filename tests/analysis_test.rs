//! End-to-end checks through the public API: CSV file in, findings out.

mod common;

use dexstat::aggregate::{count_by, GroupKey};
use dexstat::analysis::{run, run_all, AnalysisKind, Finding};
use dexstat::parser::{load_table, DEFAULT_DELIMITER};
use dexstat::pipeline::{load_normalized, run_report};
use dexstat::schema::{normalize, normalize_names};
use dexstat::{DexError, JsonSpecSink};

use common::{pokedex_csv, write_csv, POKEDEX_HEADER, POKEDEX_ROWS};

#[test]
fn test_type_counts_descending() {
    let file = pokedex_csv();
    let table = load_normalized(file.path(), DEFAULT_DELIMITER).unwrap();

    let counts = count_by(&table, "type_1").unwrap();
    assert_eq!(
        counts.entries,
        vec![
            (GroupKey::Text("Water".into()), 5),
            (GroupKey::Text("Fire".into()), 3),
            (GroupKey::Text("Grass".into()), 2),
        ]
    );
}

#[test]
fn test_normalization_is_idempotent() {
    let file = pokedex_csv();
    let once = normalize(load_table(file.path(), DEFAULT_DELIMITER).unwrap()).unwrap();
    let names: Vec<String> = once.column_names().map(String::from).collect();

    let twice = normalize(once).unwrap();
    let again: Vec<String> = twice.column_names().map(String::from).collect();
    assert_eq!(names, again);
    assert!(names.contains(&"special_defense".to_string()));
    assert!(names.contains(&"base_stat_total".to_string()));
    assert!(twice.column("type_2").unwrap().all(|v| !v.is_missing()));
}

#[test]
fn test_every_analysis_runs_on_a_complete_dataset() {
    let file = pokedex_csv();
    let table = load_normalized(file.path(), DEFAULT_DELIMITER).unwrap();

    for (kind, result) in run_all(&AnalysisKind::ALL, &table) {
        let outcome = result.unwrap_or_else(|e| panic!("{} failed: {}", kind, e));
        assert_eq!(outcome.charts.len(), 1, "{}", kind);
    }
}

#[test]
fn test_mega_flag_with_three_values_is_rejected() {
    let mut rows: Vec<String> = POKEDEX_ROWS.iter().map(|r| r.to_string()).collect();
    rows[0] = rows[0].replace(",False,0,19.4", ",False,2,19.4");
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = write_csv(POKEDEX_HEADER, &rows);
    let table = load_normalized(file.path(), DEFAULT_DELIMITER).unwrap();

    let err = run(AnalysisKind::MegaImpact, &table).unwrap_err();
    assert!(matches!(err, DexError::Schema(_)), "{:?}", err);
}

#[test]
fn test_single_legendary_keeps_box_data() {
    let rows: Vec<String> = POKEDEX_ROWS
        .iter()
        .map(|r| {
            if r.starts_with("Kyogre") || r.starts_with("Moltres") {
                r.replace(",True,", ",False,")
            } else {
                r.to_string()
            }
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = write_csv(POKEDEX_HEADER, &rows);
    let table = load_normalized(file.path(), DEFAULT_DELIMITER).unwrap();

    let outcome = run(AnalysisKind::AttackByType, &table).unwrap();
    match outcome.finding {
        Finding::AttackByType(dist) => {
            assert_eq!(dist.distributions.len(), 3);
            assert!(matches!(dist.significance, Err(DexError::InsufficientData(_))));
        }
        other => panic!("unexpected finding {:?}", other),
    }
}

#[test]
fn test_perfect_line_recovers_slope() {
    let header = "Attack,Base Stat Total";
    let rows = ["10,30", "20,50", "35,80", "50,110", "80,170"];
    let file = write_csv(header, &rows);
    let mut table = load_table(file.path(), DEFAULT_DELIMITER).unwrap();
    normalize_names(&mut table, &[]).unwrap();

    let outcome = run(AnalysisKind::AttackVsTotal, &table).unwrap();
    match outcome.finding {
        Finding::AttackVsTotal(rel) => {
            let r = rel.correlation.value().unwrap();
            assert!((r - 1.0).abs() < 1e-9, "r = {}", r);
            assert!((rel.fit.slope - 2.0).abs() < 1e-9);
            assert!((rel.fit.intercept - 10.0).abs() < 1e-9);
        }
        other => panic!("unexpected finding {:?}", other),
    }
}

#[test]
fn test_report_writes_chart_specs() {
    let file = pokedex_csv();
    let dir = tempfile::tempdir().unwrap();
    let mut sink = JsonSpecSink::new(dir.path()).unwrap();

    let summary = run_report(file.path(), DEFAULT_DELIMITER, &AnalysisKind::ALL, &mut sink).unwrap();
    assert_eq!(summary.rows, 10);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.charts, 7);

    let mega = std::fs::read_to_string(dir.path().join("mega_evolution_impact.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&mega).unwrap();
    assert_eq!(json["kind"], "bar");
    assert_eq!(json["annotations"][1]["text"], "532");
}
