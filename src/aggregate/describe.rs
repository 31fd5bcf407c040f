use crate::schema::ColumnType;
use crate::stats::{mean, quantile, sample_variance};
use crate::table::Table;

/// Summary of one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Per-column name, non-missing count and type
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOverview {
    pub name: String,
    pub non_missing: usize,
    pub col_type: ColumnType,
}

/// Count, mean, std, min, quartiles and max of every integer or real column
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .filter(|c| matches!(c.col_type, ColumnType::Integer | ColumnType::Real))
        .filter_map(|c| {
            let mut values: Vec<f64> = table
                .numeric_column(&c.name)
                .ok()?
                .into_iter()
                .flatten()
                .collect();
            values.sort_by(f64::total_cmp);
            Some(ColumnSummary {
                name: c.name.clone(),
                count: values.len(),
                mean: mean(&values),
                std: sample_variance(&values).map(f64::sqrt),
                min: values.first().copied(),
                q25: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q75: quantile(&values, 0.75),
                max: values.last().copied(),
            })
        })
        .collect()
}

pub fn info(table: &Table) -> Vec<ColumnOverview> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, c)| ColumnOverview {
            name: c.name.clone(),
            non_missing: table.rows().iter().filter(|r| !r[idx].is_missing()).count(),
            col_type: c.col_type.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::table;

    #[test]
    fn test_describe_numeric_columns_only() {
        let t = table(
            &["name", "hp", "bmi"],
            &[&["a", "10", "1.5"], &["b", "20", ""], &["c", "30", "2.5"], &["d", "40", "3.5"]],
        );
        let summary = describe(&t);
        assert_eq!(summary.len(), 2);

        let hp = &summary[0];
        assert_eq!(hp.name, "hp");
        assert_eq!(hp.count, 4);
        assert_eq!(hp.mean, Some(25.0));
        assert_eq!(hp.min, Some(10.0));
        assert_eq!(hp.q25, Some(17.5));
        assert_eq!(hp.median, Some(25.0));
        assert_eq!(hp.max, Some(40.0));
        let std = hp.std.unwrap();
        assert!((std - 12.909_944_487_358_056).abs() < 1e-9);

        assert_eq!(summary[1].count, 3);
    }

    #[test]
    fn test_describe_skips_flags() {
        let t = table(&["hp", "legendary"], &[&["10", "True"], &["20", "False"]]);
        let names: Vec<String> = describe(&t).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["hp"]);
    }

    #[test]
    fn test_nan_cells_count_as_missing_everywhere() {
        let t = table(&["bmi"], &[&["1.5"], &["NaN"], &["2.5"]]);
        assert_eq!(info(&t)[0].non_missing, 2);
        assert_eq!(describe(&t)[0].count, 2);
    }

    #[test]
    fn test_info_counts_non_missing() {
        let t = table(&["type_2", "hp"], &[&["", "1"], &["Poison", "2"]]);
        let overview = info(&t);
        assert_eq!(overview[0].non_missing, 1);
        assert_eq!(overview[0].col_type, ColumnType::Text);
        assert_eq!(overview[1].non_missing, 2);
    }
}
