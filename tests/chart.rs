#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tally::libs::chart::BarChart;
    use tally::libs::config::ChartConfig;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn config(width: usize) -> ChartConfig {
        ChartConfig {
            width,
            symbol: "#".to_string(),
        }
    }

    #[test]
    fn test_empty_chart_shows_placeholder() {
        let chart = BarChart::new(&[], &ChartConfig::default());
        assert!(chart.is_empty());
        assert_eq!(chart.to_string(), "No completed tasks\n");
    }

    #[test]
    fn test_busiest_day_gets_full_width() {
        let chart = BarChart::new(&[(day(14), 4), (day(15), 1), (day(16), 2)], &config(40));
        let lengths: Vec<usize> = chart.bars().iter().map(|bar| bar.length).collect();
        assert_eq!(lengths, vec![40, 10, 20]);
    }

    #[test]
    fn test_small_counts_still_get_a_bar() {
        let chart = BarChart::new(&[(day(1), 1), (day(2), 1000)], &config(10));
        assert_eq!(chart.bars()[0].length, 1);
        assert_eq!(chart.bars()[1].length, 10);
    }

    #[test]
    fn test_rendering() {
        let chart = BarChart::new(&[(day(14), 2), (day(15), 1)], &config(4));
        let expected = "Completed tasks by day\n\n2025-01-14 │#### 2\n2025-01-15 │## 1\n";
        assert_eq!(chart.to_string(), expected);
    }

    #[test]
    fn test_order_follows_input() {
        let chart = BarChart::new(&[(day(3), 1), (day(5), 3)], &ChartConfig::default());
        let days: Vec<NaiveDate> = chart.bars().iter().map(|bar| bar.day).collect();
        assert_eq!(days, vec![day(3), day(5)]);
    }
}
